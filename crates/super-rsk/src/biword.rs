//! Biletters and biwords: the input alphabet of the correspondence.

use std::cmp::Ordering;
use std::fmt;

use crate::multiset::SignedMultiset;
use crate::value::Parity;

/// One column of a two-row array: a `(top, bottom)` pair of multisets.
///
/// Biletters order by their tops; on equal tops the bottoms are compared
/// with a parity twist: an odd-parity bottom precedes an even-parity one,
/// two even bottoms compare as multisets, and two odd bottoms compare in
/// reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biletter {
    top: SignedMultiset,
    bottom: SignedMultiset,
}

impl Biletter {
    /// Pair a top and bottom multiset.
    pub fn new(top: SignedMultiset, bottom: SignedMultiset) -> Self {
        Biletter { top, bottom }
    }

    /// Build a biletter from raw integer slices.
    pub fn from_ints(top: &[i64], bottom: &[i64]) -> Self {
        Biletter::new(
            SignedMultiset::from_ints(top),
            SignedMultiset::from_ints(bottom),
        )
    }

    /// The top multiset.
    pub fn top(&self) -> &SignedMultiset {
        &self.top
    }

    /// The bottom multiset.
    pub fn bottom(&self) -> &SignedMultiset {
        &self.bottom
    }

    /// `true` when the top and bottom parities differ (parity sum 1). Such
    /// letters are the ones the restriction predicate forbids repeating.
    pub fn has_odd_parity_sum(&self) -> bool {
        self.top.parity() != self.bottom.parity()
    }
}

impl Ord for Biletter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.top.cmp(&other.top).then_with(|| {
            match (self.bottom.parity(), other.bottom.parity()) {
                (Parity::Odd, Parity::Even) => Ordering::Less,
                (Parity::Even, Parity::Odd) => Ordering::Greater,
                (Parity::Even, Parity::Even) => self.bottom.cmp(&other.bottom),
                (Parity::Odd, Parity::Odd) => other.bottom.cmp(&self.bottom),
            }
        })
    }
}

impl PartialOrd for Biletter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Biletter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.top, self.bottom)
    }
}

/// An ordered sequence of [`Biletter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Biword {
    letters: Vec<Biletter>,
}

impl Biword {
    /// Wrap a sequence of biletters. Validity is checked separately via
    /// [`Biword::is_ordered`] and [`Biword::is_restricted`].
    pub fn new(letters: Vec<Biletter>) -> Self {
        Biword { letters }
    }

    /// Build a biword from raw `(top, bottom)` integer slices.
    ///
    /// ```
    /// use super_rsk::Biword;
    ///
    /// let w = Biword::from_ints(&[(&[2], &[-1, -2]), (&[1, 2], &[2])]);
    /// assert_eq!(w.len(), 2);
    /// assert!(w.is_ordered());
    /// ```
    pub fn from_ints(pairs: &[(&[i64], &[i64])]) -> Self {
        Biword::new(
            pairs
                .iter()
                .map(|(top, bottom)| Biletter::from_ints(top, bottom))
                .collect(),
        )
    }

    /// The letters in sequence order.
    pub fn letters(&self) -> &[Biletter] {
        &self.letters
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `true` when the biword has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over the letters.
    pub fn iter(&self) -> impl Iterator<Item = &Biletter> + '_ {
        self.letters.iter()
    }

    /// `true` when the sequence is weakly increasing under the biletter
    /// order, i.e. the biword equals its own sort.
    pub fn is_ordered(&self) -> bool {
        self.letters.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// `true` when no letter with odd parity sum occurs more than once.
    pub fn is_restricted(&self) -> bool {
        !self.letters.iter().any(|letter| {
            letter.has_odd_parity_sum()
                && self.letters.iter().filter(|&other| other == letter).count() > 1
        })
    }

    /// A sorted copy with the same letters.
    pub fn ordered(&self) -> Biword {
        let mut letters = self.letters.clone();
        letters.sort();
        Biword { letters }
    }
}

impl fmt::Display for Biword {
    /// Two aligned lines: tops above bottoms, each column padded to the
    /// wider of its two renderings, columns separated by two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tops = Vec::with_capacity(self.letters.len());
        let mut bottoms = Vec::with_capacity(self.letters.len());
        for letter in &self.letters {
            let mut top = letter.top.to_string();
            let mut bottom = letter.bottom.to_string();
            while top.len() < bottom.len() {
                top.push(' ');
            }
            while bottom.len() < top.len() {
                bottom.push(' ');
            }
            tops.push(top);
            bottoms.push(bottom);
        }
        write!(f, "{}\n{}", tops.join("  "), bottoms.join("  "))
    }
}
