//! Multisets of signed values, partitioned by parity.

use std::cmp::Ordering;
use std::fmt;

use crate::value::{Parity, SignedValue};

/// An immutable multiset of [`SignedValue`], kept as two sorted partitions:
/// the unbarred entries followed by the barred ones.
///
/// Iteration yields the unbarred partition and then the barred partition,
/// each ascending under the [`SignedValue`] order, so the whole sequence is
/// ascending under that order.
///
/// The multiset order strips matching maxima from both sides until a
/// mismatch or an exhaustion decides:
///
/// ```
/// use super_rsk::SignedMultiset;
///
/// let a = SignedMultiset::from_ints(&[2]);
/// let b = SignedMultiset::from_ints(&[1, 2]);
/// let c = SignedMultiset::from_ints(&[-1]);
/// assert!(a < b); // equal maxima, `a` runs out first
/// assert!(b < c); // barred -1 beats every unbarred maximum
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedMultiset {
    unbarred: Vec<SignedValue>,
    barred: Vec<SignedValue>,
}

impl SignedMultiset {
    /// Build a multiset from any sequence of values.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = SignedValue>,
    {
        let mut unbarred = Vec::new();
        let mut barred = Vec::new();
        for value in values {
            match value.parity() {
                Parity::Even => unbarred.push(value),
                Parity::Odd => barred.push(value),
            }
        }
        unbarred.sort();
        barred.sort();
        SignedMultiset { unbarred, barred }
    }

    /// Build a multiset from raw signed integers.
    pub fn from_ints(values: &[i64]) -> Self {
        values.iter().copied().map(SignedValue::new).collect()
    }

    /// Number of entries across both partitions.
    pub fn len(&self) -> usize {
        self.unbarred.len() + self.barred.len()
    }

    /// `true` when the multiset has no entries.
    pub fn is_empty(&self) -> bool {
        self.unbarred.is_empty() && self.barred.is_empty()
    }

    /// Number of barred entries mod 2.
    pub fn parity(&self) -> Parity {
        Parity::from_count(self.barred.len())
    }

    /// The unbarred partition, ascending.
    pub fn unbarred(&self) -> &[SignedValue] {
        &self.unbarred
    }

    /// The barred partition, ascending under the signed order (decreasing
    /// magnitude of the raw values).
    pub fn barred(&self) -> &[SignedValue] {
        &self.barred
    }

    /// All entries, ascending under the signed order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SignedValue> + '_ {
        self.unbarred.iter().chain(self.barred.iter())
    }
}

impl FromIterator<SignedValue> for SignedMultiset {
    fn from_iter<I: IntoIterator<Item = SignedValue>>(iter: I) -> Self {
        SignedMultiset::new(iter)
    }
}

impl FromIterator<i64> for SignedMultiset {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        SignedMultiset::new(iter.into_iter().map(SignedValue::new))
    }
}

impl From<Vec<i64>> for SignedMultiset {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i64]> for SignedMultiset {
    fn from(values: &[i64]) -> Self {
        SignedMultiset::from_ints(values)
    }
}

impl Ord for SignedMultiset {
    /// Suffix-peeling comparison: the maxima of both sides are compared and
    /// stripped until one pair differs or one side runs out; the exhausted
    /// side is the smaller one. Since iteration is ascending, this is a
    /// lexicographic comparison of the descending sequences.
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().rev().cmp(other.iter().rev())
    }
}

impl PartialOrd for SignedMultiset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SignedMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
