//! The super RSK correspondence and its exact inverse.

use crate::biword::{Biletter, Biword};
use crate::error::RskError;
use crate::multiset::SignedMultiset;
use crate::tableau::PartitionTableau;

/// Run super RSK on an ordered, restricted biword, producing the insertion
/// tableau P and the recording tableau Q.
///
/// Each letter's bottom is parity-inserted into P with the parity of its
/// top as the insertion mode; the top is recorded in Q at the row where the
/// bottom came to rest, so P and Q always share a shape.
///
/// Fails with [`RskError::InvalidBiword`], before any tableau is built, if
/// the biword is not ordered or not restricted.
///
/// ```
/// use super_rsk::{srsk, srsk_inverse, Biword};
///
/// let w = Biword::from_ints(&[
///     (&[2], &[-1, -2]),
///     (&[1, 2], &[2]),
///     (&[-1], &[-1]),
///     (&[-1], &[1, 2]),
/// ]);
/// let (p, q) = srsk(&w).expect("ordered, restricted biword");
/// assert_eq!(p.shape(), q.shape());
/// assert_eq!(srsk_inverse(&p, &q).expect("insertion image"), w);
/// ```
pub fn srsk(biword: &Biword) -> Result<(PartitionTableau, PartitionTableau), RskError> {
    if !biword.is_ordered() || !biword.is_restricted() {
        return Err(RskError::InvalidBiword);
    }

    let mut insertion = PartitionTableau::new();
    let mut recording = PartitionTableau::new();
    for letter in biword.iter() {
        let coord = insertion.insert(letter.bottom().clone(), letter.top().parity());
        recording.append_to_row(coord.y, letter.top().clone());
    }
    Ok((insertion, recording))
}

/// Reconstruct the biword that produced a `(P, Q)` pair under [`srsk`].
///
/// Works on deep copies; the arguments are left untouched. Each step takes
/// the maximal cell of Q (ties broken by scanning rows top-to-bottom and
/// cells right-to-left, which selects the most recently inserted one),
/// extracts the matching coordinate from P with that cell's parity as the
/// mode, and prepends the recovered letter. Terminates when P is empty.
pub fn srsk_inverse(
    insertion: &PartitionTableau,
    recording: &PartitionTableau,
) -> Result<Biword, RskError> {
    if insertion.shape() != recording.shape() {
        return Err(RskError::ShapeMismatch);
    }

    let mut insertion = insertion.clone();
    let mut recording = recording.clone();
    let mut letters = Vec::new();
    while !insertion.is_empty() {
        let (x, y) = latest_max_cell(&recording).ok_or(RskError::ShapeMismatch)?;
        let parity = recording
            .cell(x, y)
            .map(SignedMultiset::parity)
            .ok_or(RskError::ShapeMismatch)?;
        let bottom = insertion.extract(x, y, parity)?;
        let top = recording.pop_cell(y).ok_or(RskError::ShapeMismatch)?;
        letters.push(Biletter::new(top, bottom));
    }
    letters.reverse();
    Ok(Biword::new(letters))
}

/// Coordinate of the maximal cell, preferring the topmost row (highest
/// index) and, within it, the rightmost occurrence.
fn latest_max_cell(tableau: &PartitionTableau) -> Option<(usize, usize)> {
    let max = tableau.rows().iter().flatten().max()?;
    for y in (0..tableau.len()).rev() {
        let row = &tableau.rows()[y];
        for x in (0..row.len()).rev() {
            if row[x] == *max {
                return Some((x, y));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_biword_maps_to_empty_tableaux_and_back() {
        let w = Biword::default();
        let (p, q) = srsk(&w).expect("empty biword is valid");
        assert!(p.is_empty());
        assert!(q.is_empty());
        assert_eq!(srsk_inverse(&p, &q).expect("empty pair"), w);
    }

    #[test]
    fn unordered_biword_is_rejected_before_insertion() {
        let w = Biword::from_ints(&[(&[1, 2], &[2]), (&[2], &[-1, -2])]);
        assert!(!w.is_ordered());
        assert_eq!(srsk(&w), Err(RskError::InvalidBiword));
    }

    #[test]
    fn single_letter_round_trip() {
        let w = Biword::from_ints(&[(&[1, -2], &[2, 3])]);
        let (p, q) = srsk(&w).expect("one letter is always ordered");
        assert_eq!(p.shape(), vec![1]);
        assert_eq!(q.shape(), vec![1]);
        assert_eq!(srsk_inverse(&p, &q).expect("round trip"), w);
    }

    #[test]
    fn inverse_rejects_mismatched_shapes() {
        let w = Biword::from_ints(&[(&[1], &[1]), (&[1], &[2])]);
        let (p, q) = srsk(&w).expect("valid biword");
        let (r, _) = srsk(&Biword::from_ints(&[(&[1], &[1])])).expect("valid biword");
        assert_eq!(srsk_inverse(&r, &q), Err(RskError::ShapeMismatch));
        assert_eq!(srsk_inverse(&p, &r), Err(RskError::ShapeMismatch));
    }
}
