//! Partition tableaux of signed multisets and the parity bump algorithms.
//!
//! Row 0 is the anchor row for row-mode insertion and column 0 the anchor
//! column for column-mode insertion. A partition shape is not enforced
//! structurally; it emerges from the bump chains, and extraction refuses to
//! remove anything but a genuine outer corner.

use std::fmt;
use std::mem;

use crate::error::RskError;
use crate::multiset::SignedMultiset;
use crate::value::Parity;

/// The resting place of an inserted value: column `x` of row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    /// Column index within the row.
    pub x: usize,
    /// Row index, counted from the anchor row.
    pub y: usize,
}

/// A ragged arrangement of [`SignedMultiset`] cells supporting
/// parity-insertion and its exact inverse, parity-extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionTableau {
    rows: Vec<Vec<SignedMultiset>>,
}

/// `true` when `resident` must give way to `incoming` under the given
/// insertion mode: even insertion bumps strictly greater cells, odd
/// insertion also bumps equal ones.
fn bumps(resident: &SignedMultiset, incoming: &SignedMultiset, parity: Parity) -> bool {
    match parity {
        Parity::Even => resident > incoming,
        Parity::Odd => resident >= incoming,
    }
}

/// Reverse of [`bumps`]: `true` when `candidate` could have been the cell
/// that pushed `moved` out during insertion.
fn unbumps(candidate: &SignedMultiset, moved: &SignedMultiset, parity: Parity) -> bool {
    match parity {
        Parity::Even => candidate < moved,
        Parity::Odd => candidate <= moved,
    }
}

impl PartitionTableau {
    /// An empty tableau.
    pub fn new() -> Self {
        PartitionTableau { rows: Vec::new() }
    }

    /// Build a tableau from explicit rows. No shape validation is applied.
    pub fn from_rows(rows: Vec<Vec<SignedMultiset>>) -> Self {
        PartitionTableau { rows }
    }

    /// Build a tableau from nested raw integer specs, anchor row first.
    ///
    /// ```
    /// use super_rsk::PartitionTableau;
    ///
    /// let t = PartitionTableau::from_ints(&[&[&[1], &[1]], &[&[1, 1, -2]]]);
    /// assert_eq!(t.shape(), vec![2, 1]);
    /// ```
    pub fn from_ints(rows: &[&[&[i64]]]) -> Self {
        PartitionTableau::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| SignedMultiset::from_ints(cell)).collect())
                .collect(),
        )
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the tableau has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows, anchor row first.
    pub fn rows(&self) -> &[Vec<SignedMultiset>] {
        &self.rows
    }

    /// The cell at column `x` of row `y`, if present.
    pub fn cell(&self, x: usize, y: usize) -> Option<&SignedMultiset> {
        self.rows.get(y)?.get(x)
    }

    /// Row lengths, anchor row first.
    pub fn shape(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    // ── Insertion ───────────────────────────────────────────────────────

    /// Parity-insert `value`, returning its final resting coordinate.
    ///
    /// Row mode applies while the insertion parity matches the parity of the
    /// value being placed, column mode otherwise; each bump re-dispatches on
    /// the parity of the displaced cell, moving one row down or one column
    /// right per step.
    ///
    /// ```
    /// use super_rsk::{Parity, PartitionTableau, SignedMultiset};
    ///
    /// let mut tableau = PartitionTableau::new();
    /// let coord = tableau.insert(SignedMultiset::from_ints(&[1, 1, -2]), Parity::Even);
    /// assert_eq!((coord.x, coord.y), (0, 0));
    /// ```
    pub fn insert(&mut self, value: SignedMultiset, parity: Parity) -> Coord {
        self.insert_at(value, parity, 0)
    }

    fn insert_at(&mut self, value: SignedMultiset, parity: Parity, index: usize) -> Coord {
        if self.rows.is_empty() {
            self.rows.push(vec![value]);
            return Coord { x: 0, y: 0 };
        }

        if parity == value.parity() {
            // Row insertion into row `index`.
            let y = index;
            if y == self.rows.len() {
                self.rows.push(vec![value]);
                return Coord { x: 0, y };
            }
            for x in 0..self.rows[y].len() {
                if bumps(&self.rows[y][x], &value, parity) {
                    let bumped = mem::replace(&mut self.rows[y][x], value);
                    let next = if bumped.parity() == parity { y + 1 } else { x + 1 };
                    return self.insert_at(bumped, parity, next);
                }
            }
            // Nothing to bump: the value lands at the end of the row.
            self.rows[y].push(value);
            Coord {
                x: self.rows[y].len() - 1,
                y,
            }
        } else {
            // Column insertion into column `index`.
            let x = index;
            if x == self.rows[0].len() {
                self.rows[0].push(value);
                return Coord { x, y: 0 };
            }
            let column: Vec<usize> = (0..self.rows.len())
                .filter(|&y| x < self.rows[y].len())
                .collect();
            for &y in &column {
                if bumps(&self.rows[y][x], &value, parity) {
                    let bumped = mem::replace(&mut self.rows[y][x], value);
                    let next = if bumped.parity() == parity { y + 1 } else { x + 1 };
                    return self.insert_at(bumped, parity, next);
                }
            }
            // Fell through the column: place in the first row past its
            // height, opening a new row when none is left.
            let y = column.len();
            if y < self.rows.len() {
                self.rows[y].push(value);
                Coord {
                    x: self.rows[y].len() - 1,
                    y,
                }
            } else {
                self.rows.push(vec![value]);
                Coord { x: 0, y }
            }
        }
    }

    // ── Extraction ──────────────────────────────────────────────────────

    /// Parity-extract the cell at `(x, y)`, undoing the bump chain that put
    /// it there and returning the value originally inserted.
    ///
    /// The cell must be a removable corner: the last cell of its row, with
    /// no row above of equal or greater length. Otherwise
    /// [`RskError::InvalidCorner`] is returned and the tableau is untouched.
    ///
    /// ```
    /// use super_rsk::{Parity, PartitionTableau, SignedMultiset};
    ///
    /// let mut tableau = PartitionTableau::new();
    /// tableau.insert(SignedMultiset::from_ints(&[1]), Parity::Even);
    /// let value = tableau.extract(0, 0, Parity::Even).expect("corner");
    /// assert_eq!(value, SignedMultiset::from_ints(&[1]));
    /// assert!(tableau.is_empty());
    /// ```
    pub fn extract(
        &mut self,
        x: usize,
        y: usize,
        parity: Parity,
    ) -> Result<SignedMultiset, RskError> {
        let row_len = self.rows.get(y).map(|row| row.len()).unwrap_or(0);
        if x + 1 != row_len || (y + 1 < self.rows.len() && self.rows[y + 1].len() >= row_len) {
            return Err(RskError::InvalidCorner { x, y });
        }
        let mut value = self
            .pop_cell(y)
            .ok_or(RskError::InvalidCorner { x, y })?;

        let (mut x, mut y) = (x, y);
        loop {
            // A value that arrived by row insertion started its chain in
            // row 0; one that arrived by column insertion, in column 0.
            let arrived_by_row = value.parity() == parity;
            if (arrived_by_row && y == 0) || (!arrived_by_row && x == 0) {
                return Ok(value);
            }
            let origin = if arrived_by_row {
                self.bump_origin_in_row(y - 1, &value, parity)
            } else {
                self.bump_origin_in_column(x - 1, &value, parity)
            };
            match origin {
                Some((x0, y0)) => {
                    // Un-bump: the predecessor moves back into the slot the
                    // current value is vacating.
                    value = mem::replace(&mut self.rows[y0][x0], value);
                    x = x0;
                    y = y0;
                }
                None => return Err(RskError::BrokenBumpChain { x, y }),
            }
        }
    }

    /// Rightmost cell of row `y` that could have bumped `moved`.
    fn bump_origin_in_row(
        &self,
        y: usize,
        moved: &SignedMultiset,
        parity: Parity,
    ) -> Option<(usize, usize)> {
        let row = self.rows.get(y)?;
        (0..row.len())
            .rev()
            .find(|&x| unbumps(&row[x], moved, parity))
            .map(|x| (x, y))
    }

    /// Bottommost cell of column `x` that could have bumped `moved`.
    fn bump_origin_in_column(
        &self,
        x: usize,
        moved: &SignedMultiset,
        parity: Parity,
    ) -> Option<(usize, usize)> {
        (0..self.rows.len())
            .rev()
            .filter(|&y| x < self.rows[y].len())
            .find(|&y| unbumps(&self.rows[y][x], moved, parity))
            .map(|y| (x, y))
    }

    // ── Recording-tableau edits ─────────────────────────────────────────

    /// Append `value` to row `y`, opening a new last row when `y` is one
    /// past the end. Used to grow a recording tableau in step with the
    /// insertion tableau.
    pub fn append_to_row(&mut self, y: usize, value: SignedMultiset) {
        if y < self.rows.len() {
            self.rows[y].push(value);
        } else {
            self.rows.push(vec![value]);
        }
    }

    /// Remove and return the last cell of row `y`, dropping the row when it
    /// empties.
    pub fn pop_cell(&mut self, y: usize) -> Option<SignedMultiset> {
        let row = self.rows.get_mut(y)?;
        let cell = row.pop()?;
        if row.is_empty() {
            self.rows.remove(y);
        }
        Some(cell)
    }
}

impl fmt::Display for PartitionTableau {
    /// Rows are printed top row first, cells space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Parity::{Even, Odd};

    fn ms(values: &[i64]) -> SignedMultiset {
        SignedMultiset::from_ints(values)
    }

    fn tableau(rows: &[&[&[i64]]]) -> PartitionTableau {
        PartitionTableau::from_ints(rows)
    }

    #[test]
    fn insert_into_empty_tableau_places_the_anchor_cell() {
        let mut t = PartitionTableau::new();
        let coord = t.insert(ms(&[1, 1, -2]), Even);
        assert_eq!(coord, Coord { x: 0, y: 0 });
        assert_eq!(t.shape(), vec![1]);
    }

    #[test]
    fn row_insert_appends_when_nothing_bumps() {
        // Odd insertion never bumps a strictly smaller cell.
        let mut t = tableau(&[&[&[2]], &[&[-1, -2]]]);
        let coord = t.insert(ms(&[-1]), Odd);
        assert_eq!(coord, Coord { x: 1, y: 0 });
        assert_eq!(t, tableau(&[&[&[2], &[-1]], &[&[-1, -2]]]));
    }

    #[test]
    fn row_insert_bumps_the_first_greater_cell() {
        // [-1,-2] > [2], so even insertion of [2] bumps it; the displaced
        // cell has even parity and continues row-mode into a new row.
        let mut t = tableau(&[&[&[-1, -2]]]);
        let coord = t.insert(ms(&[2]), Even);
        assert_eq!(coord, Coord { x: 0, y: 1 });
        assert_eq!(t, tableau(&[&[&[2]], &[&[-1, -2]]]));
    }

    #[test]
    fn column_insert_bumps_and_redispatches_by_parity() {
        // Odd insertion of the even-parity [1,2] goes to column 0; the
        // bumped even cell [-1,-2] switches to column 1, falls through, and
        // lands past the column's height.
        let mut t = tableau(&[&[&[2], &[-1]], &[&[-1, -2]]]);
        let coord = t.insert(ms(&[1, 2]), Odd);
        assert_eq!(coord, Coord { x: 1, y: 1 });
        assert_eq!(t, tableau(&[&[&[2], &[-1]], &[&[1, 2], &[-1, -2]]]));
    }

    #[test]
    fn column_insert_bump_can_reenter_row_mode() {
        let mut t = tableau(&[&[&[-1]]]);
        // [1] has even parity; odd insertion selects column mode. Column 0
        // holds [-1] >= [1], so it bumps; [-1] is odd, matching the mode,
        // and row-inserts into row 1.
        let coord = t.insert(ms(&[1]), Odd);
        assert_eq!(coord, Coord { x: 0, y: 1 });
        assert_eq!(t, tableau(&[&[&[1]], &[&[-1]]]));
    }

    #[test]
    fn column_bump_of_a_mismatched_cell_opens_a_new_column() {
        // Even insertion of the odd-parity [-1] goes to column 0 and bumps
        // [-2]; the displaced cell's parity differs from the mode, so it
        // moves one column right, widening row 0.
        let mut t = tableau(&[&[&[-2]]]);
        let coord = t.insert(ms(&[-1]), Even);
        assert_eq!(coord, Coord { x: 1, y: 0 });
        assert_eq!(t, tableau(&[&[&[-1], &[-2]]]));
    }

    #[test]
    fn extract_reverses_a_single_insertion() {
        let mut t = PartitionTableau::new();
        t.insert(ms(&[1]), Even);
        let value = t.extract(0, 0, Even).expect("removable corner");
        assert_eq!(value, ms(&[1]));
        assert!(t.is_empty());
    }

    #[test]
    fn extract_reverses_a_bump_chain() {
        // Undo `row_insert_bumps_the_first_greater_cell`.
        let mut t = tableau(&[&[&[2]], &[&[-1, -2]]]);
        let value = t.extract(0, 1, Even).expect("removable corner");
        assert_eq!(value, ms(&[2]));
        assert_eq!(t, tableau(&[&[&[-1, -2]]]));
    }

    #[test]
    fn extract_rejects_a_cell_inside_a_row() {
        let mut t = tableau(&[&[&[1], &[1], &[2]], &[&[-1]], &[&[-2]]]);
        assert_eq!(
            t.extract(0, 0, Even),
            Err(RskError::InvalidCorner { x: 0, y: 0 })
        );
        // The failed call must not have touched the tableau.
        assert_eq!(t, tableau(&[&[&[1], &[1], &[2]], &[&[-1]], &[&[-2]]]));
    }

    #[test]
    fn extract_rejects_a_cell_under_an_equal_length_row() {
        let mut t = tableau(&[&[&[1], &[1], &[2]], &[&[-1]], &[&[-2]]]);
        assert_eq!(
            t.extract(0, 1, Even),
            Err(RskError::InvalidCorner { x: 0, y: 1 })
        );
    }

    #[test]
    fn extract_rejects_coordinates_outside_the_shape() {
        let mut t = tableau(&[&[&[1]]]);
        assert_eq!(
            t.extract(0, 3, Even),
            Err(RskError::InvalidCorner { x: 0, y: 3 })
        );
        assert_eq!(
            t.extract(2, 0, Even),
            Err(RskError::InvalidCorner { x: 2, y: 0 })
        );
    }

    #[test]
    fn extract_reports_a_broken_bump_chain() {
        // [9] in row 0 could not have bumped [5]: the tableau is not the
        // image of any insertion sequence.
        let mut t = tableau(&[&[&[9]], &[&[5]]]);
        assert_eq!(
            t.extract(0, 1, Even),
            Err(RskError::BrokenBumpChain { x: 0, y: 1 })
        );
    }

    #[test]
    fn append_and_pop_cell_mirror_each_other() {
        let mut t = PartitionTableau::new();
        t.append_to_row(0, ms(&[1]));
        t.append_to_row(0, ms(&[2]));
        t.append_to_row(1, ms(&[3]));
        assert_eq!(t.shape(), vec![2, 1]);
        assert_eq!(t.pop_cell(1), Some(ms(&[3])));
        assert_eq!(t.shape(), vec![2]);
        assert_eq!(t.pop_cell(0), Some(ms(&[2])));
        assert_eq!(t.pop_cell(0), Some(ms(&[1])));
        assert!(t.is_empty());
        assert_eq!(t.pop_cell(0), None);
    }

    #[test]
    fn display_prints_the_top_row_first() {
        let t = tableau(&[&[&[2], &[-1]], &[&[1, 2], &[-1, -2]]]);
        assert_eq!(t.to_string(), "[1, 2] [-1, -2]\n[2] [-1]");
        assert_eq!(PartitionTableau::new().to_string(), "");
    }
}
