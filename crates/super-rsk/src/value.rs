//! Atomic signed entries and their parity.

use std::cmp::Ordering;
use std::fmt;

/// The 0/1 tag carried by values and multisets.
///
/// For a value this is its barred-ness; for a multiset, the number of barred
/// entries mod 2. During insertion the parity argument selects between
/// row-mode and column-mode bumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Unbarred value, or an even number of barred entries.
    Even,
    /// Barred value, or an odd number of barred entries.
    Odd,
}

impl Parity {
    /// Parity of a count: `Even` for even counts, `Odd` for odd ones.
    pub fn from_count(count: usize) -> Self {
        if count % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// A signed integer entry. Negative raw values are "barred".
///
/// The total order places every unbarred value before every barred value,
/// and orders barred values by decreasing magnitude:
///
/// ```
/// use super_rsk::SignedValue;
///
/// assert!(SignedValue::new(1) < SignedValue::new(2));
/// assert!(SignedValue::new(2) < SignedValue::new(-1));
/// assert!(SignedValue::new(-1) < SignedValue::new(-3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignedValue(i64);

impl SignedValue {
    /// Wrap a raw signed integer.
    pub fn new(value: i64) -> Self {
        SignedValue(value)
    }

    /// The raw signed integer.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// `Odd` if the value is barred (negative), `Even` otherwise.
    pub fn parity(&self) -> Parity {
        if self.0 < 0 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl From<i64> for SignedValue {
    fn from(value: i64) -> Self {
        SignedValue::new(value)
    }
}

impl Ord for SignedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0 < 0, other.0 < 0) {
            // Among barred values the raw order is reversed: the value
            // closer to zero is the smaller one.
            (true, true) => other.0.cmp(&self.0),
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for SignedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SignedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
