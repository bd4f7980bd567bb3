//! Super RSK over signed multisets.
//!
//! Implements the bijection between ordered, restricted biwords (sequences
//! of paired signed multisets) and pairs `(P, Q)` of partition tableaux
//! filled with signed multisets, together with its exact structural
//! inverse. The generalized Robinson–Schensted–Knuth bump runs over a
//! signed total order, switching between strict and weak comparisons and
//! between row and column growth according to parity.
//!
//! # Example
//!
//! ```
//! use super_rsk::{srsk, srsk_inverse, Biword};
//!
//! let w = Biword::from_ints(&[
//!     (&[2], &[-1, -2]),
//!     (&[1, 2], &[2]),
//!     (&[-1], &[-1]),
//!     (&[-1], &[1, 2]),
//! ]);
//! let (p, q) = srsk(&w).expect("ordered, restricted biword");
//! assert_eq!(srsk_inverse(&p, &q).expect("insertion image"), w);
//! ```

pub mod biword;
pub mod correspondence;
pub mod error;
pub mod multiset;
pub mod tableau;
pub mod value;

pub use biword::{Biletter, Biword};
pub use correspondence::{srsk, srsk_inverse};
pub use error::RskError;
pub use multiset::SignedMultiset;
pub use tableau::{Coord, PartitionTableau};
pub use value::{Parity, SignedValue};
