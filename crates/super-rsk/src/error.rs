//! Error type for the correspondence.

use thiserror::Error;

/// Errors reported by tableau extraction and the top-level correspondence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RskError {
    /// `srsk` was called on a biword that is not ordered or not restricted.
    #[error("super RSK can only be performed on an ordered, restricted biword")]
    InvalidBiword,

    /// Terminal extraction was requested at a cell that is not a removable
    /// corner of the tableau shape.
    #[error("({x}, {y}) is not a removable corner of the tableau")]
    InvalidCorner { x: usize, y: usize },

    /// An extraction chain reached a cell that no earlier cell could have
    /// bumped; the tableau is not the image of any insertion sequence.
    #[error("no cell could have bumped the value extracted at ({x}, {y})")]
    BrokenBumpChain { x: usize, y: usize },

    /// `srsk_inverse` was called on tableaux with different shapes.
    #[error("insertion and recording tableaux have different shapes")]
    ShapeMismatch,
}
