//! Error types for puzzle construction.
//!
//! Search never fails with an error: an unsolvable puzzle is reported as an
//! absent solution. Only malformed input is rejected, and always before any
//! search begins.

use thiserror::Error;

/// Error returned by puzzle constructors when the input is structurally invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid has no rows or no columns
    #[error("grid is empty")]
    EmptyGrid,
    /// A row's length differs from the first row's
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Two grids that must share a shape do not
    #[error("grid dimensions differ: {from:?} vs {to:?}")]
    DimensionMismatch {
        from: (usize, usize),
        to: (usize, usize),
    },
    /// A cell holds a symbol outside the allowed set
    #[error("invalid symbol {0:?}")]
    InvalidSymbol(char),
    /// A count-based precondition does not hold
    #[error("{what}: expected {expected}, found {found}")]
    WrongCount {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// The start and target grids are not permutations of each other
    #[error("start and target grids hold different symbols")]
    SymbolMismatch,
    /// Sudoku side length must be a positive perfect square
    #[error("side length {0} is not a positive perfect square")]
    NotPerfectSquare(usize),
    /// A word ladder word is empty, not lower-case ASCII, or of the wrong length
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },
}
