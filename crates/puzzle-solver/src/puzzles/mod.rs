//! Puzzle variants implementing [`Puzzle`](crate::puzzle::Puzzle).

mod grid_peg_solitaire;
mod mn_puzzle;
mod sudoku;
mod word_ladder;

pub use grid_peg_solitaire::{Cell, GridPegSolitaire};
pub use mn_puzzle::{MnPuzzle, BLANK};
pub use sudoku::{Sudoku, EMPTY};
pub use word_ladder::WordLadder;

use crate::error::PuzzleError;

/// Check that `rows` is non-empty and rectangular, returning `(height, width)`
fn grid_shape<T>(rows: &[Vec<T>]) -> Result<(usize, usize), PuzzleError> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(PuzzleError::EmptyGrid);
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(PuzzleError::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }
    }
    Ok((rows.len(), width))
}

/// Split text rows into characters
fn char_rows<S: AsRef<str>>(rows: &[S]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.as_ref().chars().collect()).collect()
}
