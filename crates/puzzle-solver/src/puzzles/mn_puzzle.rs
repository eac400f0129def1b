//! Sliding tile puzzle on an N×M grid, like the 15-puzzle.

use std::fmt;

use smallvec::SmallVec;

use super::{char_rows, grid_shape};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Symbol marking the empty space
pub const BLANK: char = '*';

/// A sliding tile configuration working toward a fixed target configuration.
///
/// A move swaps the blank with an orthogonally adjacent tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MnPuzzle {
    height: usize,
    width: usize,
    /// Current tiles, row-major
    from: Vec<char>,
    /// Target tiles, row-major
    to: Vec<char>,
    /// Index of the blank in `from`
    blank: usize,
}

impl MnPuzzle {
    /// Create a puzzle in configuration `from` that must reach `to`.
    ///
    /// Both grids must be rectangular with the same shape, contain exactly one
    /// blank and hold the same tiles.
    pub fn new(from: Vec<Vec<char>>, to: Vec<Vec<char>>) -> Result<Self, PuzzleError> {
        let from_shape = grid_shape(&from)?;
        let to_shape = grid_shape(&to)?;
        if from_shape != to_shape {
            return Err(PuzzleError::DimensionMismatch {
                from: from_shape,
                to: to_shape,
            });
        }

        let from: Vec<char> = from.into_iter().flatten().collect();
        let to: Vec<char> = to.into_iter().flatten().collect();

        for grid in [&from, &to] {
            let blanks = grid.iter().filter(|&&c| c == BLANK).count();
            if blanks != 1 {
                return Err(PuzzleError::WrongCount {
                    what: "blank cells",
                    expected: 1,
                    found: blanks,
                });
            }
        }

        let mut from_tiles = from.clone();
        let mut to_tiles = to.clone();
        from_tiles.sort_unstable();
        to_tiles.sort_unstable();
        if from_tiles != to_tiles {
            return Err(PuzzleError::SymbolMismatch);
        }

        let blank = from.iter().position(|&c| c == BLANK).unwrap_or_default();
        let (height, width) = from_shape;
        Ok(Self {
            height,
            width,
            from,
            to,
            blank,
        })
    }

    /// Parse both grids from text rows, one character per tile
    pub fn from_rows<S: AsRef<str>>(from: &[S], to: &[S]) -> Result<Self, PuzzleError> {
        Self::new(char_rows(from), char_rows(to))
    }

    /// Position of the blank as `(row, column)`
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.width, self.blank % self.width)
    }

    /// Tile at a position of the current configuration
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.height && col < self.width).then(|| self.from[row * self.width + col])
    }

    /// Indices of cells adjacent to the blank: above, below, left, right
    fn blank_neighbors(&self) -> SmallVec<[usize; 4]> {
        let (row, col) = self.blank_position();
        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push(self.blank - self.width);
        }
        if row + 1 < self.height {
            neighbors.push(self.blank + self.width);
        }
        if col > 0 {
            neighbors.push(self.blank - 1);
        }
        if col + 1 < self.width {
            neighbors.push(self.blank + 1);
        }
        neighbors
    }

    fn slide(&self, tile: usize) -> Self {
        let mut next = self.clone();
        next.from.swap(self.blank, tile);
        next.blank = tile;
        next
    }
}

impl Puzzle for MnPuzzle {
    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    fn extensions(&self) -> Vec<Self> {
        self.blank_neighbors()
            .into_iter()
            .map(|tile| self.slide(tile))
            .collect()
    }
}

impl fmt::Display for MnPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.from.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
