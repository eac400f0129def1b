//! n×n Sudoku where n is a perfect square.

use std::collections::BTreeSet;
use std::fmt;

use super::{char_rows, grid_shape};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// Symbol marking an unfilled cell
pub const EMPTY: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku {
    n: usize,
    /// Side length of a subsquare, `sqrt(n)`
    box_size: usize,
    /// Row-major, `n * n` cells
    cells: Vec<char>,
    alphabet: BTreeSet<char>,
}

impl Sudoku {
    /// Create an `n`×`n` grid whose filled cells use symbols from `alphabet`.
    pub fn new(n: usize, cells: Vec<char>, alphabet: BTreeSet<char>) -> Result<Self, PuzzleError> {
        let box_size = (1..=n).find(|b| b * b >= n).unwrap_or(0);
        if n == 0 || box_size * box_size != n {
            return Err(PuzzleError::NotPerfectSquare(n));
        }
        if alphabet.len() != n {
            return Err(PuzzleError::WrongCount {
                what: "symbols",
                expected: n,
                found: alphabet.len(),
            });
        }
        if alphabet.contains(&EMPTY) {
            return Err(PuzzleError::InvalidSymbol(EMPTY));
        }
        if cells.len() != n * n {
            return Err(PuzzleError::WrongCount {
                what: "cells",
                expected: n * n,
                found: cells.len(),
            });
        }
        if let Some(&bad) = cells.iter().find(|&c| *c != EMPTY && !alphabet.contains(c)) {
            return Err(PuzzleError::InvalidSymbol(bad));
        }

        Ok(Self {
            n,
            box_size,
            cells,
            alphabet,
        })
    }

    /// Parse one text row per grid row, using the characters of `alphabet` as
    /// symbols. The rows must form a square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], alphabet: &str) -> Result<Self, PuzzleError> {
        let grid = char_rows(rows);
        let (height, width) = grid_shape(&grid)?;
        if height != width {
            return Err(PuzzleError::DimensionMismatch {
                from: (height, width),
                to: (height, height),
            });
        }
        Self::new(height, grid.concat(), alphabet.chars().collect())
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.n && col < self.n).then(|| self.cells[row * self.n + col])
    }

    fn row_set(&self, row: usize) -> BTreeSet<char> {
        self.cells[row * self.n..(row + 1) * self.n].iter().copied().collect()
    }

    fn column_set(&self, col: usize) -> BTreeSet<char> {
        self.cells.iter().skip(col).step_by(self.n).copied().collect()
    }

    /// Symbols in the subsquare whose upper-left cell is `(row, col)` rounded
    /// down to subsquare boundaries
    fn subsquare_set(&self, row: usize, col: usize) -> BTreeSet<char> {
        let top = row / self.box_size * self.box_size;
        let left = col / self.box_size * self.box_size;
        (top..top + self.box_size)
            .flat_map(|r| (left..left + self.box_size).map(move |c| (r, c)))
            .map(|(r, c)| self.cells[r * self.n + c])
            .collect()
    }

    /// Symbols that can still be placed at cell `index`
    fn candidates(&self, index: usize) -> BTreeSet<char> {
        let (row, col) = (index / self.n, index % self.n);
        let mut used = self.row_set(row);
        used.extend(self.column_set(col));
        used.extend(self.subsquare_set(row, col));
        self.alphabet.difference(&used).copied().collect()
    }

    /// Whether some empty cell already has no possible symbol, so no
    /// extension of this grid can ever be solved
    pub fn fail_fast(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .any(|(i, &c)| c == EMPTY && self.candidates(i).is_empty())
    }
}

impl Puzzle for Sudoku {
    fn is_solved(&self) -> bool {
        !self.cells.contains(&EMPTY)
            && (0..self.n).all(|i| {
                let (box_row, box_col) = (i / self.box_size, i % self.box_size);
                self.row_set(i) == self.alphabet
                    && self.column_set(i) == self.alphabet
                    && self.subsquare_set(box_row * self.box_size, box_col * self.box_size)
                        == self.alphabet
            })
    }

    fn extensions(&self) -> Vec<Self> {
        let Some(index) = self.cells.iter().position(|&c| c == EMPTY) else {
            return Vec::new();
        };
        self.candidates(index)
            .into_iter()
            .map(|symbol| {
                let mut next = self.clone();
                next.cells[index] = symbol;
                next
            })
            .collect()
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(self.n + self.box_size - 1);
        for (r, row) in self.cells.chunks(self.n).enumerate() {
            if r > 0 {
                writeln!(f)?;
                if r % self.box_size == 0 {
                    writeln!(f, "{divider}")?;
                }
            }
            for (c, symbol) in row.iter().enumerate() {
                if c > 0 && c % self.box_size == 0 {
                    write!(f, "|")?;
                }
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
