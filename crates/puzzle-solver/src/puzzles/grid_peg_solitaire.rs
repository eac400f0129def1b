//! Peg solitaire on a rectangular grid.
//!
//! A move jumps a peg over an orthogonally adjacent peg into an empty cell,
//! removing the jumped-over peg. The puzzle is solved when one peg remains.

use std::fmt;

use smallvec::SmallVec;

use super::{char_rows, grid_shape};
use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Peg,
    Empty,
    /// Outside the board; never holds a peg
    Unused,
}

impl Cell {
    pub fn from_char(c: char) -> Result<Self, PuzzleError> {
        match c {
            '*' => Ok(Cell::Peg),
            '.' => Ok(Cell::Empty),
            '#' => Ok(Cell::Unused),
            other => Err(PuzzleError::InvalidSymbol(other)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Peg => '*',
            Cell::Empty => '.',
            Cell::Unused => '#',
        }
    }
}

/// Jump directions as (row, column) deltas from the landing cell to the
/// jumping peg: top, right, bottom, left
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Cells involved in one jump, as row-major indices
#[derive(Debug, Clone, Copy)]
struct Jump {
    from: usize,
    over: usize,
    to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPegSolitaire {
    height: usize,
    width: usize,
    /// Row-major
    cells: Vec<Cell>,
}

impl GridPegSolitaire {
    /// Create a board from rows of cells.
    ///
    /// Rejects empty or ragged grids.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, PuzzleError> {
        let (height, width) = grid_shape(&rows)?;
        Ok(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a board from text rows using `*` for pegs, `.` for empty cells
    /// and `#` for unused cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        let rows = char_rows(rows)
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from_char).collect())
            .collect::<Result<Vec<Vec<Cell>>, _>>()?;
        Self::new(rows)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a position, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// Count pegs on the board
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Peg).count()
    }

    /// Offset a position by `steps` times a direction, bounds-checked
    fn offset(&self, row: usize, col: usize, (dr, dc): (isize, isize), steps: isize) -> Option<usize> {
        let r = row.checked_add_signed(dr * steps)?;
        let c = col.checked_add_signed(dc * steps)?;
        (r < self.height && c < self.width).then_some(r * self.width + c)
    }

    /// All jumps that land on the empty cell at `(row, col)`
    fn jumps_onto(&self, row: usize, col: usize) -> SmallVec<[Jump; 4]> {
        let to = row * self.width + col;
        DIRECTIONS
            .iter()
            .filter_map(|&dir| {
                let over = self.offset(row, col, dir, 1)?;
                let from = self.offset(row, col, dir, 2)?;
                (self.cells[over] == Cell::Peg && self.cells[from] == Cell::Peg)
                    .then_some(Jump { from, over, to })
            })
            .collect()
    }

    fn apply(&self, jump: Jump) -> Self {
        let mut next = self.clone();
        next.cells[jump.from] = Cell::Empty;
        next.cells[jump.over] = Cell::Empty;
        next.cells[jump.to] = Cell::Peg;
        next
    }
}

impl Puzzle for GridPegSolitaire {
    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    fn extensions(&self) -> Vec<Self> {
        let mut extensions = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row * self.width + col] != Cell::Empty {
                    continue;
                }
                for jump in self.jumps_onto(row, col) {
                    extensions.push(self.apply(jump));
                }
            }
        }
        extensions
    }
}

impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::depth_first_solve;

    fn center_empty() -> GridPegSolitaire {
        GridPegSolitaire::from_rows(&["*****", "*****", "**.**", "*****", "*****"]).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let board = GridPegSolitaire::from_rows(&["#*.", "**#"]).unwrap();
        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 3);
        assert_eq!(board.get(0, 0), Some(Cell::Unused));
        assert_eq!(board.get(1, 1), Some(Cell::Peg));
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.to_string(), "#*.\n**#");
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(
            GridPegSolitaire::from_rows(&["**", "*x"]),
            Err(PuzzleError::InvalidSymbol('x'))
        );
        assert!(matches!(
            GridPegSolitaire::from_rows(&["***", "*."]),
            Err(PuzzleError::RaggedRow { row: 1, .. })
        ));
        assert_eq!(
            GridPegSolitaire::from_rows::<&str>(&[]),
            Err(PuzzleError::EmptyGrid)
        );
    }

    #[test]
    fn test_one_jump_from_center() {
        let board = center_empty();
        let extensions = board.extensions();
        assert_eq!(extensions.len(), 4);

        // Jump from the top lands on the center
        let first = &extensions[0];
        assert_eq!(first.peg_count(), board.peg_count() - 1);
        assert_eq!(first.get(0, 2), Some(Cell::Empty));
        assert_eq!(first.get(1, 2), Some(Cell::Empty));
        assert_eq!(first.get(2, 2), Some(Cell::Peg));

        for extension in &extensions {
            assert_eq!(extension.peg_count(), 23);
            assert_ne!(extension, &board);
        }
        assert_eq!(board.to_string(), "*****\n*****\n**.**\n*****\n*****");
    }

    #[test]
    fn test_unused_cells_block_jumps() {
        let board = GridPegSolitaire::from_rows(&["#*."]).unwrap();
        assert!(board.extensions().is_empty());
        assert!(board.is_solved());
    }

    #[test]
    fn test_solve_small_board() {
        let board = GridPegSolitaire::from_rows(&["**.*"]).unwrap();
        let solution = depth_first_solve(board).unwrap();
        assert!(solution.last().state.is_solved());
        assert_eq!(solution.depth(), 2);
    }
}
