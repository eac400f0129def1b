//! Generic puzzle-solving framework.
//!
//! A [`Puzzle`] knows whether it is solved and which states one move away
//! it can reach. The solvers in [`solver`] search any such puzzle without
//! knowing its domain and return the path they found as a chain of
//! [`SolutionNode`]s. Four domains are provided in [`puzzles`].

pub mod description;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod puzzles;
pub mod solver;

// Re-export main types
pub use description::{parse_word_list, AnyPuzzle, PuzzleDescription};
pub use error::PuzzleError;
pub use node::SolutionNode;
pub use puzzle::Puzzle;
pub use puzzles::{Cell, GridPegSolitaire, MnPuzzle, Sudoku, WordLadder};
pub use solver::{
    breadth_first_solve, depth_first_solve, lookahead_solve, solve, SearchStats, SolverConfig,
    SolverResult, Strategy,
};
