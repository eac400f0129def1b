//! JSON puzzle descriptions and a tagged union over every puzzle variant.
//!
//! A description is plain data; [`PuzzleDescription::build`] runs the
//! variant's validation and yields an [`AnyPuzzle`] that any solver accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;
use crate::puzzles::{GridPegSolitaire, MnPuzzle, Sudoku, WordLadder};

/// Default Sudoku symbols, truncated to the grid size
const DEFAULT_SUDOKU_SYMBOLS: &str = "123456789";

/// A puzzle as written in an input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PuzzleDescription {
    GridPegSolitaire {
        rows: Vec<String>,
    },
    MnPuzzle {
        from: Vec<String>,
        to: Vec<String>,
    },
    Sudoku {
        rows: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbols: Option<String>,
    },
    WordLadder {
        from_word: String,
        to_word: String,
        #[serde(default)]
        words: Vec<String>,
    },
}

impl PuzzleDescription {
    /// Replace a word ladder's dictionary; other kinds are returned unchanged
    pub fn with_words(mut self, dictionary: Vec<String>) -> Self {
        if let PuzzleDescription::WordLadder { words, .. } = &mut self {
            *words = dictionary;
        }
        self
    }

    /// Validate the description and construct the puzzle
    pub fn build(self) -> Result<AnyPuzzle, PuzzleError> {
        Ok(match self {
            PuzzleDescription::GridPegSolitaire { rows } => {
                AnyPuzzle::GridPegSolitaire(GridPegSolitaire::from_rows(&rows)?)
            }
            PuzzleDescription::MnPuzzle { from, to } => {
                AnyPuzzle::MnPuzzle(MnPuzzle::from_rows(&from, &to)?)
            }
            PuzzleDescription::Sudoku { rows, symbols } => {
                let symbols = symbols.unwrap_or_else(|| {
                    DEFAULT_SUDOKU_SYMBOLS.chars().take(rows.len()).collect()
                });
                AnyPuzzle::Sudoku(Sudoku::from_rows(&rows, &symbols)?)
            }
            PuzzleDescription::WordLadder {
                from_word,
                to_word,
                words,
            } => AnyPuzzle::WordLadder(WordLadder::from_words(from_word, to_word, words)?),
        })
    }
}

/// Split a word list file into words
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Any one of the supported puzzles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyPuzzle {
    GridPegSolitaire(GridPegSolitaire),
    MnPuzzle(MnPuzzle),
    Sudoku(Sudoku),
    WordLadder(WordLadder),
}

impl AnyPuzzle {
    /// Name of the variant, as used in descriptions
    pub fn kind(&self) -> &'static str {
        match self {
            AnyPuzzle::GridPegSolitaire(_) => "grid_peg_solitaire",
            AnyPuzzle::MnPuzzle(_) => "mn_puzzle",
            AnyPuzzle::Sudoku(_) => "sudoku",
            AnyPuzzle::WordLadder(_) => "word_ladder",
        }
    }
}

fn wrap<P>(extensions: Vec<P>, variant: fn(P) -> AnyPuzzle) -> Vec<AnyPuzzle> {
    extensions.into_iter().map(variant).collect()
}

impl Puzzle for AnyPuzzle {
    fn is_solved(&self) -> bool {
        match self {
            AnyPuzzle::GridPegSolitaire(p) => p.is_solved(),
            AnyPuzzle::MnPuzzle(p) => p.is_solved(),
            AnyPuzzle::Sudoku(p) => p.is_solved(),
            AnyPuzzle::WordLadder(p) => p.is_solved(),
        }
    }

    fn extensions(&self) -> Vec<Self> {
        match self {
            AnyPuzzle::GridPegSolitaire(p) => wrap(p.extensions(), AnyPuzzle::GridPegSolitaire),
            AnyPuzzle::MnPuzzle(p) => wrap(p.extensions(), AnyPuzzle::MnPuzzle),
            AnyPuzzle::Sudoku(p) => wrap(p.extensions(), AnyPuzzle::Sudoku),
            AnyPuzzle::WordLadder(p) => wrap(p.extensions(), AnyPuzzle::WordLadder),
        }
    }
}

impl fmt::Display for AnyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPuzzle::GridPegSolitaire(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::MnPuzzle(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::Sudoku(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::WordLadder(p) => fmt::Display::fmt(p, f),
        }
    }
}
