//! The capability set every puzzle variant implements.
//!
//! Solvers only ever see a puzzle through this trait: they ask whether a
//! state is solved and which states one move away can be reached. They know
//! nothing about grids, pegs or words.

use std::fmt::Display;
use std::hash::Hash;

/// An immutable snapshot of a problem configuration.
///
/// Equality and hashing must cover every field that matters to the domain,
/// since solvers deduplicate visited states with them. Two states that compare
/// equal are treated as the same node of the search graph. `Display` is only
/// the printable form and plays no part in deduplication.
pub trait Puzzle: Clone + Eq + Hash + Display {
    /// Whether this configuration satisfies the domain's terminal condition.
    ///
    /// Must be a pure function of the state's contents.
    fn is_solved(&self) -> bool;

    /// All configurations reachable by exactly one legal move.
    ///
    /// Must not include `self`, and must return the same sequence every time
    /// it is called on an equal state. The order decides which solution a
    /// search finds first.
    fn extensions(&self) -> Vec<Self>;
}
