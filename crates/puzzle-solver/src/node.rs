//! Tree nodes describing a discovered solution.

use std::fmt;

use crate::puzzle::Puzzle;

/// A puzzle state together with the chosen successor path toward a solution.
///
/// Solvers only ever build nodes with at most one child, so following
/// `children[0]` from the root replays the solution one move at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionNode<P> {
    pub state: P,
    pub children: Vec<SolutionNode<P>>,
}

impl<P> SolutionNode<P> {
    /// Create a node with no children
    pub fn leaf(state: P) -> Self {
        Self {
            state,
            children: Vec::new(),
        }
    }

    /// Create a node whose only child is `child`
    pub fn with_child(state: P, child: SolutionNode<P>) -> Self {
        Self {
            state,
            children: vec![child],
        }
    }

    /// Build a single-path chain from states ordered root first.
    ///
    /// Returns `None` for an empty sequence.
    pub fn chain<I>(states: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut states = states.into_iter().rev();
        let mut node = Self::leaf(states.next()?);
        for state in states {
            node = Self::with_child(state, node);
        }
        Some(node)
    }

    /// Iterate over the states on the chosen path, root first
    pub fn path(&self) -> Path<'_, P> {
        Path { next: Some(self) }
    }

    /// The last node on the chosen path
    pub fn last(&self) -> &SolutionNode<P> {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
        }
        node
    }

    /// Number of moves on the chosen path
    pub fn depth(&self) -> usize {
        self.path().count() - 1
    }
}

impl<P: Puzzle> SolutionNode<P> {
    /// Whether the chosen path ends in a solved state
    pub fn is_solution(&self) -> bool {
        self.last().state.is_solved()
    }
}

/// Iterator over the states of a [`SolutionNode`] path
pub struct Path<'a, P> {
    next: Option<&'a SolutionNode<P>>,
}

impl<'a, P> Iterator for Path<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.children.first();
        Some(&node.state)
    }
}

impl<P: fmt::Display> fmt::Display for SolutionNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.state)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}
