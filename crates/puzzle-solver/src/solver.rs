//! Generic tree-search solvers over any [`Puzzle`].
//!
//! Each top-level call owns its visited registry, so repeated or nested
//! solves never see each other's state. None of the searches recurse per
//! move except the two-ply lookahead, whose recursion depth is half the
//! solution length.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::node::SolutionNode;
use crate::puzzle::Puzzle;

/// Which traversal to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exhaustive depth-first search, first solution found in extension order
    #[default]
    DepthFirst,
    /// Level-order search, shortest solution by move count
    BreadthFirst,
    /// Recursive two-ply lookahead
    Lookahead,
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub strategy: Strategy,
}

impl SolverConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of states whose extensions were generated
    pub states_explored: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Result of one top-level solve
#[derive(Debug, Clone)]
pub struct SolverResult<P> {
    /// Root of the solution chain, or `None` if no solution is reachable
    pub solution: Option<SolutionNode<P>>,
    pub stats: SearchStats,
}

impl<P> SolverResult<P> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Solve `puzzle` with the configured strategy.
pub fn solve<P: Puzzle>(puzzle: P, config: &SolverConfig) -> SolverResult<P> {
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    log::debug!("starting {:?} search", config.strategy);

    let solution = match config.strategy {
        Strategy::DepthFirst => depth_first(puzzle, &mut stats),
        Strategy::BreadthFirst => breadth_first(puzzle, &mut stats),
        Strategy::Lookahead => lookahead(puzzle, &mut HashSet::new(), &mut stats),
    };

    stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    match &solution {
        Some(node) => log::debug!(
            "{:?} search found a {}-move solution after exploring {} states in {}ms",
            config.strategy,
            node.depth(),
            stats.states_explored,
            stats.time_elapsed_ms,
        ),
        None => log::debug!(
            "{:?} search exhausted after exploring {} states in {}ms",
            config.strategy,
            stats.states_explored,
            stats.time_elapsed_ms,
        ),
    }

    SolverResult { solution, stats }
}

/// Return a path from `puzzle` to a solved state, each node's child being an
/// extension of its state, or `None` if no solved state is reachable.
///
/// Not guaranteed to be the shortest path.
pub fn depth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionNode<P>> {
    solve(puzzle, &SolverConfig::new(Strategy::DepthFirst)).solution
}

/// Return a shortest path (by move count) from `puzzle` to a solved state, or
/// `None` if no solved state is reachable.
pub fn breadth_first_solve<P: Puzzle>(puzzle: P) -> Option<SolutionNode<P>> {
    solve(puzzle, &SolverConfig::new(Strategy::BreadthFirst)).solution
}

/// Return a path found by recursive two-ply lookahead, or `None`.
///
/// A direct extension that is solved wins immediately. Otherwise every
/// extension of every extension is solved recursively, and the first success
/// is returned behind its depth-1 parent. This is neither shortest-path nor
/// level-order.
pub fn lookahead_solve<P: Puzzle>(puzzle: P) -> Option<SolutionNode<P>> {
    solve(puzzle, &SolverConfig::new(Strategy::Lookahead)).solution
}

/// A state on the depth-first stack with the extensions not yet tried
struct Frame<P> {
    state: P,
    pending: std::vec::IntoIter<P>,
}

fn depth_first<P: Puzzle>(puzzle: P, stats: &mut SearchStats) -> Option<SolutionNode<P>> {
    if puzzle.is_solved() {
        return Some(SolutionNode::leaf(puzzle));
    }

    let mut visited: HashSet<P> = HashSet::new();
    visited.insert(puzzle.clone());

    stats.states_explored += 1;
    let pending = puzzle.extensions().into_iter();
    let mut stack = vec![Frame {
        state: puzzle,
        pending,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            // Every extension failed
            stack.pop();
            continue;
        };

        if visited.contains(&next) {
            continue;
        }

        if next.is_solved() {
            let states: Vec<P> = stack
                .into_iter()
                .map(|frame| frame.state)
                .chain(std::iter::once(next))
                .collect();
            return SolutionNode::chain(states);
        }

        log::trace!("depth {}: expanding\n{next}", stack.len());
        visited.insert(next.clone());
        stats.states_explored += 1;
        let pending = next.extensions().into_iter();
        stack.push(Frame {
            state: next,
            pending,
        });
    }

    None
}

/// A state discovered by breadth-first search, with the index of the state it
/// was generated from
struct Discovered<P> {
    state: P,
    parent: Option<usize>,
}

fn breadth_first<P: Puzzle>(puzzle: P, stats: &mut SearchStats) -> Option<SolutionNode<P>> {
    if puzzle.is_solved() {
        return Some(SolutionNode::leaf(puzzle));
    }

    let mut visited: HashSet<P> = HashSet::new();
    visited.insert(puzzle.clone());

    let mut discovered = vec![Discovered {
        state: puzzle,
        parent: None,
    }];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);

    while let Some(index) = queue.pop_front() {
        stats.states_explored += 1;
        log::trace!("expanding state #{index}\n{}", discovered[index].state);

        for next in discovered[index].state.extensions() {
            if !visited.insert(next.clone()) {
                continue;
            }

            // Everything still queued is at least this deep, so the first
            // solved state generated is a shallowest one
            let solved = next.is_solved();
            discovered.push(Discovered {
                state: next,
                parent: Some(index),
            });
            let next_index = discovered.len() - 1;

            if solved {
                return reconstruct(discovered, next_index);
            }
            queue.push_back(next_index);
        }
    }

    None
}

/// Unwind parent indices from `index` back to the root into a solution chain
fn reconstruct<P>(mut discovered: Vec<Discovered<P>>, index: usize) -> Option<SolutionNode<P>> {
    let mut indices = vec![index];
    let mut current = index;
    while let Some(parent) = discovered[current].parent {
        indices.push(parent);
        current = parent;
    }

    // Parents are always discovered before their children, so the indices
    // are strictly decreasing and each one is the last element after
    // truncation.
    let mut states = Vec::with_capacity(indices.len());
    for index in indices {
        discovered.truncate(index + 1);
        states.push(discovered.pop()?.state);
    }
    states.reverse();

    SolutionNode::chain(states)
}

fn lookahead<P: Puzzle>(
    puzzle: P,
    visited: &mut HashSet<P>,
    stats: &mut SearchStats,
) -> Option<SolutionNode<P>> {
    if visited.contains(&puzzle) {
        return None;
    }
    if puzzle.is_solved() {
        return Some(SolutionNode::leaf(puzzle));
    }

    visited.insert(puzzle.clone());
    stats.states_explored += 1;

    let mut children = puzzle.extensions();
    if let Some(pos) = children.iter().position(P::is_solved) {
        let child = children.swap_remove(pos);
        return Some(SolutionNode::with_child(puzzle, SolutionNode::leaf(child)));
    }
    visited.extend(children.iter().cloned());

    for child in children {
        stats.states_explored += 1;
        for grandchild in child.extensions() {
            if let Some(found) = lookahead(grandchild, visited, stats) {
                return Some(SolutionNode::with_child(
                    puzzle,
                    SolutionNode::with_child(child, found),
                ));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::Lookahead,
    ];

    /// Walk along the edges of a small fixed directed graph
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Walk {
        at: usize,
        goal: usize,
        edges: &'static [&'static [usize]],
    }

    impl fmt::Display for Walk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "at {}", self.at)
        }
    }

    impl Puzzle for Walk {
        fn is_solved(&self) -> bool {
            self.at == self.goal
        }

        fn extensions(&self) -> Vec<Self> {
            self.edges[self.at]
                .iter()
                .map(|&at| Walk { at, ..self.clone() })
                .collect()
        }
    }

    // 0 -> 1 -> 2 -> 3 and a direct 0 -> 3; 4 <-> 5 is a closed cycle
    const GRAPH: &[&[usize]] = &[&[1, 3], &[2, 0], &[3, 1], &[2], &[5], &[4]];

    fn walk(at: usize, goal: usize) -> Walk {
        Walk {
            at,
            goal,
            edges: GRAPH,
        }
    }

    fn assert_valid_path(node: &SolutionNode<Walk>) {
        let states: Vec<&Walk> = node.path().collect();
        for pair in states.windows(2) {
            assert!(pair[0].extensions().contains(pair[1]));
        }
        assert!(node.is_solution());
    }

    #[test]
    fn test_already_solved_has_no_children() {
        for strategy in ALL {
            let result = solve(walk(3, 3), &SolverConfig::new(strategy));
            let node = result.solution.unwrap();
            assert!(node.children.is_empty());
            assert_eq!(node.state, walk(3, 3));
        }
    }

    #[test]
    fn test_depth_first_follows_extension_order() {
        let node = depth_first_solve(walk(0, 3)).unwrap();
        let path: Vec<usize> = node.path().map(|w| w.at).collect();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_valid_path(&node);
    }

    #[test]
    fn test_breadth_first_finds_shortest() {
        let node = breadth_first_solve(walk(1, 3)).unwrap();
        let path: Vec<usize> = node.path().map(|w| w.at).collect();
        assert_eq!(path, vec![1, 2, 3]);

        let node = breadth_first_solve(walk(0, 3)).unwrap();
        assert_eq!(node.depth(), 1);
        assert_valid_path(&node);
    }

    #[test]
    fn test_lookahead_prefers_solved_extension() {
        let node = lookahead_solve(walk(0, 3)).unwrap();
        assert_eq!(node.depth(), 1);
        assert_eq!(node.children[0].state.at, 3);
    }

    #[test]
    fn test_lookahead_descends_two_plies() {
        // 1 -> 2 -> 3 needs one two-ply step
        let node = lookahead_solve(walk(1, 3)).unwrap();
        assert_valid_path(&node);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_unsolvable_cycle_terminates() {
        for strategy in ALL {
            let result = solve(walk(4, 0), &SolverConfig::new(strategy));
            assert!(!result.is_solved(), "{strategy:?}");
            assert!(result.stats.states_explored > 0);
        }
    }

    #[test]
    fn test_failed_search_does_not_leak_into_next() {
        // Same printable form, but 4 -> 3 is open here
        const OPEN: &[&[usize]] = &[&[1, 3], &[2, 0], &[3, 1], &[2], &[5, 3], &[4]];
        let blocked = walk(4, 3);
        let open = Walk {
            edges: OPEN,
            ..blocked.clone()
        };
        assert_eq!(blocked.to_string(), open.to_string());

        for strategy in ALL {
            let config = SolverConfig::new(strategy);
            assert!(!solve(blocked.clone(), &config).is_solved());
            assert!(solve(open.clone(), &config).is_solved(), "{strategy:?}");
            assert!(!solve(blocked.clone(), &config).is_solved());
        }
    }

    #[test]
    fn test_strategies_agree_on_solvability() {
        for start in 0..GRAPH.len() {
            for goal in 0..GRAPH.len() {
                let solvable: Vec<bool> = [Strategy::DepthFirst, Strategy::BreadthFirst]
                    .iter()
                    .map(|&s| solve(walk(start, goal), &SolverConfig::new(s)).is_solved())
                    .collect();
                assert_eq!(solvable[0], solvable[1], "{start} -> {goal}");
            }
        }
    }
}
