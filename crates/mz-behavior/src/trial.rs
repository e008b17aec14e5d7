//! Trial-and-error explorer.
//!
//! Keeps per-cell `visited`, `explored` and `went` maps sized to the maze so
//! a depth-first strategy with backtracking can be layered on later.  The
//! current decision rule ignores them and always steps forward.

use mz_core::{Heading, Intention, Percept};

use crate::{BehaviorModel, Deliberation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialAndError {
    dimension: usize,
    /// Cells the agent has stood in.  Indexed `x * dimension + y`.
    pub visited:  Vec<bool>,
    /// Cells whose every exit has been tried.
    pub explored: Vec<bool>,
    /// Heading last taken out of each cell.
    pub went:     Vec<Heading>,
}

impl TrialAndError {
    pub fn new(dimension: usize) -> Self {
        let n = dimension * dimension;
        Self {
            dimension,
            visited:  vec![false; n],
            explored: vec![false; n],
            went:     vec![Heading::North; n],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Flat index of cell `(x, y)`, or `None` outside the maze.
    pub fn cell(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.dimension || y as usize >= self.dimension {
            return None;
        }
        Some(x as usize * self.dimension + y as usize)
    }
}

impl BehaviorModel for TrialAndError {
    fn deliberate(&mut self, _percepts: &[Percept]) -> Deliberation {
        Deliberation::new(vec![Intention::Step])
    }
}
