//! A left-hand wall follower that turns and steps in the same tick.

use mz_core::{Intention, Percept};

use crate::{BehaviorModel, Deliberation, Surroundings};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Follower {
    pub found_wall: bool,
}

impl Follower {
    pub fn new() -> Self {
        Self::default()
    }

    fn plan(&mut self, s: Surroundings) -> Vec<Intention> {
        use Intention::*;

        if !self.found_wall {
            let plan = if s.ahead {
                vec![TurnRight, Step]
            } else if s.left {
                vec![Step]
            } else if s.right {
                vec![TurnBack, Step]
            } else if s.behind {
                vec![TurnLeft, Step]
            } else {
                return vec![Step];
            };
            self.found_wall = true;
            return plan;
        }

        match (s.left, s.ahead) {
            (true, false) => vec![Step],
            (true, true) => vec![TurnRight, Step],
            (false, _) => vec![TurnLeft, Step],
        }
    }
}

impl BehaviorModel for Follower {
    fn deliberate(&mut self, percepts: &[Percept]) -> Deliberation {
        Deliberation::new(self.plan(Surroundings::from_percepts(percepts)))
    }
}
