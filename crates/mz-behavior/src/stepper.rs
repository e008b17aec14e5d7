//! A left-hand wall follower that takes one action per tick.
//!
//! When the wall on its left ends, the stepper recovers over three ticks:
//! turn left, step around the corner, turn left again, step back alongside
//! the wall.

use std::fmt;

use mz_core::{Intention, Percept};

use crate::{BehaviorModel, Deliberation, Surroundings};

/// Phase of the stepper's wall-following cycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum WallStatus {
    #[default]
    LookingForWall,
    FoundWall,
    LostWall1,
    LostWall2,
    BackOnTrack,
}

impl WallStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WallStatus::LookingForWall => "lookingForWall",
            WallStatus::FoundWall => "foundWall",
            WallStatus::LostWall1 => "lostWall1",
            WallStatus::LostWall2 => "lostWall2",
            WallStatus::BackOnTrack => "backOnTrack",
        }
    }
}

impl fmt::Display for WallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stepper {
    pub status: WallStatus,
}

impl Stepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function: `(next status, action)`.
    pub fn transition(status: WallStatus, s: Surroundings) -> (WallStatus, Intention) {
        use Intention::*;
        use WallStatus::*;

        match status {
            LookingForWall => {
                if s.ahead {
                    (FoundWall, TurnRight)
                } else if s.left {
                    (FoundWall, Step)
                } else if s.right {
                    (FoundWall, TurnBack)
                } else if s.behind {
                    (FoundWall, TurnLeft)
                } else {
                    (LookingForWall, Step)
                }
            }
            LostWall1 => (LostWall2, Step),
            LostWall2 => (BackOnTrack, TurnLeft),
            BackOnTrack => (FoundWall, Step),
            FoundWall => match (s.left, s.ahead) {
                (true, false) => (FoundWall, Step),
                (true, true) => (FoundWall, TurnRight),
                (false, _) => (LostWall1, TurnLeft),
            },
        }
    }
}

impl BehaviorModel for Stepper {
    fn deliberate(&mut self, percepts: &[Percept]) -> Deliberation {
        let (next, action) = Self::transition(self.status, Surroundings::from_percepts(percepts));
        self.status = next;
        Deliberation::new(vec![action]).with_message(format!("Status: {}", self.status))
    }
}
