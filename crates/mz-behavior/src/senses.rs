//! Percept helpers shared by all behaviors.

use mz_core::{Direction, Intention, Percept};

/// `true` if a percept shows an obstacle immediately adjacent in direction `d`.
pub fn is_blocked(percepts: &[Percept], d: Direction) -> bool {
    percepts.iter().any(|p| p.direction == d && p.distance < 2)
}

/// `true` if nothing perceived blocks direction `d`.
#[inline]
pub fn is_open(percepts: &[Percept], d: Direction) -> bool {
    !is_blocked(percepts, d)
}

/// The turn that faces an agent toward relative direction `d`.
///
/// `None` for [`Direction::Ahead`]: no turn is needed.
pub fn turn_toward(d: Direction) -> Option<Intention> {
    match d {
        Direction::Ahead => None,
        Direction::Left => Some(Intention::TurnLeft),
        Direction::Right => Some(Intention::TurnRight),
        Direction::Behind => Some(Intention::TurnBack),
    }
}

/// Which of the four neighbouring sides are blocked.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Surroundings {
    pub ahead:  bool,
    pub left:   bool,
    pub right:  bool,
    pub behind: bool,
}

impl Surroundings {
    pub fn from_percepts(percepts: &[Percept]) -> Self {
        Self {
            ahead:  is_blocked(percepts, Direction::Ahead),
            left:   is_blocked(percepts, Direction::Left),
            right:  is_blocked(percepts, Direction::Right),
            behind: is_blocked(percepts, Direction::Behind),
        }
    }
}
