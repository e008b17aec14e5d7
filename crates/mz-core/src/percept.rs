//! Observations handed to a behavior during deliberation.

use crate::Direction;

/// What kind of thing was observed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectCategory {
    /// An inert object that must be avoided (a wall segment).
    Obstacle,
}

/// One observed object at a heading-relative direction.
///
/// Only immediate adjacency is modelled, so walls are always reported at
/// distance 1.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percept {
    pub category:  ObjectCategory,
    pub distance:  u32,
    pub direction: Direction,
}

impl Percept {
    /// A wall segment directly adjacent to the agent.
    #[inline]
    pub fn adjacent_wall(direction: Direction) -> Self {
        Self {
            category: ObjectCategory::Obstacle,
            distance: 1,
            direction,
        }
    }
}
