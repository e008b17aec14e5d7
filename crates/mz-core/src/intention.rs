//! Agent intentions: the actions a behavior can queue for the current tick.

use std::fmt;

/// A queued action awaiting resolution by the movement resolver.
///
/// Intentions carry no payload: a step is always one cell along the current
/// heading, and turns are whole quarter rotations.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intention {
    TurnLeft,
    TurnRight,
    TurnBack,
    Step,
}

impl Intention {
    pub const ALL: [Intention; 4] = [
        Intention::TurnLeft,
        Intention::TurnRight,
        Intention::TurnBack,
        Intention::Step,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intention::TurnLeft => "turn left",
            Intention::TurnRight => "turn right",
            Intention::TurnBack => "turn back",
            Intention::Step => "step",
        }
    }

    /// Number of left rotations this intention applies (0 for `Step`).
    #[inline]
    pub fn left_turns(self) -> u8 {
        match self {
            Intention::TurnLeft => 1,
            Intention::TurnBack => 2,
            Intention::TurnRight => 3,
            Intention::Step => 0,
        }
    }

    /// Bit used by the resolver's once-per-tick bookkeeping.
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Intention::TurnLeft => 1,
            Intention::TurnRight => 2,
            Intention::TurnBack => 4,
            Intention::Step => 8,
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
