//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  Tick 0 is the initial
//! configuration; the first call to `Sim::step` produces tick 1.  There is no
//! wall-clock mapping here: the replay interval is a property of the history
//! log, not of the simulation.

use std::fmt;

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick immediately after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
