//! Absolute headings and heading-relative directions.
//!
//! # Coordinates
//!
//! The grid origin is the top-left cell.  `x` grows to the east, `y` grows to
//! the south, so NORTH is `(0, -1)`:
//!
//! ```text
//!            NORTH (0,-1)
//!                 ↑
//!   WEST (-1,0) ←   → EAST (1,0)
//!                 ↓
//!            SOUTH (0,1)
//! ```
//!
//! Every rotation in the simulator is built from the single primitive
//! [`Heading::left`]; a right turn is three left turns.

use std::fmt;
use std::str::FromStr;

use crate::MzError;

// ── Heading ───────────────────────────────────────────────────────────────────

/// The absolute direction an agent is facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl Heading {
    /// All four headings, in declaration order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// Change in `x` for one step along this heading.
    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Heading::East => 1,
            Heading::West => -1,
            Heading::North | Heading::South => 0,
        }
    }

    /// Change in `y` for one step along this heading.
    #[inline]
    pub fn dy(self) -> i32 {
        match self {
            Heading::South => 1,
            Heading::North => -1,
            Heading::East | Heading::West => 0,
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::East => Heading::West,
            Heading::West => Heading::East,
        }
    }

    /// The heading 90° counter-clockwise from `self`.
    #[inline]
    pub fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Apply `n` left rotations.
    pub fn rotated_left(self, n: u8) -> Heading {
        (0..n % 4).fold(self, |h, _| h.left())
    }

    /// Absolute heading of the relative direction `d` for an agent facing `self`.
    pub fn toward(self, d: Direction) -> Heading {
        self.rotated_left(d.left_turns())
    }

    /// Relative direction in which `other` lies for an agent facing `self`.
    pub fn direction_of(self, other: Heading) -> Direction {
        if other == self {
            Direction::Ahead
        } else if other == self.left() {
            Direction::Left
        } else if other == self.rotated_left(2) {
            Direction::Behind
        } else {
            Direction::Right
        }
    }

    /// The name used in configuration files and history logs (`"NORTH"`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::South => "SOUTH",
            Heading::East => "EAST",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = MzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NORTH" => Ok(Heading::North),
            "SOUTH" => Ok(Heading::South),
            "EAST" => Ok(Heading::East),
            "WEST" => Ok(Heading::West),
            other => Err(MzError::UnknownHeading(other.to_owned())),
        }
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A direction relative to the agent's current heading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    Ahead,
    Left,
    Right,
    Behind,
}

impl Direction {
    /// The order in which percepts are generated.
    pub const ALL: [Direction; 4] = [Direction::Ahead, Direction::Left, Direction::Right, Direction::Behind];

    /// Number of left rotations that turn AHEAD into `self`.
    #[inline]
    pub fn left_turns(self) -> u8 {
        match self {
            Direction::Ahead => 0,
            Direction::Left => 1,
            Direction::Behind => 2,
            Direction::Right => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ahead => "ahead",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Behind => "behind",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
