//! Per-agent attribute records.

use mz_core::Heading;

/// Attributes fixed when the agent is created.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct FixedAttributes {
    /// Include the status message in history records.
    pub debug: bool,
    pub with_extensions: bool,
}

/// Attributes that change as the agent moves.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DynamicAttributes {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    /// A wall clamped this tick's movement.  Cleared before each deliberation.
    pub bumped: bool,
    /// Status text set by the behavior this tick.
    pub message: Option<String>,
}

impl DynamicAttributes {
    pub fn at(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading, bumped: false, message: None }
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// One cell in from the top-left corner, facing north.
impl Default for DynamicAttributes {
    fn default() -> Self {
        Self::at(1, 1, Heading::North)
    }
}
