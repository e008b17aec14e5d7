//! Global world settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Canvas width in pixels, recorded in the history header.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Cells along each axis of the square maze.
    pub cells: usize,
    /// Pause between live ticks.
    pub delay_ms: u64,
    /// Pause written after every history state for replay.
    pub replay_ms: u64,
    pub debug: bool,
    /// Start the run in the runnable state.
    pub runnable: bool,
    /// Stop after this many ticks even if no agent escapes.
    pub max_ticks: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            cells: 10,
            delay_ms: 50,
            replay_ms: 50,
            debug: false,
            runnable: true,
            max_ticks: None,
        }
    }
}
