//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `MzError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `mz-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MzError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("unknown heading {0:?}: expected NORTH, SOUTH, EAST or WEST")]
    UnknownHeading(String),
}
