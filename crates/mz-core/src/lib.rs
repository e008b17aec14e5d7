//! `mz-core`: foundational types for the `rust_maze` simulator.
//!
//! This crate is a dependency of every other `mz-*` crate.  It has no `mz-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`heading`]     | `Heading` (absolute), `Direction` (heading-relative)  |
//! | [`percept`]     | `Percept`, `ObjectCategory`                           |
//! | [`intention`]   | `Intention` action tags                               |
//! | [`time`]        | `Tick`                                                |
//! | [`error`]       | `MzError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod heading;
pub mod ids;
pub mod intention;
pub mod percept;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::MzError;
pub use heading::{Direction, Heading};
pub use ids::AgentId;
pub use intention::Intention;
pub use percept::{ObjectCategory, Percept};
pub use time::Tick;
