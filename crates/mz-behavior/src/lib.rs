//! `mz-behavior`: agent behavior models.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`senses`]   | `is_blocked`, `is_open`, `turn_toward`, `Surroundings`          |
//! | [`model`]    | `BehaviorModel` trait, `Deliberation`, `Behavior`, `BehaviorKind` |
//! | [`stepper`]  | `Stepper`: five-phase left-hand wall follower                  |
//! | [`follower`] | `Follower`: turn-and-step left-hand wall follower              |
//! | [`trial`]    | `TrialAndError`: exploration maps, always steps                |
//! | [`error`]    | `BehaviorError`                                                 |
//!
//! # Design notes
//!
//! The tick loop in mz-sim works in two phases:
//!
//! 1. **Decision phase**: for every live agent, build percepts from the maze
//!    and call [`BehaviorModel::deliberate`].  A behavior sees only its own
//!    percepts and its own private state.
//!
//! 2. **Action phase**: the movement resolver in mz-mobility consumes each
//!    agent's intention list against the maze.
//!
//! The set of behaviors is closed, so dispatch goes through the
//! [`Behavior`] sum type rather than trait objects.

pub mod error;
pub mod follower;
pub mod model;
pub mod senses;
pub mod stepper;
pub mod trial;

#[cfg(test)]
mod tests;

pub use error::BehaviorError;
pub use follower::Follower;
pub use model::{Behavior, BehaviorKind, BehaviorModel, Deliberation};
pub use senses::{Surroundings, is_blocked, is_open, turn_toward};
pub use stepper::{Stepper, WallStatus};
pub use trial::TrialAndError;
