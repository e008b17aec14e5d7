//! `mz-sim`: the simulation step for the `rust_maze` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`sim`]       | `Sim`: world state and the tick loop                    |
//! | [`builder`]   | `SimBuilder`: from parts or from a `MazeConfig`         |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                      |
//! | [`report`]    | `TickReport`, `status_line`                              |
//! | [`error`]     | `SimError`, `SimResult<T>`                               |
//!
//! # Tick loop
//!
//! Each call to [`Sim::step`]:
//!
//! 1. advances the tick counter;
//! 2. for every live agent in registration order, clears `bumped` and
//!    `message`, builds percepts from the maze, and deliberates;
//! 3. for every live agent, resolves its intentions against the maze;
//! 4. emits the render and snapshot events;
//! 5. removes dead agents, emitting one removal event each.
//!
//! No agent acts before every agent has deliberated, so decisions within a
//! tick never depend on another agent's movement in the same tick.
//!
//! # Quick start
//!
//! ```rust,ignore
//! let config = mz_config::load_config_json(path)?;
//! let mut sim = SimBuilder::from_config(&config)?.build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{TickReport, status_line};
pub use sim::Sim;
