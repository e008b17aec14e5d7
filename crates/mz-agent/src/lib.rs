//! `mz-agent`: agent records and storage for the `rust_maze` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`attributes`]  | `FixedAttributes`, `DynamicAttributes`                    |
//! | [`agent`]       | `Agent`: one maze agent and its behavior state           |
//! | [`builder`]     | `AgentBuilder` (fluent construction)                      |
//! | [`store`]       | `AgentStore`: live agents in registration order          |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # Ownership
//!
//! Agents never hold a reference to the maze or to each other.  The
//! simulation owns the [`AgentStore`] and lends `&GridMaze` to perception and
//! movement, so every agent is reachable only through its [`AgentId`].
//!
//! [`AgentId`]: mz_core::AgentId

pub mod agent;
pub mod attributes;
pub mod builder;
pub mod error;
pub mod store;


pub use agent::Agent;
pub use attributes::{DynamicAttributes, FixedAttributes};
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
