//! `mz-config`: explicit configuration for a maze run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`world`]    | `WorldConfig`: canvas size, cell count, timing, flags         |
//! | [`walls`]    | `WallKind`, `WallSpec`                                         |
//! | [`agents`]   | `AgentSpec`, `AgentDefaults`, `VariantDefaults`                |
//! | [`config`]   | `MazeConfig`: the whole file, validation, maze/agent builders |
//! | [`loader`]   | `load_config_json`, `load_walls_csv` and their `Read` variants |
//! | [`error`]    | `ConfigError`, `ConfigResult<T>`                               |
//!
//! # JSON format
//!
//! Every section and every field is optional:
//!
//! ```json
//! {
//!   "world":    { "cells": 3, "debug": true, "max_ticks": 100 },
//!   "walls":    [ { "kind": "pole", "x": 1, "y": 0 } ],
//!   "defaults": { "stepper": { "heading": "SOUTH" } },
//!   "agents":   [ { "kind": "stepper" }, { "kind": "tryer", "x": 2, "y": 2 } ]
//! }
//! ```
//!
//! Agents receive ids `0, 1, …` in the order they are listed.  A field an
//! agent leaves out comes from the defaults of its variant.

pub mod agents;
pub mod config;
pub mod error;
pub mod loader;
pub mod walls;
pub mod world;


pub use agents::{AgentDefaults, AgentSpec, VariantDefaults};
pub use config::MazeConfig;
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config_json, load_config_reader, load_walls_csv, load_walls_reader};
pub use walls::{WallKind, WallSpec};
pub use world::WorldConfig;
