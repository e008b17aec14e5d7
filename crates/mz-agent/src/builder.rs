//! Fluent builder for a single [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use mz_agent::AgentBuilder;
//! use mz_behavior::BehaviorKind;
//! use mz_core::{AgentId, Heading};
//!
//! let agent = AgentBuilder::new(AgentId(0), BehaviorKind::Stepper, 10)
//!     .at(0, 0)
//!     .heading(Heading::East)
//!     .debug(true)
//!     .build();
//!
//! assert_eq!(agent.position(), (0, 0));
//! assert!(agent.fixed().debug);
//! ```

use mz_behavior::{Behavior, BehaviorKind};
use mz_core::{AgentId, Heading};

use crate::{Agent, DynamicAttributes, FixedAttributes};

/// Fluent builder for [`Agent`].
///
/// Attributes not set explicitly take the [`Default`] values of
/// [`FixedAttributes`] and [`DynamicAttributes`].
pub struct AgentBuilder {
    id:        AgentId,
    kind:      BehaviorKind,
    dimension: usize,
    fixed:     FixedAttributes,
    status:    DynamicAttributes,
}

impl AgentBuilder {
    /// Builder for an agent of `kind` living in a maze of `dimension` cells.
    pub fn new(id: AgentId, kind: BehaviorKind, dimension: usize) -> Self {
        Self {
            id,
            kind,
            dimension,
            fixed: FixedAttributes::default(),
            status: DynamicAttributes::default(),
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.status.x = x;
        self.status.y = y;
        self
    }

    pub fn heading(mut self, heading: Heading) -> Self {
        self.status.heading = heading;
        self
    }

    pub fn bumped(mut self, bumped: bool) -> Self {
        self.status.bumped = bumped;
        self
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.status.message = message;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.fixed.debug = debug;
        self
    }

    pub fn with_extensions(mut self, with_extensions: bool) -> Self {
        self.fixed.with_extensions = with_extensions;
        self
    }

    pub fn build(self) -> Agent {
        Agent::new(self.id, Behavior::new(self.kind, self.dimension), self.fixed, self.status)
    }
}
