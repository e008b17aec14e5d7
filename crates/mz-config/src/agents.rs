//! Agent records and per-variant defaults.

use mz_agent::{DynamicAttributes, FixedAttributes};
use mz_behavior::BehaviorKind;
use mz_core::Heading;
use serde::{Deserialize, Serialize};

/// Starting attributes for an agent that does not set them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDefaults {
    pub x:               i32,
    pub y:               i32,
    pub heading:         Heading,
    pub bumped:          bool,
    pub message:         Option<String>,
    pub debug:           bool,
    pub with_extensions: bool,
}

impl AgentDefaults {
    /// Defaults shared by every agent variant: top-left cell, facing east.
    pub fn variant() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: Heading::East,
            bumped: false,
            message: None,
            debug: false,
            with_extensions: false,
        }
    }

    /// Defaults of a bare agent with no variant: `(1, 1)`, facing north.
    pub fn base() -> Self {
        let d = DynamicAttributes::default();
        Self { x: d.x, y: d.y, heading: d.heading, ..Self::variant() }
    }
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self::variant()
    }
}

/// One [`AgentDefaults`] per behavior variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantDefaults {
    pub stepper:  AgentDefaults,
    pub follower: AgentDefaults,
    pub tryer:    AgentDefaults,
}

impl VariantDefaults {
    pub fn for_kind(&self, kind: BehaviorKind) -> &AgentDefaults {
        match kind {
            BehaviorKind::Stepper => &self.stepper,
            BehaviorKind::Follower => &self.follower,
            BehaviorKind::TrialAndError => &self.tryer,
        }
    }
}

/// One agent entry.  Unset fields fall back to the variant's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: BehaviorKind,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub heading: Option<Heading>,
    #[serde(default)]
    pub bumped: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub with_extensions: Option<bool>,
}

impl AgentSpec {
    /// An entry of `kind` that takes every attribute from the defaults.
    pub fn of(kind: BehaviorKind) -> Self {
        Self {
            kind,
            x: None,
            y: None,
            heading: None,
            bumped: None,
            message: None,
            debug: None,
            with_extensions: None,
        }
    }

    pub fn fixed(&self, defaults: &AgentDefaults) -> FixedAttributes {
        FixedAttributes {
            debug:           self.debug.unwrap_or(defaults.debug),
            with_extensions: self.with_extensions.unwrap_or(defaults.with_extensions),
        }
    }

    pub fn dynamic(&self, defaults: &AgentDefaults) -> DynamicAttributes {
        DynamicAttributes {
            x:       self.x.unwrap_or(defaults.x),
            y:       self.y.unwrap_or(defaults.y),
            heading: self.heading.unwrap_or(defaults.heading),
            bumped:  self.bumped.unwrap_or(defaults.bumped),
            message: self.message.clone().or_else(|| defaults.message.clone()),
        }
    }
}
