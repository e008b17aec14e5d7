//! The `BehaviorModel` trait and the closed set of behavior variants.

use std::fmt;
use std::str::FromStr;

use mz_core::{Intention, Percept};

use crate::{BehaviorError, Follower, Stepper, TrialAndError};

/// What a behavior decided this tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deliberation {
    /// Ordered actions for the resolver.  Empty means "do nothing".
    pub intentions: Vec<Intention>,

    /// Diagnostic status for renderers and debug history records.
    pub message: Option<String>,
}

impl Deliberation {
    pub fn new(intentions: Vec<Intention>) -> Self {
        Self { intentions, message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Per-agent decision making.
///
/// Called exactly once per agent per tick, before any agent acts.  An
/// implementation may read only `percepts` and its own state; it never sees
/// the maze or other agents.
pub trait BehaviorModel {
    fn deliberate(&mut self, percepts: &[Percept]) -> Deliberation;
}

// ── BehaviorKind ──────────────────────────────────────────────────────────────

/// Tag naming a behavior variant in configuration files and history logs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    #[cfg_attr(feature = "serde", serde(rename = "stepper"))]
    Stepper,
    #[cfg_attr(feature = "serde", serde(rename = "follower"))]
    Follower,
    #[cfg_attr(feature = "serde", serde(rename = "tryer"))]
    TrialAndError,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 3] = [BehaviorKind::Stepper, BehaviorKind::Follower, BehaviorKind::TrialAndError];

    /// Element name used for this variant in the history log.
    pub fn tag(self) -> &'static str {
        match self {
            BehaviorKind::Stepper => "stepper",
            BehaviorKind::Follower => "follower",
            BehaviorKind::TrialAndError => "tryer",
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BehaviorKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BehaviorKind::ALL
            .into_iter()
            .find(|k| k.tag() == s.trim())
            .ok_or_else(|| BehaviorError::UnknownKind(s.to_owned()))
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// One agent's behavior, carrying its private state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Behavior {
    Stepper(Stepper),
    Follower(Follower),
    TrialAndError(TrialAndError),
}

impl Behavior {
    /// Fresh behavior state of `kind` for a maze of `dimension` cells.
    pub fn new(kind: BehaviorKind, dimension: usize) -> Self {
        match kind {
            BehaviorKind::Stepper => Behavior::Stepper(Stepper::new()),
            BehaviorKind::Follower => Behavior::Follower(Follower::new()),
            BehaviorKind::TrialAndError => Behavior::TrialAndError(TrialAndError::new(dimension)),
        }
    }

    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Stepper(_) => BehaviorKind::Stepper,
            Behavior::Follower(_) => BehaviorKind::Follower,
            Behavior::TrialAndError(_) => BehaviorKind::TrialAndError,
        }
    }
}

impl BehaviorModel for Behavior {
    fn deliberate(&mut self, percepts: &[Percept]) -> Deliberation {
        match self {
            Behavior::Stepper(b) => b.deliberate(percepts),
            Behavior::Follower(b) => b.deliberate(percepts),
            Behavior::TrialAndError(b) => b.deliberate(percepts),
        }
    }
}
