//! One maze agent: identity, attributes, pending intentions, and behavior.

use mz_behavior::{Behavior, BehaviorKind, BehaviorModel};
use mz_core::{AgentId, Heading, Intention, Percept};

use crate::{DynamicAttributes, FixedAttributes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    id:       AgentId,
    fixed:    FixedAttributes,
    status:   DynamicAttributes,
    alive:    bool,
    todo:     Vec<Intention>,
    previous: Option<DynamicAttributes>,
    behavior: Behavior,
}

impl Agent {
    pub fn new(id: AgentId, behavior: Behavior, fixed: FixedAttributes, status: DynamicAttributes) -> Self {
        Self {
            id,
            fixed,
            status,
            alive: true,
            todo: Vec::new(),
            previous: None,
            behavior,
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn kind(&self) -> BehaviorKind {
        self.behavior.kind()
    }

    pub fn fixed(&self) -> &FixedAttributes {
        &self.fixed
    }

    pub fn status(&self) -> &DynamicAttributes {
        &self.status
    }

    #[inline]
    pub fn position(&self) -> (i32, i32) {
        self.status.position()
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.status.heading
    }

    #[inline]
    pub fn bumped(&self) -> bool {
        self.status.bumped
    }

    pub fn message(&self) -> Option<&str> {
        self.status.message.as_deref()
    }

    /// Attributes as they were just before the last `act`.
    pub fn previous(&self) -> Option<&DynamicAttributes> {
        self.previous.as_ref()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Intentions queued by the last deliberation and not yet consumed.
    pub fn intentions(&self) -> &[Intention] {
        &self.todo
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Mark the agent dead.  It is removed at the end of the current tick.
    pub fn die(&mut self) {
        self.alive = false;
    }

    /// Reset the per-tick flags ahead of deliberation.
    pub fn begin_tick(&mut self) {
        self.status.bumped = false;
        self.status.message = None;
    }

    /// Run the behavior on `percepts` and replace the intention list.
    pub fn deliberate(&mut self, percepts: &[Percept]) {
        let d = self.behavior.deliberate(percepts);
        self.todo = d.intentions;
        if d.message.is_some() {
            self.status.message = d.message;
        }
    }

    /// Hand the intention list to the resolver, leaving it empty.
    pub fn take_intentions(&mut self) -> Vec<Intention> {
        std::mem::take(&mut self.todo)
    }

    /// Remember the current attributes as the pre-action state.
    pub fn record_previous(&mut self) {
        self.previous = Some(self.status.clone());
    }

    // ── Mutation (movement resolver only) ─────────────────────────────────

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.status.x = x;
        self.status.y = y;
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.status.heading = heading;
    }

    pub fn set_bumped(&mut self, bumped: bool) {
        self.status.bumped = bumped;
    }
}
