//! Flat row types written by [`OutputWriter`](crate::OutputWriter) backends.

use mz_agent::Agent;
use mz_core::{AgentId, Heading, Tick};

/// One agent's post-action state at one tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        i32,
    pub y:        i32,
    pub heading:  Heading,
    pub bumped:   bool,
}

impl AgentSnapshotRow {
    pub fn of(agent: &Agent, tick: Tick) -> Self {
        let (x, y) = agent.position();
        Self {
            agent_id: agent.id().0,
            tick: tick.0,
            x,
            y,
            heading: agent.heading(),
            bumped: agent.bumped(),
        }
    }
}

/// An agent removed from the run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DeathRow {
    pub agent_id: u32,
    pub tick:     u64,
}

impl DeathRow {
    pub fn new(agent: AgentId, tick: Tick) -> Self {
        Self { agent_id: agent.0, tick: tick.0 }
    }
}
