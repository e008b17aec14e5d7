//! Per-tick summaries.

use mz_agent::AgentStore;
use mz_core::{AgentId, Tick};

/// What happened during one tick.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TickReport {
    pub tick: Tick,
    /// Agents whose step was clamped by a wall.
    pub bumped: Vec<AgentId>,
    /// Agents whose committed position left the grid.
    pub escaped: Vec<AgentId>,
    /// Agents removed at the end of the tick.
    pub removed: Vec<AgentId>,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, bumped: Vec::new(), escaped: Vec::new(), removed: Vec::new() }
    }
}

/// Debug caption: the tick number, then each agent that has a message or
/// bumped into a wall.
///
/// ```text
/// 12 Agent 0: Status: foundWall Agent 2: OUCH!
/// ```
pub fn status_line(tick: Tick, agents: &AgentStore) -> String {
    let mut line = tick.0.to_string();
    for agent in agents.iter().filter(|a| a.bumped() || a.message().is_some()) {
        line.push_str(&format!(" Agent {}:", agent.id().0));
        if let Some(m) = agent.message() {
            line.push(' ');
            line.push_str(m);
        }
        if agent.bumped() {
            line.push_str(" OUCH!");
        }
    }
    line
}
