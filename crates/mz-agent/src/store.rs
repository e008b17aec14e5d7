//! Live agents in registration order.
//!
//! Both simulation phases iterate the store front to back, so the order in
//! which agents were pushed is the order in which they deliberate, act, and
//! appear in history records.  Removal keeps the relative order of the
//! survivors.

use mz_core::AgentId;

use crate::{Agent, AgentError, AgentResult};

#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` after all existing agents.
    pub fn push(&mut self, agent: Agent) -> AgentResult<()> {
        if self.get(agent.id()).is_some() {
            return Err(AgentError::DuplicateId(agent.id()));
        }
        self.agents.push(agent);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.agents.iter_mut()
    }

    /// Ids of all stored agents, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Drop every agent that is no longer alive.
    ///
    /// Returns the removed ids in registration order.
    pub fn remove_dead(&mut self) -> Vec<AgentId> {
        let dead: Vec<AgentId> = self.agents.iter().filter(|a| !a.is_alive()).map(Agent::id).collect();
        if !dead.is_empty() {
            self.agents.retain(Agent::is_alive);
        }
        dead
    }
}
