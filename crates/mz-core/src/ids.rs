//! Strongly typed agent identifier.
//!
//! Ids are handed out in registration order by the configuration loader.
//! They are stable for the lifetime of a run: removing a dead agent never
//! renumbers the survivors, so history records can refer to agents by id.

use std::fmt;

/// Identity of one agent within a world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize`, e.g. for indexing registration-ordered tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
