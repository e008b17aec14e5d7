use mz_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} is already registered")]
    DuplicateId(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
