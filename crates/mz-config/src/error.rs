use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("maze must have at least one cell")]
    ZeroCells,

    #[error("agent #{index} starts at ({x}, {y}), outside the {cells}x{cells} grid")]
    StartOutOfBounds { index: usize, x: i32, y: i32, cells: usize },

    #[error("agent #{0} exceeds the id range")]
    TooManyAgents(usize),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wall CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Agent(#[from] mz_agent::AgentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
