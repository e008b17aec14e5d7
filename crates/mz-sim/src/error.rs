use mz_config::ConfigError;
use mz_core::MzError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("maze has {maze} cells per side but the world expects {world}")]
    DimensionMismatch { maze: usize, world: usize },

    #[error("agent {id} starts at ({x}, {y}), outside the grid")]
    AgentOutOfBounds { id: u32, x: i32, y: i32 },

    #[error("run needs a tick limit: set world.max_ticks or use run_ticks")]
    NoTickLimit,

    #[error(transparent)]
    Core(#[from] MzError),
}

pub type SimResult<T> = Result<T, SimError>;
