//! Fluent builder for constructing a [`Sim`].

use mz_agent::AgentStore;
use mz_config::{MazeConfig, WorldConfig};
use mz_maze::GridMaze;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::from_config(&config)?
///     .max_ticks(200)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: WorldConfig,
    maze:   GridMaze,
    agents: AgentStore,
}

impl SimBuilder {
    /// Create a builder from already-constructed parts.
    pub fn new(config: WorldConfig, maze: GridMaze, agents: AgentStore) -> Self {
        Self { config, maze, agents }
    }

    /// Build the maze and agents described by `config`.
    pub fn from_config(config: &MazeConfig) -> SimResult<Self> {
        let maze = config.build_maze()?;
        let agents = config.build_agents()?;
        Ok(Self::new(config.world.clone(), maze, agents))
    }

    /// Override `world.max_ticks`.
    pub fn max_ticks(mut self, ticks: u64) -> Self {
        self.config.max_ticks = Some(ticks);
        self
    }

    /// Override `world.debug`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Check that the parts agree and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.maze.dimension() != self.config.cells {
            return Err(SimError::DimensionMismatch {
                maze:  self.maze.dimension(),
                world: self.config.cells,
            });
        }
        if let Some(a) = self.agents.iter().find(|a| {
            let (x, y) = a.position();
            !self.maze.contains(x, y)
        }) {
            let (x, y) = a.position();
            return Err(SimError::AgentOutOfBounds { id: a.id().0, x, y });
        }

        Ok(Sim::new(self.config, self.maze, self.agents))
    }
}
