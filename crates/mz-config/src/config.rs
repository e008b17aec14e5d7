//! The complete run configuration.

use mz_agent::{Agent, AgentStore};
use mz_behavior::Behavior;
use mz_core::AgentId;
use mz_maze::GridMaze;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AgentSpec, ConfigError, ConfigResult, VariantDefaults, WallKind, WallSpec, WorldConfig};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub world:    WorldConfig,
    pub walls:    Vec<WallSpec>,
    pub defaults: VariantDefaults,
    pub agents:   Vec<AgentSpec>,
}

impl MazeConfig {
    /// Check the settings that would make construction fail.
    pub fn validate(&self) -> ConfigResult<()> {
        let cells = self.world.cells;
        if cells == 0 {
            return Err(ConfigError::ZeroCells);
        }

        let maze = GridMaze::new(cells);
        for (index, spec) in self.agents.iter().enumerate() {
            let (x, y) = spec.dynamic(self.defaults.for_kind(spec.kind)).position();
            if !maze.contains(x, y) {
                return Err(ConfigError::StartOutOfBounds { index, x, y, cells });
            }
        }
        Ok(())
    }

    /// Build the wall grid.
    ///
    /// Walls outside the grid are skipped with a warning, not rejected.
    pub fn build_maze(&self) -> ConfigResult<GridMaze> {
        if self.world.cells == 0 {
            return Err(ConfigError::ZeroCells);
        }

        let mut maze = GridMaze::new(self.world.cells);
        let rejected = self
            .walls
            .iter()
            .filter(|w| {
                !match w.kind {
                    WallKind::Beam => maze.add_beam(w.x, w.y),
                    WallKind::Pole => maze.add_pole(w.x, w.y),
                }
            })
            .count();

        if rejected > 0 {
            warn!(rejected, total = self.walls.len(), "walls outside the grid were ignored");
        }
        debug!(cells = self.world.cells, walls = self.walls.len() - rejected, "maze built");
        Ok(maze)
    }

    /// Build the agent set, ids assigned in listing order.
    pub fn build_agents(&self) -> ConfigResult<AgentStore> {
        self.validate()?;

        let mut store = AgentStore::new();
        for (index, spec) in self.agents.iter().enumerate() {
            let defaults = self.defaults.for_kind(spec.kind);
            let id = AgentId::try_from(index).map_err(|_| ConfigError::TooManyAgents(index))?;
            store.push(Agent::new(
                id,
                Behavior::new(spec.kind, self.world.cells),
                spec.fixed(defaults),
                spec.dynamic(defaults),
            ))?;
        }
        Ok(store)
    }

    /// Append walls, e.g. from a CSV file loaded with
    /// [`load_walls_csv`](crate::load_walls_csv).
    pub fn extend_walls(&mut self, walls: impl IntoIterator<Item = WallSpec>) {
        self.walls.extend(walls);
    }
}
