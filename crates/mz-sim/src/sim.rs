//! The `Sim` struct and its tick loop.

use mz_agent::{Agent, AgentStore};
use mz_config::WorldConfig;
use mz_core::{AgentId, MzError, Tick};
use mz_maze::{GridMaze, perceive};
use mz_mobility::act;
use tracing::{debug, info};

use crate::{SimError, SimObserver, SimResult, TickReport, status_line};

/// The maze world: walls, agents, and the tick counter.
///
/// Agents are owned here and reached by id.  The maze is lent to perception
/// and movement as `&GridMaze`; nothing holds a reference back to the world.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug, Clone)]
pub struct Sim {
    /// World settings the run was built from.
    pub config: WorldConfig,

    maze:     GridMaze,
    agents:   AgentStore,
    tick:     Tick,
    runnable: bool,
}

impl Sim {
    pub(crate) fn new(config: WorldConfig, maze: GridMaze, agents: AgentStore) -> Self {
        let runnable = config.runnable;
        Self { config, maze, agents, tick: Tick::ZERO, runnable }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn maze(&self) -> &GridMaze {
        &self.maze
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Number of completed ticks.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// `false` once any agent has left the grid.
    #[inline]
    pub fn is_runnable(&self) -> bool {
        self.runnable
    }

    /// Debug caption for the current state.  See [`status_line`].
    pub fn status_line(&self) -> String {
        status_line(self.tick, &self.agents)
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Mark agent `id` dead.  It is skipped from the next tick on and
    /// removed at that tick's end.
    pub fn kill(&mut self, id: AgentId) -> SimResult<()> {
        let agent = self.agents.get_mut(id).ok_or(MzError::AgentNotFound(id))?;
        agent.die();
        Ok(())
    }

    /// Put a halted world back into the runnable state.
    pub fn resume(&mut self) {
        self.runnable = true;
    }

    /// Run from the current tick until the world halts or
    /// `config.max_ticks` ticks have completed.
    ///
    /// Emits `on_sim_start` before the first tick and `on_sim_end` after the
    /// last.  Returns the final tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        let limit = self.config.max_ticks.ok_or(SimError::NoTickLimit)?;

        info!(cells = self.maze.dimension(), agents = self.agents.len(), limit, "run started");
        observer.on_sim_start(self.tick, &self.config, &self.maze, &self.agents);

        while self.runnable && self.tick.0 < limit {
            self.step(observer);
        }

        observer.on_sim_end(self.tick);
        info!(tick = %self.tick, halted = !self.runnable, "run finished");
        Ok(self.tick)
    }

    /// Step exactly `n` ticks, whether or not the world is runnable.
    ///
    /// No start or end events are emitted.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the world by one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        self.tick = self.tick.next();
        let tick = self.tick;
        observer.on_tick_start(tick);

        // ── Decision phase ────────────────────────────────────────────────
        for agent in self.agents.iter_mut().filter(|a| a.is_alive()) {
            agent.begin_tick();
            let (x, y) = agent.position();
            let percepts = perceive(&self.maze, x, y, agent.heading());
            agent.deliberate(&percepts);
        }

        // ── Action phase ──────────────────────────────────────────────────
        let mut report = TickReport::new(tick);
        for agent in self.agents.iter_mut().filter(|a| a.is_alive()) {
            let outcome = act(&self.maze, agent);
            if outcome.bumped {
                report.bumped.push(agent.id());
            }
            if outcome.escaped {
                report.escaped.push(agent.id());
            }
        }

        if !report.escaped.is_empty() && self.runnable {
            self.runnable = false;
            info!(%tick, escaped = ?report.escaped, "agent left the maze; halting");
        }

        // ── Output ────────────────────────────────────────────────────────
        observer.on_render(tick, &self.maze, &self.agents);
        observer.on_snapshot(tick, &self.agents);

        // ── Removal ───────────────────────────────────────────────────────
        report.removed = self.agents.remove_dead();
        for &id in &report.removed {
            observer.on_agent_removed(tick, id);
        }

        debug!(%tick, bumped = report.bumped.len(), removed = report.removed.len(), "tick complete");
        observer.on_tick_end(&report);
        report
    }
}
