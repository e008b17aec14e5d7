//! Simulation observer trait for rendering and history collection.

use mz_agent::AgentStore;
use mz_config::WorldConfig;
use mz_core::{AgentId, Tick};
use mz_maze::GridMaze;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: console caption
///
/// ```rust,ignore
/// struct Caption;
///
/// impl SimObserver for Caption {
///     fn on_render(&mut self, tick: Tick, _maze: &GridMaze, agents: &AgentStore) {
///         println!("{}", status_line(tick, agents));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once by `run` before its first tick, with the state at `tick`.
    fn on_sim_start(&mut self, _tick: Tick, _world: &WorldConfig, _maze: &GridMaze, _agents: &AgentStore) {}

    /// Called after the tick counter advances, before any agent deliberates.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Redraw request, after every live agent has acted.
    fn on_render(&mut self, _tick: Tick, _maze: &GridMaze, _agents: &AgentStore) {}

    /// Post-action state of every stored agent, including agents that died
    /// this tick and are about to be removed.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// One call per removed agent, in registration order.
    fn on_agent_removed(&mut self, _tick: Tick, _agent: AgentId) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once by `run` after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan events out to two observers, `self.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, tick: Tick, world: &WorldConfig, maze: &GridMaze, agents: &AgentStore) {
        self.0.on_sim_start(tick, world, maze, agents);
        self.1.on_sim_start(tick, world, maze, agents);
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_render(&mut self, tick: Tick, maze: &GridMaze, agents: &AgentStore) {
        self.0.on_render(tick, maze, agents);
        self.1.on_render(tick, maze, agents);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.0.on_snapshot(tick, agents);
        self.1.on_snapshot(tick, agents);
    }

    fn on_agent_removed(&mut self, tick: Tick, agent: AgentId) {
        self.0.on_agent_removed(tick, agent);
        self.1.on_agent_removed(tick, agent);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.0.on_tick_end(report);
        self.1.on_tick_end(report);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

/// Forward to the inner observer when there is one.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_sim_start(&mut self, tick: Tick, world: &WorldConfig, maze: &GridMaze, agents: &AgentStore) {
        if let Some(o) = self {
            o.on_sim_start(tick, world, maze, agents);
        }
    }

    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(o) = self {
            o.on_tick_start(tick);
        }
    }

    fn on_render(&mut self, tick: Tick, maze: &GridMaze, agents: &AgentStore) {
        if let Some(o) = self {
            o.on_render(tick, maze, agents);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        if let Some(o) = self {
            o.on_snapshot(tick, agents);
        }
    }

    fn on_agent_removed(&mut self, tick: Tick, agent: AgentId) {
        if let Some(o) = self {
            o.on_agent_removed(tick, agent);
        }
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        if let Some(o) = self {
            o.on_tick_end(report);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(o) = self {
            o.on_sim_end(final_tick);
        }
    }
}
