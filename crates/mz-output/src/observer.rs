//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use mz_agent::AgentStore;
use mz_core::{AgentId, Tick};
use mz_sim::SimObserver;

use crate::row::{AgentSnapshotRow, DeathRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and deaths to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents.iter().map(|a| AgentSnapshotRow::of(a, tick)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_agent_removed(&mut self, tick: Tick, agent: AgentId) {
        let result = self.writer.write_death(&DeathRow::new(agent, tick));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
