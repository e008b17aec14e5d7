//! The `OutputWriter` trait implemented by tabular backends.

use crate::{AgentSnapshotRow, DeathRow, OutputResult};

/// Trait implemented by [`CsvWriter`](crate::CsvWriter).
///
/// Errors surface through [`SimOutputObserver::take_error`]
/// (crate::SimOutputObserver::take_error) when driven by a run.
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Record one removed agent.
    fn write_death(&mut self, row: &DeathRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
