//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `agent_snapshots.csv`: `agent_id,tick,x,y,heading,bumped`
//! - `deaths.csv`: `agent_id,tick`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, DeathRow, OutputResult};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    deaths:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "heading", "bumped"])?;

        let mut deaths = Writer::from_path(dir.join("deaths.csv"))?;
        deaths.write_record(["agent_id", "tick"])?;

        Ok(Self { snapshots, deaths, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.as_str().to_owned(),
                row.bumped.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_death(&mut self, row: &DeathRow) -> OutputResult<()> {
        self.deaths.write_record(&[row.agent_id.to_string(), row.tick.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.deaths.flush()?;
        Ok(())
    }
}
