//! `mz-output`: recording runs of the `rust_maze` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`history`]   | `HistoryWriter<W>`: replayable XML log of a run             |
//! | [`row`]       | `AgentSnapshotRow`, `DeathRow`                               |
//! | [`writer`]    | `OutputWriter` trait                                         |
//! | [`csv`]       | `CsvWriter`: `agent_snapshots.csv` and `deaths.csv`         |
//! | [`observer`]  | `SimOutputObserver<W>`: feeds any `OutputWriter` from a run |
//! | [`error`]     | `OutputError`, `OutputResult<T>`                             |
//!
//! # Usage
//!
//! Both recorders are [`SimObserver`](mz_sim::SimObserver)s and can be
//! combined as a tuple:
//!
//! ```rust,ignore
//! let history = HistoryWriter::create(Path::new("run.xml"))?;
//! let table   = SimOutputObserver::new(CsvWriter::new(Path::new("out"))?);
//! let mut observers = (history, table);
//! sim.run(&mut observers)?;
//! if let Some(e) = observers.0.take_error() { return Err(e.into()); }
//! ```
//!
//! Write failures are stored because observer hooks cannot return errors.
//! Check [`HistoryWriter::take_error`] and [`SimOutputObserver::take_error`]
//! after the run.

pub mod csv;
pub mod error;
pub mod history;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use history::HistoryWriter;
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, DeathRow};
pub use writer::OutputWriter;
