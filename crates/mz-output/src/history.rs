//! Replayable XML history of a run.
//!
//! # Layout
//!
//! ```text
//! <?xml version="1.0"?>
//!
//! <world xmlns="http://perceptualscience.rutgers.edu/maze" width="500" height="500" cells="3" runnable="false" debug="true" >
//! <pole x="1" y="0" />
//!   <state step="0" >
//!    <stepper id="0"
//!      debug="false" with-extensions="false"
//!     x="0" y="0" heading="EAST" bumped="false"
//!     />
//!   </state>
//!   <wait time="50"/>
//!   <state step="1">
//!    <update id="0"
//!     x="0" y="0" heading="SOUTH" bumped="false"
//!     />
//!   </state>
//!   <wait time="50"/>
//!   <kill id="0" />
//! </world>
//! ```
//!
//! Every attribute is followed by a single space, and each attribute group
//! ends its line.  The header always marks the replay as not runnable but
//! debuggable so that a viewer starts paused.  Beams are listed before poles,
//! each x-major.  A `message` attribute is appended to an agent's dynamic
//! group only when its `debug` flag is set and it has a message.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mz_agent::{Agent, AgentStore};
use mz_config::WorldConfig;
use mz_core::{AgentId, Tick};
use mz_maze::GridMaze;
use mz_sim::SimObserver;
use tracing::warn;

use crate::{OutputError, OutputResult};

pub const XMLNS: &str = "http://perceptualscience.rutgers.edu/maze";

/// Writes the history log of a run to any `io::Write`.
///
/// Used as a [`SimObserver`], it writes the header on the first
/// `on_sim_start`, one state per snapshot, and one kill per removed agent.
/// `on_sim_end` only flushes, so a resumed run keeps appending to the same
/// world element; [`into_inner`](Self::into_inner) closes it.  The record
/// methods are public for callers that drive the log by hand.
pub struct HistoryWriter<W: Write> {
    out:        W,
    replay_ms:  u64,
    started:    bool,
    closed:     bool,
    last_error: Option<OutputError>,
}

impl HistoryWriter<BufWriter<File>> {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> HistoryWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            replay_ms: WorldConfig::default().replay_ms,
            started: false,
            closed: false,
            last_error: None,
        }
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Close the world element if a header was written, flush, and return
    /// the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        if self.started {
            self.write_close()?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    // ── Records ───────────────────────────────────────────────────────────

    /// World element, wall segments, and the full initial state at `tick`.
    ///
    /// Also sets the replay pause written after every later state.  Only the
    /// first call writes anything.
    pub fn write_header(
        &mut self,
        tick:   Tick,
        world:  &WorldConfig,
        maze:   &GridMaze,
        agents: &AgentStore,
    ) -> OutputResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.replay_ms = world.replay_ms;

        write!(self.out, "<?xml version=\"1.0\"?>\n\n")?;
        writeln!(
            self.out,
            "<world xmlns=\"{XMLNS}\" width=\"{}\" height=\"{}\" cells=\"{}\" runnable=\"false\" debug=\"true\" >",
            world.width,
            world.height,
            maze.dimension(),
        )?;
        for (x, y) in maze.beams() {
            writeln!(self.out, "<beam x=\"{x}\" y=\"{y}\" />")?;
        }
        for (x, y) in maze.poles() {
            writeln!(self.out, "<pole x=\"{x}\" y=\"{y}\" />")?;
        }

        writeln!(self.out, "  <state step=\"{}\" >", tick.0)?;
        for agent in agents.iter() {
            write!(self.out, "   <{} id=\"{}\" \n     ", agent.kind().tag(), agent.id().0)?;
            let fixed = agent.fixed();
            write!(self.out, "debug=\"{}\" with-extensions=\"{}\" \n    ", fixed.debug, fixed.with_extensions)?;
            self.write_dynamic(agent)?;
            writeln!(self.out, "    />")?;
        }
        self.write_state_end()
    }

    /// Dynamic attributes of every agent after `tick`.
    pub fn write_state(&mut self, tick: Tick, agents: &AgentStore) -> OutputResult<()> {
        writeln!(self.out, "  <state step=\"{}\">", tick.0)?;
        for agent in agents.iter() {
            write!(self.out, "   <update id=\"{}\" \n    ", agent.id().0)?;
            self.write_dynamic(agent)?;
            writeln!(self.out, "    />")?;
        }
        self.write_state_end()
    }

    pub fn write_kill(&mut self, agent: AgentId) -> OutputResult<()> {
        writeln!(self.out, "  <kill id=\"{}\" />", agent.0)?;
        Ok(())
    }

    /// Close the world element and flush.  Later calls are no-ops.
    pub fn write_close(&mut self) -> OutputResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        write!(self.out, "</world>\n\n")?;
        self.out.flush()?;
        Ok(())
    }

    fn write_dynamic(&mut self, agent: &Agent) -> OutputResult<()> {
        let (x, y) = agent.position();
        write!(
            self.out,
            "x=\"{x}\" y=\"{y}\" heading=\"{}\" bumped=\"{}\" ",
            agent.heading(),
            agent.bumped(),
        )?;
        match agent.message() {
            Some(m) if agent.fixed().debug => writeln!(self.out, "message=\"{}\" ", escape(m))?,
            _ => writeln!(self.out)?,
        }
        Ok(())
    }

    fn write_state_end(&mut self) -> OutputResult<()> {
        writeln!(self.out, "  </state>")?;
        writeln!(self.out, "  <wait time=\"{}\"/>", self.replay_ms)?;
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "history write failed; further records may be lost");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for HistoryWriter<W> {
    fn on_sim_start(&mut self, tick: Tick, world: &WorldConfig, maze: &GridMaze, agents: &AgentStore) {
        let result = self.write_header(tick, world, maze, agents);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let result = self.write_state(tick, agents);
        self.store_err(result);
    }

    fn on_agent_removed(&mut self, _tick: Tick, agent: AgentId) {
        let result = self.write_kill(agent);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.out.flush().map_err(OutputError::from);
        self.store_err(result);
    }
}

/// Escape `s` for use inside a double-quoted XML attribute.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
