//! headless: run a maze configuration to completion without a display.
//!
//! Loads a JSON configuration (or the built-in corridor maze), optionally
//! appends walls from a CSV file, runs until an agent escapes or the tick
//! limit is reached, and writes the replayable history log.  A JSON summary
//! of the final state is printed to stdout.
//!
//! ```text
//! RUST_LOG=info headless --config maze.json --history run.xml --ticks 500
//! ```

use std::io::Cursor;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mz_agent::AgentStore;
use mz_config::{MazeConfig, load_config_json, load_config_reader, load_walls_csv};
use mz_core::Tick;
use mz_maze::GridMaze;
use mz_output::{CsvWriter, HistoryWriter, SimOutputObserver};
use mz_sim::{SimBuilder, SimObserver, status_line};

// ── Built-in configuration ────────────────────────────────────────────────────

// 4×4 maze: a wall spine down column 1 with a gap at the bottom, and an
// opening in the east boundary at row 3.  One agent of each variant.
const DEFAULT_CONFIG: &str = r#"{
  "world": { "cells": 4, "debug": true, "max_ticks": 200 },
  "walls": [
    { "kind": "beam", "x": 0, "y": 0 }, { "kind": "beam", "x": 1, "y": 0 },
    { "kind": "beam", "x": 2, "y": 0 }, { "kind": "beam", "x": 3, "y": 0 },
    { "kind": "beam", "x": 0, "y": 4 }, { "kind": "beam", "x": 1, "y": 4 },
    { "kind": "beam", "x": 2, "y": 4 }, { "kind": "beam", "x": 3, "y": 4 },
    { "kind": "pole", "x": 0, "y": 0 }, { "kind": "pole", "x": 0, "y": 1 },
    { "kind": "pole", "x": 0, "y": 2 }, { "kind": "pole", "x": 0, "y": 3 },
    { "kind": "pole", "x": 4, "y": 0 }, { "kind": "pole", "x": 4, "y": 1 },
    { "kind": "pole", "x": 4, "y": 2 },
    { "kind": "pole", "x": 1, "y": 0 }, { "kind": "pole", "x": 1, "y": 1 },
    { "kind": "pole", "x": 1, "y": 2 }
  ],
  "agents": [
    { "kind": "stepper", "debug": true },
    { "kind": "follower", "x": 2, "y": 1, "heading": "NORTH" },
    { "kind": "tryer", "x": 3, "y": 0, "heading": "SOUTH" }
  ]
}"#;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "headless")]
#[command(about = "Run a maze simulation without a display")]
struct Args {
    /// JSON configuration file; the built-in maze is used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra walls as a `kind,x,y` CSV file
    #[arg(long)]
    walls: Option<PathBuf>,

    /// Tick limit, overriding `world.max_ticks`
    #[arg(long)]
    ticks: Option<u64>,

    /// Where to write the XML history log
    #[arg(long, default_value = "history.xml")]
    history: PathBuf,

    /// Also write agent_snapshots.csv and deaths.csv into this directory
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Pause `world.delay_ms` between ticks
    #[arg(long)]
    live: bool,
}

// ── Live caption ──────────────────────────────────────────────────────────────

/// Logs the status caption after every tick when the world is in debug
/// mode, and paces the run when `delay` is set.
struct Caption {
    debug: bool,
    delay: Option<Duration>,
}

impl SimObserver for Caption {
    fn on_render(&mut self, tick: Tick, _maze: &GridMaze, agents: &AgentStore) {
        if let Some(line) = caption(self.debug, tick, agents) {
            info!("{line}");
        }
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
    }
}

/// The status caption, shown only in debug mode.
fn caption(debug: bool, tick: Tick, agents: &AgentStore) -> Option<String> {
    debug.then(|| status_line(tick, agents))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    // ── 1. Configuration ──────────────────────────────────────────────────
    let mut config: MazeConfig = match &args.config {
        Some(path) => load_config_json(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_config_reader(Cursor::new(DEFAULT_CONFIG)).context("built-in configuration")?,
    };
    if let Some(path) = &args.walls {
        let walls = load_walls_csv(path).with_context(|| format!("loading {}", path.display()))?;
        debug!(count = walls.len(), "extra walls loaded");
        config.extend_walls(walls);
    }

    // ── 2. Build ──────────────────────────────────────────────────────────
    let mut builder = SimBuilder::from_config(&config)?;
    if let Some(ticks) = args.ticks {
        builder = builder.max_ticks(ticks);
    }
    let mut sim = builder.build()?;

    // ── 3. Run ────────────────────────────────────────────────────────────
    let history = HistoryWriter::create(&args.history)
        .with_context(|| format!("creating {}", args.history.display()))?;
    let table = match &args.csv_dir {
        Some(dir) => Some(SimOutputObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let caption = (args.live || sim.config.debug).then(|| Caption {
        debug: sim.config.debug,
        delay: args.live.then(|| Duration::from_millis(sim.config.delay_ms)),
    });

    let mut observers = (history, (table, caption));
    let t0 = Instant::now();
    sim.run(&mut observers)?;
    let elapsed = t0.elapsed();

    let (mut history, (mut table, _)) = observers;
    if let Some(e) = history.take_error() {
        return Err(e).context("writing history");
    }
    history.into_inner().context("closing history")?;
    if let Some(e) = table.as_mut().and_then(SimOutputObserver::take_error) {
        return Err(e).context("writing CSV output");
    }

    // ── 4. Summary ────────────────────────────────────────────────────────
    info!(tick = %sim.tick(), halted = !sim.is_runnable(), ?elapsed, "done");
    let agents: Vec<serde_json::Value> = sim
        .agents()
        .iter()
        .map(|a| {
            let (x, y) = a.position();
            serde_json::json!({
                "id":      a.id().0,
                "kind":    a.kind().tag(),
                "x":       x,
                "y":       y,
                "heading": a.heading().as_str(),
                "bumped":  a.bumped(),
                "message": a.message(),
            })
        })
        .collect();
    let summary = serde_json::json!({
        "ticks":   sim.tick().0,
        "escaped": !sim.is_runnable(),
        "history": args.history.display().to_string(),
        "agents":  agents,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
