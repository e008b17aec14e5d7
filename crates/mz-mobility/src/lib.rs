//! `mz-mobility`: resolves an agent's queued intentions against the maze.
//!
//! # Crate layout
//!
//! | Module         | Contents                                  |
//! |----------------|-------------------------------------------|
//! | [`resolver`]   | `act`, `ActReport`                        |
//!
//! # Resolution rules
//!
//! - Each intention tag applies at most once per tick.  Later repeats are
//!   skipped and reported.
//! - Turns compose from left rotations: left = 1, back = 2, right = 3.
//! - A step asks [`GridMaze::try_move`] for one cell along the heading.  The
//!   resulting position is committed even when it lies off the grid; the
//!   report's `escaped` flag tells the simulation to halt.
//!
//! [`GridMaze::try_move`]: mz_maze::GridMaze::try_move

pub mod resolver;


pub use resolver::{ActReport, act};
