//! `mz-maze`: wall geometry, perception, and wall-clamped movement.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`grid`]       | `GridMaze`: beam and pole segment grids                   |
//! | [`perception`] | `perceive`: heading-relative wall percepts                |
//! | [`movement`]   | `GridMaze::try_move`, `MoveOutcome`                        |
//!
//! # Wall coordinates
//!
//! For a maze of `cells × cells`:
//!
//! ```text
//!   beam (x, y) : horizontal segment on top of cell (x, y);   x ∈ 0..cells, y ∈ 0..=cells
//!   pole (x, y) : vertical segment on the left of cell (x, y); x ∈ 0..=cells, y ∈ 0..cells
//!
//!        beam(0,0)  beam(1,0)
//!       +---------+---------+
//!   pole|  (0,0)  |  (1,0)  |pole(2,0)
//!  (0,0)+---------+---------+
//!        beam(0,1)  beam(1,1)
//! ```
//!
//! Cell `(x, y)` is therefore bounded by `beam(x, y)` above, `beam(x, y+1)`
//! below, `pole(x, y)` to the west and `pole(x+1, y)` to the east.

pub mod grid;
pub mod movement;
pub mod perception;


pub use grid::GridMaze;
pub use movement::MoveOutcome;
pub use perception::perceive;
