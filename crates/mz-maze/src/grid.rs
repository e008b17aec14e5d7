//! The wall grids of an N×N maze.
//!
//! # Data layout
//!
//! Both grids are flat `Vec<bool>`s in column-major order, so a segment is
//! one multiply-add away:
//!
//! ```text
//! beams[x * (cells + 1) + y]   x ∈ 0..cells,    y ∈ 0..=cells
//! poles[x * cells + y]         x ∈ 0..=cells,   y ∈ 0..cells
//! ```
//!
//! All public queries take signed coordinates and are bounds-checked: a
//! lookup outside the grid reads as "no wall" rather than panicking, which
//! lets perception and movement run unchanged for an agent that has stepped
//! off the board.

use mz_core::Heading;
use tracing::warn;

/// Wall geometry for an N×N cell grid.
///
/// Constructed empty; walls are added during configuration through
/// [`add_beam`](Self::add_beam) / [`add_pole`](Self::add_pole) and never
/// removed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMaze {
    cells: usize,
    beams: Vec<bool>,
    poles: Vec<bool>,
}

impl GridMaze {
    /// An open maze of `cells × cells` with no walls at all.
    pub fn new(cells: usize) -> Self {
        Self {
            cells,
            beams: vec![false; cells * (cells + 1)],
            poles: vec![false; (cells + 1) * cells],
        }
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.cells
    }

    /// `true` if `(x, y)` names a cell in `[0, cells)²`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cells && (y as usize) < self.cells
    }

    // ── Configuration ─────────────────────────────────────────────────────

    /// Place the horizontal segment above cell `(x, y)`.
    ///
    /// Returns `false` (and logs a warning) if the coordinates are out of
    /// range; the maze is unchanged in that case.
    pub fn add_beam(&mut self, x: i32, y: i32) -> bool {
        match self.beam_index(x, y) {
            Some(i) => {
                self.beams[i] = true;
                true
            }
            None => {
                warn!(x, y, cells = self.cells, "beam coordinates are out of range; ignored");
                false
            }
        }
    }

    /// Place the vertical segment left of cell `(x, y)`.
    ///
    /// Returns `false` (and logs a warning) if the coordinates are out of
    /// range; the maze is unchanged in that case.
    pub fn add_pole(&mut self, x: i32, y: i32) -> bool {
        match self.pole_index(x, y) {
            Some(i) => {
                self.poles[i] = true;
                true
            }
            None => {
                warn!(x, y, cells = self.cells, "pole coordinates are out of range; ignored");
                false
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn has_beam(&self, x: i32, y: i32) -> bool {
        self.beam_index(x, y).is_some_and(|i| self.beams[i])
    }

    #[inline]
    pub fn has_pole(&self, x: i32, y: i32) -> bool {
        self.pole_index(x, y).is_some_and(|i| self.poles[i])
    }

    /// `true` if one step from `(x, y)` along `heading` leaves the grid.
    pub fn is_escape(&self, x: i32, y: i32, heading: Heading) -> bool {
        !self.contains(x + heading.dx(), y + heading.dy())
    }

    /// Every placed beam as `(x, y)`, x-major then y.
    pub fn beams(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let rows = self.cells + 1;
        self.beams
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| ((i / rows) as i32, (i % rows) as i32))
    }

    /// Every placed pole as `(x, y)`, x-major then y.
    pub fn poles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let rows = self.cells;
        self.poles
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(i, _)| ((i / rows) as i32, (i % rows) as i32))
    }

    // ── Index helpers ─────────────────────────────────────────────────────

    fn beam_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.cells && y <= self.cells).then(|| x * (self.cells + 1) + y)
    }

    fn pole_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x <= self.cells && y < self.cells).then(|| x * self.cells + y)
    }
}
