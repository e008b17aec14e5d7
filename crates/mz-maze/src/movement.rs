//! Wall-clamped movement.
//!
//! A move request names a target cell along one axis.  The maze walks from
//! the current cell toward the target one cell at a time and stops in front
//! of the first wall segment it meets.  Targets outside the grid are not
//! rejected: if no wall stands in the way the mover simply ends up off the
//! board, and the outcome reports the escape.

use crate::GridMaze;

/// Result of [`GridMaze::try_move`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    /// Final horizontal coordinate (possibly clamped, possibly off the grid).
    pub x: i32,
    /// Final vertical coordinate.
    pub y: i32,
    /// A wall stopped the walk short of the requested target.
    pub bumped: bool,
    /// The final position lies outside `[0, cells)²`.
    pub escaped: bool,
}

impl GridMaze {
    /// Move from `from` toward `to`, clamped by walls.
    ///
    /// The x axis is resolved first using the poles of the starting row, then
    /// the y axis using the beams of the starting column.  Each scan keeps
    /// the nearest blocking segment to the start.
    pub fn try_move(&self, from: (i32, i32), to: (i32, i32)) -> MoveOutcome {
        let (x, y) = from;
        let (mut new_x, mut new_y) = to;
        let mut bumped = false;

        if new_x > x {
            if let Some(i) = (x + 1..=new_x).find(|&i| self.has_pole(i, y)) {
                new_x = i - 1;
                bumped = true;
            }
        } else if new_x < x {
            if let Some(i) = (new_x + 1..=x).rev().find(|&i| self.has_pole(i, y)) {
                new_x = i;
                bumped = true;
            }
        }

        if new_y > y {
            if let Some(i) = (y + 1..=new_y).find(|&i| self.has_beam(x, i)) {
                new_y = i - 1;
                bumped = true;
            }
        } else if new_y < y {
            if let Some(i) = (new_y + 1..=y).rev().find(|&i| self.has_beam(x, i)) {
                new_y = i;
                bumped = true;
            }
        }

        MoveOutcome {
            x: new_x,
            y: new_y,
            bumped,
            escaped: !self.contains(new_x, new_y),
        }
    }
}
