//! Percept generation.
//!
//! An agent senses the four wall segments around its cell.  Which physical
//! segment backs each relative direction depends on the heading:
//!
//! | heading | AHEAD         | LEFT          | RIGHT         | BEHIND        |
//! |---------|---------------|---------------|---------------|---------------|
//! | NORTH   | beam(x, y)    | pole(x, y)    | pole(x+1, y)  | beam(x, y+1)  |
//! | SOUTH   | beam(x, y+1)  | pole(x+1, y)  | pole(x, y)    | beam(x, y)    |
//! | EAST    | pole(x+1, y)  | beam(x, y)    | beam(x, y+1)  | pole(x, y)    |
//! | WEST    | pole(x, y)    | beam(x, y+1)  | beam(x, y)    | pole(x+1, y)  |

use mz_core::{Direction, Heading, Percept};

use crate::GridMaze;

/// Is there a wall on the `heading` side of cell `(x, y)`?
#[inline]
pub fn wall_on_side(maze: &GridMaze, x: i32, y: i32, heading: Heading) -> bool {
    match heading {
        Heading::North => maze.has_beam(x, y),
        Heading::South => maze.has_beam(x, y + 1),
        Heading::West => maze.has_pole(x, y),
        Heading::East => maze.has_pole(x + 1, y),
    }
}

/// Is there a wall in relative direction `d` for an agent at `(x, y)` facing `heading`?
#[inline]
pub fn wall_at(maze: &GridMaze, x: i32, y: i32, heading: Heading, d: Direction) -> bool {
    wall_on_side(maze, x, y, heading.toward(d))
}

/// The percepts of an agent at `(x, y)` facing `heading`.
///
/// One percept per walled direction, in the order AHEAD, LEFT, RIGHT,
/// BEHIND.  An open side produces nothing.
pub fn perceive(maze: &GridMaze, x: i32, y: i32, heading: Heading) -> Vec<Percept> {
    Direction::ALL
        .into_iter()
        .filter(|&d| wall_at(maze, x, y, heading, d))
        .map(Percept::adjacent_wall)
        .collect()
}
