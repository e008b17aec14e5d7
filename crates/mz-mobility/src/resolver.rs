//! The movement resolver.

use mz_agent::Agent;
use mz_core::Intention;
use mz_maze::GridMaze;
use tracing::{trace, warn};

/// What happened while one agent acted.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ActReport {
    /// The agent's position changed.
    pub moved: bool,
    /// A wall clamped a step.
    pub bumped: bool,
    /// The committed position lies outside the grid.
    pub escaped: bool,
    /// Intentions skipped because their tag had already been applied.
    pub repeated: Vec<Intention>,
}

/// Consume `agent`'s intention list against `maze`.
///
/// The pre-action attributes are kept as the agent's `previous` snapshot.
/// Heading and position are written back as each intention resolves, so a
/// turn followed by a step moves along the new heading.
pub fn act(maze: &GridMaze, agent: &mut Agent) -> ActReport {
    agent.record_previous();
    let intentions = agent.take_intentions();
    apply(maze, agent, intentions)
}

/// Resolve an already-consumed intention list.  Each tag applies at most once.
pub(crate) fn apply(maze: &GridMaze, agent: &mut Agent, intentions: Vec<Intention>) -> ActReport {
    let mut report = ActReport::default();
    let mut applied = 0u8;

    for intention in intentions {
        if applied & intention.bit() != 0 {
            warn!(agent = %agent.id(), %intention, "intention repeated within one tick; skipped");
            report.repeated.push(intention);
            continue;
        }
        applied |= intention.bit();

        match intention {
            Intention::Step => {
                let (x, y) = agent.position();
                let heading = agent.heading();
                let out = maze.try_move((x, y), (x + heading.dx(), y + heading.dy()));

                agent.set_position(out.x, out.y);
                if out.bumped {
                    agent.set_bumped(true);
                    report.bumped = true;
                }
                report.moved |= (out.x, out.y) != (x, y);
                report.escaped |= out.escaped;
                trace!(agent = %agent.id(), x = out.x, y = out.y, bumped = out.bumped, "step");
            }
            turn => {
                let heading = agent.heading().rotated_left(turn.left_turns());
                agent.set_heading(heading);
            }
        }
    }

    report
}
