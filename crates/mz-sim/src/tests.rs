//! Unit tests for mz-sim.

use mz_agent::{Agent, AgentBuilder, AgentStore};
use mz_behavior::BehaviorKind;
use mz_config::WorldConfig;
use mz_core::{AgentId, Heading, Tick};
use mz_maze::GridMaze;

use crate::{Sim, SimBuilder, SimObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn world(cells: usize) -> WorldConfig {
    WorldConfig { cells, ..WorldConfig::default() }
}

/// 3×3 maze with a single pole at (1, 0): cell (0,0) is walled to the east.
fn pole_maze() -> GridMaze {
    let mut maze = GridMaze::new(3);
    maze.add_pole(1, 0);
    maze
}

fn store(agents: impl IntoIterator<Item = Agent>) -> AgentStore {
    let mut s = AgentStore::new();
    for a in agents {
        s.push(a).unwrap();
    }
    s
}

fn agent(id: u32, kind: BehaviorKind, x: i32, y: i32, heading: Heading) -> Agent {
    AgentBuilder::new(AgentId(id), kind, 3).at(x, y).heading(heading).build()
}

fn sim(maze: GridMaze, agents: AgentStore) -> Sim {
    SimBuilder::new(world(maze.dimension()), maze, agents).build().unwrap()
}

/// The stepper of the 3×3 pole scenario, alone in the maze.
fn pole_stepper_sim() -> Sim {
    sim(pole_maze(), store([agent(0, BehaviorKind::Stepper, 0, 0, Heading::East)]))
}

/// Records every observer event as a short string.
#[derive(Default)]
struct Recorder {
    events:    Vec<String>,
    ticks:     Vec<Tick>,
    snapshots: Vec<(Tick, Vec<AgentId>)>,
    removed:   Vec<(Tick, AgentId)>,
}

impl SimObserver for Recorder {
    fn on_sim_start(&mut self, _tick: Tick, _world: &WorldConfig, _maze: &GridMaze, agents: &AgentStore) {
        self.events.push(format!("start {}", agents.len()));
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.ticks.push(tick);
        self.events.push(format!("tick {}", tick.0));
    }

    fn on_render(&mut self, _tick: Tick, _maze: &GridMaze, _agents: &AgentStore) {
        self.events.push("render".into());
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshots.push((tick, agents.ids().collect()));
        self.events.push("snapshot".into());
    }

    fn on_agent_removed(&mut self, tick: Tick, agent: AgentId) {
        self.removed.push((tick, agent));
        self.events.push(format!("removed {}", agent.0));
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.events.push(format!("end {}", report.tick.0));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.events.push(format!("finish {}", final_tick.0));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use mz_behavior::{Behavior, WallStatus};
    use mz_core::{AgentId, Heading};

    use super::pole_stepper_sim;
    use crate::NoopObserver;

    fn stepper_status(sim: &crate::Sim) -> WallStatus {
        match sim.agent(AgentId(0)).unwrap().behavior() {
            Behavior::Stepper(s) => s.status,
            other => panic!("expected a stepper, got {other:?}"),
        }
    }

    #[test]
    fn tick_one_turns_right_in_place() {
        let mut sim = pole_stepper_sim();
        sim.step(&mut NoopObserver);

        let a = sim.agent(AgentId(0)).unwrap();
        assert_eq!(a.heading(), Heading::South);
        assert_eq!(a.position(), (0, 0));
        assert!(!a.bumped());
        assert_eq!(stepper_status(&sim), WallStatus::FoundWall);
        assert_eq!(a.message(), Some("Status: foundWall"));
    }

    #[test]
    fn tick_two_steps_south_along_wall() {
        let mut sim = pole_stepper_sim();
        sim.run_ticks(2, &mut NoopObserver);

        let a = sim.agent(AgentId(0)).unwrap();
        assert_eq!(a.position(), (0, 1));
        assert_eq!(a.heading(), Heading::South);
        assert_eq!(stepper_status(&sim), WallStatus::FoundWall);
        assert!(sim.is_runnable());
    }

    #[test]
    fn stepper_recovers_after_losing_wall() {
        // Tick 3 finds no wall on the left at (0,1): turn left toward east.
        let mut sim = pole_stepper_sim();
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(stepper_status(&sim), WallStatus::LostWall1);
        assert_eq!(sim.agent(AgentId(0)).unwrap().heading(), Heading::East);

        // Tick 4 steps around the corner.
        sim.step(&mut NoopObserver);
        assert_eq!(sim.agent(AgentId(0)).unwrap().position(), (1, 1));
        assert_eq!(stepper_status(&sim), WallStatus::LostWall2);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_loop {
    use mz_behavior::BehaviorKind;
    use mz_core::{AgentId, Heading, Tick};
    use mz_maze::GridMaze;

    use super::{Recorder, agent, pole_maze, pole_stepper_sim, sim, store};
    use crate::NoopObserver;

    #[test]
    fn ticks_increase_by_one() {
        let mut s = pole_stepper_sim();
        let mut rec = Recorder::default();
        s.run_ticks(6, &mut rec);
        let expected: Vec<Tick> = (1..=6).map(Tick).collect();
        assert_eq!(rec.ticks, expected);
        assert_eq!(s.tick(), Tick(6));
    }

    #[test]
    fn event_order_within_a_tick() {
        let mut s = pole_stepper_sim();
        s.kill(AgentId(0)).unwrap();
        let mut rec = Recorder::default();
        s.step(&mut rec);
        assert_eq!(rec.events, vec!["tick 1", "render", "snapshot", "removed 0", "end 1"]);
    }

    #[test]
    fn tuple_and_option_observers_forward_events() {
        let mut s = pole_stepper_sim();
        let mut pair = (Recorder::default(), (Some(Recorder::default()), None::<Recorder>));
        s.run_ticks(2, &mut pair);
        let (first, (second, _)) = pair;
        assert_eq!(first.events, second.unwrap().events);
        assert_eq!(first.ticks, vec![Tick(1), Tick(2)]);
    }

    #[test]
    fn bumped_reflects_only_latest_tick() {
        let a = mz_agent::AgentBuilder::new(AgentId(0), BehaviorKind::Stepper, 3)
            .at(1, 1)
            .heading(Heading::North)
            .bumped(true)
            .build();
        let mut s = sim(GridMaze::new(3), store([a]));
        s.step(&mut NoopObserver);
        assert!(!s.agent(AgentId(0)).unwrap().bumped());
    }

    #[test]
    fn clamped_step_reports_bump() {
        let mut s = sim(pole_maze(), store([agent(0, BehaviorKind::TrialAndError, 0, 0, Heading::East)]));
        let report = s.step(&mut NoopObserver);
        assert_eq!(report.bumped, vec![AgentId(0)]);
        let a = s.agent(AgentId(0)).unwrap();
        assert!(a.bumped());
        assert_eq!(a.position(), (0, 0));
        assert_eq!(s.status_line(), "1 Agent 0: OUCH!");
    }

    #[test]
    fn agents_decide_independently() {
        let alone = {
            let mut s = sim(pole_maze(), store([agent(0, BehaviorKind::Follower, 0, 2, Heading::North)]));
            s.run_ticks(5, &mut NoopObserver);
            s.agent(AgentId(0)).unwrap().status().clone()
        };
        let crowded = {
            let mut s = sim(
                pole_maze(),
                store([
                    agent(0, BehaviorKind::Follower, 0, 2, Heading::North),
                    agent(1, BehaviorKind::Stepper, 0, 2, Heading::North),
                    agent(2, BehaviorKind::Stepper, 1, 1, Heading::West),
                ]),
            );
            s.run_ticks(5, &mut NoopObserver);
            s.agent(AgentId(0)).unwrap().status().clone()
        };
        assert_eq!(alone, crowded);
    }

    #[test]
    fn status_line_lists_messages() {
        let mut s = pole_stepper_sim();
        assert_eq!(s.status_line(), "0");
        s.step(&mut NoopObserver);
        assert_eq!(s.status_line(), "1 Agent 0: Status: foundWall");
    }
}

// ── Escape ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod escape {
    use mz_behavior::BehaviorKind;
    use mz_core::{AgentId, Heading, Tick};
    use mz_maze::GridMaze;

    use super::{Recorder, agent, sim, store, world};
    use crate::{NoopObserver, SimBuilder, SimError};

    #[test]
    fn escape_clears_runnable_and_commits_position() {
        let mut s = sim(GridMaze::new(3), store([agent(0, BehaviorKind::TrialAndError, 2, 0, Heading::East)]));
        let report = s.step(&mut NoopObserver);
        assert_eq!(report.escaped, vec![AgentId(0)]);
        assert!(!s.is_runnable());
        assert_eq!(s.agent(AgentId(0)).unwrap().position(), (3, 0));
    }

    #[test]
    fn one_escape_halts_every_agent() {
        let agents = store([
            agent(0, BehaviorKind::Stepper, 1, 1, Heading::North),
            agent(1, BehaviorKind::TrialAndError, 0, 0, Heading::North),
        ]);
        let mut s = SimBuilder::new(world(3), GridMaze::new(3), agents).max_ticks(50).build().unwrap();
        let mut rec = Recorder::default();
        let last = s.run(&mut rec).unwrap();
        assert_eq!(last, Tick(1));
        assert_eq!(rec.events.first().map(String::as_str), Some("start 2"));
        assert_eq!(rec.events.last().map(String::as_str), Some("finish 1"));
    }

    #[test]
    fn boundary_wall_keeps_run_going() {
        let mut maze = GridMaze::new(3);
        maze.add_pole(3, 0);
        let mut s = sim(maze, store([agent(0, BehaviorKind::TrialAndError, 2, 0, Heading::East)]));
        s.run_ticks(3, &mut NoopObserver);
        assert!(s.is_runnable());
        assert_eq!(s.agent(AgentId(0)).unwrap().position(), (2, 0));
    }

    #[test]
    fn run_stops_at_tick_limit() {
        let mut maze = GridMaze::new(3);
        maze.add_pole(3, 0);
        let agents = store([agent(0, BehaviorKind::TrialAndError, 2, 0, Heading::East)]);
        let mut s = SimBuilder::new(world(3), maze, agents).max_ticks(4).build().unwrap();
        assert_eq!(s.run(&mut NoopObserver).unwrap(), Tick(4));
    }

    #[test]
    fn run_without_limit_is_rejected() {
        let mut s = sim(GridMaze::new(3), store([]));
        assert!(matches!(s.run(&mut NoopObserver), Err(SimError::NoTickLimit)));
    }

    #[test]
    fn paused_world_runs_no_ticks() {
        let cfg = mz_config::WorldConfig { runnable: false, max_ticks: Some(5), ..world(3) };
        let mut s = SimBuilder::new(cfg, GridMaze::new(3), store([])).build().unwrap();
        assert_eq!(s.run(&mut NoopObserver).unwrap(), Tick::ZERO);
        s.resume();
        assert_eq!(s.run(&mut NoopObserver).unwrap(), Tick(5));
    }
}

// ── Deaths ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod deaths {
    use mz_behavior::BehaviorKind;
    use mz_core::{AgentId, Heading, MzError, Tick};
    use mz_maze::GridMaze;

    use super::{Recorder, agent, sim, store};
    use crate::SimError;

    fn three_walkers() -> crate::Sim {
        sim(
            GridMaze::new(3),
            store([
                agent(0, BehaviorKind::TrialAndError, 0, 1, Heading::South),
                agent(1, BehaviorKind::TrialAndError, 1, 1, Heading::South),
                agent(2, BehaviorKind::TrialAndError, 2, 1, Heading::South),
            ]),
        )
    }

    #[test]
    fn removals_follow_registration_order() {
        let mut s = three_walkers();
        s.kill(AgentId(2)).unwrap();
        s.kill(AgentId(0)).unwrap();
        let mut rec = Recorder::default();
        let report = s.step(&mut rec);
        assert_eq!(report.removed, vec![AgentId(0), AgentId(2)]);
        assert_eq!(rec.removed, vec![(Tick(1), AgentId(0)), (Tick(1), AgentId(2))]);
        assert_eq!(s.agents().len(), 1);
    }

    #[test]
    fn dead_agents_appear_in_last_snapshot_but_do_not_move() {
        let mut s = three_walkers();
        s.kill(AgentId(1)).unwrap();
        let mut rec = Recorder::default();
        s.step(&mut rec);
        assert_eq!(rec.snapshots, vec![(Tick(1), vec![AgentId(0), AgentId(1), AgentId(2)])]);
        assert!(s.agent(AgentId(1)).is_none());
        assert_eq!(s.agent(AgentId(0)).unwrap().position(), (0, 2));

        s.step(&mut rec);
        assert_eq!(rec.snapshots[1], (Tick(2), vec![AgentId(0), AgentId(2)]));
    }

    #[test]
    fn killing_unknown_agent_fails() {
        let mut s = three_walkers();
        assert!(matches!(
            s.kill(AgentId(7)),
            Err(SimError::Core(MzError::AgentNotFound(AgentId(7))))
        ));
    }

    #[test]
    fn no_deaths_no_events() {
        let mut s = three_walkers();
        let mut rec = Recorder::default();
        s.run_ticks(1, &mut rec);
        assert!(rec.removed.is_empty());
        assert_eq!(s.agents().len(), 3);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use mz_behavior::BehaviorKind;
    use mz_config::{AgentSpec, MazeConfig, WallSpec};
    use mz_core::{AgentId, Heading, Tick};
    use mz_maze::GridMaze;

    use super::{agent, store, world};
    use crate::{NoopObserver, SimBuilder, SimError};

    #[test]
    fn dimension_mismatch_rejected() {
        let err = SimBuilder::new(world(4), GridMaze::new(3), store([])).build().unwrap_err();
        assert!(matches!(err, SimError::DimensionMismatch { maze: 3, world: 4 }));
    }

    #[test]
    fn agent_outside_grid_rejected() {
        let agents = store([agent(5, BehaviorKind::Follower, 3, 0, Heading::North)]);
        let err = SimBuilder::new(world(3), GridMaze::new(3), agents).build().unwrap_err();
        assert!(matches!(err, SimError::AgentOutOfBounds { id: 5, x: 3, y: 0 }));
    }

    #[test]
    fn from_config_builds_scenario_world() {
        let mut config = MazeConfig::default();
        config.world.cells = 3;
        config.world.max_ticks = Some(2);
        config.walls.push(WallSpec::pole(1, 0));
        config.agents.push(AgentSpec::of(BehaviorKind::Stepper));

        let mut s = SimBuilder::from_config(&config).unwrap().build().unwrap();
        assert!(s.maze().has_pole(1, 0));
        assert_eq!(s.run(&mut NoopObserver).unwrap(), Tick(2));
        assert_eq!(s.agent(AgentId(0)).unwrap().position(), (0, 1));
    }

    #[test]
    fn from_config_propagates_config_errors() {
        let mut config = MazeConfig::default();
        config.world.cells = 0;
        assert!(matches!(SimBuilder::from_config(&config), Err(SimError::Config(_))));
    }
}
