//! Unit tests for mz-behavior.

use mz_core::{Direction, Percept};

use crate::Surroundings;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn walls(dirs: &[Direction]) -> Vec<Percept> {
    dirs.iter().copied().map(Percept::adjacent_wall).collect()
}

/// All 16 blocked patterns, as `(surroundings, percepts)`.
fn all_patterns() -> Vec<(Surroundings, Vec<Percept>)> {
    (0u8..16)
        .map(|bits| {
            let dirs: Vec<Direction> = Direction::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, d)| d)
                .collect();
            let ps = walls(&dirs);
            (Surroundings::from_percepts(&ps), ps)
        })
        .collect()
}

// ── Senses ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod senses {
    use mz_core::{Direction, Intention, ObjectCategory, Percept};

    use super::walls;
    use crate::{Surroundings, is_blocked, is_open, turn_toward};

    #[test]
    fn blocked_only_where_perceived() {
        let ps = walls(&[Direction::Left]);
        assert!(is_blocked(&ps, Direction::Left));
        assert!(is_open(&ps, Direction::Ahead));
        assert!(is_open(&ps, Direction::Right));
    }

    #[test]
    fn distant_obstacles_do_not_block() {
        let far = Percept { category: ObjectCategory::Obstacle, distance: 2, direction: Direction::Ahead };
        assert!(!is_blocked(&[far], Direction::Ahead));
    }

    #[test]
    fn surroundings_from_percepts() {
        let s = Surroundings::from_percepts(&walls(&[Direction::Ahead, Direction::Behind]));
        assert_eq!(s, Surroundings { ahead: true, left: false, right: false, behind: true });
    }

    #[test]
    fn turn_toward_each_direction() {
        assert_eq!(turn_toward(Direction::Ahead), None);
        assert_eq!(turn_toward(Direction::Left), Some(Intention::TurnLeft));
        assert_eq!(turn_toward(Direction::Right), Some(Intention::TurnRight));
        assert_eq!(turn_toward(Direction::Behind), Some(Intention::TurnBack));
    }
}

// ── Stepper ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepper {
    use mz_core::{Direction, Intention};

    use super::{all_patterns, walls};
    use crate::{BehaviorModel, Stepper, Surroundings, WallStatus};

    /// The transition table written out independently of `Stepper::transition`.
    fn expected(status: WallStatus, s: Surroundings) -> (WallStatus, Intention) {
        match status {
            WallStatus::LookingForWall if s.ahead => (WallStatus::FoundWall, Intention::TurnRight),
            WallStatus::LookingForWall if s.left => (WallStatus::FoundWall, Intention::Step),
            WallStatus::LookingForWall if s.right => (WallStatus::FoundWall, Intention::TurnBack),
            WallStatus::LookingForWall if s.behind => (WallStatus::FoundWall, Intention::TurnLeft),
            WallStatus::LookingForWall => (WallStatus::LookingForWall, Intention::Step),
            WallStatus::LostWall1 => (WallStatus::LostWall2, Intention::Step),
            WallStatus::LostWall2 => (WallStatus::BackOnTrack, Intention::TurnLeft),
            WallStatus::BackOnTrack => (WallStatus::FoundWall, Intention::Step),
            WallStatus::FoundWall if s.left && !s.ahead => (WallStatus::FoundWall, Intention::Step),
            WallStatus::FoundWall if s.left => (WallStatus::FoundWall, Intention::TurnRight),
            WallStatus::FoundWall => (WallStatus::LostWall1, Intention::TurnLeft),
        }
    }

    #[test]
    fn every_state_and_pattern_follows_the_table() {
        let states = [
            WallStatus::LookingForWall,
            WallStatus::FoundWall,
            WallStatus::LostWall1,
            WallStatus::LostWall2,
            WallStatus::BackOnTrack,
        ];
        for status in states {
            for (s, ps) in all_patterns() {
                let mut b = Stepper { status };
                let d = b.deliberate(&ps);
                let (next, action) = expected(status, s);
                assert_eq!(d.intentions, vec![action], "{status} {s:?}");
                assert_eq!(b.status, next, "{status} {s:?}");
            }
        }
    }

    #[test]
    fn starts_looking_for_wall() {
        assert_eq!(Stepper::new().status, WallStatus::LookingForWall);
    }

    #[test]
    fn only_ahead_blocked_turns_right() {
        let mut b = Stepper::new();
        let d = b.deliberate(&walls(&[Direction::Ahead]));
        assert_eq!(d.intentions, vec![Intention::TurnRight]);
        assert_eq!(b.status, WallStatus::FoundWall);
    }

    #[test]
    fn message_names_new_state() {
        let mut b = Stepper::new();
        let d = b.deliberate(&[]);
        assert_eq!(d.message.as_deref(), Some("Status: lookingForWall"));
        let d = b.deliberate(&walls(&[Direction::Left]));
        assert_eq!(d.message.as_deref(), Some("Status: foundWall"));
    }

    #[test]
    fn lost_wall_recovery_cycle() {
        let mut b = Stepper { status: WallStatus::FoundWall };
        let actions: Vec<Intention> = (0..4).map(|_| b.deliberate(&[]).intentions[0]).collect();
        assert_eq!(
            actions,
            vec![Intention::TurnLeft, Intention::Step, Intention::TurnLeft, Intention::Step]
        );
        assert_eq!(b.status, WallStatus::FoundWall);
    }
}

// ── Follower ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod follower {
    use mz_core::{Direction, Intention::*};

    use super::{all_patterns, walls};
    use crate::{BehaviorModel, Follower};

    #[test]
    fn searching_priorities() {
        let cases = [
            (vec![Direction::Ahead, Direction::Left], vec![TurnRight, Step]),
            (vec![Direction::Left, Direction::Right], vec![Step]),
            (vec![Direction::Right, Direction::Behind], vec![TurnBack, Step]),
            (vec![Direction::Behind], vec![TurnLeft, Step]),
        ];
        for (dirs, plan) in cases {
            let mut b = Follower::new();
            assert_eq!(b.deliberate(&walls(&dirs)).intentions, plan, "{dirs:?}");
            assert!(b.found_wall);
        }
    }

    #[test]
    fn open_space_keeps_searching() {
        let mut b = Follower::new();
        assert_eq!(b.deliberate(&[]).intentions, vec![Step]);
        assert!(!b.found_wall);
    }

    #[test]
    fn following_rules() {
        for (s, ps) in all_patterns() {
            let mut b = Follower { found_wall: true };
            let plan = b.deliberate(&ps).intentions;
            let expected = match (s.left, s.ahead) {
                (true, false) => vec![Step],
                (true, true) => vec![TurnRight, Step],
                (false, _) => vec![TurnLeft, Step],
            };
            assert_eq!(plan, expected, "{s:?}");
            assert!(b.found_wall);
        }
    }

    #[test]
    fn sets_no_message() {
        let mut b = Follower::new();
        assert_eq!(b.deliberate(&walls(&[Direction::Ahead])).message, None);
    }
}

// ── TrialAndError ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod trial {
    use mz_core::{Heading, Intention};

    use super::all_patterns;
    use crate::{BehaviorModel, TrialAndError};

    #[test]
    fn maps_sized_to_maze() {
        let b = TrialAndError::new(4);
        assert_eq!(b.visited.len(), 16);
        assert_eq!(b.explored.len(), 16);
        assert!(b.went.iter().all(|&h| h == Heading::North));
        assert_eq!(b.cell(3, 1), Some(13));
        assert_eq!(b.cell(4, 0), None);
        assert_eq!(b.cell(-1, 0), None);
    }

    #[test]
    fn always_steps_and_leaves_maps_alone() {
        let mut b = TrialAndError::new(3);
        let before = b.clone();
        for (_, ps) in all_patterns() {
            assert_eq!(b.deliberate(&ps).intentions, vec![Intention::Step]);
        }
        assert_eq!(b, before);
    }
}

// ── Behavior dispatch ─────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use std::str::FromStr;

    use mz_core::Intention;

    use crate::{Behavior, BehaviorError, BehaviorKind, BehaviorModel};

    #[test]
    fn kind_round_trips_through_tag() {
        for kind in BehaviorKind::ALL {
            assert_eq!(BehaviorKind::from_str(kind.tag()).unwrap(), kind);
            assert_eq!(Behavior::new(kind, 3).kind(), kind);
        }
        assert!(matches!("walker".parse::<BehaviorKind>(), Err(BehaviorError::UnknownKind(_))));
    }

    #[test]
    fn dispatch_reaches_variant() {
        let mut b = Behavior::new(BehaviorKind::TrialAndError, 2);
        assert_eq!(b.deliberate(&[]).intentions, vec![Intention::Step]);
        let mut b = Behavior::new(BehaviorKind::Stepper, 2);
        assert!(b.deliberate(&[]).message.is_some());
    }
}
