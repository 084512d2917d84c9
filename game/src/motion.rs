//! Heading and position updates for the marker.

use glam::DVec2;

use crate::input::InputState;
use crate::state::PlayerState;

pub const DEFAULT_SPEED: f64 = 3.0;
pub const DEFAULT_TURN_SPEED: f64 = 15.0;

const MIN_SEEK_DISTANCE: f64 = 1e-6;

/// Maps any angle in degrees into [0, 360).
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Heading change requested by the held keys. Left turns counter-clockwise, right clockwise;
/// with both groups held the right turn is applied last and wins.
pub fn turn_delta(input: &InputState, turn_speed: f64) -> f64 {
    let mut delta = 0.0;
    if input.left_held() {
        delta = turn_speed;
    }
    if input.right_held() {
        delta = -turn_speed;
    }
    delta
}

/// Heading in degrees that points from `from` to `to`.
pub fn heading_towards(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    normalize_heading(d.y.atan2(d.x).to_degrees())
}

pub fn direction(heading: f64) -> DVec2 {
    let (sin, cos) = heading.to_radians().sin_cos();
    DVec2::new(cos, sin)
}

pub fn forward(pos: DVec2, heading: f64, distance: f64) -> DVec2 {
    pos + direction(heading) * distance
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// No target was set.
    Idle,
    Steering,
    /// The marker was snapped onto the target and the target cleared.
    Arrived,
}

/// Points the marker at the active target, snapping onto it once it is closer than `step`.
pub fn seek_step(player: &mut PlayerState, target: &mut Option<DVec2>, step: f64) -> SeekOutcome {
    let Some(goal) = *target else {
        return SeekOutcome::Idle;
    };

    // A target under the marker has no direction; keep the current heading.
    if player.pos.distance_squared(goal) > MIN_SEEK_DISTANCE * MIN_SEEK_DISTANCE {
        player.heading = heading_towards(player.pos, goal);
    }
    if player.pos.distance(goal) < step {
        player.pos = goal;
        *target = None;
        SeekOutcome::Arrived
    } else {
        SeekOutcome::Steering
    }
}

/// One motion update: key turning, then seeking, then the constant drift step.
pub fn step(player: &mut PlayerState, input: &mut InputState, speed: f64, turn_speed: f64) -> SeekOutcome {
    let delta = turn_delta(input, turn_speed);
    if delta != 0.0 {
        player.heading = normalize_heading(player.heading + delta);
    }

    let outcome = seek_step(player, &mut input.target, speed);
    player.pos = forward(player.pos, player.heading, speed);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DriftKey;

    fn player_at(x: f64, y: f64, heading: f64) -> PlayerState {
        PlayerState {
            pos: DVec2::new(x, y),
            heading,
            ..PlayerState::default()
        }
    }

    fn assert_close(actual: DVec2, expected: DVec2) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_heading(370.0), 10.0);
        assert_eq!(normalize_heading(-15.0), 345.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(0.0), 0.0);
    }

    #[test]
    fn left_keys_turn_counter_clockwise() {
        let mut input = InputState::default();
        input.press(DriftKey::A);
        assert_eq!(turn_delta(&input, 15.0), 15.0);

        input.release(DriftKey::A);
        input.press(DriftKey::Right);
        assert_eq!(turn_delta(&input, 15.0), -15.0);
    }

    #[test]
    fn both_turn_groups_held_right_wins() {
        let mut input = InputState::default();
        input.press(DriftKey::Left);
        input.press(DriftKey::D);
        assert_eq!(turn_delta(&input, 15.0), -15.0);
    }

    #[test]
    fn vertical_keys_do_not_steer() {
        let mut input = InputState::default();
        for key in [DriftKey::W, DriftKey::S, DriftKey::Up, DriftKey::Down] {
            input.press(key);
        }
        assert_eq!(turn_delta(&input, 15.0), 0.0);
    }

    #[test]
    fn heading_towards_covers_all_quadrants() {
        let origin = DVec2::ZERO;
        assert!((heading_towards(origin, DVec2::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((heading_towards(origin, DVec2::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((heading_towards(origin, DVec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((heading_towards(origin, DVec2::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn idle_tick_drifts_one_step_east() {
        let mut player = player_at(0.0, 0.0, 0.0);
        let mut input = InputState::default();

        let outcome = step(&mut player, &mut input, DEFAULT_SPEED, DEFAULT_TURN_SPEED);

        assert_eq!(outcome, SeekOutcome::Idle);
        assert_eq!(player.heading, 0.0);
        assert_close(player.pos, DVec2::new(3.0, 0.0));
    }

    #[test]
    fn held_left_key_turns_before_advancing() {
        let mut player = player_at(0.0, 0.0, 0.0);
        let mut input = InputState::default();
        input.press(DriftKey::A);

        for _ in 0..6 {
            step(&mut player, &mut input, DEFAULT_SPEED, DEFAULT_TURN_SPEED);
        }

        assert!((player.heading - 90.0).abs() < 1e-9);
    }

    #[test]
    fn seek_far_target_steers_without_clearing() {
        let mut player = player_at(0.0, 0.0, 0.0);
        let mut target = Some(DVec2::new(0.0, 100.0));

        assert_eq!(seek_step(&mut player, &mut target, 3.0), SeekOutcome::Steering);
        assert!((player.heading - 90.0).abs() < 1e-9);
        assert_eq!(target, Some(DVec2::new(0.0, 100.0)));
    }

    #[test]
    fn seek_arrival_snaps_and_clears_then_drifts() {
        let mut player = player_at(10.0, 10.0, 0.0);
        let mut input = InputState {
            target: Some(DVec2::new(11.0, 11.0)),
            ..InputState::default()
        };

        let outcome = step(&mut player, &mut input, DEFAULT_SPEED, DEFAULT_TURN_SPEED);

        assert_eq!(outcome, SeekOutcome::Arrived);
        assert_eq!(input.target, None);
        assert!((player.heading - 45.0).abs() < 1e-9);
        let expected = DVec2::new(11.0, 11.0) + direction(45.0) * DEFAULT_SPEED;
        assert_close(player.pos, expected);
    }

    #[test]
    fn target_under_marker_keeps_heading() {
        let mut player = player_at(5.0, 5.0, 30.0);
        let mut target = Some(DVec2::new(5.0, 5.0));

        assert_eq!(seek_step(&mut player, &mut target, 3.0), SeekOutcome::Arrived);
        assert_eq!(player.heading, 30.0);
        assert_eq!(target, None);
    }

    #[test]
    fn seek_overrides_key_turning() {
        let mut player = player_at(0.0, 0.0, 0.0);
        let mut input = InputState {
            target: Some(DVec2::new(-50.0, 0.0)),
            ..InputState::default()
        };
        input.press(DriftKey::A);

        step(&mut player, &mut input, DEFAULT_SPEED, DEFAULT_TURN_SPEED);

        assert!((player.heading - 180.0).abs() < 1e-9);
        assert_close(player.pos, DVec2::new(-3.0, 0.0));
    }
}
