use engine::HeadlessRunner;
use engine::app::{Click, InputEvent, InputFrame, PointerButton};
use glam::DVec2;

use drift::headful::input_adapter::translate_frame;
use drift::input::{DriftKey, Intent};
use drift::logic::{DriftLogic, TickInput};
use drift::phase::GamePhase;
use drift::state::{SimConfig, SimState};
use drift::tick::tick;
use drift::view_tree::{PLAY_BUTTON_ID, build_view_tree};

fn playing_at(x: f64, y: f64, heading: f64) -> SimState {
    let mut state = SimState::default();
    state.phase = GamePhase::Playing;
    state.player.pos = DVec2::new(x, y);
    state.player.heading = heading;
    state
}

fn idle() -> Vec<Intent> {
    Vec::new()
}

fn left_click(pos: (u32, u32)) -> InputFrame {
    InputFrame {
        mouse_pos: Some(pos),
        events: vec![InputEvent::Click(Click {
            button: PointerButton::Left,
            pos,
        })],
    }
}

#[test]
fn idle_tick_from_origin_drifts_east() {
    let config = SimConfig::default();
    let mut state = playing_at(0.0, 0.0, 0.0);

    tick(&mut state, idle(), &config);

    assert_eq!(state.player.heading, 0.0);
    assert!(state.player.pos.distance(DVec2::new(3.0, 0.0)) < 1e-9);
}

#[test]
fn right_wall_bounce_reverses_and_nudges_back() {
    let config = SimConfig::default();
    let mut state = playing_at(289.0, 0.0, 0.0);

    let report = tick(&mut state, idle(), &config);

    assert!(report.bounce.x);
    assert!(!report.bounce.y);
    assert_eq!(state.player.heading, 180.0);
    assert!(state.player.pos.distance(DVec2::new(286.0, 0.0)) < 1e-9);
}

#[test]
fn seek_arrives_once_then_keeps_drifting() {
    let config = SimConfig::default();
    let mut state = playing_at(0.0, 0.0, 0.0);
    let target = DVec2::new(0.0, 31.0);

    tick(&mut state, [Intent::SeekTo(target)], &config);
    let mut arrivals = 0;
    for _ in 0..20 {
        let report = tick(&mut state, idle(), &config);
        if report.seek == Some(drift::motion::SeekOutcome::Arrived) {
            arrivals += 1;
            assert_eq!(state.input.target, None);
            assert!((state.player.heading - 90.0).abs() < 1e-9);
            assert!(state.player.pos.distance(target + DVec2::new(0.0, 3.0)) < 1e-9);
        }
    }

    assert_eq!(arrivals, 1);
    assert_eq!(state.input.target, None);
    assert!(state.player.pos.y > 31.0);
}

#[test]
fn right_click_hands_steering_back_to_keys() {
    let config = SimConfig::default();
    let mut state = playing_at(0.0, 0.0, 0.0);

    tick(
        &mut state,
        [
            Intent::SeekTo(DVec2::new(0.0, 200.0)),
            Intent::KeyDown(DriftKey::Left),
        ],
        &config,
    );
    assert!((state.player.heading - 90.0).abs() < 1e-9);

    tick(&mut state, [Intent::CancelSeek], &config);
    assert_eq!(state.input.target, None);
    assert!((state.player.heading - 105.0).abs() < 1e-9);
}

#[test]
fn play_click_starts_game_and_later_button_area_clicks_seek() {
    let config = SimConfig::default();
    let mut state = SimState::new(&config);
    let button_center = (300, 350);

    let view = build_view_tree(state.phase, 600, 600);
    assert!(view.buttons().any(|b| b.id == PLAY_BUTTON_ID));
    let translated = translate_frame(&left_click(button_center), &view, (600, 600));
    let report = tick(&mut state, translated.intents, &config);

    assert!(report.started);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.input.target, None);
    let view = build_view_tree(state.phase, 600, 600);
    assert_eq!(view.buttons().count(), 0);

    let translated = translate_frame(&left_click(button_center), &view, (600, 600));
    let report = tick(&mut state, translated.intents, &config);

    assert!(!report.started);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.input.target, Some(DVec2::new(0.5, -50.5)));
}

#[test]
fn clicks_while_loading_outside_button_do_nothing() {
    let config = SimConfig::default();
    let mut state = SimState::new(&config);
    let view = build_view_tree(state.phase, 600, 600);

    let translated = translate_frame(&left_click((20, 20)), &view, (600, 600));
    tick(&mut state, translated.intents, &config);

    assert_eq!(state.phase, GamePhase::Loading);
    assert_eq!(state.input.target, None);
    assert_eq!(state.player.pos, DVec2::ZERO);
}

#[test]
fn color_phase_tracks_tick_count() {
    let mut runner = HeadlessRunner::new(DriftLogic::default());
    runner.step(TickInput::from_intents([Intent::PlayPressed]));
    runner.run(std::iter::repeat_with(TickInput::idle).take(249));

    let expected = (0.005 * 250.0f64) % 1.0;
    let phase = runner.state().color.phase();
    let d = (phase - expected).rem_euclid(1.0);
    assert!(d.min(1.0 - d) < 1e-9, "phase {phase} vs {expected}");
}

#[test]
fn unsteered_marker_never_lingers_outside_bounds() {
    let config = SimConfig::default();
    let limit = config.bounds.half_width;

    for heading in (0..360).step_by(7) {
        let mut state = playing_at(0.0, 0.0, heading as f64);
        let mut outside_streak = 0;
        for _ in 0..2000 {
            tick(&mut state, idle(), &config);
            let pos = state.player.pos;
            assert!(pos.x.abs() < limit + 2.0 * config.speed + 1e-9);
            assert!(pos.y.abs() < limit + 2.0 * config.speed + 1e-9);
            if pos.x.abs() > limit || pos.y.abs() > limit {
                outside_streak += 1;
                assert!(outside_streak <= 2, "heading {heading}: stuck outside at {pos:?}");
            } else {
                outside_streak = 0;
            }
        }
    }
}
