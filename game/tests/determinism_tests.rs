use engine::frame_hash::render_hashes;
use engine::surface::SurfaceSize;
use glam::DVec2;

use drift::input::{DriftKey, Intent};
use drift::logic::{DriftLogic, TickInput};
use drift::render::render_state;
use drift::state::{SimConfig, SimState};

fn script() -> Vec<TickInput> {
    let mut inputs = vec![TickInput::from_intents([Intent::PlayPressed])];
    inputs.extend(std::iter::repeat_with(TickInput::idle).take(10));
    inputs.push(TickInput::from_intents([Intent::KeyDown(DriftKey::A)]));
    inputs.extend(std::iter::repeat_with(TickInput::idle).take(5));
    inputs.push(TickInput::from_intents([
        Intent::KeyUp(DriftKey::A),
        Intent::SeekTo(DVec2::new(-120.0, 80.0)),
    ]));
    inputs.extend(std::iter::repeat_with(TickInput::idle).take(20));
    inputs.push(TickInput::from_intents([Intent::CancelSeek]));
    inputs.extend(std::iter::repeat_with(TickInput::idle).take(5));
    inputs
}

#[test]
fn identical_scripts_produce_identical_frames() {
    let size = SurfaceSize::new(600, 600);
    let a = render_hashes(DriftLogic::default(), script(), size, render_state);
    let b = render_hashes(DriftLogic::default(), script(), size, render_state);

    assert_eq!(a.len(), script().len() + 1);
    assert_eq!(a, b);
}

#[test]
fn playing_frames_change_every_tick() {
    let size = SurfaceSize::new(600, 600);
    let hashes = render_hashes(DriftLogic::default(), script(), size, render_state);

    // The first step reveals the marker and every later step moves it and shifts the colors.
    for pair in hashes.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn trail_setting_changes_rendered_frames() {
    let size = SurfaceSize::new(600, 600);
    let trail = SimConfig {
        trail_enabled: true,
        ..SimConfig::default()
    };
    let plain = render_hashes(DriftLogic::default(), script(), size, render_state);
    let with_trail = render_hashes(DriftLogic::new(trail), script(), size, render_state);

    // Identical until the marker has moved far enough to leave its own outline behind.
    assert_eq!(plain[0], with_trail[0]);
    assert_ne!(plain.last(), with_trail.last());
}

#[test]
fn sim_state_json_round_trip() {
    let mut state = SimState::default();
    let logic = DriftLogic::default();
    for input in script() {
        state = engine::GameLogic::step(&logic, &state, input);
    }
    state.input.target = Some(DVec2::new(12.5, -7.25));
    state.input.press(DriftKey::Up);

    let json = serde_json::to_string(&state).expect("serialize sim state");
    let restored: SimState = serde_json::from_str(&json).expect("deserialize sim state");

    assert_eq!(restored, state);
}
