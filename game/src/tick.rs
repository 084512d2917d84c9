//! The per-tick update: intents first, then motion, bounce, color and trail.

use crate::bounds::{self, BounceReport};
use crate::input::Intent;
use crate::motion::{self, SeekOutcome};
use crate::phase::{GamePhaseEvent, PhaseEffect};
use crate::state::{SimConfig, SimState};

/// What happened during one tick; used for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub started: bool,
    pub seek: Option<SeekOutcome>,
    pub bounce: BounceReport,
}

/// Applies one intent. Returns the phase effect, if the intent triggered one.
pub fn apply_intent(state: &mut SimState, intent: Intent) -> PhaseEffect {
    match intent {
        Intent::KeyDown(key) => state.input.press(key),
        Intent::KeyUp(key) => state.input.release(key),
        Intent::PlayPressed => {
            let (phase, effect) = state.phase.handle(GamePhaseEvent::PlayPressed);
            state.phase = phase;
            return effect;
        }
        Intent::SeekTo(point) => {
            if state.is_playing() {
                log::debug!("seek to ({:.1}, {:.1})", point.x, point.y);
                state.input.target = Some(point);
            }
        }
        Intent::CancelSeek => {
            if state.is_playing() {
                state.input.target = None;
                state.trail.clear();
            }
        }
    }
    PhaseEffect::None
}

/// Runs one tick over `intents`, which are applied in order before anything moves.
pub fn tick<I>(state: &mut SimState, intents: I, config: &SimConfig) -> TickReport
where
    I: IntoIterator<Item = Intent>,
{
    let mut report = TickReport::default();

    for intent in intents {
        if apply_intent(state, intent) == PhaseEffect::RevealPlayer {
            log::info!("play pressed, revealing player");
            report.started = true;
        }
    }

    state.ticks += 1;
    if !state.is_playing() {
        return report;
    }

    let outcome = motion::step(
        &mut state.player,
        &mut state.input,
        config.speed,
        config.turn_speed,
    );
    if outcome == SeekOutcome::Arrived {
        log::debug!(
            "seek target reached at ({:.1}, {:.1})",
            state.player.pos.x,
            state.player.pos.y
        );
    }
    if outcome != SeekOutcome::Idle {
        report.seek = Some(outcome);
    }

    report.bounce = bounds::bounce(&mut state.player, config.bounds, config.speed);
    if report.bounce.any() {
        log::trace!(
            "bounce x={} y={} heading={:.1}",
            report.bounce.x,
            report.bounce.y,
            state.player.heading
        );
    }

    state.color.advance(config.hue_step);
    state.player.color = state.color.marker_color();
    state.background = state.color.background_color();

    state.trail.push(state.player.pos);

    report
}
