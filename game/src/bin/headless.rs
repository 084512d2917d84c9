use std::error::Error;

use engine::HeadlessRunner;
use engine::frame_hash::render_and_hash;
use engine::surface::{RgbaBufferSurface, SurfaceSize};
use glam::DVec2;

use drift::input::Intent;
use drift::logic::{DriftLogic, TickInput};
use drift::render::render_state;
use drift::settings::SettingsStore;

const TICKS_ENV: &str = "DRIFT_HEADLESS_TICKS";
const SEEK_ENV: &str = "DRIFT_HEADLESS_SEEK";
const DEFAULT_TICKS: usize = 600;

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| v.parse::<usize>().ok())
}

/// Parses `x,y` into a world point.
fn parse_point(raw: &str) -> Option<DVec2> {
    let (x, y) = raw.split_once(',')?;
    Some(DVec2::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn env_point(name: &str) -> Option<DVec2> {
    parse_point(&std::env::var(name).ok()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = SettingsStore::from_env().load();
    let config = settings.sim_config();
    let ticks = env_usize(TICKS_ENV).unwrap_or(DEFAULT_TICKS);

    let mut runner = HeadlessRunner::new(DriftLogic::new(config));
    let mut opening = vec![Intent::PlayPressed];
    if let Some(target) = env_point(SEEK_ENV) {
        opening.push(Intent::SeekTo(target));
    }
    if ticks > 0 {
        runner.step(TickInput::from_intents(opening));
        runner.run(std::iter::repeat_with(TickInput::idle).take(ticks - 1));
    }
    log::info!("ran {} tick(s)", runner.frame());

    let size = SurfaceSize::new(config.canvas_width, config.canvas_height);
    let mut surface = RgbaBufferSurface::new(size);
    let hash = render_and_hash(&mut surface, runner.state(), &mut render_state);

    println!("{}", serde_json::to_string_pretty(runner.state())?);
    println!("frame_sha256 {hash}");
    Ok(())
}
