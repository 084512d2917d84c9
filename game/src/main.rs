use std::error::Error;

use drift::headful::{DriftApp, app_config};
use drift::settings::SettingsStore;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SettingsStore::from_env();
    let settings = store.load();
    log::debug!("settings: {settings:?}");

    let app = DriftApp::new(settings.sim_config());
    engine::app::run_game(app_config(&settings), app)
}
