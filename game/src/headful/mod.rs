//! Windowed front end: feeds window input into the simulation once per frame-clock tick.
//!
//! The engine's `InputFrame` buffers events between ticks, so each tick consumes exactly the
//! intents translated from that frame.

pub mod input_adapter;

use std::time::Duration;

use engine::app::{AppConfig, AppContext, GameApp, InputFrame};
use engine::graphics::Renderer2d;
use engine::surface::SurfaceSize;
use engine::view_tree::ViewTree;

use crate::render::render_frame;
use crate::settings::DriftSettings;
use crate::state::{SimConfig, SimState};
use crate::tick;
use crate::view_tree::{DriftUiAction, build_view_tree};

pub const WINDOW_TITLE: &str = "Bouncing Rainbow Drifting Turtle";

pub struct DriftApp {
    config: SimConfig,
    exit: bool,
}

impl DriftApp {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            exit: false,
        }
    }

    fn canvas(&self) -> (u32, u32) {
        (self.config.canvas_width, self.config.canvas_height)
    }
}

pub fn app_config(settings: &DriftSettings) -> AppConfig {
    AppConfig {
        title: WINDOW_TITLE.to_string(),
        canvas_size: SurfaceSize::new(settings.canvas.width, settings.canvas.height),
        vsync: Some(settings.frame.vsync),
        tick_rate_hz: settings.frame.tick_rate_hz,
    }
}

impl GameApp for DriftApp {
    type State = SimState;
    type Action = DriftUiAction;

    fn init_state(&mut self, _ctx: &mut AppContext) -> Self::State {
        SimState::new(&self.config)
    }

    fn build_view(&self, state: &Self::State) -> ViewTree<Self::Action> {
        let (w, h) = self.canvas();
        build_view_tree(state.phase, w, h)
    }

    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        view: &ViewTree<Self::Action>,
        _dt: Duration,
    ) {
        let translated = input_adapter::translate_frame(input, view, self.canvas());
        if translated.exit {
            log::info!("escape pressed, exiting");
            self.exit = true;
        }
        tick::tick(state, translated.intents, &self.config);
    }

    fn render(&mut self, state: &Self::State, view: &ViewTree<Self::Action>, renderer: &mut dyn Renderer2d) {
        render_frame(state, view, renderer);
    }

    fn exit_requested(&self) -> bool {
        self.exit
    }
}
