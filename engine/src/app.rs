use std::error::Error;
use std::time::{Duration, Instant};

use pixels::PixelsBuilder;
use pixels::SurfaceTexture;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::clock::FrameClock;
use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::{Surface, SurfaceSize};
use crate::view_tree::ViewTree;

pub struct AppConfig {
    pub title: String,
    pub canvas_size: SurfaceSize,
    pub vsync: Option<bool>,
    pub tick_rate_hz: f64,
}

pub struct AppContext {
    pub window: Window,
    pub renderer: PixelsRenderer2d,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub button: PointerButton,
    /// Canvas pixel coordinates (origin top-left).
    pub pos: (u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(VirtualKeyCode),
    KeyReleased(VirtualKeyCode),
    Click(Click),
}

/// Everything the window reported since the previous tick, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub mouse_pos: Option<(u32, u32)>,
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

pub trait GameApp {
    type State;
    type Action: Clone;

    fn init_state(&mut self, ctx: &mut AppContext) -> Self::State;

    fn build_view(&self, state: &Self::State) -> ViewTree<Self::Action>;

    /// Runs one tick. `view` is the tree that was on screen while `input` was collected, so
    /// clicks can be routed to the buttons the player actually saw.
    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: &InputFrame,
        view: &ViewTree<Self::Action>,
        dt: Duration,
    );

    fn render(
        &mut self,
        state: &Self::State,
        view: &ViewTree<Self::Action>,
        renderer: &mut dyn Renderer2d,
    );

    fn exit_requested(&self) -> bool {
        false
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

/// Opens the window and runs `game` on a fixed-rate frame clock until the window closes.
///
/// Window events only record input; all game work happens once per clock tick, followed by a
/// single present of the canvas.
pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let canvas = config.canvas_size;
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(LogicalSize::new(canvas.width as f64, canvas.height as f64))
        .with_min_inner_size(LogicalSize::new(canvas.width as f64 / 4.0, canvas.height as f64 / 4.0))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let pixels = {
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let mut builder = PixelsBuilder::new(canvas.width, canvas.height, surface_texture);
        if let Some(vsync) = config.vsync {
            builder = builder.enable_vsync(vsync);
        }
        builder.build()?
    };

    let mut ctx = AppContext {
        window,
        renderer: PixelsRenderer2d::new(pixels, canvas),
    };
    let mut state = game.init_state(&mut ctx);
    let mut input = InputFrame::default();
    let mut clock = FrameClock::from_hz(config.tick_rate_hz, Instant::now());
    let mut reported_dropped = 0u64;
    log::info!(
        "running {}x{} canvas at {:.1} Hz",
        canvas.width,
        canvas.height,
        config.tick_rate_hz
    );

    event_loop.run(move |event, _, control_flow| {
        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(size) => {
                    let size = SurfaceSize::new(size.width, size.height);
                    if let Err(err) = ctx.renderer.resize_surface(size) {
                        log::error!("resize failed: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.mouse_pos = ctx
                        .renderer
                        .window_pos_to_canvas((position.x as f32, position.y as f32));
                }
                WindowEvent::CursorLeft { .. } => {
                    input.mouse_pos = None;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => {
                    // winit only reports a position through `CursorMoved`, so a click before
                    // the first move (or in the letterbox margin) has no canvas point and is
                    // dropped.
                    if let (Some(button), Some(pos)) = (pointer_button(*button), input.mouse_pos) {
                        input.push(InputEvent::Click(Click { button, pos }));
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    input.push(match key_state {
                        ElementState::Pressed => InputEvent::KeyPressed(*key),
                        ElementState::Released => InputEvent::KeyReleased(*key),
                    });
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if clock.is_due(Instant::now()) {
                    ctx.window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Some(dt) = clock.tick(Instant::now()) {
                    let view = game.build_view(&state);
                    game.update_state(&mut state, &input, &view, dt);
                    input.clear_events();

                    let view = game.build_view(&state);
                    ctx.renderer.draw_frame(|gfx| game.render(&state, &view, gfx));

                    if clock.dropped_ticks() > reported_dropped {
                        log::debug!(
                            "frame clock dropped {} tick(s)",
                            clock.dropped_ticks() - reported_dropped
                        );
                        reported_dropped = clock.dropped_ticks();
                    }
                }
                if let Err(err) = ctx.renderer.present() {
                    log::error!("present failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }
            _ => {}
        }

        if game.exit_requested() {
            *control_flow = ControlFlow::Exit;
        } else {
            *control_flow = ControlFlow::WaitUntil(clock.next_deadline());
        }
    });
}
