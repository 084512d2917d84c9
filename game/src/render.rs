//! Draws the loading screen or the playing scene into the canvas.

use engine::graphics::{BLACK, Color, Renderer2d};
use engine::render::draw_view_tree;
use engine::ui::Rect;
use engine::view_tree::ViewTree;
use glam::DVec2;

use crate::input::world_to_canvas;
use crate::motion::direction;
use crate::state::{PlayerState, SimState};
use crate::view_tree::{DriftUiAction, build_view_tree};

/// Outline of the marker with its nose on +y, in world units.
const TURTLE_SHAPE: [(f64, f64); 24] = [
    (0.0, 16.0),
    (-2.0, 14.0),
    (-1.0, 10.0),
    (-4.0, 7.0),
    (-7.0, 9.0),
    (-9.0, 8.0),
    (-6.0, 5.0),
    (-7.0, 1.0),
    (-5.0, -3.0),
    (-8.0, -6.0),
    (-6.0, -8.0),
    (-4.0, -5.0),
    (0.0, -7.0),
    (4.0, -5.0),
    (6.0, -8.0),
    (8.0, -6.0),
    (5.0, -3.0),
    (7.0, 1.0),
    (6.0, 5.0),
    (9.0, 8.0),
    (7.0, 9.0),
    (4.0, 7.0),
    (1.0, 10.0),
    (2.0, 14.0),
];

const TRAIL_DOT: u32 = 2;

/// Marker outline in canvas coordinates, rotated so the nose points along the heading.
pub fn marker_polygon(player: &PlayerState, canvas_w: u32, canvas_h: u32) -> Vec<(f32, f32)> {
    let ahead = direction(player.heading);
    let right = DVec2::new(ahead.y, -ahead.x);
    TURTLE_SHAPE
        .iter()
        .map(|&(side, along)| {
            let world = player.pos + ahead * along + right * side;
            world_to_canvas(world, canvas_w, canvas_h)
        })
        .collect()
}

fn draw_trail(renderer: &mut dyn Renderer2d, state: &SimState, color: Color) {
    let size = renderer.size();
    for point in state.trail.points() {
        let (x, y) = world_to_canvas(point, size.width, size.height);
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let half = TRAIL_DOT as f32 / 2.0;
        let rect = Rect::new(
            (x - half).max(0.0) as u32,
            (y - half).max(0.0) as u32,
            TRAIL_DOT,
            TRAIL_DOT,
        );
        renderer.fill_rect(rect, color);
    }
}

/// Draws one frame for `state` with the overlay `view` on top.
pub fn render_frame(state: &SimState, view: &ViewTree<DriftUiAction>, renderer: &mut dyn Renderer2d) {
    let size = renderer.size();
    if state.is_playing() {
        renderer.clear(state.background);
        draw_trail(renderer, state, state.player.color);
        let outline = marker_polygon(&state.player, size.width, size.height);
        renderer.fill_polygon(&outline, state.player.color);
    } else {
        renderer.clear(BLACK);
    }
    draw_view_tree(renderer, view);
}

/// Builds the overlay for the renderer's canvas and draws the frame.
pub fn render_state(state: &SimState, renderer: &mut dyn Renderer2d) {
    let size = renderer.size();
    let view = build_view_tree(state.phase, size.width, size.height);
    render_frame(state, &view, renderer);
}
