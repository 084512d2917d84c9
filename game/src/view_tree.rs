use engine::graphics::{Color, WHITE, rgb, text_height};
use engine::ui::Rect;
use engine::view_tree::{ButtonNode, TextNode, ViewNode, ViewTree};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::input::world_to_canvas;
use crate::phase::GamePhase;

pub const LOADING_TITLE: &str = "DRIFTING TURTLE GAME";
pub const LOADING_SUBTITLE: &str = "CLICK 'PLAY' TO START THE ACTION!";
pub const PLAY_LABEL: &str = "PLAY";

pub const PLAY_BUTTON_ID: u32 = 1;
pub const PLAY_BUTTON_FILL: Color = rgb(0, 128, 0);
pub const PLAY_BUTTON_SIZE: (u32, u32) = (100, 40);

const TITLE_SCALE: u32 = 4;
const SUBTITLE_SCALE: u32 = 2;

/// World-space anchors of the loading screen; text sits on its anchor like a baseline.
const TITLE_ANCHOR: DVec2 = DVec2::new(0.0, 100.0);
const SUBTITLE_ANCHOR: DVec2 = DVec2::new(0.0, 50.0);
const PLAY_BUTTON_CENTER: DVec2 = DVec2::new(0.0, -50.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftUiAction {
    Play,
}

fn canvas_point(world: DVec2, width: u32, height: u32) -> (u32, u32) {
    let (x, y) = world_to_canvas(world, width, height);
    (x.round().max(0.0) as u32, y.round().max(0.0) as u32)
}

pub fn play_button_rect(width: u32, height: u32) -> Rect {
    let (cx, cy) = canvas_point(PLAY_BUTTON_CENTER, width, height);
    let (w, h) = PLAY_BUTTON_SIZE;
    Rect::centered_at(cx, cy, w, h)
}

fn push_caption(tree: &mut ViewTree<DriftUiAction>, anchor: DVec2, text: &str, scale: u32, width: u32, height: u32) {
    let (x, baseline) = canvas_point(anchor, width, height);
    tree.push(ViewNode::Text(TextNode {
        pos: (x, baseline.saturating_sub(text_height(scale))),
        text: text.to_string(),
        scale,
        color: WHITE,
    }));
}

/// The overlay for `phase`. Playing has no overlay at all, so nothing can be clicked.
pub fn build_view_tree(phase: GamePhase, width: u32, height: u32) -> ViewTree<DriftUiAction> {
    let mut tree = ViewTree::new();
    if phase.is_playing() {
        return tree;
    }

    push_caption(&mut tree, TITLE_ANCHOR, LOADING_TITLE, TITLE_SCALE, width, height);
    push_caption(&mut tree, SUBTITLE_ANCHOR, LOADING_SUBTITLE, SUBTITLE_SCALE, width, height);
    tree.push(ViewNode::Button(ButtonNode {
        id: PLAY_BUTTON_ID,
        rect: play_button_rect(width, height),
        label: PLAY_LABEL.to_string(),
        action: DriftUiAction::Play,
        enabled: true,
        fill: PLAY_BUTTON_FILL,
        label_color: WHITE,
    }));
    tree
}
