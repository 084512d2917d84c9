use engine::app::{Click, InputEvent, InputFrame, PointerButton};
use engine::view_tree::{ViewTree, hit_test};
use winit::event::VirtualKeyCode;

use crate::input::{DriftKey, Intent, canvas_to_world};
use crate::view_tree::DriftUiAction;

pub fn drift_key(key: VirtualKeyCode) -> Option<DriftKey> {
    Some(match key {
        VirtualKeyCode::W => DriftKey::W,
        VirtualKeyCode::A => DriftKey::A,
        VirtualKeyCode::S => DriftKey::S,
        VirtualKeyCode::D => DriftKey::D,
        VirtualKeyCode::Up => DriftKey::Up,
        VirtualKeyCode::Down => DriftKey::Down,
        VirtualKeyCode::Left => DriftKey::Left,
        VirtualKeyCode::Right => DriftKey::Right,
        _ => return None,
    })
}

/// Result of translating one frame of window input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedInput {
    pub intents: Vec<Intent>,
    pub exit: bool,
}

fn click_intent(click: Click, view: &ViewTree<DriftUiAction>, canvas: (u32, u32)) -> Intent {
    match click.button {
        PointerButton::Right => Intent::CancelSeek,
        PointerButton::Left => match hit_test(view, click.pos) {
            Some(DriftUiAction::Play) => Intent::PlayPressed,
            None => Intent::SeekTo(canvas_to_world(click.pos, canvas.0, canvas.1)),
        },
    }
}

/// Turns the frame's events into intents, in arrival order.
///
/// `view` must be the overlay that was on screen while the events arrived, so a click on the
/// play button is consumed by the button instead of becoming a seek.
pub fn translate_frame(frame: &InputFrame, view: &ViewTree<DriftUiAction>, canvas: (u32, u32)) -> TranslatedInput {
    let mut out = TranslatedInput::default();
    for event in &frame.events {
        match *event {
            InputEvent::KeyPressed(VirtualKeyCode::Escape) => out.exit = true,
            InputEvent::KeyPressed(key) => {
                if let Some(key) = drift_key(key) {
                    out.intents.push(Intent::KeyDown(key));
                }
            }
            InputEvent::KeyReleased(key) => {
                if let Some(key) = drift_key(key) {
                    out.intents.push(Intent::KeyUp(key));
                }
            }
            InputEvent::Click(click) => out.intents.push(click_intent(click, view, canvas)),
        }
    }
    out
}
