use std::collections::BTreeSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Keys the game listens to. Only the horizontal ones steer; the rest are tracked so that the
/// held set mirrors what the player is pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DriftKey {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

impl DriftKey {
    pub fn turns_left(self) -> bool {
        matches!(self, DriftKey::A | DriftKey::Left)
    }

    pub fn turns_right(self) -> bool {
        matches!(self, DriftKey::D | DriftKey::Right)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub held: BTreeSet<DriftKey>,
    /// World-space point being sought; `None` when no seek is active.
    pub target: Option<DVec2>,
}

impl InputState {
    pub fn press(&mut self, key: DriftKey) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: DriftKey) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: DriftKey) -> bool {
        self.held.contains(&key)
    }

    pub fn left_held(&self) -> bool {
        self.held.iter().any(|k| k.turns_left())
    }

    pub fn right_held(&self) -> bool {
        self.held.iter().any(|k| k.turns_right())
    }
}

/// A mutation requested by an input event, applied at the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    KeyDown(DriftKey),
    KeyUp(DriftKey),
    PlayPressed,
    SeekTo(DVec2),
    CancelSeek,
}

/// Canvas pixel (origin top-left, y down) to world point (origin center, y up).
pub fn canvas_to_world(pos: (u32, u32), canvas_w: u32, canvas_h: u32) -> DVec2 {
    DVec2::new(
        pos.0 as f64 + 0.5 - canvas_w as f64 / 2.0,
        canvas_h as f64 / 2.0 - (pos.1 as f64 + 0.5),
    )
}

/// World point to canvas pixel coordinates, as floats so sub-pixel geometry survives.
pub fn world_to_canvas(point: DVec2, canvas_w: u32, canvas_h: u32) -> (f32, f32) {
    (
        (point.x + canvas_w as f64 / 2.0) as f32,
        (canvas_h as f64 / 2.0 - point.y) as f32,
    )
}
