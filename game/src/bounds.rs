//! Edge bounces.

use serde::{Deserialize, Serialize};

use crate::motion::{forward, normalize_heading};
use crate::state::PlayerState;

pub const DEFAULT_EDGE_MARGIN: f64 = 10.0;

/// Half-extent thresholds measured from the canvas center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub half_width: f64,
    pub half_height: f64,
}

impl Bounds {
    pub fn from_canvas(width: u32, height: u32, margin: f64) -> Self {
        Self {
            half_width: width as f64 / 2.0 - margin,
            half_height: height as f64 / 2.0 - margin,
        }
    }
}

/// Mirror across a vertical wall.
pub fn reflect_horizontal(heading: f64) -> f64 {
    normalize_heading(180.0 - heading)
}

/// Mirror across a horizontal wall.
pub fn reflect_vertical(heading: f64) -> f64 {
    normalize_heading(360.0 - heading)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceReport {
    pub x: bool,
    pub y: bool,
}

impl BounceReport {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Reflects the heading off any wall the marker has reached and nudges it back by two steps.
///
/// Both walls are tested against the position the advance produced; at a corner the second
/// reflection acts on the already reflected heading.
pub fn bounce(player: &mut PlayerState, bounds: Bounds, step: f64) -> BounceReport {
    let reached = player.pos;
    let mut report = BounceReport::default();

    if reached.x.abs() >= bounds.half_width {
        player.heading = reflect_horizontal(player.heading);
        player.pos = forward(player.pos, player.heading, 2.0 * step);
        report.x = true;
    }
    if reached.y.abs() >= bounds.half_height {
        player.heading = reflect_vertical(player.heading);
        player.pos = forward(player.pos, player.heading, 2.0 * step);
        report.y = true;
    }

    report
}
