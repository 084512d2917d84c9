//! Rainbow color cycling for the marker and the background.

use engine::graphics::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HUE_STEP: f64 = 0.005;

/// Hue distance between the marker and the background.
pub const BACKGROUND_HUE_OFFSET: f64 = 0.5;

/// Wraps any real number into [0, 1).
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0.
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// HSV to RGB with every component in [0, 1]. Hue wraps, so 1.0 is red again.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }
    let h6 = wrap_unit(h) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Fully saturated, full value color for `hue`, channels truncated to bytes.
pub fn hue_to_color(hue: f64) -> Color {
    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    [to_byte(r), to_byte(g), to_byte(b), 255]
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

pub fn complementary_hue(hue: f64) -> f64 {
    wrap_unit(hue + BACKGROUND_HUE_OFFSET)
}

/// The color phase shared by marker and background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCycle {
    phase: f64,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self { phase: 0.0 }
    }
}

impl ColorCycle {
    pub fn new(phase: f64) -> Self {
        Self {
            phase: wrap_unit(phase),
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn advance(&mut self, step: f64) {
        self.phase = wrap_unit(self.phase + step);
    }

    pub fn marker_hue(&self) -> f64 {
        self.phase
    }

    pub fn background_hue(&self) -> f64 {
        complementary_hue(self.phase)
    }

    pub fn marker_color(&self) -> Color {
        hue_to_color(self.marker_hue())
    }

    pub fn background_color(&self) -> Color {
        hue_to_color(self.background_hue())
    }
}

/// Shortest distance between two phases on the unit circle.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = wrap_unit(a - b);
    d.min(1.0 - d)
}
