//! Layout primitives in canvas pixel space (origin top-left, y down).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// A `w`×`h` rect whose center sits at (`cx`, `cy`).
    ///
    /// Saturates at the top-left corner if the rect would start at a negative coordinate.
    pub fn centered_at(cx: u32, cy: u32, w: u32, h: u32) -> Self {
        Self {
            x: cx.saturating_sub(w / 2),
            y: cy.saturating_sub(h / 2),
            w,
            h,
        }
    }

    pub fn center(&self) -> (u32, u32) {
        (self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && px < self.x.saturating_add(self.w)
            && py >= self.y
            && py < self.y.saturating_add(self.h)
    }
}
