use std::collections::VecDeque;

use engine::graphics::Color;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, DEFAULT_EDGE_MARGIN};
use crate::color::{ColorCycle, DEFAULT_HUE_STEP};
use crate::input::InputState;
use crate::motion::{DEFAULT_SPEED, DEFAULT_TURN_SPEED};
use crate::phase::GamePhase;

pub const DEFAULT_CANVAS_SIZE: u32 = 600;
pub const DEFAULT_TRAIL_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub pos: DVec2,
    /// Degrees in [0, 360), 0 is east, counter-clockwise positive.
    pub heading: f64,
    pub color: Color,
}

impl Default for PlayerState {
    fn default() -> Self {
        let cycle = ColorCycle::default();
        Self {
            pos: DVec2::ZERO,
            heading: 0.0,
            color: cycle.marker_color(),
        }
    }
}

/// Bounded history of marker positions, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    capacity: usize,
    points: VecDeque<DVec2>,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: DVec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }
}

/// Tunables the simulation reads every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub bounds: Bounds,
    pub speed: f64,
    pub turn_speed: f64,
    pub hue_step: f64,
    pub trail_enabled: bool,
    pub trail_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            bounds: Bounds::from_canvas(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_EDGE_MARGIN),
            speed: DEFAULT_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            hue_step: DEFAULT_HUE_STEP,
            trail_enabled: false,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub phase: GamePhase,
    pub player: PlayerState,
    pub input: InputState,
    pub color: ColorCycle,
    pub background: Color,
    pub trail: Trail,
    pub ticks: u64,
}

impl SimState {
    pub fn new(config: &SimConfig) -> Self {
        let color = ColorCycle::default();
        let trail_capacity = if config.trail_enabled {
            config.trail_capacity
        } else {
            0
        };
        Self {
            phase: GamePhase::default(),
            player: PlayerState::default(),
            input: InputState::default(),
            color,
            background: color.background_color(),
            trail: Trail::with_capacity(trail_capacity),
            ticks: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_loading_at_origin() {
        let state = SimState::default();
        assert_eq!(state.phase, GamePhase::Loading);
        assert_eq!(state.player.pos, DVec2::ZERO);
        assert_eq!(state.player.heading, 0.0);
        assert_eq!(state.input.target, None);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn trail_drops_oldest_when_full() {
        let mut trail = Trail::with_capacity(3);
        for i in 0..5 {
            trail.push(DVec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_trail_records_nothing() {
        let mut trail = Trail::with_capacity(0);
        trail.push(DVec2::ONE);
        assert!(trail.is_empty());
    }

    #[test]
    fn disabled_trail_gets_no_capacity() {
        let config = SimConfig {
            trail_enabled: false,
            trail_capacity: 100,
            ..SimConfig::default()
        };
        assert_eq!(SimState::new(&config).trail.capacity(), 0);

        let config = SimConfig {
            trail_enabled: true,
            ..config
        };
        assert_eq!(SimState::new(&config).trail.capacity(), 100);
    }
}
