use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, DEFAULT_EDGE_MARGIN};
use crate::color::DEFAULT_HUE_STEP;
use crate::motion::{DEFAULT_SPEED, DEFAULT_TURN_SPEED};
use crate::state::{DEFAULT_CANVAS_SIZE, DEFAULT_TRAIL_CAPACITY, SimConfig};

pub const SETTINGS_PATH_ENV: &str = "DRIFT_SETTINGS_PATH";

const MIN_CANVAS: u32 = 100;
const MAX_CANVAS: u32 = 4096;
const MAX_SPEED: f64 = 50.0;
const MAX_TURN_SPEED: f64 = 180.0;
const MAX_HUE_STEP: f64 = 0.5;
const MIN_TICK_RATE: f64 = 1.0;
const MAX_TICK_RATE: f64 = 240.0;
const MAX_TRAIL_POINTS: usize = 10_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub edge_margin: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl CanvasSettings {
    pub fn clamp(mut self) -> Self {
        self.width = self.width.clamp(MIN_CANVAS, MAX_CANVAS);
        self.height = self.height.clamp(MIN_CANVAS, MAX_CANVAS);
        // Keep at least one pixel of play area on each side of the center.
        let max_margin = (self.width.min(self.height) / 2) as f64 - 1.0;
        self.edge_margin = if self.edge_margin.is_finite() {
            self.edge_margin.clamp(0.0, max_margin)
        } else {
            DEFAULT_EDGE_MARGIN
        };
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionSettings {
    pub speed: f64,
    pub turn_speed: f64,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
        }
    }
}

impl MotionSettings {
    pub fn clamp(mut self) -> Self {
        self.speed = if self.speed.is_finite() && self.speed > 0.0 {
            self.speed.min(MAX_SPEED)
        } else {
            DEFAULT_SPEED
        };
        self.turn_speed = if self.turn_speed.is_finite() {
            self.turn_speed.clamp(0.0, MAX_TURN_SPEED)
        } else {
            DEFAULT_TURN_SPEED
        };
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorSettings {
    pub hue_step: f64,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            hue_step: DEFAULT_HUE_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameSettings {
    pub tick_rate_hz: f64,
    pub vsync: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            vsync: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrailSettings {
    pub enabled: bool,
    pub max_points: usize,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            max_points: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub motion: MotionSettings,
    #[serde(default)]
    pub color: ColorSettings,
    #[serde(default)]
    pub frame: FrameSettings,
    #[serde(default)]
    pub trail: TrailSettings,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasSettings::default(),
            motion: MotionSettings::default(),
            color: ColorSettings::default(),
            frame: FrameSettings::default(),
            trail: TrailSettings::default(),
        }
    }
}

impl DriftSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.canvas = self.canvas.clamp();
        self.motion = self.motion.clamp();
        self.color.hue_step = if self.color.hue_step.is_finite() && self.color.hue_step > 0.0 {
            self.color.hue_step.min(MAX_HUE_STEP)
        } else {
            DEFAULT_HUE_STEP
        };
        self.frame.tick_rate_hz = if self.frame.tick_rate_hz.is_finite() {
            self.frame.tick_rate_hz.clamp(MIN_TICK_RATE, MAX_TICK_RATE)
        } else {
            FrameSettings::default().tick_rate_hz
        };
        self.trail.max_points = self.trail.max_points.min(MAX_TRAIL_POINTS);
        self
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            canvas_width: self.canvas.width,
            canvas_height: self.canvas.height,
            bounds: Bounds::from_canvas(self.canvas.width, self.canvas.height, self.canvas.edge_margin),
            speed: self.motion.speed,
            turn_speed: self.motion.turn_speed,
            hue_step: self.color.hue_step,
            trail_enabled: self.trail.enabled,
            trail_capacity: self.trail.max_points,
        }
    }
}

fn default_version() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os(SETTINGS_PATH_ENV) {
            return Self::at(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| {
                    let mut p = PathBuf::from(home);
                    p.push(".config");
                    p
                })
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let mut path = base;
        path.push("drifting-turtle");
        path.push("settings.json");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; an unreadable or invalid file is logged and also falls back.
    pub fn load(&self) -> DriftSettings {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", self.path.display());
                return DriftSettings::default();
            }
            Err(err) => {
                log::warn!("cannot read {}: {err}; using defaults", self.path.display());
                return DriftSettings::default();
            }
        };
        match serde_json::from_slice::<DriftSettings>(&bytes) {
            Ok(settings) => {
                log::info!("loaded settings from {}", self.path.display());
                settings.sanitized()
            }
            Err(err) => {
                log::warn!("invalid settings in {}: {err}; using defaults", self.path.display());
                DriftSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &DriftSettings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
