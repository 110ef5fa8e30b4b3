//! Simulation configuration
//!
//! Everything is fixed at construction time. A config is validated once into an
//! immutable [`Arena`] that the simulation reads from for the rest of the run.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SPEED, MS_PER_SECOND};
use crate::error::{Axis, ConfigError};

/// Width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    fn as_vec(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string, alpha clamped to [0, 1]
    pub fn to_css_alpha(&self, alpha: f64) -> String {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

/// Construction-time configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Number of dots
    pub dot_amount: usize,
    /// Arena size
    pub canvas_size: Size,
    /// Bounding box of every dot
    pub dot_size: Size,
    /// Maximum center-to-center distance that gets a line
    pub linking_radius: f64,
    pub frames_per_second: f64,
    pub dot_color: Color,
    pub line_color: Color,
    /// Distance per frame
    #[serde(default = "default_speed")]
    pub dot_speed: f64,
    /// RNG seed; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dot_amount: 100,
            canvas_size: Size::new(800.0, 600.0),
            dot_size: Size::new(4.0, 4.0),
            linking_radius: 100.0,
            frames_per_second: 60.0,
            dot_color: Color::WHITE,
            line_color: Color::WHITE,
            dot_speed: DEFAULT_SPEED,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check every field and freeze the result into an arena
    pub fn validate(&self) -> Result<Arena, ConfigError> {
        if self.dot_amount == 0 {
            return Err(ConfigError::InvalidDotAmount(self.dot_amount));
        }

        for (what, size) in [("canvas size", self.canvas_size), ("dot size", self.dot_size)] {
            if !size.is_positive() {
                return Err(ConfigError::NonPositiveSize {
                    what,
                    width: size.width,
                    height: size.height,
                });
            }
        }

        if self.dot_size.width > self.canvas_size.width {
            return Err(ConfigError::DotExceedsCanvas {
                axis: Axis::Width,
                dot: self.dot_size.width,
                canvas: self.canvas_size.width,
            });
        }
        if self.dot_size.height > self.canvas_size.height {
            return Err(ConfigError::DotExceedsCanvas {
                axis: Axis::Height,
                dot: self.dot_size.height,
                canvas: self.canvas_size.height,
            });
        }

        if !(self.linking_radius.is_finite() && self.linking_radius >= 0.0) {
            return Err(ConfigError::InvalidLinkingRadius(self.linking_radius));
        }
        if !(self.frames_per_second.is_finite() && self.frames_per_second > 0.0) {
            return Err(ConfigError::InvalidFrameRate(self.frames_per_second));
        }
        if !(self.dot_speed.is_finite() && self.dot_speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.dot_speed));
        }

        Ok(Arena {
            dot_amount: self.dot_amount,
            canvas: self.canvas_size.as_vec(),
            dot: self.dot_size.as_vec(),
            linking_radius: self.linking_radius,
            frames_per_second: self.frames_per_second,
            dot_speed: self.dot_speed,
            dot_color: self.dot_color,
            line_color: self.line_color,
        })
    }
}

/// Validated, immutable per-run parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    pub dot_amount: usize,
    /// Canvas width/height
    pub canvas: DVec2,
    /// Dot width/height
    pub dot: DVec2,
    pub linking_radius: f64,
    pub frames_per_second: f64,
    pub dot_speed: f64,
    pub dot_color: Color,
    pub line_color: Color,
}

impl Arena {
    /// Milliseconds between frame ticks
    pub fn frame_interval_ms(&self) -> f64 {
        MS_PER_SECOND / self.frames_per_second
    }

    /// Largest top-left coordinate that keeps a dot inside the canvas
    pub fn max_position(&self) -> DVec2 {
        self.canvas - self.dot
    }
}
