//! Linked Dots - bouncing particles joined by proximity lines
//!
//! Core modules:
//! - `sim`: Simulation core (motion, reflection, proximity search, frame clock)
//! - `config`: Construction-time configuration and validation
//! - `render`: Renderer interface consumed by the simulation
//! - `platform`: Native/browser drivers

pub mod config;
pub mod error;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{Arena, Color, SimulationConfig, Size};
pub use error::{ConfigError, SimError};
pub use render::{CommandBuffer, RenderCommand, Renderer};
pub use sim::{Dot, FrameStats, Link, SimulationClock};

/// Simulation constants
pub mod consts {
    use std::f64::consts::FRAC_PI_2;

    /// Angular width of one quadrant
    pub const QUADRANT: f64 = FRAC_PI_2;
    /// Number of quadrants covering a full turn
    pub const QUADRANT_COUNT: i32 = 4;

    /// Opacity of a line between two coincident dots
    pub const MAX_OPACITY: f64 = 0.8;

    /// Distance a dot travels per frame
    pub const DEFAULT_SPEED: f64 = 1.0;

    pub const MS_PER_SECOND: f64 = 1000.0;
}

/// Start a simulation: validate the config, initialize the dots and render the first frame.
///
/// The returned clock is running; the host drives it with [`SimulationClock::update`].
pub fn start<R: Renderer + ?Sized>(
    config: &SimulationConfig,
    renderer: &mut R,
    now_ms: f64,
) -> Result<SimulationClock, SimError> {
    let mut clock = SimulationClock::new(config)?;
    clock.start(renderer, now_ms);
    Ok(clock)
}

/// Center of a box along one axis
#[inline]
pub fn center_coordinate(coordinate: f64, size: f64) -> f64 {
    coordinate + size / 2.0
}

/// Quadrant (0..4) containing the heading
#[inline]
pub fn quadrant_index(radian: f64) -> i32 {
    ((radian / consts::QUADRANT).floor() as i32).rem_euclid(consts::QUADRANT_COUNT)
}

/// Smallest heading inside a quadrant
#[inline]
pub fn quadrant_min_radian(quadrant: i32) -> f64 {
    quadrant as f64 * consts::QUADRANT
}

/// Shift a quadrant index, wrapping around the full turn
#[inline]
pub fn move_quadrant(quadrant: i32, movement: i32) -> i32 {
    (quadrant + movement).rem_euclid(consts::QUADRANT_COUNT)
}

/// Normalize a heading to [0, 2π)
#[inline]
pub fn normalize_radian(radian: f64) -> f64 {
    let wrapped = radian.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= std::f64::consts::TAU { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_4, PI, TAU};

    #[test]
    fn test_quadrant_index() {
        assert_eq!(quadrant_index(0.0), 0);
        assert_eq!(quadrant_index(FRAC_PI_4), 0);
        assert_eq!(quadrant_index(PI / 2.0), 1);
        assert_eq!(quadrant_index(PI + 0.1), 2);
        assert_eq!(quadrant_index(TAU - 0.01), 3);
    }

    #[test]
    fn test_move_quadrant_wraps() {
        assert_eq!(move_quadrant(0, -1), 3);
        assert_eq!(move_quadrant(3, 1), 0);
        assert_eq!(move_quadrant(2, -1), 1);
    }

    #[test]
    fn test_normalize_radian() {
        assert_eq!(normalize_radian(TAU), 0.0);
        assert!((normalize_radian(-FRAC_PI_4) - (TAU - FRAC_PI_4)).abs() < 1e-12);
        assert!((normalize_radian(PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_center_coordinate() {
        assert_eq!(center_coordinate(8.0, 4.0), 10.0);
    }
}
