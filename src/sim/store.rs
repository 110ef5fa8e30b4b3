//! Dot set construction and ordering
//!
//! The proximity search relies on the dot set being sorted by center x, so both
//! construction and the per-frame update hand back a sorted set.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use super::dot::Dot;
use crate::config::Arena;
use crate::error::{Axis, ConfigError};

/// Create `count` dots at random positions and headings, sorted by center x
///
/// Every bounding box lies fully inside the canvas.
pub fn initialize<R: Rng + ?Sized>(
    count: usize,
    arena: &Arena,
    rng: &mut R,
) -> Result<Vec<Dot>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::InvalidDotAmount(count));
    }
    let max = arena.max_position();
    if max.x.is_nan() || max.x < 0.0 {
        return Err(ConfigError::DotExceedsCanvas {
            axis: Axis::Width,
            dot: arena.dot.x,
            canvas: arena.canvas.x,
        });
    }
    if max.y.is_nan() || max.y < 0.0 {
        return Err(ConfigError::DotExceedsCanvas {
            axis: Axis::Height,
            dot: arena.dot.y,
            canvas: arena.canvas.y,
        });
    }

    let dots = (0..count)
        .map(|index| {
            let pos = DVec2::new(rng.random_range(0.0..=max.x), rng.random_range(0.0..=max.y));
            let radian = rng.random_range(0.0..TAU);
            Dot::new(index as u32, pos, arena.dot, radian, arena.dot_speed)
        })
        .collect();

    log::info!(
        "Initialized {} dots in {}x{} arena",
        count,
        arena.canvas.x,
        arena.canvas.y
    );

    Ok(reorder(dots))
}

/// Stable sort by center x; equal keys keep their input order
pub fn reorder(mut dots: Vec<Dot>) -> Vec<Dot> {
    dots.sort_by(|a, b| a.center_x().total_cmp(&b.center_x()));
    dots
}
