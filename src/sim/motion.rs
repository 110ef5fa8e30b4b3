//! Per-dot motion and boundary reflection
//!
//! Dots move at constant speed along their heading. When the proposed position
//! leaves the arena, the heading is reflected by rotating it into the adjacent
//! quadrant, and the reflected displacement is applied from the pre-step
//! position.

use glam::DVec2;

use super::dot::{BoundaryIndex, Dot};
use crate::config::Arena;
use crate::consts::QUADRANT;
use crate::{move_quadrant, normalize_radian, quadrant_index, quadrant_min_radian};

/// Outcome of advancing one dot by one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub dot: Dot,
    /// Edge that triggered a reflection this frame
    pub reflected: Option<BoundaryIndex>,
}

/// Advance a dot by one tick
pub fn step(dot: &Dot, arena: &Arena) -> Step {
    let proposed = dot.pos() + dot.displacement(dot.radian);

    match overflowed_boundary(proposed, dot.size(), arena.canvas) {
        None => Step {
            dot: dot.moved_to(proposed),
            reflected: None,
        },
        Some(boundary) => Step {
            dot: reflect(dot, boundary),
            reflected: Some(boundary),
        },
    }
}

/// First edge the box crosses, checked as top, left, bottom, right
pub fn overflowed_boundary(pos: DVec2, size: DVec2, canvas: DVec2) -> Option<BoundaryIndex> {
    if pos.y < 0.0 {
        Some(BoundaryIndex::Top)
    } else if pos.x < 0.0 {
        Some(BoundaryIndex::Left)
    } else if pos.y + size.y > canvas.y {
        Some(BoundaryIndex::Bottom)
    } else if pos.x + size.x > canvas.x {
        Some(BoundaryIndex::Right)
    } else {
        None
    }
}

/// Quadrant a heading lands in after bouncing off `boundary`
///
/// Rotates forward when the quadrant just behind the heading is the struck
/// edge, backward otherwise.
pub fn reflected_quadrant(quadrant: i32, boundary: BoundaryIndex) -> i32 {
    let forward = move_quadrant(quadrant, -1) == boundary.quadrant();
    move_quadrant(quadrant, if forward { 1 } else { -1 })
}

/// Heading after bouncing off `boundary`
pub fn reflected_radian(radian: f64, boundary: BoundaryIndex) -> f64 {
    let quadrant = reflected_quadrant(quadrant_index(radian), boundary);
    let overflow = radian.rem_euclid(QUADRANT);
    normalize_radian(quadrant_min_radian(quadrant) + (QUADRANT - overflow))
}

/// Reflect a dot off `boundary`, moving it from its pre-step position
pub fn reflect(dot: &Dot, boundary: BoundaryIndex) -> Dot {
    let radian = reflected_radian(dot.radian, boundary);
    let mut reflected = dot.moved_to(dot.pos() + dot.displacement(radian));
    reflected.radian = radian;
    reflected
}
