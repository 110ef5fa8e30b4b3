//! Dot entity and arena boundary tags

use glam::DVec2;
use serde::Serialize;

use crate::center_coordinate;

/// A point particle with a fixed-size bounding box
///
/// Position is the top-left corner. The center is derived and only ever
/// recomputed together with the position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dot {
    /// Stable identity, assigned at creation
    pub id: u32,
    pos: DVec2,
    size: DVec2,
    center: DVec2,
    /// Heading in [0, 2π)
    pub radian: f64,
    /// Distance per frame
    pub speed: f64,
}

impl Dot {
    pub fn new(id: u32, pos: DVec2, size: DVec2, radian: f64, speed: f64) -> Self {
        Self {
            id,
            pos,
            size,
            center: Self::center_of(pos, size),
            radian,
            speed,
        }
    }

    fn center_of(pos: DVec2, size: DVec2) -> DVec2 {
        DVec2::new(
            center_coordinate(pos.x, size.x),
            center_coordinate(pos.y, size.y),
        )
    }

    /// Copy of this dot moved to `pos`
    pub fn moved_to(&self, pos: DVec2) -> Self {
        Self {
            pos,
            center: Self::center_of(pos, self.size),
            ..self.clone()
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.center.y
    }

    /// Per-frame displacement for a heading at this dot's speed
    #[inline]
    pub fn displacement(&self, radian: f64) -> DVec2 {
        DVec2::new(radian.cos(), radian.sin()) * self.speed
    }
}

/// Arena edge a dot crossed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryIndex {
    Bottom,
    Left,
    Top,
    Right,
}

impl BoundaryIndex {
    /// Position of this edge in quadrant space
    pub fn quadrant(self) -> i32 {
        match self {
            BoundaryIndex::Bottom => 0,
            BoundaryIndex::Left => 1,
            BoundaryIndex::Top => 2,
            BoundaryIndex::Right => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_tracks_position() {
        let dot = Dot::new(3, DVec2::new(8.0, 8.0), DVec2::new(4.0, 6.0), 0.0, 1.0);
        assert_eq!(dot.center(), DVec2::new(10.0, 11.0));

        let moved = dot.moved_to(DVec2::new(20.0, 0.0));
        assert_eq!(moved.id, 3);
        assert_eq!(moved.center(), DVec2::new(22.0, 3.0));
        assert_eq!(moved.size(), dot.size());
    }

    #[test]
    fn test_boundary_quadrants() {
        let all = [
            BoundaryIndex::Bottom,
            BoundaryIndex::Left,
            BoundaryIndex::Top,
            BoundaryIndex::Right,
        ];
        let quadrants: Vec<i32> = all.iter().map(|b| b.quadrant()).collect();
        assert_eq!(quadrants, vec![0, 1, 2, 3]);
    }
}
