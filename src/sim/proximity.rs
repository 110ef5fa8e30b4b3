//! Sorted-sweep proximity search
//!
//! With dots sorted by center x, every dot within the linking radius of dot `i`
//! lies in a contiguous window after `i` that ends at the first center x past
//! `center_x(i) + radius`. A binary search finds that end, and only the dots
//! inside the window get a distance check.

use glam::DVec2;
use serde::Serialize;

use super::dot::Dot;
use crate::config::Arena;
use crate::consts::MAX_OPACITY;

/// A line between two dots close enough to be linked this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    /// Id of the dot with the smaller center x
    pub a: u32,
    pub b: u32,
    /// Center of `a`
    pub from: DVec2,
    /// Center of `b`
    pub to: DVec2,
    pub distance: f64,
    pub opacity: f64,
}

/// Line opacity for a center-to-center distance
#[inline]
pub fn opacity(distance: f64, linking_radius: f64) -> f64 {
    MAX_OPACITY - distance / linking_radius
}

/// Index at which `value` would be inserted among the sorted center x keys
///
/// On an exact key match the matching index is returned, which may be any one
/// of a run of equal keys.
pub fn insertion_index(sorted: &[Dot], value: f64) -> usize {
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        let key = sorted[mid as usize].center_x();

        if value == key {
            return mid as usize;
        }
        if value < key {
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }

    low as usize
}

/// Exclusive end of the dots whose center x is at most `x_limit`
pub fn window_end(sorted: &[Dot], x_limit: f64) -> usize {
    let mut end = insertion_index(sorted, x_limit);
    while sorted.get(end).is_some_and(|d| d.center_x() <= x_limit) {
        end += 1;
    }
    end
}

/// Every pair of dots whose centers are within the linking radius
///
/// `sorted` must be ordered by center x. A zero radius links nothing.
pub fn find_links(sorted: &[Dot], arena: &Arena) -> Vec<Link> {
    let radius = arena.linking_radius;
    if radius <= 0.0 || sorted.len() < 2 {
        return Vec::new();
    }

    // Window limits are clamped to the right edge of the arena, stretched to
    // cover any center that sits past it.
    let right_edge = sorted
        .last()
        .map_or(arena.canvas.x, |d| d.center_x().max(arena.canvas.x));

    let mut links = Vec::new();
    for (index, dot) in sorted.iter().enumerate() {
        let x_limit = (dot.center_x() + radius).min(right_edge);
        let end = window_end(sorted, x_limit);

        for other in sorted.get(index + 1..end).unwrap_or_default() {
            let distance = dot.center().distance(other.center());
            if distance <= radius {
                links.push(Link {
                    a: dot.id,
                    b: other.id,
                    from: dot.center(),
                    to: other.center(),
                    distance,
                    opacity: opacity(distance, radius),
                });
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimulationConfig, Size};
    use crate::sim::store::reorder;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn arena(radius: f64) -> Arena {
        SimulationConfig {
            canvas_size: Size::new(100.0, 100.0),
            dot_size: Size::new(4.0, 4.0),
            linking_radius: radius,
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    /// Dot whose center is at (cx, cy)
    fn dot_centered(id: u32, cx: f64, cy: f64) -> Dot {
        Dot::new(id, DVec2::new(cx - 2.0, cy - 2.0), DVec2::new(4.0, 4.0), 0.0, 1.0)
    }

    fn exhaustive(sorted: &[Dot], radius: f64) -> Vec<Link> {
        let mut links = Vec::new();
        if radius <= 0.0 {
            return links;
        }
        for i in 0..sorted.len() {
            for j in i + 1..sorted.len() {
                let distance = sorted[i].center().distance(sorted[j].center());
                if distance <= radius {
                    links.push(Link {
                        a: sorted[i].id,
                        b: sorted[j].id,
                        from: sorted[i].center(),
                        to: sorted[j].center(),
                        distance,
                        opacity: opacity(distance, radius),
                    });
                }
            }
        }
        links
    }

    fn pairs(links: &[Link]) -> BTreeSet<(u32, u32)> {
        links.iter().map(|l| (l.a.min(l.b), l.a.max(l.b))).collect()
    }

    #[test]
    fn test_two_dots_linked() {
        let dots = reorder(vec![dot_centered(0, 10.0, 10.0), dot_centered(1, 15.0, 10.0)]);
        let links = find_links(&dots, &arena(10.0));

        assert_eq!(links.len(), 1);
        let link = links[0];
        assert_eq!((link.a, link.b), (0, 1));
        assert!((link.distance - 5.0).abs() < 1e-12);
        assert!((link.opacity - 0.3).abs() < 1e-12);
        assert_eq!(link.from, DVec2::new(10.0, 10.0));
        assert_eq!(link.to, DVec2::new(15.0, 10.0));
    }

    #[test]
    fn test_far_dots_not_linked() {
        // Inside the x window but too far apart vertically
        let dots = reorder(vec![dot_centered(0, 10.0, 10.0), dot_centered(1, 15.0, 40.0)]);
        assert!(find_links(&dots, &arena(10.0)).is_empty());

        // Outside the x window
        let dots = reorder(vec![dot_centered(0, 10.0, 10.0), dot_centered(1, 40.0, 10.0)]);
        assert!(find_links(&dots, &arena(10.0)).is_empty());
    }

    #[test]
    fn test_exact_radius_links_every_tied_key() {
        // Three dots sit exactly at the window limit; all are within the radius
        let dots = reorder(vec![
            dot_centered(0, 10.0, 50.0),
            dot_centered(1, 20.0, 50.0),
            dot_centered(2, 20.0, 50.0),
            dot_centered(3, 20.0, 50.0),
        ]);
        let links = find_links(&dots, &arena(10.0));
        let expected: BTreeSet<(u32, u32)> =
            [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)].into_iter().collect();
        assert_eq!(pairs(&links), expected);
    }

    #[test]
    fn test_zero_radius_links_nothing() {
        let dots = reorder(vec![dot_centered(0, 10.0, 10.0), dot_centered(1, 10.0, 10.0)]);
        assert!(find_links(&dots, &arena(0.0)).is_empty());
    }

    #[test]
    fn test_opacity_decreases_with_distance() {
        assert!((opacity(0.0, 10.0) - MAX_OPACITY).abs() < 1e-12);
        assert!(opacity(2.0, 10.0) > opacity(6.0, 10.0));
        // Past 80% of the radius the formula goes negative
        assert!(opacity(10.0, 10.0) < 0.0);
    }

    #[test]
    fn test_insertion_index() {
        let dots = reorder(
            [10.0, 20.0, 30.0, 40.0]
                .iter()
                .enumerate()
                .map(|(i, &x)| dot_centered(i as u32, x, 0.0))
                .collect(),
        );
        assert_eq!(insertion_index(&dots, 5.0), 0);
        assert_eq!(insertion_index(&dots, 25.0), 2);
        assert_eq!(insertion_index(&dots, 30.0), 2);
        assert_eq!(insertion_index(&dots, 99.0), 4);
        assert_eq!(insertion_index(&[], 1.0), 0);

        assert_eq!(window_end(&dots, 30.0), 3);
        assert_eq!(window_end(&dots, 29.9), 2);
    }

    #[test]
    fn test_centers_past_right_edge_still_linked() {
        let dots = reorder(vec![dot_centered(0, 99.0, 50.0), dot_centered(1, 101.0, 50.0)]);
        let links = find_links(&dots, &arena(10.0));
        assert_eq!(pairs(&links), [(0, 1)].into_iter().collect());
    }

    proptest! {
        #[test]
        fn windowed_matches_exhaustive(
            centers in prop::collection::vec((-10.0f64..110.0, -10.0f64..110.0), 0..48),
            radius in 0.0f64..60.0,
            snap in any::<bool>(),
        ) {
            // Snapping to a coarse grid produces plenty of tied keys
            let dots: Vec<Dot> = centers
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| {
                    let (x, y) = if snap { ((x / 5.0).round() * 5.0, (y / 5.0).round() * 5.0) } else { (x, y) };
                    dot_centered(i as u32, x, y)
                })
                .collect();
            let radius = if snap { (radius / 5.0).round() * 5.0 } else { radius };
            let sorted = reorder(dots);

            let windowed = find_links(&sorted, &arena(radius));
            let all = exhaustive(&sorted, radius);
            prop_assert_eq!(pairs(&windowed), pairs(&all));
            prop_assert_eq!(windowed.len(), all.len());
            for link in &windowed {
                prop_assert!(link.distance <= radius);
                prop_assert!((link.opacity - (MAX_OPACITY - link.distance / radius)).abs() < 1e-12);
            }
        }
    }
}
