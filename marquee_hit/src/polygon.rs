// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::hull::convex_hull;
use crate::orient::{Orientation, on_segment, orientation, segments_intersect};

/// Ray-casting point-in-polygon test.
///
/// A ray is cast from `p` towards +x and crossings with each polygon edge are
/// counted; `p` is inside iff the count is odd. A point collinear with an edge
/// and between its endpoints is reported exactly: inside if on the edge,
/// outside otherwise.
///
/// `polygon` must be in wrap order (for example the output of
/// [`convex_hull`]). Fewer than three vertices never contain anything.
#[must_use]
pub fn point_in_polygon(polygon: &[Point], p: Point) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let far_x = polygon.iter().fold(p.x, |acc, v| acc.max(v.x)) + 1.0;
    let extreme = Point::new(far_x, p.y);

    let mut crossings = 0_usize;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if segments_intersect(a, b, p, extreme) {
            if orientation(a, p, b) == Orientation::Collinear {
                return on_segment(a, p, b);
            }
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Tests `p` against four corners given in any order.
///
/// The corners are wrapped into their convex hull first, so the result does
/// not depend on which corners were recorded as primary or opposite.
#[must_use]
pub fn quad_contains(corners: &[Point; 4], p: Point) -> bool {
    let hull = convex_hull(corners);
    point_in_polygon(&hull, p)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{point_in_polygon, quad_contains};

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn inside_outside_and_boundary() {
        let sq = square();
        assert!(point_in_polygon(&sq, Point::new(5.0, 5.0)));
        assert!(!point_in_polygon(&sq, Point::new(15.0, 5.0)));
        assert!(!point_in_polygon(&sq, Point::new(-1.0, 5.0)));
        // Exactly on the right edge.
        assert!(point_in_polygon(&sq, Point::new(10.0, 5.0)));
        // Level with the top edge but left of the square.
        assert!(!point_in_polygon(&sq, Point::new(-5.0, 0.0)));
    }

    #[test]
    fn center_is_inside_for_every_corner_order() {
        let [a, b, c, d] = square();
        let orders = [[a, b, c, d], [a, c, b, d], [c, a, d, b], [d, b, a, c], [b, d, c, a]];
        for corners in &orders {
            assert!(
                quad_contains(corners, Point::new(5.0, 5.0)),
                "center missed for {corners:?}"
            );
        }
    }

    #[test]
    fn too_few_vertices_contain_nothing() {
        assert!(!point_in_polygon(
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            Point::new(0.5, 0.5)
        ));
    }
}
