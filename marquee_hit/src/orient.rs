// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// `p -> q -> r` turns clockwise (in a y-up frame).
    Clockwise,
    /// `p -> q -> r` turns counter-clockwise (in a y-up frame).
    CounterClockwise,
}

/// Classifies the turn `p -> q -> r` by the sign of the 2D cross product.
#[must_use]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let v = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if v == 0.0 {
        Orientation::Collinear
    } else if v > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Given collinear `p`, `q`, `r`, returns `true` if `q` lies on segment `pr`.
#[must_use]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Returns `true` if segment `p1q1` intersects segment `p2q2`, touching included.
#[must_use]
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear fallbacks: an endpoint of one segment lies on the other.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
