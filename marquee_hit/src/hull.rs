// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

use crate::orient::{Orientation, orientation};

/// Hull vertices in wrap order. Inline for up to eight points.
pub type Hull = SmallVec<[Point; 8]>;

/// Computes the convex hull of `points` by gift wrapping.
///
/// The scan starts at the leftmost point (first one wins on ties) and at each
/// step picks the candidate such that no other point lies counter-clockwise
/// of the line from the current hull point to that candidate. It stops once
/// the wrap returns to the starting point. Collinear points on a hull edge are
/// skipped.
///
/// Fewer than three points are returned unchanged. The number of wrap steps
/// is bounded by the input length, so duplicated or degenerate input cannot
/// loop forever.
#[must_use]
pub fn convex_hull(points: &[Point]) -> Hull {
    let n = points.len();
    if n < 3 {
        return points.iter().copied().collect();
    }

    let mut leftmost = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.x < points[leftmost].x {
            leftmost = i;
        }
    }

    let mut hull = Hull::new();
    let mut current = leftmost;
    loop {
        hull.push(points[current]);

        let mut next = (current + 1) % n;
        for i in 0..n {
            if orientation(points[current], points[i], points[next]) == Orientation::CounterClockwise {
                next = i;
            }
        }
        current = next;

        if current == leftmost || hull.len() >= n {
            break;
        }
    }
    hull
}
