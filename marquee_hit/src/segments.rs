// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::polygon::quad_contains;

/// Where a point landed relative to a split box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentHit {
    /// The point is outside the box.
    Outside,
    /// The point is inside a box that has no internal boundaries.
    Unsegmented,
    /// The point is inside the segment with this zero-based index, counted
    /// left to right.
    Segment(usize),
}

impl SegmentHit {
    /// Legacy integer encoding: `-1` outside, `0` unsegmented, otherwise the
    /// one-based segment index.
    #[must_use]
    pub fn code(self) -> isize {
        match self {
            Self::Outside => -1,
            Self::Unsegmented => 0,
            Self::Segment(i) => i as isize + 1,
        }
    }
}

/// Locates `p` within a box split by vertical boundaries.
///
/// `outline` is `[top_left, top_right, bottom_right, bottom_left]` and each
/// entry of `boundaries` is a `(top, bottom)` pair, ordered left to right.
/// The whole box is tested first. Then each sub-quad between consecutive
/// boundaries is tested, with the outer edges closing the first and last
/// sub-quads.
#[must_use]
pub fn segment_hit(outline: &[Point; 4], boundaries: &[(Point, Point)], p: Point) -> SegmentHit {
    if !quad_contains(outline, p) {
        return SegmentHit::Outside;
    }
    if boundaries.is_empty() {
        return SegmentHit::Unsegmented;
    }

    let [top_left, top_right, bottom_right, bottom_left] = *outline;
    let last = boundaries.len();
    for i in 0..=last {
        let (left_top, left_bottom) = if i == 0 {
            (top_left, bottom_left)
        } else {
            boundaries[i - 1]
        };
        let (right_top, right_bottom) = if i == last {
            (top_right, bottom_right)
        } else {
            boundaries[i]
        };
        if quad_contains(&[left_top, right_top, right_bottom, left_bottom], p) {
            return SegmentHit::Segment(i);
        }
    }
    SegmentHit::Outside
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{SegmentHit, segment_hit};

    fn outline() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            Point::new(300.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    }

    fn thirds() -> [(Point, Point); 2] {
        [
            (Point::new(100.0, 0.0), Point::new(100.0, 100.0)),
            (Point::new(200.0, 0.0), Point::new(200.0, 100.0)),
        ]
    }

    #[test]
    fn finds_each_segment() {
        let outline = outline();
        let b = thirds();
        assert_eq!(segment_hit(&outline, &b, Point::new(50.0, 50.0)), SegmentHit::Segment(0));
        assert_eq!(segment_hit(&outline, &b, Point::new(150.0, 50.0)), SegmentHit::Segment(1));
        assert_eq!(segment_hit(&outline, &b, Point::new(250.0, 50.0)), SegmentHit::Segment(2));
    }

    #[test]
    fn outside_and_unsegmented() {
        let outline = outline();
        assert_eq!(
            segment_hit(&outline, &thirds(), Point::new(350.0, 50.0)),
            SegmentHit::Outside
        );
        assert_eq!(
            segment_hit(&outline, &[], Point::new(150.0, 50.0)),
            SegmentHit::Unsegmented
        );
    }

    #[test]
    fn legacy_codes() {
        assert_eq!(SegmentHit::Outside.code(), -1);
        assert_eq!(SegmentHit::Unsegmented.code(), 0);
        assert_eq!(SegmentHit::Segment(0).code(), 1);
        assert_eq!(SegmentHit::Segment(4).code(), 5);
    }
}
