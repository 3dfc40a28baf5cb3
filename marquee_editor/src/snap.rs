// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use marquee_geometry::{DisplayRect, NormPoint};
use marquee_shapes::{BoundingBox, Corner};

/// Nearest candidate to `corner` closer than `threshold` display pixels.
///
/// Returns the corner itself with distance [`f64::MAX`] when nothing is in range.
fn nearest(corner: NormPoint, candidates: &[NormPoint], frame: &DisplayRect, threshold: f64) -> (NormPoint, f64) {
    let mut best = (corner, f64::MAX);
    for &candidate in candidates {
        let d = frame.distance(candidate, corner);
        if d < threshold && d < best.1 {
            best = (candidate, d);
        }
    }
    best
}

/// Pulls the corners of a drawn rectangle onto nearby detected points.
///
/// Each of the four corners snaps independently to its nearest candidate
/// within `threshold` display pixels; corners with no candidate in range stay
/// where they were drawn. The drawn diagonal and its mirror are then compared
/// by total snap distance (an unsnapped corner counts as [`f64::MAX`]) and the
/// cheaper one supplies the result. When the mirror wins, the returned
/// primary corner takes its x from the snapped `(primary.x, opposite.y)`
/// corner and its y from the snapped `(opposite.x, primary.y)` corner, and the
/// opposite corner the other way round.
#[must_use]
pub fn snap_corners(
    primary: NormPoint,
    opposite: NormPoint,
    candidates: &[NormPoint],
    frame: &DisplayRect,
    threshold: f64,
) -> (NormPoint, NormPoint) {
    if candidates.is_empty() {
        return (primary, opposite);
    }
    let drawn = BoundingBox::new(primary, opposite);
    let (p, dp) = nearest(primary, candidates, frame, threshold);
    let (o, d_o) = nearest(opposite, candidates, frame, threshold);
    let (row, d_row) = nearest(drawn.corner(Corner::PrimaryRow), candidates, frame, threshold);
    let (column, d_column) = nearest(drawn.corner(Corner::PrimaryColumn), candidates, frame, threshold);

    if dp + d_o > d_row + d_column {
        log::debug!("snapped to mirrored diagonal (cost {} vs {})", d_row + d_column, dp + d_o);
        (NormPoint::new(column.x, row.y), NormPoint::new(row.x, column.y))
    } else {
        (p, o)
    }
}
