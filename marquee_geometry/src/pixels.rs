// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Source-image pixel conversions and zoom scaling.

use kurbo::{Point, Size};

use crate::NormPoint;

/// Maps a normalized point onto the pixel grid of the source image.
#[must_use]
pub fn to_source_pixels(p: NormPoint, image: Size) -> Point {
    Point::new(p.x * image.width, p.y * image.height)
}

/// Maps a source-image pixel position back to normalized coordinates.
///
/// Returns `None` if the image has no area.
#[must_use]
pub fn from_source_pixels(p: Point, image: Size) -> Option<NormPoint> {
    if image.width <= 0.0 || image.height <= 0.0 {
        return None;
    }
    Some(NormPoint::new(p.x / image.width, p.y / image.height))
}

/// Multiplier applied to on-screen size minimums at the given raw zoom scale.
///
/// An unzoomed view (`scale == 1.0`) uses the minimums as-is; any other scale
/// grows them by a quarter of the scale on top of the base value.
#[must_use]
pub fn zoom_factor(scale: f64) -> f64 {
    if scale == 1.0 { 1.0 } else { 1.0 + scale * 0.25 }
}
