// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::NormPoint;

/// The screen-space rectangle the displayed image currently occupies.
///
/// `DisplayRect` is the transform parameter for every geometry operation: it
/// converts between [`NormPoint`] and display points, and it measures
/// distances in display pixels. It is cheap to copy and carries no other state,
/// so callers rebuild it whenever the host view zooms, pans or resizes.
///
/// The wrapped rectangle always has a positive, finite width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    rect: Rect,
}

impl DisplayRect {
    /// Creates a display rectangle, normalizing inverted edges.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Degenerate`] if the rectangle has zero area, or
    /// [`FrameError::NonFinite`] if any edge is NaN or infinite.
    pub fn new(rect: Rect) -> Result<Self, FrameError> {
        if !rect.is_finite() {
            return Err(FrameError::NonFinite);
        }
        let rect = rect.abs();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(FrameError::Degenerate {
                width: rect.width(),
                height: rect.height(),
            });
        }
        Ok(Self { rect })
    }

    /// Creates a display rectangle from an origin and a size.
    ///
    /// # Errors
    ///
    /// See [`DisplayRect::new`].
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Result<Self, FrameError> {
        Self::new(Rect::from_origin_size(origin, size))
    }

    /// Returns the underlying rectangle in display coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Converts a normalized point into display coordinates.
    ///
    /// `absolute = normalized * size + origin`.
    #[must_use]
    pub fn to_display(&self, p: NormPoint) -> Point {
        Point::new(
            p.x * self.rect.width() + self.rect.x0,
            p.y * self.rect.height() + self.rect.y0,
        )
    }

    /// Converts a display point into normalized coordinates.
    #[must_use]
    pub fn to_normalized(&self, p: Point) -> NormPoint {
        NormPoint::new(
            (p.x - self.rect.x0) / self.rect.width(),
            (p.y - self.rect.y0) / self.rect.height(),
        )
    }

    /// Returns `true` if `p` lies strictly inside the rectangle (edges excluded).
    #[must_use]
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > self.rect.x0 && p.x < self.rect.x1 && p.y > self.rect.y0 && p.y < self.rect.y1
    }

    /// Returns `true` if the normalized point maps strictly inside the rectangle.
    #[must_use]
    pub fn contains_norm_strict(&self, p: NormPoint) -> bool {
        self.contains_strict(self.to_display(p))
    }

    /// Squared display-space distance between two normalized points.
    #[must_use]
    pub fn distance_sq(&self, a: NormPoint, b: NormPoint) -> f64 {
        (self.to_display(b) - self.to_display(a)).hypot2()
    }

    /// Display-space distance between two normalized points.
    #[must_use]
    pub fn distance(&self, a: NormPoint, b: NormPoint) -> f64 {
        (self.to_display(b) - self.to_display(a)).hypot()
    }

    /// Absolute display-space width and height of the rectangle spanned by `a` and `b`.
    #[must_use]
    pub fn extent(&self, a: NormPoint, b: NormPoint) -> Size {
        let d = self.to_display(b) - self.to_display(a);
        Size::new(d.x.abs(), d.y.abs())
    }
}

/// Error returned when a [`DisplayRect`] cannot be built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameError {
    /// The rectangle has zero width or height.
    Degenerate {
        /// Width after normalizing edges.
        width: f64,
        /// Height after normalizing edges.
        height: f64,
    },
    /// An edge is NaN or infinite.
    NonFinite,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { width, height } => {
                write!(f, "display rect has no area ({width} x {height})")
            }
            Self::NonFinite => f.write_str("display rect has a non-finite edge"),
        }
    }
}

impl core::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{DisplayRect, FrameError};
    use crate::NormPoint;

    fn frame() -> DisplayRect {
        DisplayRect::new(Rect::new(100.0, 50.0, 900.0, 650.0)).unwrap()
    }

    #[test]
    fn normalized_display_roundtrip() {
        let frame = frame();
        for &(x, y) in &[(0.0, 0.0), (0.1, 0.9), (0.5, 0.5), (1.0, 1.0), (0.333, 0.777)] {
            let p = NormPoint::new(x, y);
            let back = frame.to_normalized(frame.to_display(p));
            assert!((back.x - p.x).abs() < 1e-12, "x drifted for {p:?}");
            assert!((back.y - p.y).abs() < 1e-12, "y drifted for {p:?}");
        }
    }

    #[test]
    fn to_display_applies_origin_and_size() {
        let frame = frame();
        assert_eq!(frame.to_display(NormPoint::ORIGIN), Point::new(100.0, 50.0));
        assert_eq!(frame.to_display(NormPoint::new(1.0, 1.0)), Point::new(900.0, 650.0));
        assert_eq!(frame.to_display(NormPoint::new(0.25, 0.5)), Point::new(300.0, 350.0));
    }

    #[test]
    fn inverted_rect_is_normalized() {
        let frame = DisplayRect::new(Rect::new(900.0, 650.0, 100.0, 50.0)).unwrap();
        assert_eq!(frame.rect(), Rect::new(100.0, 50.0, 900.0, 650.0));
    }

    #[test]
    fn degenerate_and_non_finite_rects_are_rejected() {
        assert_eq!(
            DisplayRect::new(Rect::new(0.0, 0.0, 0.0, 10.0)),
            Err(FrameError::Degenerate {
                width: 0.0,
                height: 10.0
            })
        );
        assert_eq!(
            DisplayRect::new(Rect::new(0.0, 0.0, f64::NAN, 10.0)),
            Err(FrameError::NonFinite)
        );
    }

    #[test]
    fn strict_containment_excludes_edges() {
        let frame = frame();
        assert!(frame.contains_strict(Point::new(500.0, 300.0)));
        assert!(!frame.contains_strict(Point::new(100.0, 300.0)));
        assert!(!frame.contains_strict(Point::new(500.0, 650.0)));
        assert!(frame.contains_norm_strict(NormPoint::new(0.01, 0.99)));
        assert!(!frame.contains_norm_strict(NormPoint::new(1.0, 0.5)));
    }

    #[test]
    fn distances_are_measured_in_display_pixels() {
        let frame = frame();
        let a = NormPoint::new(0.0, 0.0);
        let b = NormPoint::new(0.375, 0.5);
        // 0.375 * 800 = 300, 0.5 * 600 = 300.
        assert!((frame.distance_sq(a, b) - 180_000.0).abs() < 1e-6);
        assert_eq!(frame.extent(b, a), Size::new(300.0, 300.0));
    }
}
