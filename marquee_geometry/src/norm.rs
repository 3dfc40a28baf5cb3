// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, Sub};

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// A point in normalized image space.
///
/// Both components are fractions of the displayed image: `(0, 0)` is its
/// top-left corner and `(1, 1)` its bottom-right. Values outside `[0, 1]` are
/// representable (a drag sample may briefly leave the image) but shapes keep
/// their committed corners inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormPoint {
    /// Horizontal fraction of the image width.
    pub x: f64,
    /// Vertical fraction of the image height.
    pub y: f64,
}

impl NormPoint {
    /// The image origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new normalized point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Interpolates independently along each axis.
    ///
    /// `tx` and `ty` are the fractions of the way from `self` to `other` along
    /// x and y respectively.
    #[must_use]
    pub fn lerp_axes(self, other: Self, tx: f64, ty: f64) -> Self {
        Self::new(
            self.x + tx * (other.x - self.x),
            self.y + ty * (other.y - self.y),
        )
    }
}

impl From<(f64, f64)> for NormPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Sub for NormPoint {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for NormPoint {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vec2> for NormPoint {
    type Output = Self;

    fn sub(self, rhs: Vec2) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::NormPoint;

    #[test]
    fn midpoint_and_lerp() {
        let a = NormPoint::new(0.1, 0.2);
        let b = NormPoint::new(0.7, 0.8);
        let mid = a.midpoint(b);
        assert!((mid.x - 0.4).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);

        let sixth = a.lerp_axes(b, 1.0 / 6.0, 5.0 / 6.0);
        assert!((sixth.x - 0.2).abs() < 1e-12);
        assert!((sixth.y - 0.7).abs() < 1e-12);
    }

    #[test]
    fn vector_arithmetic() {
        let a = NormPoint::new(0.25, 0.5);
        let b = NormPoint::new(0.5, 0.25);
        assert_eq!(b - a, Vec2::new(0.25, -0.25));
        assert_eq!(a + (b - a), b);
        assert_eq!(b - (b - a), a);
    }
}
