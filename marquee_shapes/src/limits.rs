// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use marquee_geometry::{DisplayRect, NormPoint, zoom_factor};
use serde::{Deserialize, Serialize};

/// Minimum on-screen size for a committed rectangle, in display pixels at zoom 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeLimits {
    /// The diagonal must be strictly longer than this.
    pub min_diagonal: f64,
    /// Width and height must each be at least this.
    pub min_side: f64,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_diagonal: 40.0,
            min_side: 20.0,
        }
    }
}

impl SizeLimits {
    /// Returns `true` if the rectangle spanned by `a` and `b` is large enough.
    ///
    /// Both minimums are multiplied by [`zoom_factor`] of `zoom_scale` before
    /// comparing against display-space extents.
    #[must_use]
    pub fn admits(&self, a: NormPoint, b: NormPoint, frame: &DisplayRect, zoom_scale: f64) -> bool {
        let factor = zoom_factor(zoom_scale);
        let extent = frame.extent(a, b);
        let diagonal = frame.distance(a, b);
        diagonal > self.min_diagonal * factor
            && extent.width >= self.min_side * factor
            && extent.height >= self.min_side * factor
    }
}

/// Parameters shared by every drag engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLimits {
    /// Size policy every committed edit must satisfy.
    pub size: SizeLimits,
    /// Squared display distance beyond which a drag sample grabs no handle.
    pub handle_reach_sq: f64,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            size: SizeLimits::default(),
            handle_reach_sq: 6000.0,
        }
    }
}
