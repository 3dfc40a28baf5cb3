// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Why a drag sample that grabbed a handle was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The result would fall below the size limits.
    TooSmall,
    /// The result would leave the display rectangle.
    LeavesDisplay,
    /// An edge would cross the opposite edge.
    Inverted,
    /// A segment ratio would drop to zero or below.
    RatioCollapse,
}

/// Result of feeding one drag sample to a shape.
///
/// Every variant other than [`DragOutcome::Applied`] leaves the shape's
/// geometry exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome<H> {
    /// The handle moved and the new geometry was committed.
    Applied(H),
    /// The nearest handle was too far away; the sample was ignored.
    OutOfReach {
        /// Squared display distance to the nearest handle.
        distance_sq: f64,
    },
    /// The handle was grabbed but the result violated a constraint.
    Rejected(H, Rejection),
}

impl<H> DragOutcome<H> {
    /// Returns `true` if the geometry changed.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
