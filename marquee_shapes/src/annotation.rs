// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};
use marquee_geometry::{DisplayRect, NormPoint};
use serde::Serialize;

use crate::limits::EditLimits;
use crate::meta::ShapeMeta;
use crate::outcome::DragOutcome;

/// Behavior shared by every shape an editor can hold.
///
/// Implemented by [`BoundingBox`](crate::BoundingBox) and
/// [`SplitBox`](crate::SplitBox). All display-space arguments are interpreted
/// through the `frame` passed alongside them; shapes store only normalized
/// coordinates.
pub trait Annotation: Clone {
    /// Control point type reported by [`Annotation::drag`].
    type Handle: Copy + core::fmt::Debug + PartialEq;
    /// Persisted form produced by [`Annotation::export`].
    type Record: Serialize;

    /// Whether freshly drawn shapes of this kind snap their corners to
    /// detected candidate points.
    const SNAPS_TO_CANDIDATES: bool;

    /// Builds a shape from the two corners of a drawn diagonal.
    fn from_diagonal(a: NormPoint, b: NormPoint, meta: ShapeMeta) -> Self;

    /// The stored primary corner.
    fn primary(&self) -> NormPoint;

    /// The stored opposite corner.
    fn opposite(&self) -> NormPoint;

    /// Replaces both stored corners.
    fn set_diagonal(&mut self, primary: NormPoint, opposite: NormPoint);

    /// Descriptive data.
    fn meta(&self) -> &ShapeMeta;

    /// Mutable descriptive data.
    fn meta_mut(&mut self) -> &mut ShapeMeta;

    /// Returns `true` if display point `p` hits the shape.
    fn contains(&self, p: Point, frame: &DisplayRect) -> bool;

    /// Zero-based segment under display point `p`, for shapes that have
    /// segments. Plain shapes return `None`.
    fn segment_at(&self, p: Point, frame: &DisplayRect) -> Option<usize> {
        let _ = (p, frame);
        None
    }

    /// Returns `true` if the shape is divided into labeled segments.
    fn is_segmented(&self) -> bool {
        false
    }

    /// Applies one drag sample at display point `p`.
    fn drag(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> DragOutcome<Self::Handle>;

    /// Stores a label, on `segment` for segmented shapes.
    ///
    /// Returns `false` if there was nothing to label.
    fn set_label(&mut self, segment: Option<usize>, value: String) -> bool;

    /// The first unlabeled segment (always `0` for plain shapes), if any.
    fn first_unlabeled(&self) -> Option<usize>;

    /// Returns `true` if the shape carries the label `filter`.
    fn matches_label(&self, filter: &str) -> bool;

    /// Exports the shape in source-image pixel space.
    fn export(&self, image: Size) -> Self::Record;
}
