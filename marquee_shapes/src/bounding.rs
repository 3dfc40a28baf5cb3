// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};
use marquee_geometry::{DisplayRect, NormPoint, to_source_pixels};
use marquee_hit::quad_contains;

use crate::annotation::Annotation;
use crate::limits::EditLimits;
use crate::meta::ShapeMeta;
use crate::outcome::{DragOutcome, Rejection};
use crate::record::BoxRecord;

/// Fractional offsets of the grip handles along each axis.
const GRIP_STOPS: [f64; 3] = [1.0 / 6.0, 0.5, 5.0 / 6.0];

/// One of the four corners of a [`BoundingBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// The stored primary corner.
    Primary,
    /// Derived corner sharing the primary corner's row: `(opposite.x, primary.y)`.
    PrimaryRow,
    /// The stored opposite corner.
    Opposite,
    /// Derived corner sharing the primary corner's column: `(primary.x, opposite.y)`.
    PrimaryColumn,
}

impl Corner {
    /// All corners in wrap order.
    pub const ALL: [Self; 4] = [
        Self::Primary,
        Self::PrimaryRow,
        Self::Opposite,
        Self::PrimaryColumn,
    ];
}

/// A control point of a [`BoundingBox`] that a drag can grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxHandle {
    /// A corner; dragging it resizes.
    Corner(Corner),
    /// The center; dragging it moves the whole box.
    Center,
    /// One of the eight off-center grips; dragging it moves the whole box.
    ///
    /// `column` and `row` index the stops `1/6`, `1/2`, `5/6` between the
    /// primary and opposite corners. `(1, 1)` is the center and never occurs.
    Grip {
        /// Horizontal stop index.
        column: u8,
        /// Vertical stop index.
        row: u8,
    },
}

/// An axis-aligned rectangle annotation.
///
/// Only two corners are stored: `primary` and `opposite`. They may sit in any
/// relative arrangement. The other two corners are derived on read, so the
/// four corners always form a rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    primary: NormPoint,
    opposite: NormPoint,
    /// Label, tags and other descriptive data.
    pub meta: ShapeMeta,
}

impl BoundingBox {
    /// Creates a box from two diagonal corners.
    #[must_use]
    pub fn new(primary: NormPoint, opposite: NormPoint) -> Self {
        Self::with_meta(primary, opposite, ShapeMeta::default())
    }

    /// Creates a box from two diagonal corners and its metadata.
    #[must_use]
    pub fn with_meta(primary: NormPoint, opposite: NormPoint, meta: ShapeMeta) -> Self {
        Self {
            primary,
            opposite,
            meta,
        }
    }

    /// The stored primary corner.
    #[must_use]
    pub fn primary(&self) -> NormPoint {
        self.primary
    }

    /// The stored opposite corner.
    #[must_use]
    pub fn opposite(&self) -> NormPoint {
        self.opposite
    }

    /// Replaces both stored corners.
    pub fn set_diagonal(&mut self, primary: NormPoint, opposite: NormPoint) {
        self.primary = primary;
        self.opposite = opposite;
    }

    /// Returns the position of `corner`.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> NormPoint {
        match corner {
            Corner::Primary => self.primary,
            Corner::PrimaryRow => NormPoint::new(self.opposite.x, self.primary.y),
            Corner::Opposite => self.opposite,
            Corner::PrimaryColumn => NormPoint::new(self.primary.x, self.opposite.y),
        }
    }

    /// All four corners in wrap order (see [`Corner::ALL`]).
    #[must_use]
    pub fn corners(&self) -> [NormPoint; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    /// Top-left corner regardless of how the diagonal was recorded.
    #[must_use]
    pub fn min(&self) -> NormPoint {
        NormPoint::new(
            self.primary.x.min(self.opposite.x),
            self.primary.y.min(self.opposite.y),
        )
    }

    /// Bottom-right corner regardless of how the diagonal was recorded.
    #[must_use]
    pub fn max(&self) -> NormPoint {
        NormPoint::new(
            self.primary.x.max(self.opposite.x),
            self.primary.y.max(self.opposite.y),
        )
    }

    /// The center of the box.
    #[must_use]
    pub fn center(&self) -> NormPoint {
        self.primary.midpoint(self.opposite)
    }

    /// The four corners in display coordinates, in wrap order.
    #[must_use]
    pub fn display_corners(&self, frame: &DisplayRect) -> [Point; 4] {
        self.corners().map(|c| frame.to_display(c))
    }

    /// Position of a control point.
    #[must_use]
    pub fn handle_position(&self, handle: BoxHandle) -> NormPoint {
        match handle {
            BoxHandle::Corner(c) => self.corner(c),
            BoxHandle::Center => self.center(),
            BoxHandle::Grip { column, row } => self.primary.lerp_axes(
                self.opposite,
                GRIP_STOPS[usize::from(column)],
                GRIP_STOPS[usize::from(row)],
            ),
        }
    }

    /// Every control point, in tie-break order.
    ///
    /// When two handles are equally near, the one listed first wins.
    pub fn handles() -> impl Iterator<Item = BoxHandle> {
        let corners = [
            Corner::Opposite,
            Corner::Primary,
            Corner::PrimaryRow,
            Corner::PrimaryColumn,
        ]
        .into_iter()
        .map(BoxHandle::Corner);
        let grips = (0..3_u8)
            .flat_map(|row| (0..3_u8).map(move |column| (column, row)))
            .filter(|&(column, row)| (column, row) != (1, 1))
            .map(|(column, row)| BoxHandle::Grip { column, row });
        corners.chain(core::iter::once(BoxHandle::Center)).chain(grips)
    }

    /// Returns the handle nearest to display point `p` and its squared display distance.
    #[must_use]
    pub fn nearest_handle(&self, p: Point, frame: &DisplayRect) -> (BoxHandle, f64) {
        let mut best = (BoxHandle::Corner(Corner::Opposite), f64::INFINITY);
        for handle in Self::handles() {
            let d = (frame.to_display(self.handle_position(handle)) - p).hypot2();
            if d < best.1 {
                best = (handle, d);
            }
        }
        best
    }

    /// Applies one drag sample at display point `p`.
    ///
    /// The nearest control point is moved onto `p`. Corners resize the box;
    /// the center and grips translate it. Nothing changes unless the result
    /// stays inside the display and satisfies the size limits.
    pub fn drag(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> DragOutcome<BoxHandle> {
        let (handle, distance_sq) = self.nearest_handle(p, frame);
        if distance_sq >= limits.handle_reach_sq {
            return DragOutcome::OutOfReach { distance_sq };
        }

        let target = frame.to_normalized(p);
        let (primary, opposite) = match handle {
            BoxHandle::Corner(corner) => {
                if !frame.contains_norm_strict(target) {
                    return DragOutcome::Rejected(handle, Rejection::LeavesDisplay);
                }
                self.resized(corner, target)
            }
            BoxHandle::Center | BoxHandle::Grip { .. } => {
                let delta = target - self.handle_position(handle);
                let moved = (self.primary + delta, self.opposite + delta);
                let probe = Self::new(moved.0, moved.1);
                if !frame.contains_norm_strict(probe.min()) || !frame.contains_norm_strict(probe.max()) {
                    return DragOutcome::Rejected(handle, Rejection::LeavesDisplay);
                }
                moved
            }
        };

        if !limits.size.admits(primary, opposite, frame, zoom_scale) {
            log::trace!("box drag via {handle:?} rejected: below size limits");
            return DragOutcome::Rejected(handle, Rejection::TooSmall);
        }
        self.primary = primary;
        self.opposite = opposite;
        DragOutcome::Applied(handle)
    }

    /// Returns the stored corners after placing `corner` at `target`.
    fn resized(&self, corner: Corner, target: NormPoint) -> (NormPoint, NormPoint) {
        let (mut primary, mut opposite) = (self.primary, self.opposite);
        match corner {
            Corner::Primary => primary = target,
            Corner::Opposite => opposite = target,
            Corner::PrimaryRow => {
                opposite.x = target.x;
                primary.y = target.y;
            }
            Corner::PrimaryColumn => {
                primary.x = target.x;
                opposite.y = target.y;
            }
        }
        (primary, opposite)
    }

    /// Returns `true` if display point `p` is inside the box or on its outline.
    #[must_use]
    pub fn contains(&self, p: Point, frame: &DisplayRect) -> bool {
        quad_contains(&self.display_corners(frame), p)
    }

    /// Exports the box in source-image pixel space.
    #[must_use]
    pub fn export(&self, image: Size) -> BoxRecord {
        let min = to_source_pixels(self.min(), image);
        let max = to_source_pixels(self.max(), image);
        BoxRecord {
            points: [[min.x, min.y], [max.x, max.y]],
            input: self.meta.label.clone(),
            tags: self.meta.tags.clone(),
            paint_color: self.meta.color.clone(),
            object_index: self.meta.id.clone(),
            object_name: self.meta.name.clone(),
            annotation_state: self.meta.provenance,
            should_remove: self.meta.proposed_removal,
        }
    }
}

impl Annotation for BoundingBox {
    type Handle = BoxHandle;
    type Record = BoxRecord;

    const SNAPS_TO_CANDIDATES: bool = true;

    fn from_diagonal(a: NormPoint, b: NormPoint, meta: ShapeMeta) -> Self {
        Self::with_meta(a, b, meta)
    }

    fn primary(&self) -> NormPoint {
        self.primary
    }

    fn opposite(&self) -> NormPoint {
        self.opposite
    }

    fn set_diagonal(&mut self, primary: NormPoint, opposite: NormPoint) {
        Self::set_diagonal(self, primary, opposite);
    }

    fn meta(&self) -> &ShapeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ShapeMeta {
        &mut self.meta
    }

    fn contains(&self, p: Point, frame: &DisplayRect) -> bool {
        Self::contains(self, p, frame)
    }

    fn drag(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> DragOutcome<BoxHandle> {
        Self::drag(self, p, frame, zoom_scale, limits)
    }

    fn set_label(&mut self, _segment: Option<usize>, value: String) -> bool {
        self.meta.label = Some(value);
        true
    }

    fn first_unlabeled(&self) -> Option<usize> {
        (!self.meta.has_label()).then_some(0)
    }

    fn matches_label(&self, filter: &str) -> bool {
        self.meta.label.as_deref() == Some(filter)
    }

    fn export(&self, image: Size) -> BoxRecord {
        Self::export(self, image)
    }
}
