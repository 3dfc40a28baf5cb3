// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};
use marquee_geometry::{DisplayRect, NormPoint, to_source_pixels};
use marquee_hit::{SegmentHit, segment_hit};

use crate::annotation::Annotation;
use crate::bounding::BoundingBox;
use crate::limits::EditLimits;
use crate::meta::ShapeMeta;
use crate::outcome::{DragOutcome, Rejection};
use crate::record::SplitBoxRecord;

/// A side of a [`SplitBox`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The left side.
    Left,
    /// The top side.
    Top,
    /// The right side.
    Right,
    /// The bottom side.
    Bottom,
}

/// A control point of a [`SplitBox`] that a drag can grab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitHandle {
    /// Midpoint of an outer edge; dragging it moves that edge only.
    Edge(Edge),
    /// Midpoint of the internal boundary to the right of segment `i`.
    Boundary(usize),
}

/// A rectangle divided into vertical segments by proportional weights.
///
/// Segment `i` spans `ratios[i] / sum(ratios)` of the width and carries
/// `labels[i]`. The two lists always have the same, non-zero length and every
/// ratio is positive, so boundaries are strictly increasing left to right.
///
/// The outline is always kept with its primary corner at the top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitBox {
    outline: BoundingBox,
    ratios: Vec<f64>,
    labels: Vec<String>,
}

impl SplitBox {
    /// Creates a single-segment box spanning the diagonal from `a` to `b`.
    #[must_use]
    pub fn new(a: NormPoint, b: NormPoint) -> Self {
        Self::with_meta(a, b, ShapeMeta::default())
    }

    /// Creates a single-segment box with metadata.
    #[must_use]
    pub fn with_meta(a: NormPoint, b: NormPoint, meta: ShapeMeta) -> Self {
        Self {
            outline: normalized_outline(a, b, meta),
            ratios: vec![1.0],
            labels: vec![String::new()],
        }
    }

    /// Creates a box with explicit segments.
    ///
    /// # Errors
    ///
    /// Returns a [`SegmentError`] if the lists are empty, differ in length, or
    /// contain a ratio that is not a positive finite number.
    pub fn with_segments(
        a: NormPoint,
        b: NormPoint,
        ratios: Vec<f64>,
        labels: Vec<String>,
        meta: ShapeMeta,
    ) -> Result<Self, SegmentError> {
        if ratios.is_empty() {
            return Err(SegmentError::Empty);
        }
        if ratios.len() != labels.len() {
            return Err(SegmentError::LengthMismatch {
                ratios: ratios.len(),
                labels: labels.len(),
            });
        }
        if let Some(index) = ratios.iter().position(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(SegmentError::NonPositiveRatio { index });
        }
        Ok(Self {
            outline: normalized_outline(a, b, meta),
            ratios,
            labels,
        })
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> NormPoint {
        self.outline.primary()
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> NormPoint {
        self.outline.opposite()
    }

    /// The outline as a plain box.
    #[must_use]
    pub fn outline(&self) -> &BoundingBox {
        &self.outline
    }

    /// Segment weights, left to right.
    #[must_use]
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Segment labels, left to right. Unlabeled segments hold an empty string.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of segments. Always at least one.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.ratios.len()
    }

    /// Outline corners in display coordinates as
    /// `[top_left, top_right, bottom_right, bottom_left]`.
    #[must_use]
    pub fn display_corners(&self, frame: &DisplayRect) -> [Point; 4] {
        let tl = self.top_left();
        let br = self.bottom_right();
        [
            frame.to_display(tl),
            frame.to_display(NormPoint::new(br.x, tl.y)),
            frame.to_display(br),
            frame.to_display(NormPoint::new(tl.x, br.y)),
        ]
    }

    /// Normalized x of every internal boundary, left to right.
    #[must_use]
    pub fn boundary_xs(&self) -> Vec<f64> {
        let tl = self.top_left();
        let width = self.bottom_right().x - tl.x;
        let total: f64 = self.ratios.iter().sum();
        let mut acc = 0.0;
        self.ratios[..self.ratios.len() - 1]
            .iter()
            .map(|r| {
                acc += r;
                tl.x + width * acc / total
            })
            .collect()
    }

    /// Internal boundaries as `(top, bottom)` display-space segments, left to right.
    #[must_use]
    pub fn boundary_lines(&self, frame: &DisplayRect) -> Vec<(Point, Point)> {
        let top = self.top_left().y;
        let bottom = self.bottom_right().y;
        self.boundary_xs()
            .into_iter()
            .map(|x| {
                (
                    frame.to_display(NormPoint::new(x, top)),
                    frame.to_display(NormPoint::new(x, bottom)),
                )
            })
            .collect()
    }

    /// Locates display point `p` within the box.
    #[must_use]
    pub fn hit(&self, p: Point, frame: &DisplayRect) -> SegmentHit {
        segment_hit(&self.display_corners(frame), &self.boundary_lines(frame), p)
    }

    /// Position of a control point.
    ///
    /// `Boundary(i)` for `i` past the last internal boundary resolves to the
    /// right edge midpoint.
    #[must_use]
    pub fn handle_position(&self, handle: SplitHandle) -> NormPoint {
        let tl = self.top_left();
        let br = self.bottom_right();
        let mid = tl.midpoint(br);
        match handle {
            SplitHandle::Edge(Edge::Left) => NormPoint::new(tl.x, mid.y),
            SplitHandle::Edge(Edge::Top) => NormPoint::new(mid.x, tl.y),
            SplitHandle::Edge(Edge::Right) => NormPoint::new(br.x, mid.y),
            SplitHandle::Edge(Edge::Bottom) => NormPoint::new(mid.x, br.y),
            SplitHandle::Boundary(i) => {
                let x = self.boundary_xs().get(i).copied().unwrap_or(br.x);
                NormPoint::new(x, mid.y)
            }
        }
    }

    /// Returns the handle nearest to display point `p` and its squared display distance.
    ///
    /// Edges are considered before boundaries; the first of equally near
    /// handles wins.
    #[must_use]
    pub fn nearest_handle(&self, p: Point, frame: &DisplayRect) -> (SplitHandle, f64) {
        let edges = [Edge::Top, Edge::Left, Edge::Right, Edge::Bottom]
            .into_iter()
            .map(SplitHandle::Edge);
        let boundaries = (0..self.ratios.len() - 1).map(SplitHandle::Boundary);
        let mut best = (SplitHandle::Edge(Edge::Top), f64::INFINITY);
        for handle in edges.chain(boundaries) {
            let d = (frame.to_display(self.handle_position(handle)) - p).hypot2();
            if d < best.1 {
                best = (handle, d);
            }
        }
        best
    }

    /// Applies one drag sample at display point `p`.
    ///
    /// Edge handles move a single side onto `p`. Boundary handles shift weight
    /// between the two adjacent segments; the sum of that pair and every other
    /// ratio are preserved.
    pub fn drag(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> DragOutcome<SplitHandle> {
        let (handle, distance_sq) = self.nearest_handle(p, frame);
        if distance_sq >= limits.handle_reach_sq {
            return DragOutcome::OutOfReach { distance_sq };
        }
        let result = match handle {
            SplitHandle::Edge(edge) => self.drag_edge(edge, p, frame, zoom_scale, limits),
            SplitHandle::Boundary(i) => self.drag_boundary(i, p, frame),
        };
        match result {
            Ok(()) => DragOutcome::Applied(handle),
            Err(rejection) => {
                log::trace!("split drag via {handle:?} rejected: {rejection:?}");
                DragOutcome::Rejected(handle, rejection)
            }
        }
    }

    fn drag_edge(
        &mut self,
        edge: Edge,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> Result<(), Rejection> {
        let area = frame.rect();
        let inside = match edge {
            Edge::Left | Edge::Right => p.x > area.x0 && p.x < area.x1,
            Edge::Top | Edge::Bottom => p.y > area.y0 && p.y < area.y1,
        };
        if !inside {
            return Err(Rejection::LeavesDisplay);
        }

        let target = frame.to_normalized(p);
        let mut tl = self.top_left();
        let mut br = self.bottom_right();
        match edge {
            Edge::Left => tl.x = target.x,
            Edge::Top => tl.y = target.y,
            Edge::Right => br.x = target.x,
            Edge::Bottom => br.y = target.y,
        }
        if tl.x >= br.x || tl.y >= br.y {
            return Err(Rejection::Inverted);
        }
        if !limits.size.admits(tl, br, frame, zoom_scale) {
            return Err(Rejection::TooSmall);
        }
        self.outline.set_diagonal(tl, br);
        Ok(())
    }

    fn drag_boundary(&mut self, i: usize, p: Point, frame: &DisplayRect) -> Result<(), Rejection> {
        let handle = frame.to_display(self.handle_position(SplitHandle::Boundary(i)));
        self.shift_boundary(i, p.x - handle.x, frame)
    }

    /// Moves internal boundary `i` horizontally by `shift` display pixels.
    ///
    /// Only the two segments adjacent to the boundary change, and their
    /// combined ratio is preserved. Fails with [`Rejection::RatioCollapse`] if
    /// either segment would vanish or if there is no boundary `i`.
    pub fn shift_boundary(&mut self, i: usize, shift: f64, frame: &DisplayRect) -> Result<(), Rejection> {
        if i + 1 >= self.ratios.len() {
            return Err(Rejection::RatioCollapse);
        }
        let width = frame.extent(self.top_left(), self.bottom_right()).width;
        let total: f64 = self.ratios.iter().sum();

        let length = width * self.ratios[i] / total;
        let left = (length + shift) * total / width;
        let right = self.ratios[i] + self.ratios[i + 1] - left;
        if !(left > 0.0 && right > 0.0) {
            return Err(Rejection::RatioCollapse);
        }
        self.ratios[i] = left;
        self.ratios[i + 1] = right;
        Ok(())
    }

    /// Appends an unlabeled segment and resets every ratio to `1.0`.
    ///
    /// Returns `false` without changing anything once `max_segments` is reached.
    pub fn add_segment(&mut self, max_segments: usize) -> bool {
        if self.ratios.len() >= max_segments {
            return false;
        }
        self.ratios.push(1.0);
        self.labels.push(String::new());
        self.reset_ratios();
        true
    }

    /// Drops the rightmost segment and resets every ratio to `1.0`.
    ///
    /// Returns `false` without changing anything when one segment remains.
    pub fn remove_segment(&mut self) -> bool {
        if self.ratios.len() <= 1 {
            return false;
        }
        self.ratios.pop();
        self.labels.pop();
        self.reset_ratios();
        true
    }

    /// Makes every segment equally wide.
    pub fn reset_ratios(&mut self) {
        self.ratios.iter_mut().for_each(|r| *r = 1.0);
    }

    /// Exports the box in source-image pixel space.
    #[must_use]
    pub fn export(&self, image: Size) -> SplitBoxRecord {
        let points = self.outline.corners().map(|c| {
            let px = to_source_pixels(c, image);
            [px.x, px.y]
        });
        let meta = &self.outline.meta;
        SplitBoxRecord {
            points,
            segment_ratio_list: self.ratios.clone(),
            input_list: self.labels.clone(),
            paint_color: meta.color.clone(),
            object_index: meta.id.clone(),
            object_name: meta.name.clone(),
            annotation_state: meta.provenance,
            should_remove: meta.proposed_removal,
        }
    }
}

/// Stores the diagonal as top-left / bottom-right.
fn normalized_outline(a: NormPoint, b: NormPoint, meta: ShapeMeta) -> BoundingBox {
    let probe = BoundingBox::new(a, b);
    BoundingBox::with_meta(probe.min(), probe.max(), meta)
}

impl Annotation for SplitBox {
    type Handle = SplitHandle;
    type Record = SplitBoxRecord;

    const SNAPS_TO_CANDIDATES: bool = false;

    fn from_diagonal(a: NormPoint, b: NormPoint, meta: ShapeMeta) -> Self {
        Self::with_meta(a, b, meta)
    }

    fn primary(&self) -> NormPoint {
        self.top_left()
    }

    fn opposite(&self) -> NormPoint {
        self.bottom_right()
    }

    fn set_diagonal(&mut self, primary: NormPoint, opposite: NormPoint) {
        let meta = core::mem::take(&mut self.outline.meta);
        self.outline = normalized_outline(primary, opposite, meta);
    }

    fn meta(&self) -> &ShapeMeta {
        &self.outline.meta
    }

    fn meta_mut(&mut self) -> &mut ShapeMeta {
        &mut self.outline.meta
    }

    fn contains(&self, p: Point, frame: &DisplayRect) -> bool {
        self.outline.contains(p, frame)
    }

    fn segment_at(&self, p: Point, frame: &DisplayRect) -> Option<usize> {
        match self.hit(p, frame) {
            SegmentHit::Outside => None,
            SegmentHit::Unsegmented => Some(0),
            SegmentHit::Segment(i) => Some(i),
        }
    }

    fn is_segmented(&self) -> bool {
        true
    }

    fn drag(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
        limits: &EditLimits,
    ) -> DragOutcome<SplitHandle> {
        Self::drag(self, p, frame, zoom_scale, limits)
    }

    fn set_label(&mut self, segment: Option<usize>, value: String) -> bool {
        let index = match segment {
            Some(i) => i,
            None if self.labels.len() == 1 => 0,
            None => return false,
        };
        match self.labels.get_mut(index) {
            Some(label) => {
                *label = value;
                true
            }
            None => false,
        }
    }

    fn first_unlabeled(&self) -> Option<usize> {
        self.labels.iter().position(String::is_empty)
    }

    fn matches_label(&self, filter: &str) -> bool {
        self.labels.iter().any(|l| l == filter)
    }

    fn export(&self, image: Size) -> SplitBoxRecord {
        Self::export(self, image)
    }
}

/// Error returned by [`SplitBox::with_segments`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// No segments were given.
    Empty,
    /// The ratio and label lists differ in length.
    LengthMismatch {
        /// Number of ratios.
        ratios: usize,
        /// Number of labels.
        labels: usize,
    },
    /// A ratio is zero, negative or not finite.
    NonPositiveRatio {
        /// Position of the offending ratio.
        index: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("a split box needs at least one segment"),
            Self::LengthMismatch { ratios, labels } => {
                write!(f, "{ratios} segment ratios but {labels} segment labels")
            }
            Self::NonPositiveRatio { index } => {
                write!(f, "segment ratio {index} is not a positive number")
            }
        }
    }
}

impl core::error::Error for SegmentError {}
