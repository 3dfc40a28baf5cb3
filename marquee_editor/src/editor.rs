// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use marquee_geometry::{DisplayRect, NormPoint};
use marquee_shapes::{Annotation, DragOutcome, Provenance, ShapeMeta, SplitBox};

use crate::collection::ShapeCollection;
use crate::config::{ConfigError, EditorConfig};
use crate::gesture::{DiscardReason, EditorState, Mode, Phase, PressOutcome, ReleaseOutcome};
use crate::snap::snap_corners;

/// Turns press/move/release events into edits of a [`ShapeCollection`].
///
/// Every gesture takes the current [`DisplayRect`] explicitly; the editor keeps
/// no view state between calls. Events that do not apply (a release with no
/// gesture in progress, a drag sample far from every handle, a draft that is
/// too small) leave the shapes untouched and report why in their outcome.
#[derive(Clone, Debug)]
pub struct Editor<S> {
    config: EditorConfig,
    shapes: ShapeCollection<S>,
    mode: Mode,
    label_filter: Option<String>,
    phase: Phase,
    selected_segment: Option<usize>,
}

impl<S: Annotation> Default for Editor<S> {
    fn default() -> Self {
        Self::from_valid(EditorConfig::default())
    }
}

impl<S: Annotation> Editor<S> {
    /// Creates an empty editor.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`EditorConfig::validate`].
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EditorConfig) -> Self {
        Self {
            config,
            shapes: ShapeCollection::new(config.count_policy),
            mode: Mode::Edit,
            label_filter: None,
            phase: Phase::Idle,
            selected_segment: None,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The shapes and selection.
    #[must_use]
    pub fn shapes(&self) -> &ShapeCollection<S> {
        &self.shapes
    }

    /// Derived state: drawing takes precedence over selection.
    #[must_use]
    pub fn state(&self) -> EditorState {
        match (self.phase, self.shapes.selected()) {
            (Phase::Drawing { .. }, _) => EditorState::Drawing,
            (_, Some(index)) => EditorState::Selected(index),
            (_, None) => EditorState::Idle,
        }
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches modes, abandoning any gesture in progress.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.phase = Phase::Idle;
    }

    /// The segment selected within the selected shape, if it is segmented.
    #[must_use]
    pub fn selected_segment(&self) -> Option<usize> {
        self.selected_segment
    }

    /// The rectangle being drawn, as `(anchor, cursor)`.
    #[must_use]
    pub fn draft(&self) -> Option<(NormPoint, NormPoint)> {
        match self.phase {
            Phase::Drawing { anchor, cursor } => Some((anchor, cursor)),
            _ => None,
        }
    }

    /// Handles a press at display point `p`.
    ///
    /// In [`Mode::Label`] the first shape under the pointer is selected along
    /// with the segment under it. In [`Mode::Edit`] a press with a shape
    /// already selected begins a drag of that shape; otherwise the first shape
    /// under the pointer that passes the label filter is selected, and if there
    /// is none a new draft is started.
    pub fn press(&mut self, p: Point, frame: &DisplayRect) -> PressOutcome {
        self.phase = Phase::Idle;
        let at = frame.to_normalized(p);
        match self.mode {
            Mode::Label => match self.shapes.hit(p, frame, |_| true) {
                Some(index) => self.select_at(index, p, frame),
                None => PressOutcome::Ignored,
            },
            Mode::Edit => {
                if let Some(index) = self.shapes.selected() {
                    self.phase = Phase::Dragging { start: at };
                    return PressOutcome::DragStarted(index);
                }
                let filter = self.label_filter.as_deref();
                let hit = self
                    .shapes
                    .hit(p, frame, |s| filter.is_none_or(|f| s.matches_label(f)));
                match hit {
                    Some(index) => self.select_at(index, p, frame),
                    None => {
                        self.phase = Phase::Drawing {
                            anchor: at,
                            cursor: at,
                        };
                        PressOutcome::DrawingStarted
                    }
                }
            }
        }
    }

    fn select_at(&mut self, index: usize, p: Point, frame: &DisplayRect) -> PressOutcome {
        self.shapes.select(index);
        self.selected_segment = self
            .shapes
            .get(index)
            .and_then(|s| s.segment_at(p, frame));
        PressOutcome::Selected {
            index,
            segment: self.selected_segment,
        }
    }

    /// Handles a move sample at display point `p`.
    ///
    /// While drawing this updates the draft and returns `None`. While dragging
    /// it forwards the sample to the selected shape and returns its outcome.
    pub fn move_to(
        &mut self,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
    ) -> Option<DragOutcome<S::Handle>> {
        if self.mode == Mode::Label {
            return None;
        }
        match &mut self.phase {
            Phase::Idle => None,
            Phase::Drawing { cursor, .. } => {
                *cursor = frame.to_normalized(p);
                None
            }
            Phase::Dragging { .. } => {
                let limits = self.config.edit_limits();
                let shape = self.shapes.selected_shape_mut()?;
                let outcome = shape.drag(p, frame, zoom_scale, &limits);
                if !outcome.is_applied() {
                    log::trace!("drag sample absorbed: {outcome:?}");
                }
                Some(outcome)
            }
        }
    }

    /// Handles a release at display point `p`.
    ///
    /// A draft is committed only if it satisfies the size limits at
    /// `zoom_scale` and `p` is strictly inside the display. Committed boxes
    /// snap to the candidate points, the count policy may evict, and the new
    /// shape becomes the selection.
    ///
    /// Releasing after a gesture on the selected shape marks it as manually
    /// confirmed. A release with no press before it confirms the selected
    /// shape the same way. If the press-to-release displacement itself passes the size
    /// limits, the shape's corners are snapped again.
    pub fn release(&mut self, p: Point, frame: &DisplayRect, zoom_scale: f64) -> ReleaseOutcome {
        if self.mode == Mode::Label {
            return ReleaseOutcome::Ignored;
        }
        let at = frame.to_normalized(p);
        match core::mem::take(&mut self.phase) {
            Phase::Drawing { anchor, .. } => self.commit_draft(anchor, at, p, frame, zoom_scale),
            Phase::Dragging { start } => {
                let displaced = self
                    .config
                    .size_limits
                    .admits(start, at, frame, zoom_scale);
                self.finish_edit(displaced && S::SNAPS_TO_CANDIDATES, frame)
            }
            Phase::Idle => self.finish_edit(false, frame),
        }
    }

    fn commit_draft(
        &mut self,
        anchor: NormPoint,
        at: NormPoint,
        p: Point,
        frame: &DisplayRect,
        zoom_scale: f64,
    ) -> ReleaseOutcome {
        if !self.config.size_limits.admits(anchor, at, frame, zoom_scale) {
            log::debug!("draft discarded: below size limits");
            return ReleaseOutcome::Discarded(DiscardReason::TooSmall);
        }
        if !frame.contains_strict(p) {
            log::debug!("draft discarded: released outside the display");
            return ReleaseOutcome::Discarded(DiscardReason::OutsideDisplay);
        }

        let (primary, opposite) = if S::SNAPS_TO_CANDIDATES {
            self.snap(anchor, at, frame)
        } else {
            (anchor, at)
        };
        let meta = ShapeMeta {
            provenance: Provenance::Manual,
            ..ShapeMeta::default()
        };
        let evicted = self.shapes.commit(S::from_diagonal(primary, opposite, meta));
        if evicted > 0 {
            log::debug!("count policy {:?} evicted {evicted} shape(s)", self.shapes.policy());
        }
        let index = self.shapes.len() - 1;
        self.shapes.select(index);
        self.selected_segment = None;
        log::debug!("committed shape {index}");
        ReleaseOutcome::Committed { index, evicted }
    }

    fn finish_edit(&mut self, resnap: bool, frame: &DisplayRect) -> ReleaseOutcome {
        let Some(index) = self.shapes.selected() else {
            return ReleaseOutcome::Ignored;
        };
        let snapped = if resnap {
            self.shapes
                .get(index)
                .map(|s| self.snap(s.primary(), s.opposite(), frame))
        } else {
            None
        };
        let Some(shape) = self.shapes.get_mut(index) else {
            return ReleaseOutcome::Ignored;
        };
        if let Some((primary, opposite)) = snapped {
            shape.set_diagonal(primary, opposite);
        }
        shape.meta_mut().mark_manual();
        ReleaseOutcome::Edited {
            index,
            resnapped: snapped.is_some(),
        }
    }

    fn snap(&self, primary: NormPoint, opposite: NormPoint, frame: &DisplayRect) -> (NormPoint, NormPoint) {
        snap_corners(
            primary,
            opposite,
            self.shapes.candidates(),
            frame,
            self.config.snap_threshold,
        )
    }

    /// Selects the shape at `index` and abandons any gesture in progress.
    ///
    /// Returns `false` if there is no such shape.
    pub fn select(&mut self, index: usize) -> bool {
        self.selected_segment = None;
        self.phase = Phase::Idle;
        self.shapes.select(index)
    }

    /// Clears the selection and abandons any gesture in progress.
    pub fn unselect(&mut self) {
        self.shapes.unselect();
        self.selected_segment = None;
        self.phase = Phase::Idle;
    }

    /// Removes the selected shape. No-op if nothing is selected.
    pub fn delete_selected(&mut self) -> Option<S> {
        let removed = self.shapes.delete_selected();
        if removed.is_some() {
            self.selected_segment = None;
            self.phase = Phase::Idle;
        }
        removed
    }

    /// Removes the most recently added shape.
    pub fn undo(&mut self) -> Option<S> {
        let removed = self.shapes.pop();
        if self.shapes.selected().is_none() {
            self.selected_segment = None;
        }
        removed
    }

    /// Removes every shape and abandons any gesture in progress.
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.selected_segment = None;
        self.phase = Phase::Idle;
    }

    /// Appends externally supplied shapes that are not already present.
    ///
    /// A shape counts as present when an existing shape has exactly the same
    /// primary and opposite corners. The count policy is not applied. Returns
    /// the number of shapes appended.
    pub fn merge_external(&mut self, incoming: impl IntoIterator<Item = S>) -> usize {
        let mut added = 0;
        for shape in incoming {
            if self.shapes.contains_diagonal(shape.primary(), shape.opposite()) {
                continue;
            }
            self.shapes.append(shape);
            added += 1;
        }
        log::debug!("merged {added} external shape(s)");
        added
    }

    /// Replaces the detected snap candidates.
    pub fn set_candidates(&mut self, candidates: Vec<NormPoint>) {
        self.shapes.set_candidates(candidates);
    }

    /// Replaces the reference shapes.
    pub fn set_hints(&mut self, hints: Vec<S>) {
        self.shapes.set_hints(hints);
    }

    /// Restricts which shapes a press may select in [`Mode::Edit`].
    ///
    /// `None` lifts the restriction.
    pub fn set_label_filter(&mut self, filter: Option<String>) {
        self.label_filter = filter;
    }

    /// The label a shape must carry to be selectable in [`Mode::Edit`].
    #[must_use]
    pub fn label_filter(&self) -> Option<&str> {
        self.label_filter.as_deref()
    }

    /// Shapes passing the label filter, with their indices.
    pub fn visible_shapes(&self) -> impl Iterator<Item = (usize, &S)> + '_ {
        let filter = self.label_filter.as_deref();
        self.shapes
            .iter()
            .enumerate()
            .filter(move |(_, s)| filter.is_none_or(|f| s.matches_label(f)))
    }

    /// Labels the sole shape, or else the selected shape (or selected segment).
    ///
    /// Returns `false` if nothing was labeled.
    pub fn set_label(&mut self, value: String) -> bool {
        let index = if self.shapes.len() == 1 {
            0
        } else {
            match self.shapes.selected() {
                Some(index) => index,
                None => return false,
            }
        };
        let segment = if self.shapes.selected() == Some(index) {
            self.selected_segment
        } else {
            None
        };
        self.shapes
            .get_mut(index)
            .is_some_and(|s| s.set_label(segment, value))
    }

    /// Selects the first shape (and segment) without a label.
    ///
    /// Clears the selection and returns `None` when everything is labeled.
    pub fn select_next_unlabeled(&mut self) -> Option<usize> {
        let found = self
            .shapes
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.first_unlabeled().map(|seg| (i, s.is_segmented().then_some(seg))));
        match found {
            Some((index, segment)) => {
                self.shapes.select(index);
                self.selected_segment = segment;
                Some(index)
            }
            None => {
                self.shapes.unselect();
                self.selected_segment = None;
                None
            }
        }
    }

    /// Returns `true` if any shape (or segment) lacks a label.
    #[must_use]
    pub fn has_unlabeled(&self) -> bool {
        self.shapes.iter().any(|s| s.first_unlabeled().is_some())
    }

    /// Returns `true` if any shape carries tags.
    #[must_use]
    pub fn is_multi_tag_mode(&self) -> bool {
        self.shapes.iter().any(|s| !s.meta().tags.is_empty())
    }

    /// Exports every shape in collection order, in source-image pixels.
    ///
    /// With `for_submission` set, pending-review flags are cleared first.
    pub fn export(&mut self, image: Size, for_submission: bool) -> Vec<S::Record> {
        if for_submission {
            for shape in self.shapes.iter_mut() {
                shape.meta_mut().proposed_removal = false;
            }
        }
        self.shapes.iter().map(|s| s.export(image)).collect()
    }
}

impl Editor<SplitBox> {
    /// Adds a segment to the selected split box, up to the configured maximum.
    pub fn add_segment(&mut self) -> bool {
        let max = self.config.max_segments;
        self.shapes
            .selected_shape_mut()
            .is_some_and(|s| s.add_segment(max))
    }

    /// Removes the rightmost segment of the selected split box.
    pub fn remove_segment(&mut self) -> bool {
        let Some(shape) = self.shapes.selected_shape_mut() else {
            return false;
        };
        let removed = shape.remove_segment();
        let count = shape.segment_count();
        if self.selected_segment.is_some_and(|s| s >= count) {
            self.selected_segment = None;
        }
        removed
    }

    /// Makes every segment of the selected split box equally wide.
    pub fn reset_ratios(&mut self) -> bool {
        match self.shapes.selected_shape_mut() {
            Some(shape) => {
                shape.reset_ratios();
                true
            }
            None => false,
        }
    }
}
