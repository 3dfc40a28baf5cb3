// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture phases and the outcomes reported for each gesture event.

use marquee_geometry::NormPoint;

/// What gestures do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Presses select or start drawing; drags resize and move.
    #[default]
    Edit,
    /// Presses only select a shape (and segment); moves and releases are ignored.
    Label,
}

/// Externally visible editor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorState {
    /// Nothing selected and no draft.
    Idle,
    /// A new rectangle is being drawn.
    Drawing,
    /// The shape at this index is selected.
    Selected(usize),
}

/// Internal gesture phase between press and release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Phase {
    #[default]
    Idle,
    Drawing {
        anchor: NormPoint,
        cursor: NormPoint,
    },
    Dragging {
        start: NormPoint,
    },
}

/// Result of [`Editor::press`](crate::Editor::press).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// A shape (and, for segmented shapes, a segment) under the pointer was selected.
    Selected {
        /// Index of the shape.
        index: usize,
        /// Segment under the pointer, for segmented shapes.
        segment: Option<usize>,
    },
    /// A drag of the already selected shape began.
    DragStarted(usize),
    /// A new draft began at the press point.
    DrawingStarted,
    /// Nothing happened.
    Ignored,
}

/// Why a draft was not committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    /// The draft was below the size limits.
    TooSmall,
    /// The release point was not strictly inside the display.
    OutsideDisplay,
}

/// Result of [`Editor::release`](crate::Editor::release).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The draft became a shape.
    Committed {
        /// Index of the new shape, which is now selected.
        index: usize,
        /// Number of shapes the count policy evicted to make room.
        evicted: usize,
    },
    /// The draft was dropped.
    Discarded(DiscardReason),
    /// A gesture on the selected shape ended; the shape is now user-confirmed.
    Edited {
        /// Index of the shape.
        index: usize,
        /// Whether its corners were snapped again.
        resnapped: bool,
    },
    /// Nothing happened.
    Ignored,
}
