// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Editor: gesture-driven editing of rectangle annotations.
//!
//! [`Editor`] owns a [`ShapeCollection`] and turns already-resolved pointer
//! events into edits:
//!
//! - `press` selects the shape under the pointer, starts a drag of the selected
//!   shape, or starts drawing a new rectangle.
//! - `move_to` updates the draft, or forwards the sample to the selected
//!   shape's drag engine.
//! - `release` commits the draft if it is large enough and ends inside the
//!   display, applying the [`CountPolicy`] and snapping the new corners to
//!   detected candidate points (see [`snap_corners`]).
//!
//! The editor is generic over [`Annotation`](marquee_shapes::Annotation), so the
//! same state machine drives plain boxes and split boxes. Split boxes gain
//! segment editing through `add_segment` / `remove_segment`.
//!
//! Everything is synchronous and single-threaded. No gesture ever fails:
//! events that do not apply are absorbed and the returned outcome says why.
//! Tunables live in [`EditorConfig`], which deserializes with defaults for
//! missing keys.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_editor::{Editor, EditorState, ReleaseOutcome};
//! use marquee_geometry::{DisplayRect, NormPoint};
//! use marquee_shapes::BoundingBox;
//!
//! let frame = DisplayRect::new(Rect::new(0.0, 0.0, 1000.0, 1000.0)).unwrap();
//! let mut editor = Editor::<BoundingBox>::default();
//!
//! editor.press(Point::new(100.0, 100.0), &frame);
//! editor.move_to(Point::new(500.0, 500.0), &frame, 1.0);
//! let out = editor.release(Point::new(500.0, 500.0), &frame, 1.0);
//!
//! assert_eq!(out, ReleaseOutcome::Committed { index: 0, evicted: 0 });
//! assert_eq!(editor.state(), EditorState::Selected(0));
//! assert_eq!(editor.shapes().shapes()[0].opposite(), NormPoint::new(0.5, 0.5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod config;
mod editor;
mod gesture;
mod snap;

pub use collection::ShapeCollection;
pub use config::{ConfigError, CountPolicy, EditorConfig};
pub use editor::Editor;
pub use gesture::{DiscardReason, EditorState, Mode, PressOutcome, ReleaseOutcome};
pub use snap::snap_corners;
