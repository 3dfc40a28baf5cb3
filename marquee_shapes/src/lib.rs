// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Shapes: rectangle annotations and the drag engines that edit them.
//!
//! Two shape kinds are provided:
//!
//! - [`BoundingBox`]: an axis-aligned rectangle stored as two diagonal corners.
//!   The remaining corners are derived on read, so the four corners always form
//!   a rectangle no matter which corner was dragged last.
//! - [`SplitBox`]: a rectangle divided into vertical segments by positive
//!   weights, each segment carrying its own label.
//!
//! Both implement [`Annotation`], the interface the editor drives. Editing is
//! sample-based: each pointer sample is handed to `drag`, which picks the
//! nearest control point in display space and moves it onto the pointer. A
//! sample that is too far from every control point, or whose result would
//! leave the display or fall below the [`SizeLimits`], leaves the geometry
//! untouched. The returned [`DragOutcome`] says which of these happened.
//!
//! Shapes export to [`BoxRecord`] / [`SplitBoxRecord`] in source-image pixels.
//! Both records implement `serde::Serialize`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_geometry::{DisplayRect, NormPoint};
//! use marquee_shapes::{BoundingBox, BoxHandle, Corner, DragOutcome, EditLimits};
//!
//! let frame = DisplayRect::new(Rect::new(0.0, 0.0, 1000.0, 1000.0)).unwrap();
//! let mut bbox = BoundingBox::new(NormPoint::new(0.2, 0.2), NormPoint::new(0.6, 0.5));
//!
//! // Grab the opposite corner near (600, 500) and pull it outwards.
//! let out = bbox.drag(Point::new(650.0, 540.0), &frame, 1.0, &EditLimits::default());
//! assert_eq!(out, DragOutcome::Applied(BoxHandle::Corner(Corner::Opposite)));
//! assert_eq!(bbox.opposite(), NormPoint::new(0.65, 0.54));
//!
//! // A sample far from every handle is ignored.
//! let out = bbox.drag(Point::new(950.0, 950.0), &frame, 1.0, &EditLimits::default());
//! assert!(!out.is_applied());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod annotation;
mod bounding;
mod limits;
mod meta;
mod outcome;
mod record;
mod split;

pub use annotation::Annotation;
pub use bounding::{BoundingBox, BoxHandle, Corner};
pub use limits::{EditLimits, SizeLimits};
pub use meta::{Provenance, ShapeMeta};
pub use outcome::{DragOutcome, Rejection};
pub use record::{BoxRecord, SplitBoxRecord};
pub use split::{Edge, SegmentError, SplitBox, SplitHandle};
