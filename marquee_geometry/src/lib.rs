// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Geometry: the coordinate model shared by every Marquee crate.
//!
//! Annotation shapes are stored in **normalized** image coordinates: `(0, 0)`
//! is the top-left of the displayed image and `(1, 1)` its bottom-right. That
//! representation is independent of zoom, pan and screen size. Absolute
//! positions are always *derived* from it:
//!
//! - [`DisplayRect`] is the screen-space rectangle the image currently
//!   occupies. It maps [`NormPoint`] values to display points and back, and it
//!   measures distances in display pixels so thresholds stay consistent on screen.
//! - [`to_source_pixels`] / [`from_source_pixels`] map normalized values to the
//!   pixel grid of the decoded source image, which is what gets persisted.
//! - [`zoom_factor`] turns the host's raw zoom scale into the multiplier applied
//!   to on-screen size minimums.
//!
//! The crate owns no state: the current display rectangle is threaded through
//! every call as an explicit parameter.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use marquee_geometry::{DisplayRect, NormPoint};
//!
//! // The image is shown in a 1000x500 area offset by (20, 40).
//! let frame = DisplayRect::new(Rect::new(20.0, 40.0, 1020.0, 540.0)).unwrap();
//!
//! let p = NormPoint::new(0.5, 0.5);
//! assert_eq!(frame.to_display(p), Point::new(520.0, 290.0));
//! assert_eq!(frame.to_normalized(Point::new(520.0, 290.0)), p);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod frame;
mod norm;
mod pixels;

pub use frame::{DisplayRect, FrameError};
pub use norm::NormPoint;
pub use pixels::{from_source_pixels, to_source_pixels, zoom_factor};
