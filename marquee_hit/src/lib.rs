// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Hit: point-in-shape tests for four-corner annotations.
//!
//! Annotation corners are dragged independently, so by the time a hit test runs
//! the four points of a box are not guaranteed to be stored in a consistent
//! winding order. This crate canonicalizes them first and only then tests
//! membership:
//!
//! 1. [`convex_hull`] orders the corners with a gift-wrapping scan that starts
//!    from the leftmost point.
//! 2. [`point_in_polygon`] casts a horizontal ray from the query point and
//!    counts edge crossings, with an exact answer for points that lie on an edge.
//! 3. [`segment_hit`] narrows a hit inside a split box down to the segment that
//!    contains it.
//!
//! All inputs are display-space [`kurbo::Point`]s; callers convert from
//! normalized coordinates before testing so that "on the edge" means the same
//! thing on screen regardless of zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use marquee_hit::quad_contains;
//!
//! // Corners recorded in a scrambled order still describe the same rectangle.
//! let corners = [
//!     Point::new(100.0, 100.0),
//!     Point::new(300.0, 200.0),
//!     Point::new(300.0, 100.0),
//!     Point::new(100.0, 200.0),
//! ];
//! assert!(quad_contains(&corners, Point::new(200.0, 150.0)));
//! assert!(!quad_contains(&corners, Point::new(350.0, 150.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hull;
mod orient;
mod polygon;
mod segments;

pub use hull::{Hull, convex_hull};
pub use orient::{Orientation, on_segment, orientation, segments_intersect};
pub use polygon::{point_in_polygon, quad_contains};
pub use segments::{SegmentHit, segment_hit};
