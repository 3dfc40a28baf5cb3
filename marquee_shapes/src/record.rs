// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::meta::Provenance;

/// Persisted form of a [`BoundingBox`](crate::BoundingBox), in source-image pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    /// `[[min_x, min_y], [max_x, max_y]]`.
    pub points: [[f64; 2]; 2],
    /// Label text.
    pub input: Option<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display color.
    pub paint_color: Option<String>,
    /// Host-assigned identifier.
    pub object_index: Option<String>,
    /// Human-readable object name.
    pub object_name: Option<String>,
    /// Origin of the shape.
    #[serde(default)]
    pub annotation_state: Provenance,
    /// Whether the shape was still awaiting confirmation.
    #[serde(default)]
    pub should_remove: bool,
}

/// Persisted form of a [`SplitBox`](crate::SplitBox), in source-image pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitBoxRecord {
    /// Corners as `[top_left, top_right, bottom_right, bottom_left]`.
    pub points: [[f64; 2]; 4],
    /// Segment weights, left to right.
    pub segment_ratio_list: Vec<f64>,
    /// Segment labels, parallel to `segment_ratio_list`.
    pub input_list: Vec<String>,
    /// Display color.
    pub paint_color: Option<String>,
    /// Host-assigned identifier.
    pub object_index: Option<String>,
    /// Human-readable object name.
    pub object_name: Option<String>,
    /// Origin of the shape.
    #[serde(default)]
    pub annotation_state: Provenance,
    /// Whether the shape was still awaiting confirmation.
    #[serde(default)]
    pub should_remove: bool,
}
