// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Where a shape came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Loaded or created without a more specific origin.
    #[default]
    Default,
    /// Drawn or edited by the user.
    Manual,
    /// Supplied by an automatic detector.
    AiGenerated,
}

/// Descriptive data attached to a shape. None of it affects geometry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeMeta {
    /// Free-form label text.
    pub label: Option<String>,
    /// Tag set, in insertion order.
    pub tags: Vec<String>,
    /// Display color as the host encodes it (for example `#ff0000`).
    pub color: Option<String>,
    /// Stable identifier assigned by the host.
    pub id: Option<String>,
    /// Human-readable object name.
    pub name: Option<String>,
    /// Origin of the shape.
    pub provenance: Provenance,
    /// Transient flag set on detector output that the user has not confirmed yet.
    #[serde(skip)]
    pub proposed_removal: bool,
}

impl ShapeMeta {
    /// Metadata for a shape supplied by an automatic detector and awaiting review.
    #[must_use]
    pub fn ai_generated() -> Self {
        Self {
            provenance: Provenance::AiGenerated,
            proposed_removal: true,
            ..Self::default()
        }
    }

    /// Returns `true` if the label is present and non-empty.
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Marks the shape as confirmed by the user.
    pub fn mark_manual(&mut self) {
        self.provenance = Provenance::Manual;
        self.proposed_removal = false;
    }
}
