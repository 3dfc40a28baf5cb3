// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use marquee_shapes::{EditLimits, SizeLimits};
use serde::{Deserialize, Serialize};

/// How many shapes a collection may hold, and which one makes room for a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountPolicy {
    /// No limit.
    #[default]
    Unlimited,
    /// One shape; committing replaces the most recently added one.
    ExactlyOne,
    /// Two shapes; committing with exactly two present replaces the newer one.
    ExactlyTwo,
}

/// Tunables for an [`Editor`](crate::Editor).
///
/// Missing keys take their defaults when deserialized, so a host can ship a
/// partial document:
///
/// ```rust
/// use marquee_editor::{CountPolicy, EditorConfig};
///
/// let config: EditorConfig = serde_json::from_str(r#"{ "count_policy": "exactly_two" }"#).unwrap();
/// assert_eq!(config.count_policy, CountPolicy::ExactlyTwo);
/// assert_eq!(config.snap_threshold, 80.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Minimum size of committed rectangles.
    pub size_limits: SizeLimits,
    /// Display distance within which a drawn corner snaps to a candidate point.
    pub snap_threshold: f64,
    /// Squared display distance beyond which a drag grabs no handle.
    pub handle_reach_sq: f64,
    /// Eviction rule applied when a drawn shape is committed.
    pub count_policy: CountPolicy,
    /// Upper bound on segments per split box.
    pub max_segments: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let edit = EditLimits::default();
        Self {
            size_limits: edit.size,
            snap_threshold: 80.0,
            handle_reach_sq: edit.handle_reach_sq,
            count_policy: CountPolicy::Unlimited,
            max_segments: 15,
        }
    }
}

impl EditorConfig {
    /// The subset of the configuration the drag engines consume.
    #[must_use]
    pub fn edit_limits(&self) -> EditLimits {
        EditLimits {
            size: self.size_limits,
            handle_reach_sq: self.handle_reach_sq,
        }
    }

    /// Checks that every threshold is a finite, non-negative number and that
    /// split boxes may hold at least one segment.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("size_limits.min_diagonal", self.size_limits.min_diagonal),
            ("size_limits.min_side", self.size_limits.min_side),
            ("snap_threshold", self.snap_threshold),
            ("handle_reach_sq", self.handle_reach_sq),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.max_segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        Ok(())
    }
}

/// Error returned by [`EditorConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A threshold is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A threshold is below zero.
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `max_segments` is zero.
    NoSegments,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "`{field}` must be finite"),
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative (got {value})")
            }
            Self::NoSegments => f.write_str("`max_segments` must be at least 1"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CountPolicy, EditorConfig};

    #[test]
    fn defaults_are_valid() {
        let config = EditorConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.size_limits.min_diagonal, 40.0);
        assert_eq!(config.size_limits.min_side, 20.0);
        assert_eq!(config.handle_reach_sq, 6000.0);
        assert_eq!(config.max_segments, 15);
    }

    #[test]
    fn validate_rejects_bad_thresholds() {
        let mut config = EditorConfig {
            snap_threshold: f64::NAN,
            ..EditorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "snap_threshold"
            })
        );

        config.snap_threshold = 80.0;
        config.size_limits.min_side = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "size_limits.min_side",
                value: -1.0
            })
        );

        config.size_limits.min_side = 20.0;
        config.max_segments = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoSegments));
    }

    #[test]
    fn count_policy_names() {
        let policy: CountPolicy = serde_json::from_str(r#""exactly_two""#).unwrap();
        assert_eq!(policy, CountPolicy::ExactlyTwo);
        assert_eq!(
            serde_json::to_string(&CountPolicy::Unlimited).unwrap(),
            r#""unlimited""#
        );
    }
}
