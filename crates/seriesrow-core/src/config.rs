//! Row ordering configuration.

use serde::{Deserialize, Serialize};

/// How rows that compare equal (same name and tag fingerprint) are treated
/// by [`crate::Rows::sort_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStability {
    /// Ties keep their input order
    #[default]
    Stable,
    /// Ties end up in an unspecified order
    Unstable,
}

/// Configuration for ordering a row collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Tie handling for the sort.
    /// Default: stable
    pub stability: SortStability,

    /// Merge adjacent partial fragments of the same series after sorting.
    /// When set the sort is always stable, overriding `stability`.
    /// Default: false
    pub coalesce_partial: bool,
}

impl OrderingConfig {
    /// Creates a new OrderingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stable sort followed by partial-fragment coalescing.
    pub fn coalescing() -> Self {
        Self {
            stability: SortStability::Stable,
            coalesce_partial: true,
        }
    }
}
