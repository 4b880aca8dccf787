//! Rows - an orderable collection of series rows
//!
//! Rows are ordered by name, then by tag fingerprint. Tags have no meaningful
//! sort order, so the fingerprint only makes the output order reproducible.

use crate::config::{OrderingConfig, SortStability};
use crate::fingerprint::TagFingerprint;
use crate::row::Row;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

/// Compare two rows by name, then by tag fingerprint
pub fn series_order(a: &Row, b: &Row) -> Ordering {
    match a.name.cmp(&b.name) {
        Ordering::Equal => a.tags_hash().cmp(&b.tags_hash()),
        other => other,
    }
}

/// A collection of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rows(Vec<Row>);

impl Rows {
    /// Create an empty collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the row at `i` orders before the row at `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        series_order(&self.0[i], &self.0[j]) == Ordering::Less
    }

    /// Exchange the rows at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Append a row
    pub fn push(&mut self, row: Row) {
        self.0.push(row);
    }

    /// Consume the collection, returning the rows
    pub fn into_inner(self) -> Vec<Row> {
        self.0
    }

    /// Stable sort by name, then tag fingerprint
    pub fn sort(&mut self) {
        self.sort_with(&OrderingConfig::default());
    }

    /// Sort by name, then tag fingerprint, as configured.
    ///
    /// Each row's fingerprint is computed once per call rather than once per
    /// comparison. Coalescing needs fragments in arrival order, so the sort is
    /// stable whenever `coalesce_partial` is set, whatever `stability` says.
    pub fn sort_with(&mut self, config: &OrderingConfig) {
        let mut keyed: Vec<(TagFingerprint, Row)> =
            self.0.drain(..).map(|row| (row.tags_hash(), row)).collect();

        let cmp = |a: &(TagFingerprint, Row), b: &(TagFingerprint, Row)| {
            a.1.name.cmp(&b.1.name).then(a.0.cmp(&b.0))
        };
        let stability = if config.coalesce_partial {
            SortStability::Stable
        } else {
            config.stability
        };
        match stability {
            SortStability::Stable => keyed.sort_by(cmp),
            SortStability::Unstable => keyed.sort_unstable_by(cmp),
        }

        self.0 = keyed.into_iter().map(|(_, row)| row).collect();
        trace!(rows = self.0.len(), stability = ?stability, "Sorted rows");

        if config.coalesce_partial {
            self.coalesce_partial();
        }
    }

    /// Merge partial fragments into the row they continue.
    ///
    /// A row is appended to the row immediately before it when that row is
    /// partial, both are the same series, and their columns match. The merged
    /// row takes the partial flag of the last fragment appended.
    pub fn coalesce_partial(&mut self) {
        let before = self.0.len();
        let mut merged: Vec<Row> = Vec::with_capacity(before);

        for row in self.0.drain(..) {
            if let Some(prev) = merged.last_mut() {
                if prev.partial && prev.columns == row.columns && prev.same_series(&row) {
                    prev.partial = row.partial;
                    prev.values.extend(row.values);
                    continue;
                }
            }
            merged.push(row);
        }

        self.0 = merged;
        if self.0.len() < before {
            debug!(
                before,
                after = self.0.len(),
                "Coalesced partial row fragments"
            );
        }
    }
}

impl Deref for Rows {
    type Target = [Row];

    fn deref(&self) -> &[Row] {
        &self.0
    }
}

impl DerefMut for Rows {
    fn deref_mut(&mut self) -> &mut [Row] {
        &mut self.0
    }
}

impl From<Vec<Row>> for Rows {
    fn from(rows: Vec<Row>) -> Self {
        Self(rows)
    }
}

impl FromIterator<Row> for Rows {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Rows {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
