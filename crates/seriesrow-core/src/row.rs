//! Row - one series' result set

use crate::error::{ModelError, Result};
use crate::fingerprint::{tags_fingerprint, TagFingerprint};
use crate::types::{Tags, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single series returned from the execution of a statement.
///
/// Every field is omitted from encoded output when empty (or `false`) and
/// defaults when missing, so absent and empty collections round-trip as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Series name (usually the measurement). May be empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Tags identifying the series
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
    /// Column names, one per value position
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    /// Value tuples aligned with `columns`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<Value>>,
    /// Set when this row is a fragment of a larger series result
    #[serde(default, skip_serializing_if = "is_false")]
    pub partial: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Row {
    /// Create an empty row for the named series
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a new row builder
    pub fn builder(name: impl Into<String>) -> RowBuilder {
        RowBuilder::new(name)
    }

    /// Fingerprint of this row's tag set
    pub fn tags_hash(&self) -> TagFingerprint {
        tags_fingerprint(&self.tags)
    }

    /// Returns true if `other` holds values for the same series.
    ///
    /// Compares names and tag fingerprints only. Two different tag sets with
    /// colliding fingerprints are reported as the same series.
    pub fn same_series(&self, other: &Row) -> bool {
        self.name == other.name && self.tags_hash() == other.tags_hash()
    }

    /// Validate column names and tuple widths
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for (pos, column) in self.columns.iter().enumerate() {
            if column.is_empty() {
                return Err(ModelError::EmptyColumnName(pos));
            }
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn(column.clone()));
            }
        }

        for (index, tuple) in self.values.iter().enumerate() {
            if tuple.len() != self.columns.len() {
                return Err(ModelError::ColumnCountMismatch {
                    index,
                    expected: self.columns.len(),
                    actual: tuple.len(),
                });
            }
        }
        Ok(())
    }

    /// Get a tag value by key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Position of a column by name
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Get the value of `column` in the value tuple at `index`
    pub fn value(&self, index: usize, column: &str) -> Option<&Value> {
        let pos = self.column_index(column)?;
        self.values.get(index)?.get(pos)
    }

    /// True when the row carries no value tuples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builder for constructing validated Rows
pub struct RowBuilder {
    name: String,
    tags: Tags,
    columns: Vec<String>,
    values: Vec<Vec<Value>>,
    partial: bool,
}

impl RowBuilder {
    /// Create a new row builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Tags::new(),
            columns: Vec::new(),
            values: Vec::new(),
            partial: false,
        }
    }

    /// Add a tag
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Replace the tag set
    pub fn tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    /// Append a column
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Replace the column list
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append a value tuple
    pub fn value_row(mut self, values: Vec<Value>) -> Self {
        self.values.push(values);
        self
    }

    /// Mark the row as a partial fragment
    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Build the row
    pub fn build(self) -> Result<Row> {
        let row = Row {
            name: self.name,
            tags: self.tags,
            columns: self.columns,
            values: self.values,
            partial: self.partial,
        };

        row.validate()?;
        Ok(row)
    }
}
