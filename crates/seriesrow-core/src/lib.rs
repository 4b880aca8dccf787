//! SeriesRow Core - In-memory model for time series query rows
//!
//! This crate provides the row types handed from query execution to output layers:
//! - `Value`: Loosely-typed scalar cell (Float, Integer, String, Boolean, Null, etc.)
//! - `Tags`: Unordered tag key/value mapping identifying a series
//! - `Row`: One series' result (name, tags, columns, value tuples, partial flag)
//! - `Rows`: A collection of rows with a deterministic (name, tag fingerprint) ordering
//! - `OrderingConfig`: Sort stability and partial-fragment coalescing options
//!
//! Series identity is probabilistic: two rows are the same series when their
//! names match and their 64-bit tag fingerprints match. Distinct tag sets that
//! collide under FNV-1a compare as the same series.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod row;
pub mod rows;
pub mod types;

pub use config::{OrderingConfig, SortStability};
pub use error::{ModelError, Result};
pub use fingerprint::{tags_fingerprint, TagFingerprint, EMPTY_TAGS_FINGERPRINT};
pub use row::{Row, RowBuilder};
pub use rows::{series_order, Rows};
pub use types::*;
