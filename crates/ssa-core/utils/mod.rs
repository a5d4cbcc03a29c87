//! Utility types shared across the time engine, parser and writer

pub mod errors;

pub use errors::{CoreError, Result};

use ahash::RandomState;
use indexmap::IndexMap;

/// Insertion-ordered map used for metadata and style tables
pub type OrderedMap<K, V> = IndexMap<K, V, RandomState>;

/// Trim and normalize whitespace in field values
///
/// Fields may carry padding from hand-edited files (`Style: Default, Arial, 20`).
#[must_use]
pub fn normalize_field_value(value: &str) -> &str {
    value.trim()
}

/// Check that a value can be placed on a single script line
#[must_use]
pub fn is_single_line(value: &str) -> bool {
    !value.contains(['\n', '\r'])
}
