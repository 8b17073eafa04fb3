//! Core record type for term collections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single term entry in the collection.
///
/// Only `id` and `term` are interpreted by the hygiene passes. Everything
/// else (category, explanation, usage examples...) rides along in `extra`
/// and is written back out byte-for-byte equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemeRecord {
    /// Unique identifier, >= 1
    pub id: u64,
    /// Short text label, the subject of similarity comparison
    pub term: String,
    /// Opaque fields preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MemeRecord {
    /// Create a record with no extra fields.
    pub fn new(id: u64, term: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            extra: Map::new(),
        }
    }
}
