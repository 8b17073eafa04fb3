//! One-level flattening and sequential reindexing
//!
//! Manually concatenated JSON fragments leave the collection looking like
//! `[{..}, [{..}, {..}], {..}]`. This pass splices nested arrays back into
//! the top level (one level only; deeper nesting does not occur in
//! practice), drops anything that is not a record object, and overwrites
//! every `id` with the record's 1-based position.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::Result;
use crate::store;

/// What happened to one top-level element during flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementOutcome {
    /// A record object, appended directly
    Kept,
    /// A nested array; `spliced` members appended in order, `rejected`
    /// non-object members dropped
    Flattened { spliced: usize, rejected: usize },
    /// Neither an object nor an array
    Rejected,
}

/// Result of flattening and reindexing one document.
#[derive(Debug, Clone, Default)]
pub struct FlattenOutcome {
    /// Flat record objects in traversal order, ids already reassigned
    pub records: Vec<Map<String, Value>>,
    /// Per-element outcomes, in input order
    pub outcomes: Vec<ElementOutcome>,
}

impl FlattenOutcome {
    /// Total elements (top level or nested) that were dropped.
    pub fn rejected_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                ElementOutcome::Rejected => 1,
                ElementOutcome::Flattened { rejected, .. } => *rejected,
                ElementOutcome::Kept => 0,
            })
            .sum()
    }
}

/// Flatten one level of nesting and assign `id = position` (1-based).
///
/// Traversal order is preserved: outer order first, nested members spliced
/// in place. Previously assigned ids are discarded. Idempotent on already
/// flat input.
pub fn flatten_and_reindex(elements: Vec<Value>) -> FlattenOutcome {
    let mut records: Vec<Map<String, Value>> = Vec::with_capacity(elements.len());
    let mut outcomes = Vec::with_capacity(elements.len());

    for element in elements {
        match element {
            Value::Object(record) => {
                records.push(record);
                outcomes.push(ElementOutcome::Kept);
            }
            Value::Array(members) => {
                let mut spliced = 0;
                let mut rejected = 0;
                for member in members {
                    if let Value::Object(record) = member {
                        records.push(record);
                        spliced += 1;
                    } else {
                        rejected += 1;
                    }
                }
                outcomes.push(ElementOutcome::Flattened { spliced, rejected });
            }
            _ => outcomes.push(ElementOutcome::Rejected),
        }
    }

    for (index, record) in records.iter_mut().enumerate() {
        record.insert("id".to_string(), Value::from(index as u64 + 1));
    }

    FlattenOutcome { records, outcomes }
}

/// Summary of one file-level reindex run.
#[derive(Debug)]
pub struct ReindexOutcome {
    pub flatten: FlattenOutcome,
    pub written: PathBuf,
}

impl ReindexOutcome {
    pub fn record_count(&self) -> usize {
        self.flatten.records.len()
    }
}

/// Load `input` as a raw array, flatten and reindex it, and write the
/// result to `output`. Always writes on success; aborts with no write when
/// the input cannot be read or is not an array.
///
/// Dropped elements are logged rather than failing the run -- the original
/// data was hand-edited, and losing a stray scalar is the point of the
/// cleanup. Strict callers can inspect [`FlattenOutcome::outcomes`] via
/// [`flatten_and_reindex`] instead.
pub fn reindex_document(input: &Path, output: &Path) -> Result<ReindexOutcome> {
    let elements = store::load_raw_array(input)?;
    info!(count = elements.len(), path = %input.display(), "loaded raw document");

    let flatten = flatten_and_reindex(elements);
    let rejected = flatten.rejected_count();
    if rejected > 0 {
        warn!(rejected, "dropped elements that were neither objects nor arrays");
    }

    store::save_pretty(output, &flatten.records)?;
    info!(
        count = flatten.records.len(),
        path = %output.display(),
        "wrote reindexed collection"
    );

    Ok(ReindexOutcome {
        flatten,
        written: output.to_path_buf(),
    })
}
