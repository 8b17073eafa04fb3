//! File-level orchestration of a detection run
//!
//! Loads the collection, runs detection, and writes the survivors back out
//! -- but only when there was something to clean. A run with zero findings
//! leaves the filesystem untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::store;

use super::detector::{detect_duplicates, Detection};

/// Summary of one check-and-clean run, for the caller to render.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Records loaded from the input document
    pub loaded: usize,
    pub detection: Detection,
    /// Where the cleaned collection was written, if any finding forced a write
    pub written: Option<PathBuf>,
}

impl CheckOutcome {
    pub fn kept_count(&self) -> usize {
        self.detection.survivors.len()
    }
}

/// Load `input`, detect duplicates, and write survivors to `output` when at
/// least one pair was found.
///
/// Aborts on read or parse failure before any comparison; no partial output
/// is ever written.
pub fn check_and_clean(input: &Path, output: &Path) -> Result<CheckOutcome> {
    let records = store::load_records(input)?;
    info!(count = records.len(), path = %input.display(), "loaded collection");

    let detection = detect_duplicates(&records);
    debug!(
        pairs = detection.pairs.len(),
        removed = detection.removed_count(),
        "detection finished"
    );

    let written = if detection.pairs.is_empty() {
        None
    } else {
        store::save_pretty(output, &detection.survivors)?;
        info!(path = %output.display(), "wrote cleaned collection");
        Some(output.to_path_buf())
    };

    Ok(CheckOutcome {
        loaded: records.len(),
        detection,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde_json::json;

    fn write_doc(dir: &tempfile::TempDir, name: &str, value: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn clean_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(
            &dir,
            "memes.json",
            json!([
                { "id": 1, "term": "开心" },
                { "id": 2, "term": "难过" }
            ]),
        );
        let output = dir.path().join("memes_cleaned.json");

        let outcome = check_and_clean(&input, &output).unwrap();
        assert_eq!(outcome.loaded, 2);
        assert!(outcome.detection.pairs.is_empty());
        assert!(outcome.written.is_none());
        assert!(!output.exists());
    }

    #[test]
    fn findings_write_the_cleaned_collection() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(
            &dir,
            "memes.json",
            json!([
                { "id": 1, "term": "摸鱼上班", "category": "职场" },
                { "id": 2, "term": "上班摸鱼" },
                { "id": 3, "term": "伤心哭泣" }
            ]),
        );
        let output = dir.path().join("memes_cleaned.json");

        let outcome = check_and_clean(&input, &output).unwrap();
        assert_eq!(outcome.loaded, 3);
        assert_eq!(outcome.detection.pairs.len(), 1);
        assert_eq!(outcome.kept_count(), 2);
        assert_eq!(outcome.written.as_deref(), Some(output.as_path()));

        // Survivors keep their original ids and opaque fields
        let cleaned: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            cleaned,
            json!([
                { "id": 1, "term": "摸鱼上班", "category": "职场" },
                { "id": 3, "term": "伤心哭泣" }
            ])
        );
    }

    #[test]
    fn unreadable_input_aborts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.json");
        let output = dir.path().join("memes_cleaned.json");

        match check_and_clean(&input, &output) {
            Err(StoreError::Read { .. }) => {}
            other => panic!("expected Read error, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn record_without_term_aborts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(&dir, "memes.json", json!([{ "id": 1 }]));
        let output = dir.path().join("memes_cleaned.json");

        match check_and_clean(&input, &output) {
            Err(StoreError::Parse { .. }) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
        assert!(!output.exists());
    }
}
