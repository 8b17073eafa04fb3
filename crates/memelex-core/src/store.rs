//! JSON document load/save for term collections.
//!
//! The whole collection fits in memory (tens to low hundreds of records),
//! so documents are read and written in one shot. File handles are scoped
//! to each call; nothing stays open between operations.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::record::MemeRecord;

/// Load a collection as typed records.
///
/// Fails with [`StoreError::Parse`] if any element is missing `id` or
/// `term` -- malformed records abort the run before any comparison.
pub fn load_records(path: &Path) -> Result<Vec<MemeRecord>> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the raw top-level array without interpreting its elements.
///
/// Used by the flattener, which has to tolerate nested arrays and decide
/// per element what to do with it.
pub fn load_raw_array(path: &Path) -> Result<Vec<Value>> {
    let content = read(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(StoreError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Write a value as pretty-printed UTF-8 JSON.
pub fn save_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
    })?;
    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde_json::json;
    use std::io::Write as _;

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match load_records(&path) {
            Err(StoreError::Read { .. }) => {}
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        match load_records(file.path()) {
            Err(StoreError::Parse { .. }) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn top_level_object_is_rejected_as_raw_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"id\": 1}}").unwrap();
        match load_raw_array(file.path()) {
            Err(StoreError::NotAnArray { .. }) => {}
            other => panic!("expected NotAnArray error, got {other:?}"),
        }
    }

    #[test]
    fn records_round_trip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memes.json");

        let mut record = MemeRecord::new(1, "破防");
        record
            .extra
            .insert("category".to_string(), json!("情绪"));
        save_pretty(&path, &vec![record.clone()]).unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, vec![record]);

        // Pretty printing, matching the original two-space indent
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {"));
    }
}
