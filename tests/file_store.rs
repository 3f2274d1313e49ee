//! File-backed store integrity tests
//!
//! The data file is the canonical state: records must survive a reopen,
//! and a file that does not parse must fail the open explicitly.

use std::fs;

use tempfile::TempDir;

use stringdb::analysis::content_hash;
use stringdb::filter::StringFilters;
use stringdb::store::{FileStore, StoreError, StringRecord, StringStore};

fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[test]
fn test_records_survive_reopen() {
    let dir = temp_dir();
    let path = dir.path().join("data.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.insert(StringRecord::from_value("racecar")).unwrap();
        store.insert(StringRecord::from_value("Hello World")).unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.count().unwrap(), 2);

    let record = reopened.get(&content_hash("racecar")).unwrap();
    assert!(record.is_palindrome);
    assert_eq!(record.character_frequency_map[&'c'], 2);
}

#[test]
fn test_duplicate_rejected_across_reopen() {
    let dir = temp_dir();
    let path = dir.path().join("data.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.insert(StringRecord::from_value("abc")).unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    let err = reopened.insert(StringRecord::from_value("abc")).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
}

#[test]
fn test_corruption_causes_explicit_failure() {
    let dir = temp_dir();
    let path = dir.path().join("data.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.insert(StringRecord::from_value("abc")).unwrap();
    }

    // Truncate the document mid-way
    let contents = fs::read_to_string(&path).unwrap();
    fs::write(&path, &contents[..contents.len() / 2]).unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn test_filters_apply_to_persisted_records() {
    let dir = temp_dir();
    let path = dir.path().join("data.json");

    {
        let store = FileStore::open(&path).unwrap();
        for value in ["aa", "banana", "level"] {
            store.insert(StringRecord::from_value(value)).unwrap();
        }
    }

    let reopened = FileStore::open(&path).unwrap();
    let palindromes = reopened
        .list(&StringFilters {
            is_palindrome: Some(true),
            min_length: Some(3),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(palindromes.len(), 1);
    assert_eq!(palindromes[0].value, "level");
}

#[test]
fn test_delete_is_durable() {
    let dir = temp_dir();
    let path = dir.path().join("data.json");
    let id = content_hash("abc");

    {
        let store = FileStore::open(&path).unwrap();
        store.insert(StringRecord::from_value("abc")).unwrap();
        store.delete(&id).unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert!(matches!(reopened.get(&id), Err(StoreError::NotFound(_))));
    assert_eq!(reopened.count().unwrap(), 0);
}
