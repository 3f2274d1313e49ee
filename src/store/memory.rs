//! In-memory record store

use std::collections::HashMap;
use std::sync::RwLock;

use crate::filter::StringFilters;

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;
use super::StringStore;

/// Record store backed by a map in memory.
///
/// Uniqueness is checked under the write lock, so a racing duplicate
/// insert always surfaces as `Duplicate` for the loser.
pub struct MemoryStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StringStore for MemoryStore {
    fn insert(&self, record: StringRecord) -> StoreResult<StringRecord> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if records.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> StoreResult<StringRecord> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self, filters: &StringFilters) -> StoreResult<Vec<StringRecord>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut matched: Vec<StringRecord> = records
            .values()
            .filter(|record| filters.matches(record))
            .cloned()
            .collect();
        // Insertion-time order keeps listings stable across calls
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(matched)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        let record = StringRecord::from_value("racecar");
        let id = record.id.clone();

        store.insert(record).unwrap();
        let fetched = store.get(&id).unwrap();
        assert_eq!(fetched.value, "racecar");
        assert!(fetched.is_palindrome);
    }

    #[test]
    fn test_duplicate_insert_is_a_conflict() {
        let store = MemoryStore::new();
        store.insert(StringRecord::from_value("abc")).unwrap();

        let err = store.insert(StringRecord::from_value("abc")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get("no-such-id").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_list_applies_filters() {
        let store = MemoryStore::new();
        store.insert(StringRecord::from_value("racecar")).unwrap();
        store.insert(StringRecord::from_value("banana")).unwrap();
        store.insert(StringRecord::from_value("aa")).unwrap();

        let all = store.list(&StringFilters::default()).unwrap();
        assert_eq!(all.len(), 3);

        let palindromes = store
            .list(&StringFilters {
                is_palindrome: Some(true),
                min_length: Some(3),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(palindromes.len(), 1);
        assert_eq!(palindromes[0].value, "racecar");
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let record = StringRecord::from_value("abc");
        let id = record.id.clone();
        store.insert(record).unwrap();

        store.delete(&id).unwrap();
        assert_eq!(store.count().unwrap(), 0);

        let err = store.delete(&id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
