//! JSON-file-backed record store
//!
//! The whole record map lives in one JSON document: loaded in full at
//! open, rewritten after every successful mutation. A file that exists
//! but does not parse fails the open explicitly; corruption is never
//! ignored. The rewrite goes through a temp file and rename so a crash
//! mid-write leaves the previous document intact.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::filter::StringFilters;

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;
use super::StringStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: RwLock<HashMap<String, StringRecord>>,
}

impl FileStore {
    /// Open a data file, starting empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Write an empty data file at `path`.
    pub fn create(path: impl AsRef<Path>) -> StoreResult<()> {
        write_map(path.as_ref(), &HashMap::new())
    }

    /// Commit `next` to disk, then swap it in. The in-memory map only
    /// changes once the write succeeded, keeping both views consistent.
    fn commit(
        &self,
        records: &mut HashMap<String, StringRecord>,
        next: HashMap<String, StringRecord>,
    ) -> StoreResult<()> {
        write_map(&self.path, &next)?;
        *records = next;
        Ok(())
    }
}

fn write_map(path: &Path, records: &HashMap<String, StringRecord>) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(records)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl StringStore for FileStore {
    fn insert(&self, record: StringRecord) -> StoreResult<StringRecord> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if records.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id));
        }
        let mut next = records.clone();
        next.insert(record.id.clone(), record.clone());
        self.commit(&mut records, next)?;
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
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(matched)
    }

    fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        if !records.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let mut next = records.clone();
        next.remove(id);
        self.commit(&mut records, next)
    }

    fn count(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }
}
