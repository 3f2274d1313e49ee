//! Record store for string analyses
//!
//! Records are keyed by the content hash of their value. The store is the
//! only shared mutable state in the system; uniqueness is enforced under
//! its write lock, so duplicate inserts surface as a conflict rather than
//! a silent merge.

mod errors;
mod file;
mod memory;
mod record;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::StringRecord;

use crate::filter::StringFilters;

/// Storage seam for string records, keyed by content hash.
pub trait StringStore: Send + Sync {
    /// Insert a record; existing content is a `Duplicate` conflict.
    fn insert(&self, record: StringRecord) -> StoreResult<StringRecord>;

    /// Fetch a record by content hash.
    fn get(&self, id: &str) -> StoreResult<StringRecord>;

    /// All records matching the filter set, in insertion order.
    fn list(&self, filters: &StringFilters) -> StoreResult<Vec<StringRecord>>;

    /// Remove a record by content hash.
    fn delete(&self, id: &str) -> StoreResult<()>;

    /// Number of stored records.
    fn count(&self) -> StoreResult<usize>;
}
