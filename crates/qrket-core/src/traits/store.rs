//! Record store trait.

use std::collections::HashSet;

use crate::Result;
use crate::record::{QrRecord, RecordDraft, RecordId};

/// A persistence-backed record collection.
///
/// Implementations own the collection exclusively; callers hold read
/// projections plus these mutation entry points. Every mutation is
/// durably committed before it returns.
pub trait RecordStore {
    /// Validate the draft, stamp a fresh id and timestamp, prepend the
    /// record, and persist. Returns the created record.
    fn create(&self, draft: RecordDraft) -> Result<QrRecord>;

    /// Remove the record with the given id, if present. Absent ids are a
    /// no-op, not an error.
    fn delete_one(&self, id: &RecordId) -> Result<()>;

    /// Remove every record whose id is in `ids` as a single persisted
    /// state transition.
    fn delete_many(&self, ids: &HashSet<RecordId>) -> Result<()>;

    /// The current collection, newest-first.
    fn list(&self) -> Result<Vec<QrRecord>>;
}
