//! Filesystem storage for the record collection.
//!
//! The whole collection lives in one durable JSON slot. Mutations are
//! load-mutate-persist cycles under an exclusive lock, committed with a
//! temp-file-and-rename so observers only ever see a fully written slot.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use qrket_core::error::{Error, PersistenceError};
use qrket_core::{QrRecord, RecordDraft, RecordId, RecordStore, Result};

/// Namespace of the durable slot holding the collection.
pub const SLOT_NAMESPACE: &str = "qr-codes";

/// Current slot schema version.
const SLOT_VERSION: u32 = 1;

fn write_err(err: std::io::Error) -> Error {
    PersistenceError::Write {
        namespace: SLOT_NAMESPACE.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// On-disk form of the slot.
///
/// Slots written before the version field was introduced are a bare
/// record array; `decode` still accepts those.
#[derive(Debug, Serialize, Deserialize)]
struct SlotEnvelope {
    version: u32,
    records: Vec<QrRecord>,
}

#[derive(Serialize)]
struct SlotEnvelopeRef<'a> {
    version: u32,
    records: &'a [QrRecord],
}

/// Filesystem-backed record store.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{SLOT_NAMESPACE}.json"))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(format!("{SLOT_NAMESPACE}.lock"))
    }

    /// Load the last committed collection.
    ///
    /// A missing, unreadable, or corrupt slot degrades to an empty
    /// collection rather than an error; the next successful mutation
    /// overwrites it.
    fn load(&self) -> Vec<QrRecord> {
        let path = self.slot_path();
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "slot unreadable, starting empty");
                return Vec::new();
            }
        };

        match Self::decode(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "slot corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn decode(content: &str) -> serde_json::Result<Vec<QrRecord>> {
        match serde_json::from_str::<SlotEnvelope>(content) {
            Ok(envelope) => {
                if envelope.version > SLOT_VERSION {
                    warn!(
                        version = envelope.version,
                        "slot written by a newer version, loading anyway"
                    );
                }
                Ok(envelope.records)
            }
            Err(_) => serde_json::from_str::<Vec<QrRecord>>(content),
        }
    }

    /// Commit the collection: serialize, write to a temp file, sync,
    /// rename over the slot.
    fn persist(&self, records: &[QrRecord]) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(write_err)?;

        let envelope = SlotEnvelopeRef {
            version: SLOT_VERSION,
            records,
        };
        let content =
            serde_json::to_string_pretty(&envelope).map_err(|e| PersistenceError::Encode {
                message: e.to_string(),
            })?;

        let path = self.slot_path();
        let temp_path = path.with_extension("tmp");

        let mut file = File::create(&temp_path).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_data().map_err(write_err)?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(write_err)?;

        Ok(())
    }

    fn with_lock<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        fs::create_dir_all(&self.root).map_err(write_err)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(write_err)?;

        lock_file.lock_exclusive().map_err(write_err)?;
        let result = f(self);
        let _ = fs2::FileExt::unlock(&lock_file);

        result
    }
}

impl RecordStore for FileStore {
    #[instrument(skip(self, draft))]
    fn create(&self, draft: RecordDraft) -> Result<QrRecord> {
        self.with_lock(|store| {
            let id = RecordId::new(Uuid::new_v4().to_string())?;
            let record = QrRecord::from_draft(draft, id, Utc::now())?;

            let mut records = store.load();
            records.insert(0, record.clone());
            store.persist(&records)?;

            debug!(id = %record.id, title = %record.title, "created record");

            Ok(record)
        })
    }

    #[instrument(skip(self))]
    fn delete_one(&self, id: &RecordId) -> Result<()> {
        self.with_lock(|store| {
            let mut records = store.load();
            let before = records.len();
            records.retain(|record| &record.id != id);

            if records.len() != before {
                store.persist(&records)?;
                debug!(id = %id, "deleted record");
            }

            Ok(())
        })
    }

    #[instrument(skip(self, ids))]
    fn delete_many(&self, ids: &HashSet<RecordId>) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        self.with_lock(|store| {
            let mut records = store.load();
            let before = records.len();
            records.retain(|record| !ids.contains(&record.id));

            if records.len() != before {
                store.persist(&records)?;
                debug!(removed = before - records.len(), "deleted records");
            }

            Ok(())
        })
    }

    fn list(&self) -> Result<Vec<QrRecord>> {
        Ok(self.load())
    }
}
