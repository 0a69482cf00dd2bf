//! Persistence backends for the serialized day store.
//!
//! The whole store is saved as one JSON blob. The SQLite backend keeps it in
//! a key-value table under [`STORE_KEY`].

use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StorageError;

/// Key of the store blob in the `kv` table.
pub const STORE_KEY: &str = "ritual_tracker_data";

/// Load/save collaborator for the serialized store.
pub trait BlobStore {
    /// Saved blob, or `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the saved blob.
    fn save(&self, blob: &str) -> Result<(), StorageError>;
}

/// SQLite database holding the store blob.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/ritualroom.db`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let path = data_dir()?.join("ritualroom.db");
        Self::open_at(path)
    }

    /// Open (or create) the database at `path`.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl BlobStore for Database {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.kv_get(STORE_KEY)
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        self.kv_set(STORE_KEY, blob)
    }
}

/// Process-local blob holder for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blob: RefCell<Option<String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// Last saved blob.
    pub fn contents(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        (**self).save(blob)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for Box<T> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> Result<(), StorageError> {
        (**self).save(blob)
    }
}
