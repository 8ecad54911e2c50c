//! Persistence layer for the record store

use crate::error::StorageError;
use crate::store::{Persistable, Storage};
use std::marker::PhantomData;
use std::path::Path;

/// Sled-based implementation of Storage
///
/// Records are bincode-encoded under `T::STORAGE_KEY`, so several entity types
/// can share one database.
pub struct SledStore<T> {
    db: sled::Db,
    _record: PhantomData<fn() -> T>,
}

impl<T: Persistable> SledStore<T> {
    /// Open (or create) a SledStore at the given path
    ///
    /// The path is a directory; sled creates its files inside it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            StorageError::Unavailable(format!(
                "Failed to open sled database at {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self::from_db(db))
    }

    /// Wrap an already opened database
    pub fn from_db(db: sled::Db) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    /// Check if a record has been persisted
    pub fn contains(&self) -> Result<bool, StorageError> {
        Ok(self.db.contains_key(T::STORAGE_KEY)?)
    }

    /// Remove the persisted record, if any
    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.remove(T::STORAGE_KEY)?;
        self.db.flush()?;
        Ok(())
    }
}

impl<T: Persistable> Storage<T> for SledStore<T> {
    fn load_persisted(&self) -> Result<Option<T>, StorageError> {
        match self.db.get(T::STORAGE_KEY)? {
            Some(value) => {
                let record: T = bincode::deserialize(&value).map_err(|e| {
                    StorageError::Encoding(format!(
                        "Failed to deserialize {} record: {}",
                        T::STORAGE_KEY,
                        e
                    ))
                })?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn persist(&self, record: &T) -> Result<(), StorageError> {
        let value = bincode::serialize(record).map_err(|e| {
            StorageError::Encoding(format!(
                "Failed to serialize {} record: {}",
                T::STORAGE_KEY,
                e
            ))
        })?;

        self.db.insert(T::STORAGE_KEY, value)?;
        self.db.flush()?;
        tracing::trace!(key = T::STORAGE_KEY, "Record flushed to disk");
        Ok(())
    }
}
