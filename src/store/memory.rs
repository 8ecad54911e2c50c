//! In-memory record store.
//!
//! Keeps the record in process and counts writes, so callers can observe
//! exactly how often an entity asked to be persisted.

use crate::error::StorageError;
use crate::store::{Persistable, Storage};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub struct InMemoryStore<T> {
    record: Mutex<Option<T>>,
    persist_count: AtomicUsize,
    load_count: AtomicUsize,
    available: AtomicBool,
}

impl<T: Persistable> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            record: Mutex::new(None),
            persist_count: AtomicUsize::new(0),
            load_count: AtomicUsize::new(0),
            available: AtomicBool::new(true),
        }
    }

    /// Create a store that already holds `record`
    pub fn seeded(record: T) -> Self {
        let store = Self::new();
        *store.record.lock() = Some(record);
        store
    }

    /// Simulate the store going offline (or coming back)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of successful `persist` calls so far
    pub fn persist_count(&self) -> usize {
        self.persist_count.load(Ordering::SeqCst)
    }

    /// Number of `load_persisted` calls so far
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the currently stored record
    pub fn current(&self) -> Option<T> {
        self.record.lock().clone()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable(format!(
                "{} store is offline",
                T::STORAGE_KEY
            )))
        }
    }
}

impl<T: Persistable> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Persistable + Send> Storage<T> for InMemoryStore<T> {
    fn load_persisted(&self) -> Result<Option<T>, StorageError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.record.lock().clone())
    }

    fn persist(&self, record: &T) -> Result<(), StorageError> {
        self.check_available()?;
        *self.record.lock() = Some(record.clone());
        self.persist_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
