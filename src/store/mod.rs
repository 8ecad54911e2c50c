//! Record Store
//!
//! Typed load/persist storage for entities. Each entity type owns exactly one
//! record, addressed by its storage key.

pub mod memory;
pub mod persistence;

pub use memory::InMemoryStore;
pub use persistence::SledStore;

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity with a single persisted record
pub trait Persistable: Serialize + DeserializeOwned + Clone {
    /// Key identifying this entity type in the store
    const STORAGE_KEY: &'static str;
}

/// Record store interface
pub trait Storage<T: Persistable>: Send + Sync {
    /// Load the previously persisted record, or `None` if nothing was ever saved
    fn load_persisted(&self) -> Result<Option<T>, StorageError>;

    /// Durably store `record`, replacing any prior record
    fn persist(&self, record: &T) -> Result<(), StorageError>;
}
