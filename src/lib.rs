//! Arbiter: Arbitrator Profile Entity
//!
//! The persisted public profile of a dispute-resolution provider in a
//! peer-to-peer trading network, bootstrapped from a record store and written
//! back on every edit.

pub mod arbitrator;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod reputation;
pub mod store;
pub mod types;

pub use arbitrator::{Arbitrator, ArbitratorRecord, ProfileDefaults};
pub use error::{KeyProviderError, ProfileError, StorageError};
pub use identity::{Ed25519KeyProvider, IdentityCredential, KeyProvider, SigningPublicKey, UserKeyProvider};
pub use store::{InMemoryStore, Persistable, SledStore, Storage};
