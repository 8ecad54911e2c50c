//! Error types for the arbitrator profile entity and its collaborators.

use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Failed to encode or decode record: {0}")]
    Encoding(String),

    #[error("Store is unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        match err {
            sled::Error::Io(io) => StorageError::IoError(io),
            other => StorageError::Backend(other.to_string()),
        }
    }
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Encoding(err.to_string())
    }
}

/// Identity key provider errors
#[derive(Debug, Error)]
pub enum KeyProviderError {
    #[error("Randomness source failed: {0}")]
    Randomness(String),

    #[error("Invalid key material: {0}")]
    InvalidKey(String),
}

/// Errors surfaced by the profile entity
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Persistence store unavailable: {0}")]
    StoreUnavailable(StorageError),

    #[error("Corrupt persisted record: {0}")]
    CorruptPersistedRecord(String),

    #[error("Identity credential unavailable: {0}")]
    IdentityCredentialUnavailable(#[from] KeyProviderError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for ProfileError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Encoding(msg) => ProfileError::CorruptPersistedRecord(msg),
            other => ProfileError::StoreUnavailable(other),
        }
    }
}

impl From<config::ConfigError> for ProfileError {
    fn from(err: config::ConfigError) -> Self {
        ProfileError::ConfigError(err.to_string())
    }
}
