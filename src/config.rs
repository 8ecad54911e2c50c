//! Configuration System
//!
//! Hierarchical configuration for the arbitrator profile: default profile values,
//! store location, and logging. Files are merged by [`ConfigLoader`].

use crate::arbitrator::ArbitratorRecord;
use crate::error::ProfileError;
use crate::logging::LoggingConfig;
use crate::store::SledStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use crate::arbitrator::ProfileDefaults;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArbiterConfig {
    /// Values for a profile created on first start
    #[serde(default)]
    pub profile: ProfileDefaults,

    /// Record store location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the sled database
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

/// Platform data directory for the store, or `.arbiter/store` if none is known
pub(crate) fn default_store_path() -> PathBuf {
    directories::ProjectDirs::from("io", "bitsquare", "arbiter")
        .map(|dirs| dirs.data_dir().join("store"))
        .unwrap_or_else(|| PathBuf::from(".arbiter").join("store"))
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Profile(String),
    Storage(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Profile(msg) => write!(f, "Profile: {}", msg),
            ValidationError::Storage(msg) => write!(f, "Storage: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.store_path.as_os_str().is_empty() {
            return Err("Store path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl ArbiterConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.profile.validate() {
            errors.push(ValidationError::Profile(e));
        }
        if let Err(e) = self.storage.validate() {
            errors.push(ValidationError::Storage(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Open the configured sled store for arbitrator records
    pub fn open_store(&self) -> Result<SledStore<ArbitratorRecord>, ProfileError> {
        self.storage.validate().map_err(ProfileError::ConfigError)?;
        if let Some(parent) = self.storage.store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProfileError::ConfigError(format!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        SledStore::open(&self.storage.store_path).map_err(ProfileError::StoreUnavailable)
    }

    /// Write this configuration as TOML, creating parent directories
    pub fn write_to_file(&self, path: &Path) -> Result<(), ProfileError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProfileError::ConfigError(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProfileError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        std::fs::write(path, content).map_err(|e| {
            ProfileError::ConfigError(format!("Failed to write config {}: {}", path.display(), e))
        })
    }
}
