//! Configuration loading entry points.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ArbiterConfig;
use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Loads [`ArbiterConfig`] from layered sources
///
/// Precedence (highest last): built-in defaults, global config file,
/// workspace `config/config.toml`, workspace `config/{ARBITER_ENV}.toml`,
/// then `ARBITER__SECTION__KEY` environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the given workspace
    pub fn load(workspace_root: &Path) -> Result<ArbiterConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(
                Environment::with_prefix("ARBITER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a single file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<ArbiterConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Location of the user-level config file, if it can be determined
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
