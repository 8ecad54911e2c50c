//! Merge rules: defaults, override order, conflict handling.

use crate::config::default_store_path;
use crate::arbitrator::defaults::{DEFAULT_FEE, DEFAULT_NAME};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("profile.name", DEFAULT_NAME)?
        .set_default("profile.fee", DEFAULT_FEE)?
        .set_default(
            "storage.store_path",
            default_store_path().to_string_lossy().into_owned(),
        )?
        .set_default("logging.level", "info")
}
