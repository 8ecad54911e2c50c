//! Integration tests for bootstrapping a profile from configuration

use super::test_utils::{with_isolated_home, CountingKeyProvider};
use arbiter::config::ConfigLoader;
use arbiter::types::{Coin, IdType, LanguageTag};
use arbiter::Arbitrator;
use std::sync::Arc;
use tempfile::TempDir;

/// Test that workspace config drives the defaults of a fresh profile
#[test]
fn test_configured_defaults_seed_fresh_profile() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("workspace");
    std::fs::create_dir_all(workspace.join("config")).unwrap();
    let store_path = temp_dir.path().join("store");

    std::fs::write(
        workspace.join("config").join("config.toml"),
        format!(
            r#"
[profile]
name = "Kim"
id_type = "NICKNAME"
language = "nl"
fee = "0.02"
description = "Configured"

[storage]
store_path = "{}"
"#,
            store_path.display()
        ),
    )
    .unwrap();

    let config = with_isolated_home(&temp_dir, || ConfigLoader::load(&workspace).unwrap());
    assert!(config.validate().is_ok());

    let store = Arc::new(config.open_store().unwrap());
    let arbitrator =
        Arbitrator::with_defaults(store, &CountingKeyProvider::new(), &config.profile).unwrap();

    assert_eq!(arbitrator.id(), "Kim");
    assert_eq!(arbitrator.id_type(), IdType::Nickname);
    assert_eq!(arbitrator.languages(), &[LanguageTag::new("nl")]);
    assert_eq!(arbitrator.fee(), Coin::from_sat(2_000_000));
    assert_eq!(arbitrator.description(), "Configured");
    assert_eq!(arbitrator.web_url(), "https://bitsquare.io");
}
