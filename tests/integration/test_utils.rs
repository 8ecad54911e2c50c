//! Shared test utilities for integration tests

use arbiter::identity::{IdentityCredential, KeyProvider};
use arbiter::types::{ArbitrationMethod, Coin, IdType, IdVerification, LanguageTag};
use arbiter::{ArbitratorRecord, KeyProviderError};
use ed25519_dalek::SigningKey;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

/// Key provider returning a fixed credential and counting calls
pub struct CountingKeyProvider {
    calls: AtomicUsize,
}

impl CountingKeyProvider {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl KeyProvider for CountingKeyProvider {
    fn generate_identity_credential(&self) -> Result<IdentityCredential, KeyProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(IdentityCredential {
            pub_key: vec![0xab; 33],
            signing_pub_key: SigningKey::from_bytes(&[11u8; 32]).verifying_key().into(),
        })
    }
}

/// A fully populated record that differs from the built-in defaults everywhere
pub fn custom_record(id: &str) -> ArbitratorRecord {
    ArbitratorRecord {
        id: id.to_string(),
        pub_key: vec![0x02; 33],
        signing_pub_key: SigningKey::from_bytes(&[21u8; 32]).verifying_key().into(),
        name: id.to_string(),
        reputation: Default::default(),
        id_type: IdType::Company,
        languages: vec![LanguageTag::new("pt"), LanguageTag::new("es")],
        fee: Coin::from_sat(42_000),
        arbitration_methods: vec![
            ArbitrationMethod::RequireRealId,
            ArbitrationMethod::SmartPhoneVideoChat,
        ],
        id_verifications: vec![IdVerification::UtilityBills],
        web_url: "https://custom.example".to_string(),
        description: "Custom profile".to_string(),
    }
}

/// Serializes tests that modify process environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`
pub fn with_isolated_home<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved_home = std::env::var("HOME").ok();
    let saved_xdg = std::env::var("XDG_CONFIG_HOME").ok();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();
    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", test_home.join(".config"));

    let result = f();

    match saved_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
    match saved_xdg {
        Some(xdg) => std::env::set_var("XDG_CONFIG_HOME", xdg),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    result
}
