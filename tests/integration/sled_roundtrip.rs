//! Integration tests for profiles backed by the sled store

use super::test_utils::CountingKeyProvider;
use arbiter::types::Coin;
use arbiter::{Arbitrator, ArbitratorRecord, Ed25519KeyProvider, ProfileError, SledStore, Storage};
use std::sync::Arc;
use tempfile::TempDir;

/// Test the create, reopen, and compare cycle on a real database
#[test]
fn test_default_profile_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(SledStore::<ArbitratorRecord>::open(temp_dir.path()).unwrap());

    let first = Arbitrator::new(store.clone(), &Ed25519KeyProvider::new()).unwrap();
    assert_eq!(first.id(), "Manfred Karrer");
    assert_eq!(first.fee(), Coin::parse("0.1").unwrap());

    let persisted = store.load_persisted().unwrap().unwrap();
    assert_eq!(persisted.id, "Manfred Karrer");

    let keys = CountingKeyProvider::new();
    let second = Arbitrator::new(store.clone(), &keys).unwrap();
    assert_eq!(keys.calls(), 0);
    assert_eq!(second.record(), first.record());
    assert_eq!(first, second);
}

/// Test that a profile written by one process is restored after reopening the database
#[test]
fn test_profile_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let original_pub_key;
    {
        let store = Arc::new(SledStore::<ArbitratorRecord>::open(temp_dir.path()).unwrap());
        let mut arbitrator = Arbitrator::new(store, &Ed25519KeyProvider::new()).unwrap();
        arbitrator.set_description("Persisted to disk").unwrap();
        original_pub_key = arbitrator.pub_key_hex();
    }

    let store = Arc::new(SledStore::<ArbitratorRecord>::open(temp_dir.path()).unwrap());
    let arbitrator = Arbitrator::new(store, &CountingKeyProvider::new()).unwrap();
    assert_eq!(arbitrator.description(), "Persisted to disk");
    assert_eq!(arbitrator.pub_key_hex(), original_pub_key);
}

/// Test that undecodable bytes under the profile key fail bootstrap
#[test]
fn test_garbage_record_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledStore::<ArbitratorRecord>::open(temp_dir.path()).unwrap();
    store
        .db()
        .insert("Arbitrator", &b"not a profile"[..])
        .unwrap();

    let result = Arbitrator::new(Arc::new(store), &CountingKeyProvider::new());
    assert!(matches!(result, Err(ProfileError::CorruptPersistedRecord(_))));
}
