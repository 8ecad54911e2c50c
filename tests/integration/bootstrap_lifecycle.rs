//! Integration tests for the load-or-initialize bootstrap

use super::test_utils::{custom_record, CountingKeyProvider};
use arbiter::types::{ArbitrationMethod, Coin, IdType, IdVerification};
use arbiter::{Arbitrator, ArbitratorRecord, InMemoryStore, ProfileError, StorageError};
use std::sync::Arc;

/// Test that an empty store yields exactly the default profile, written once
#[test]
fn test_empty_store_initializes_defaults() {
    let store = Arc::new(InMemoryStore::<ArbitratorRecord>::new());
    let keys = CountingKeyProvider::new();

    let arbitrator = Arbitrator::new(store.clone(), &keys).unwrap();

    assert_eq!(keys.calls(), 1);
    assert_eq!(store.load_count(), 1);
    assert_eq!(store.persist_count(), 1);

    let persisted = store.current().unwrap();
    assert_eq!(persisted.id, "Manfred Karrer");
    assert_eq!(persisted.pub_key, vec![0xab; 33]);
    assert_eq!(persisted.id_type, IdType::RealLifeId);
    assert_eq!(persisted.fee, Coin::from_sat(10_000_000));
    assert_eq!(persisted.arbitration_methods, vec![ArbitrationMethod::TlsNotary]);
    assert_eq!(persisted.id_verifications, vec![IdVerification::Passport]);
    assert_eq!(&persisted, arbitrator.record());
}

/// Test that an existing record is restored field for field with no write
#[test]
fn test_existing_record_is_restored_untouched() {
    let record = custom_record("Erin");
    let store = Arc::new(InMemoryStore::seeded(record.clone()));
    let keys = CountingKeyProvider::new();

    let arbitrator = Arbitrator::new(store.clone(), &keys).unwrap();

    // Nothing from the default branch leaks into a restored profile
    assert_eq!(arbitrator.record(), &record);
    assert_eq!(arbitrator.id(), "Erin");
    assert_eq!(arbitrator.signing_pub_key(), &record.signing_pub_key);
    assert_eq!(arbitrator.description(), "Custom profile");
    assert_eq!(keys.calls(), 0);
    assert_eq!(store.persist_count(), 0);
    assert_eq!(store.current(), Some(record));
}

/// Test that a record with an empty id never becomes a live profile
#[test]
fn test_empty_id_record_is_rejected() {
    let mut record = custom_record("Frank");
    record.id.clear();
    let store = Arc::new(InMemoryStore::seeded(record));
    let keys = CountingKeyProvider::new();

    let result = Arbitrator::new(store.clone(), &keys);

    assert!(matches!(result, Err(ProfileError::CorruptPersistedRecord(_))));
    assert_eq!(keys.calls(), 0);
    assert_eq!(store.persist_count(), 0);
}

/// Test that an offline store fails bootstrap in both branches
#[test]
fn test_offline_store_fails_bootstrap() {
    let empty = Arc::new(InMemoryStore::<ArbitratorRecord>::new());
    empty.set_available(false);
    let result = Arbitrator::new(empty.clone(), &CountingKeyProvider::new());
    assert!(matches!(
        result,
        Err(ProfileError::StoreUnavailable(StorageError::Unavailable(_)))
    ));
    assert!(empty.current().is_none());

    let seeded = Arc::new(InMemoryStore::seeded(custom_record("Gina")));
    seeded.set_available(false);
    let result = Arbitrator::new(seeded, &CountingKeyProvider::new());
    assert!(matches!(result, Err(ProfileError::StoreUnavailable(_))));
}
