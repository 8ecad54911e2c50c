//! Arbitrator Profile
//!
//! The public profile of a dispute-resolution provider. A profile is bootstrapped
//! once per process against a record store: an existing record is restored as
//! the live working copy, otherwise a default profile is created around a fresh
//! identity credential and written immediately.
//!
//! Every mutator writes through to the store. The explicit [`Arbitrator::save`]
//! only writes while `save_on_every_update` is switched on.

pub mod defaults;
pub mod record;

pub use defaults::ProfileDefaults;
pub use record::ArbitratorRecord;

use crate::error::ProfileError;
use crate::identity::{KeyProvider, SigningPublicKey};
use crate::reputation::Reputation;
use crate::store::Storage;
use crate::types::{ArbitrationMethod, Coin, IdType, IdVerification, LanguageTag};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Hash written for a profile without an id
const EMPTY_ID_HASH: u64 = 0;

pub struct Arbitrator {
    storage: Arc<dyn Storage<ArbitratorRecord>>,
    save_on_every_update: bool,
    record: ArbitratorRecord,
}

impl Arbitrator {
    /// Bootstrap the profile using the built-in defaults
    pub fn new(
        storage: Arc<dyn Storage<ArbitratorRecord>>,
        key_provider: &dyn KeyProvider,
    ) -> Result<Self, ProfileError> {
        Self::with_defaults(storage, key_provider, &ProfileDefaults::default())
    }

    /// Bootstrap the profile, creating it from `defaults` if the store is empty
    ///
    /// Returns an error if:
    /// - The store cannot be read, or cannot be written in the fresh branch
    /// - The persisted record has an empty id or cannot be decoded
    /// - The key provider cannot issue a credential
    pub fn with_defaults(
        storage: Arc<dyn Storage<ArbitratorRecord>>,
        key_provider: &dyn KeyProvider,
        defaults: &ProfileDefaults,
    ) -> Result<Self, ProfileError> {
        match storage.load_persisted()? {
            Some(persisted) => {
                if let Err(e) = persisted.validate() {
                    warn!(name = %persisted.name, "Rejecting persisted arbitrator profile: {}", e);
                    return Err(e);
                }
                info!(id = %persisted.id, "Restored arbitrator profile from store");
                Ok(Self {
                    storage,
                    save_on_every_update: false,
                    record: persisted,
                })
            }
            None => {
                let fee = defaults.checked_fee().map_err(ProfileError::ConfigError)?;
                let credential = key_provider.generate_identity_credential()?;
                let record = ArbitratorRecord::assemble(defaults, fee, credential);
                info!(id = %record.id, "No persisted arbitrator profile, initialized defaults");

                let arbitrator = Self {
                    storage,
                    save_on_every_update: false,
                    record,
                };
                arbitrator.do_save()?;
                Ok(arbitrator)
            }
        }
    }

    /// Persist the profile if `save_on_every_update` is set; otherwise a no-op
    pub fn save(&self) -> Result<(), ProfileError> {
        if self.save_on_every_update {
            self.do_save()
        } else {
            Ok(())
        }
    }

    fn do_save(&self) -> Result<(), ProfileError> {
        debug!(id = %self.record.id, "Persisting arbitrator profile");
        self.storage
            .persist(&self.record)
            .map_err(ProfileError::StoreUnavailable)
    }

    // Setters. Each one writes through regardless of save_on_every_update.

    /// Process-local switch gating [`Arbitrator::save`]; never persisted
    pub fn set_save_on_every_update(&mut self, save_on_every_update: bool) {
        self.save_on_every_update = save_on_every_update;
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ProfileError> {
        self.record.description = description.into();
        self.do_save()
    }

    pub fn set_id_type(&mut self, id_type: IdType) -> Result<(), ProfileError> {
        self.record.id_type = id_type;
        self.do_save()
    }

    pub fn set_languages(&mut self, languages: Vec<LanguageTag>) -> Result<(), ProfileError> {
        self.record.languages = languages;
        self.do_save()
    }

    pub fn set_fee(&mut self, fee: Coin) -> Result<(), ProfileError> {
        self.record.fee = fee;
        self.do_save()
    }

    pub fn set_arbitration_methods(
        &mut self,
        arbitration_methods: Vec<ArbitrationMethod>,
    ) -> Result<(), ProfileError> {
        self.record.arbitration_methods = arbitration_methods;
        self.do_save()
    }

    pub fn set_id_verifications(
        &mut self,
        id_verifications: Vec<IdVerification>,
    ) -> Result<(), ProfileError> {
        self.record.id_verifications = id_verifications;
        self.do_save()
    }

    pub fn set_web_url(&mut self, web_url: impl Into<String>) -> Result<(), ProfileError> {
        self.record.web_url = web_url.into();
        self.do_save()
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn pub_key(&self) -> &[u8] {
        &self.record.pub_key
    }

    /// Hex encoding of the profile public key
    pub fn pub_key_hex(&self) -> String {
        hex::encode(&self.record.pub_key)
    }

    pub fn signing_pub_key(&self) -> &SigningPublicKey {
        &self.record.signing_pub_key
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn reputation(&self) -> &Reputation {
        &self.record.reputation
    }

    pub fn id_type(&self) -> IdType {
        self.record.id_type
    }

    pub fn languages(&self) -> &[LanguageTag] {
        &self.record.languages
    }

    pub fn fee(&self) -> Coin {
        self.record.fee
    }

    pub fn arbitration_methods(&self) -> &[ArbitrationMethod] {
        &self.record.arbitration_methods
    }

    pub fn id_verifications(&self) -> &[IdVerification] {
        &self.record.id_verifications
    }

    pub fn web_url(&self) -> &str {
        &self.record.web_url
    }

    pub fn description(&self) -> &str {
        &self.record.description
    }

    pub fn save_on_every_update(&self) -> bool {
        self.save_on_every_update
    }

    /// Snapshot of every persisted field, for content comparison
    pub fn record(&self) -> &ArbitratorRecord {
        &self.record
    }

    /// Membership test; method lists are treated as sets
    pub fn supports_method(&self, method: ArbitrationMethod) -> bool {
        self.record.arbitration_methods.contains(&method)
    }

    pub fn accepts_verification(&self, verification: IdVerification) -> bool {
        self.record.id_verifications.contains(&verification)
    }

    pub fn speaks(&self, language: &LanguageTag) -> bool {
        self.record.languages.contains(language)
    }
}

/// Profiles are equal when they share an id, whatever their other fields hold.
impl PartialEq for Arbitrator {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        !self.record.id.is_empty() && self.record.id == other.record.id
    }
}

impl Eq for Arbitrator {}

impl Hash for Arbitrator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.record.id.is_empty() {
            EMPTY_ID_HASH.hash(state);
        } else {
            self.record.id.hash(state);
        }
    }
}

impl fmt::Debug for Arbitrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arbitrator")
            .field("save_on_every_update", &self.save_on_every_update)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}
