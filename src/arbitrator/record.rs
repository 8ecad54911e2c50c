//! Persisted shape of an arbitrator profile.

use crate::arbitrator::defaults::ProfileDefaults;
use crate::error::ProfileError;
use crate::identity::{IdentityCredential, SigningPublicKey};
use crate::reputation::Reputation;
use crate::store::Persistable;
use crate::types::{ArbitrationMethod, Coin, IdType, IdVerification, LanguageTag};
use serde::{Deserialize, Serialize};

/// ArbitratorRecord: every persisted field of a profile
///
/// Derives structural equality for content comparison; profile identity
/// equality lives on [`crate::arbitrator::Arbitrator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitratorRecord {
    pub id: String,
    pub pub_key: Vec<u8>,
    pub signing_pub_key: SigningPublicKey,
    pub name: String,
    pub reputation: Reputation,

    pub id_type: IdType,
    pub languages: Vec<LanguageTag>,
    pub fee: Coin,
    pub arbitration_methods: Vec<ArbitrationMethod>,
    pub id_verifications: Vec<IdVerification>,
    pub web_url: String,
    pub description: String,
}

impl Persistable for ArbitratorRecord {
    const STORAGE_KEY: &'static str = "Arbitrator";
}

impl ArbitratorRecord {
    /// Build the default profile around a freshly issued credential
    pub fn from_defaults(
        defaults: &ProfileDefaults,
        credential: IdentityCredential,
    ) -> Result<Self, ProfileError> {
        let fee = defaults.checked_fee().map_err(ProfileError::ConfigError)?;
        Ok(Self::assemble(defaults, fee, credential))
    }

    /// Build a record from defaults whose fee has already been checked
    pub(crate) fn assemble(
        defaults: &ProfileDefaults,
        fee: Coin,
        credential: IdentityCredential,
    ) -> Self {
        let name = defaults.profile_name().to_string();
        Self {
            id: name.clone(),
            pub_key: credential.pub_key,
            signing_pub_key: credential.signing_pub_key,
            name,
            reputation: Reputation::new(),
            id_type: defaults.id_type,
            languages: vec![defaults.resolved_language()],
            fee,
            arbitration_methods: vec![defaults.arbitration_method],
            id_verifications: vec![defaults.id_verification],
            web_url: defaults.web_url.clone(),
            description: defaults.description.clone(),
        }
    }

    /// Reject records that cannot back a live profile
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.id.is_empty() {
            return Err(ProfileError::CorruptPersistedRecord(
                "persisted arbitrator record has an empty id".to_string(),
            ));
        }
        Ok(())
    }
}
