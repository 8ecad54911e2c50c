//! Identity credentials and the providers that issue them.
//!
//! A fresh profile needs two keys: the profile public key and the signing
//! public key used to authenticate the arbitrator's network messages.

use crate::error::KeyProviderError;
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public half of a message-signing key pair
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigningPublicKey(VerifyingKey);

impl SigningPublicKey {
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyProviderError> {
        VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|e| KeyProviderError::InvalidKey(e.to_string()))
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_bytes())
    }
}

impl From<VerifyingKey> for SigningPublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self(key)
    }
}

impl fmt::Debug for SigningPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningPublicKey").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for SigningPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Credential handed to a freshly initialized profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCredential {
    pub pub_key: Vec<u8>,
    pub signing_pub_key: SigningPublicKey,
}

/// Source of identity credentials for new profiles
pub trait KeyProvider {
    fn generate_identity_credential(&self) -> Result<IdentityCredential, KeyProviderError>;
}

/// Generate a new ed25519 key pair from the OS randomness source
fn generate_signing_key() -> Result<SigningKey, KeyProviderError> {
    let mut secret = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut secret)
        .map_err(|e| KeyProviderError::Randomness(e.to_string()))?;
    Ok(SigningKey::from_bytes(&secret))
}

/// Issues independent fresh keys for both the profile and signing identity
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519KeyProvider;

impl Ed25519KeyProvider {
    pub fn new() -> Self {
        Self
    }
}

impl KeyProvider for Ed25519KeyProvider {
    fn generate_identity_credential(&self) -> Result<IdentityCredential, KeyProviderError> {
        let profile_key = generate_signing_key()?;
        let signing_key = generate_signing_key()?;
        Ok(IdentityCredential {
            pub_key: profile_key.verifying_key().to_bytes().to_vec(),
            signing_pub_key: signing_key.verifying_key().into(),
        })
    }
}

/// Issues a fresh profile key bound to the local user's existing signing key
#[derive(Debug, Clone, Copy)]
pub struct UserKeyProvider {
    signing_pub_key: SigningPublicKey,
}

impl UserKeyProvider {
    pub fn new(signing_pub_key: SigningPublicKey) -> Self {
        Self { signing_pub_key }
    }
}

impl KeyProvider for UserKeyProvider {
    fn generate_identity_credential(&self) -> Result<IdentityCredential, KeyProviderError> {
        let profile_key = generate_signing_key()?;
        Ok(IdentityCredential {
            pub_key: profile_key.verifying_key().to_bytes().to_vec(),
            signing_pub_key: self.signing_pub_key,
        })
    }
}
