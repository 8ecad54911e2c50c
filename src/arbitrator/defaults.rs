//! Default profile values used when no persisted profile exists.

use crate::types::{ArbitrationMethod, Coin, IdType, IdVerification, LanguageTag};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Manfred Karrer";
pub const DEFAULT_FEE: &str = "0.1";
pub const DEFAULT_WEB_URL: &str = "https://bitsquare.io";
pub const DEFAULT_DESCRIPTION: &str = "Bla bla...";

/// Values for a freshly initialized profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Display name; also becomes the profile id
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_id_type")]
    pub id_type: IdType,

    /// Profile language; the system locale's language when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageTag>,

    /// Fee as a decimal BTC amount, e.g. "0.1"
    #[serde(default = "default_fee")]
    pub fee: String,

    #[serde(default = "default_arbitration_method")]
    pub arbitration_method: ArbitrationMethod,

    #[serde(default = "default_id_verification")]
    pub id_verification: IdVerification,

    #[serde(default = "default_web_url")]
    pub web_url: String,

    #[serde(default = "default_description")]
    pub description: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_id_type() -> IdType {
    IdType::RealLifeId
}

fn default_fee() -> String {
    DEFAULT_FEE.to_string()
}

fn default_arbitration_method() -> ArbitrationMethod {
    ArbitrationMethod::TlsNotary
}

fn default_id_verification() -> IdVerification {
    IdVerification::Passport
}

fn default_web_url() -> String {
    DEFAULT_WEB_URL.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: default_name(),
            id_type: default_id_type(),
            language: None,
            fee: default_fee(),
            arbitration_method: default_arbitration_method(),
            id_verification: default_id_verification(),
            web_url: default_web_url(),
            description: default_description(),
        }
    }
}

impl ProfileDefaults {
    /// Validate default profile values
    pub fn validate(&self) -> Result<(), String> {
        self.checked_fee().map(|_| ())
    }

    /// Check the name and return the parsed fee
    pub(crate) fn checked_fee(&self) -> Result<Coin, String> {
        if self.profile_name().is_empty() {
            return Err("Default profile name cannot be empty".to_string());
        }
        self.fee_amount()
    }

    /// Name without surrounding whitespace; this is what the profile stores
    pub fn profile_name(&self) -> &str {
        self.name.trim()
    }

    /// Parsed default fee
    pub fn fee_amount(&self) -> Result<Coin, String> {
        Coin::parse(&self.fee).map_err(|e| format!("Invalid default fee '{}': {}", self.fee, e))
    }

    /// Configured language, or the system default
    pub fn resolved_language(&self) -> LanguageTag {
        self.language
            .clone()
            .unwrap_or_else(LanguageTag::system_default)
    }
}
