//! Core value types carried by the arbitrator profile.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How the arbitrator identifies themselves to traders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdType {
    RealLifeId,
    Nickname,
    Company,
}

/// Evidence-gathering methods an arbitrator supports during a dispute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArbitrationMethod {
    TlsNotary,
    SkypeScreenSharing,
    SmartPhoneVideoChat,
    RequireRealId,
    BankStatement,
    Other,
}

/// Ways the arbitrator's own identity can be verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdVerification {
    Passport,
    GovId,
    UtilityBills,
    Facebook,
    GooglePlus,
    Twitter,
    Pgp,
    BtcOtc,
    Other,
}

/// Number of satoshis in one bitcoin
pub const SATOSHIS_PER_COIN: i64 = 100_000_000;

/// Maximum fractional digits accepted when parsing a decimal amount
const MAX_DECIMALS: usize = 8;

/// Errors produced while parsing a decimal coin amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinParseError {
    #[error("Amount is empty")]
    Empty,

    #[error("Amount must not be negative: {0}")]
    Negative(String),

    #[error("Amount has more than 8 decimal places: {0}")]
    TooPrecise(String),

    #[error("Amount is not a decimal number: {0}")]
    Invalid(String),

    #[error("Amount overflows: {0}")]
    Overflow(String),
}

/// Monetary amount in satoshis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Coin(i64);

impl Coin {
    pub const ZERO: Coin = Coin(0);
    pub const COIN: Coin = Coin(SATOSHIS_PER_COIN);
    pub const CENT: Coin = Coin(SATOSHIS_PER_COIN / 100);

    pub const fn from_sat(satoshis: i64) -> Self {
        Coin(satoshis)
    }

    /// Amount in satoshis
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parse a decimal BTC amount such as `"0.1"` or `"12.5"`
    pub fn parse(input: &str) -> Result<Self, CoinParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoinParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(CoinParseError::Negative(trimmed.to_string()));
        }

        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(CoinParseError::Invalid(trimmed.to_string()));
        }
        if frac.len() > MAX_DECIMALS {
            return Err(CoinParseError::TooPrecise(trimmed.to_string()));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| CoinParseError::Overflow(trimmed.to_string()))?
        };
        let frac_value: i64 = if frac.is_empty() {
            0
        } else {
            format!("{:0<width$}", frac, width = MAX_DECIMALS)
                .parse()
                .map_err(|_| CoinParseError::Invalid(trimmed.to_string()))?
        };

        whole_value
            .checked_mul(SATOSHIS_PER_COIN)
            .and_then(|sat| sat.checked_add(frac_value))
            .map(Coin)
            .ok_or_else(|| CoinParseError::Overflow(trimmed.to_string()))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SATOSHIS_PER_COIN as u64;
        let frac = format!("{:08}", abs % SATOSHIS_PER_COIN as u64);
        let frac = frac.trim_end_matches('0');
        let frac = if frac.is_empty() { "0" } else { frac };
        write!(f, "{}{}.{}", sign, whole, frac)
    }
}

/// Fallback language when the environment does not name one
pub const FALLBACK_LANGUAGE: &str = "en";

/// ISO 639 language code, e.g. `en` or `de`
///
/// Always lowercase, including when read back from config or a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_lowercase())
    }

    /// Extract the language part of a POSIX locale string such as `de_DE.UTF-8`.
    ///
    /// Returns `None` for the `C`/`POSIX` locales and empty input.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let language = locale
            .split(|c: char| c == '_' || c == '.' || c == '@' || c == '-')
            .next()
            .unwrap_or_default()
            .trim();
        if language.is_empty()
            || language.eq_ignore_ascii_case("c")
            || language.eq_ignore_ascii_case("posix")
        {
            return None;
        }
        Some(Self::new(language))
    }

    /// Language of the running process, from `LC_ALL`, `LC_MESSAGES` or `LANG`
    pub fn system_default() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::from_locale(&value))
            .unwrap_or_else(|| Self::new(FALLBACK_LANGUAGE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LanguageTag {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
