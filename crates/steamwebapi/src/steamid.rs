//! Steam identifier conversion
//!
//! A [`SteamId`] is stored as its 64-bit form and can be built from, or
//! rendered as, any of the four representations the Steam ecosystem uses:
//!
//! | Form        | Example              |
//! |-------------|----------------------|
//! | 64-bit      | `76561197960265733`  |
//! | account id  | `5`                  |
//! | legacy      | `STEAM_1:1:2`        |
//! | bracketed   | `[U:1:5]`            |
//!
//! ```rust
//! use steamwebapi::SteamId;
//!
//! let id: SteamId = "STEAM_1:1:2".parse()?;
//! assert_eq!(id.as_u64(), 76561197960265733);
//! assert_eq!(id.as_bracketed(), "[U:1:5]");
//! assert_eq!(id, SteamId::from(5u32));
//! # Ok::<(), steamwebapi::steamid::InvalidSteamId>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Offset between an account id and its 64-bit identifier (individual account,
/// public universe).
pub const STEAM_ID64_BASE: u64 = 76561197960265728;

/// Account ids fit in 32 bits; anything wider is already a 64-bit id.
const ACCOUNT_ID_BITS: u32 = 32;

/// Length of a 64-bit id written in decimal.
const STEAM_ID64_DIGITS: usize = 17;

static LEGACY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^STEAM_[0-5]:[0-1]:\d+").expect("valid legacy regex"));

static BRACKETED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\[U:1:(\d+)\]").expect("valid bracketed regex"));

/// Error returned when an input cannot be interpreted as a Steam identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Steam identifier {input:?}: {reason}")]
pub struct InvalidSteamId {
    input: String,
    reason: &'static str,
}

impl InvalidSteamId {
    fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The rejected input, as text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A Steam identifier, normalized to its 64-bit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId {
    /// Build an identifier from an integer.
    ///
    /// Values that fit in 32 bits are account ids and get [`STEAM_ID64_BASE`]
    /// added; wider values are taken as 64-bit ids unchanged.
    pub const fn from_u64(value: u64) -> Self {
        if u64::BITS - value.leading_zeros() <= ACCOUNT_ID_BITS {
            Self(value + STEAM_ID64_BASE)
        } else {
            Self(value)
        }
    }

    /// Parse any of the supported textual forms.
    ///
    /// Accepts `STEAM_X:Y:Z` (legacy), `[U:1:N]` (bracketed) and 17-digit
    /// 64-bit ids. Both prefixes are matched case-insensitively.
    pub fn parse(input: &str) -> Result<Self, InvalidSteamId> {
        if LEGACY_RE.is_match(input) {
            return Self::parse_legacy(input);
        }

        if let Some(caps) = BRACKETED_RE.captures(input) {
            let account: u64 = caps[1]
                .parse()
                .map_err(|_| InvalidSteamId::new(input, "account id out of range"))?;
            return account
                .checked_add(STEAM_ID64_BASE)
                .map(Self)
                .ok_or_else(|| InvalidSteamId::new(input, "account id out of range"));
        }

        if input.len() == STEAM_ID64_DIGITS && input.bytes().all(|b| b.is_ascii_digit()) {
            let value: u64 = input
                .parse()
                .map_err(|_| InvalidSteamId::new(input, "64-bit id out of range"))?;
            return Ok(Self(value));
        }

        Err(InvalidSteamId::new(input, "unrecognized format"))
    }

    fn parse_legacy(input: &str) -> Result<Self, InvalidSteamId> {
        let parts: Vec<&str> = input.split(':').collect();
        let [_, y, z] = parts.as_slice() else {
            return Err(InvalidSteamId::new(input, "expected exactly three fields"));
        };

        if z.is_empty() || !z.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSteamId::new(input, "account number is not numeric"));
        }

        let y: u64 = y
            .parse()
            .map_err(|_| InvalidSteamId::new(input, "auth server is not numeric"))?;
        let z: u64 = z
            .parse()
            .map_err(|_| InvalidSteamId::new(input, "account number out of range"))?;

        z.checked_mul(2)
            .and_then(|v| v.checked_add(y))
            .and_then(|v| v.checked_add(STEAM_ID64_BASE))
            .map(Self)
            .ok_or_else(|| InvalidSteamId::new(input, "account number out of range"))
    }

    /// Offset from [`STEAM_ID64_BASE`]; negative for pathological values below it.
    fn offset(&self) -> i128 {
        i128::from(self.0) - i128::from(STEAM_ID64_BASE)
    }

    /// The account id (`value - BASE`).
    ///
    /// Negative when the stored value is below [`STEAM_ID64_BASE`], which only
    /// happens for 17-digit inputs that are not real 64-bit ids or for
    /// negative account ids.
    pub fn as_account_id(&self) -> i128 {
        self.offset()
    }

    /// The legacy `STEAM_1:Y:Z` form. The universe digit is always `1`.
    pub fn as_legacy(&self) -> String {
        let offset = self.offset();
        format!(
            "STEAM_1:{}:{}",
            offset.rem_euclid(2),
            offset.div_euclid(2)
        )
    }

    /// The bracketed `[U:1:N]` form.
    pub fn as_bracketed(&self) -> String {
        format!("[U:1:{}]", self.offset())
    }

    /// The 64-bit id as a decimal string.
    pub fn as_numeric(&self) -> String {
        self.0.to_string()
    }

    /// The 64-bit id.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SteamId {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for SteamId {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl TryFrom<u128> for SteamId {
    type Error = InvalidSteamId;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| InvalidSteamId::new(value.to_string(), "wider than 64 bits"))
    }
}

impl TryFrom<i64> for SteamId {
    type Error = InvalidSteamId;

    /// Negative values that fit in 32 bits are account ids below the base.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if let Ok(unsigned) = u64::try_from(value) {
            return Ok(Self::from_u64(unsigned));
        }

        if value.unsigned_abs() < 1 << ACCOUNT_ID_BITS {
            return Ok(Self(STEAM_ID64_BASE - value.unsigned_abs()));
        }

        Err(InvalidSteamId::new(value.to_string(), "negative value wider than 32 bits"))
    }
}

impl TryFrom<&str> for SteamId {
    type Error = InvalidSteamId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SteamId> for u64 {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl FromStr for SteamId {
    type Err = InvalidSteamId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SteamId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SteamId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Self::from_u64(n)),
            Repr::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
        }
    }
}
