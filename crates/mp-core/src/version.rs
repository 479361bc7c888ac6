//! Strongly-typed migration version identifiers.
//!
//! A version looks like `001_initial_content`: a zero-padded ordinal,
//! optionally followed by an underscore and a slug. The ordinal drives
//! ordering so that `002_x` sorts before `010_y` even when the padding
//! widths differ; ties (same ordinal, different slug) fall back to the full
//! string, giving a total, deterministic order.

use crate::error::{CoreError, CoreResult};
use std::cmp::Ordering;

/// A validated migration version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    raw: String,
    ordinal: u64,
}

impl Version {
    /// Parse a version string, validating the leading-ordinal convention.
    pub fn parse(raw: impl Into<String>) -> CoreResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::InvalidVersion {
                raw,
                reason: "version must not be empty".to_string(),
            });
        }
        let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(CoreError::InvalidVersion {
                raw,
                reason: "version must start with a numeric ordinal".to_string(),
            });
        }
        let ordinal = digits.parse::<u64>().map_err(|e| CoreError::InvalidVersion {
            raw: raw.clone(),
            reason: format!("ordinal out of range: {e}"),
        })?;
        Ok(Self { raw, ordinal })
    }

    /// Create a version from a trusted literal, panicking if it is invalid.
    ///
    /// Prefer [`parse`](Self::parse) when handling untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        match Self::parse(raw) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// The numeric ordinal embedded in the version string.
    pub fn ordinal(&self) -> u64 {
        self.ordinal
    }

    /// Return the full version string as a slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal
            .cmp(&other.ordinal)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Version {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

impl TryFrom<String> for Version {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = CoreError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Version::parse(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
