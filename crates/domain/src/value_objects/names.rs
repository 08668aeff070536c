//! Host location names.
//!
//! A `LocationName` is the key the host uses for a map (`Railroad`, `BoatTunnel`,
//! `Island_W`). Pack authors type these by hand, so surrounding whitespace is
//! dropped; anything else is kept verbatim because the host compares keys exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Longest key accepted from a pack
const MAX_LOCATION_KEY: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationName(String);

impl LocationName {
    /// Validate a host location key.
    ///
    /// Rejects keys that are blank, longer than the host allows, or contain
    /// control characters (a stray newline from a pack file never names a map).
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let key = name.trim();
        if key.is_empty() {
            return Err(DomainError::validation("Location name cannot be empty"));
        }
        if key.len() > MAX_LOCATION_KEY {
            return Err(DomainError::validation(format!(
                "Location name cannot exceed {MAX_LOCATION_KEY} characters"
            )));
        }
        if key.chars().any(char::is_control) {
            return Err(DomainError::validation(format!(
                "Location name {key:?} contains control characters"
            )));
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for LocationName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LocationName> for String {
    fn from(name: LocationName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_typed_keys_lose_surrounding_whitespace() {
        let name = LocationName::new("  Railroad ").expect("valid name");
        assert_eq!(name.as_str(), "Railroad");
    }

    #[test]
    fn host_key_punctuation_is_kept() {
        let name = LocationName::new("Island_W").expect("valid name");
        assert_eq!(name.to_string(), "Island_W");
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = LocationName::new("   ").expect_err("rejected");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn key_with_embedded_newline_is_rejected() {
        assert!(LocationName::new("Forest\nCave").is_err());
    }

    #[test]
    fn overlong_key_is_rejected() {
        assert!(LocationName::new("x".repeat(201)).is_err());
        assert!(LocationName::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn keys_compare_case_sensitively() {
        let a = LocationName::new("BoatTunnel").expect("valid name");
        let b = LocationName::new("boattunnel").expect("valid name");
        assert_ne!(a, b);
    }

    #[test]
    fn deserializing_a_pack_key_validates_it() {
        let name: LocationName = serde_json::from_str(r#"" Beach ""#).expect("json");
        assert_eq!(name.as_str(), "Beach");
        assert!(serde_json::from_str::<LocationName>(r#""""#).is_err());
    }
}
