use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new id, rejecting blank values.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!($label, " cannot be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Content pack ids (the pack manifest's unique id)
define_id!(PackId, "Pack id");

// Stop ids, unique within a network
define_id!(StopId, "Stop id");

impl StopId {
    /// Derive the id of the `index`-th entry contributed by `pack`.
    ///
    /// Ids are the pack id immediately followed by the index (`Author.Pack0`), so two
    /// packs can only collide if one pack id is another's prefix plus digits.
    pub fn for_pack_entry(pack: &PackId, index: usize) -> Self {
        Self(format!("{}{}", pack.as_str(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(PackId::new("   ").is_err());
        assert!(StopId::new("").is_err());
    }

    #[test]
    fn ids_are_trimmed() {
        let id = PackId::new("  Author.Pack ").expect("valid id");
        assert_eq!(id.as_str(), "Author.Pack");
    }

    #[test]
    fn pack_entry_ids_append_the_index() {
        let pack = PackId::new("Author.Valley").expect("valid id");
        assert_eq!(StopId::for_pack_entry(&pack, 0).as_str(), "Author.Valley0");
        assert_eq!(StopId::for_pack_entry(&pack, 12).as_str(), "Author.Valley12");
    }

    #[test]
    fn ids_deserialize_through_validation() {
        let id: StopId = serde_json::from_str("\"transit.station\"").expect("valid json");
        assert_eq!(id.to_string(), "transit.station");
        assert!(serde_json::from_str::<StopId>("\"  \"").is_err());
    }
}
