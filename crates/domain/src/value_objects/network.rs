use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Which travel network a destination belongs to.
///
/// Each network keeps its own registry and its own built-in stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkKind {
    Train,
    Boat,
}

impl NetworkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Boat => "boat",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Self::Train),
            "boat" => Ok(Self::Boat),
            other => Err(DomainError::parse(format!("Unknown network: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Train".parse::<NetworkKind>(), Ok(NetworkKind::Train));
        assert_eq!(" BOAT ".parse::<NetworkKind>(), Ok(NetworkKind::Boat));
        assert!("bus".parse::<NetworkKind>().is_err());
    }
}
