use std::fmt;
use std::str::FromStr;

use transit_domain::{DomainError, NetworkKind};

/// `Action` property of a map tile that opens a station menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    TrainStation,
    BoatTicket,
}

impl TileAction {
    pub fn network(self) -> NetworkKind {
        match self {
            Self::TrainStation => NetworkKind::Train,
            Self::BoatTicket => NetworkKind::Boat,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TrainStation => "TrainStation",
            Self::BoatTicket => "BoatTicket",
        }
    }
}

impl fmt::Display for TileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TileAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TrainStation" => Ok(Self::TrainStation),
            "BoatTicket" => Ok(Self::BoatTicket),
            other => Err(DomainError::parse(format!("Unknown tile action: {other}"))),
        }
    }
}
