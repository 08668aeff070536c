//! Destination entity - A named, costed stop on a travel network
//!
//! Destinations are immutable for the lifetime of a session. The engine rebuilds
//! them from the built-in stop and the loaded content packs on every session load.

use serde::{Deserialize, Serialize};

use crate::ids::StopId;
use crate::value_objects::{ConditionExpr, Facing, LocationName, NetworkKind};

/// Where a warp lands the player.
///
/// Simple data struct with public fields: any tile of any location is a valid target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarpTarget {
    pub location: LocationName,
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl WarpTarget {
    pub fn new(location: LocationName, x: i32, y: i32) -> Self {
        Self {
            location,
            x,
            y,
            facing: Facing::default(),
        }
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }
}

/// A travel destination offered at a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    id: StopId,
    network: NetworkKind,
    target: WarpTarget,
    /// Ticket price in gold
    cost: u32,
    condition: ConditionExpr,
    /// Name already resolved for the session's language
    display_name: String,
}

impl Destination {
    pub fn new(
        id: StopId,
        network: NetworkKind,
        target: WarpTarget,
        cost: u32,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            network,
            target,
            cost,
            condition: ConditionExpr::always(),
            display_name: display_name.into(),
        }
    }

    pub fn with_condition(mut self, condition: ConditionExpr) -> Self {
        self.condition = condition;
        self
    }

    pub fn id(&self) -> &StopId {
        &self.id
    }

    pub fn network(&self) -> NetworkKind {
        self.network
    }

    pub fn target(&self) -> &WarpTarget {
        &self.target
    }

    pub fn location(&self) -> &LocationName {
        &self.target.location
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn condition(&self) -> &ConditionExpr {
        &self.condition
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Destination {
        Destination::new(
            StopId::new("Author.Forest0").expect("valid id"),
            NetworkKind::Train,
            WarpTarget::new(LocationName::new("Forest").expect("valid name"), 10, 12)
                .facing(Facing::Left),
            50,
            "Forest Outpost",
        )
    }

    #[test]
    fn new_destination_is_unconditional() {
        let dest = forest();
        assert!(dest.condition().is_unconditional());
        assert_eq!(dest.cost(), 50);
        assert_eq!(dest.location().as_str(), "Forest");
        assert_eq!(dest.target().facing, Facing::Left);
    }

    #[test]
    fn with_condition_replaces_condition() {
        let dest = forest().with_condition(ConditionExpr::single("z summer"));
        assert_eq!(dest.condition().clauses(), ["z summer".to_string()]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(forest()).expect("serializable");
        assert_eq!(json["displayName"], "Forest Outpost");
        assert_eq!(json["target"]["facing"], 3);
    }
}
