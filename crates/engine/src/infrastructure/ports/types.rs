//! Data shapes exchanged with collaborators.

use serde::{Deserialize, Serialize};
use transit_domain::{
    ConditionExpr, Facing, LocalizedText, LocationName, NetworkKind, PackId, StopId, WarpTarget,
};

// =============================================================================
// Content pack records
// =============================================================================

fn default_facing() -> i32 {
    Facing::default().as_index()
}

/// One stop as written in a pack's `TrainStops.json`.
///
/// Fields stay raw here; the registry validates them when the pack is registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStop {
    #[serde(default)]
    pub localized_display_name: LocalizedText,
    #[serde(default)]
    pub target_map_name: String,
    #[serde(default)]
    pub target_x: i32,
    #[serde(default)]
    pub target_y: i32,
    #[serde(default = "default_facing")]
    pub facing_direction_after_warp: i32,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub conditions: ConditionExpr,
}

impl Default for RawStop {
    fn default() -> Self {
        Self {
            localized_display_name: LocalizedText::default(),
            target_map_name: String::new(),
            target_x: 0,
            target_y: 0,
            facing_direction_after_warp: default_facing(),
            cost: 0,
            conditions: ConditionExpr::always(),
        }
    }
}

/// Contents of a pack's `TrainStops.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentPack {
    #[serde(default)]
    pub train_stops: Vec<RawStop>,
    #[serde(default)]
    pub boat_stops: Vec<RawStop>,
}

impl ContentPack {
    pub fn stops(&self, network: NetworkKind) -> &[RawStop] {
        match network {
            NetworkKind::Train => &self.train_stops,
            NetworkKind::Boat => &self.boat_stops,
        }
    }
}

/// A pack together with the id its stops are namespaced under.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPack {
    pub id: PackId,
    pub content: ContentPack,
}

// =============================================================================
// World transition
// =============================================================================

/// Request handed to the host to move the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub location: LocationName,
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl From<&WarpTarget> for TransferRequest {
    fn from(target: &WarpTarget) -> Self {
        Self {
            location: target.location.clone(),
            x: target.x,
            y: target.y,
            facing: target.facing,
        }
    }
}

/// A departure the host prices and runs itself (the island ferry at the boat tunnel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDeparture {
    /// Localization key for the departure's display name
    pub name_key: String,
    pub price: u32,
}

// =============================================================================
// Conditions
// =============================================================================

/// What the evaluator may consult besides the expression itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationContext {
    pub network: NetworkKind,
    pub current_location: LocationName,
}

// =============================================================================
// Localization
// =============================================================================

/// Named substitutions for a translation, e.g. `DestinationName`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationArgs(Vec<(String, String)>);

impl TranslationArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

// =============================================================================
// Menus
// =============================================================================

/// Identifier the dialog surface reports back when a choice is picked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChoiceId {
    Stop(StopId),
    HostDeparture,
    Cancel,
}

impl ChoiceId {
    pub const CANCEL: &'static str = "Cancel";
    pub const HOST_DEPARTURE: &'static str = "HostDeparture";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Stop(id) => id.as_str(),
            Self::HostDeparture => Self::HOST_DEPARTURE,
            Self::Cancel => Self::CANCEL,
        }
    }
}

/// One labeled entry of a destination menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
}

impl Choice {
    pub fn new(id: ChoiceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub fn is_cancel(&self) -> bool {
        self.id == ChoiceId::Cancel
    }
}

/// UI transitions reported by the host after any menu change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    /// A dialogue box opened
    DialogOpened,
    /// Some other menu opened
    OtherOpened,
    /// The active menu closed
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_stop_defaults_fill_missing_fields() {
        let pack: ContentPack = serde_json::from_str(
            r#"{
                "TrainStops": [
                    { "TargetMapName": "Forest", "TargetX": 5, "TargetY": 6,
                      "LocalizedDisplayName": { "en": "Forest Outpost" } }
                ]
            }"#,
        )
        .expect("valid pack");

        assert!(pack.boat_stops.is_empty());
        let stop = &pack.stops(NetworkKind::Train)[0];
        assert_eq!(stop.cost, 0);
        assert_eq!(stop.facing_direction_after_warp, 2);
        assert!(stop.conditions.is_unconditional());
    }

    #[test]
    fn translation_args_lookup_by_name() {
        let args = TranslationArgs::new().arg("DestinationName", "Harbor");
        assert_eq!(args.get("DestinationName"), Some("Harbor"));
        assert_eq!(args.get("Other"), None);
    }

    #[test]
    fn choice_ids_render_host_strings() {
        let stop = StopId::new("Author.Pack0").expect("valid id");
        assert_eq!(ChoiceId::Stop(stop).as_str(), "Author.Pack0");
        assert_eq!(ChoiceId::Cancel.as_str(), "Cancel");
        assert_eq!(ChoiceId::HostDeparture.as_str(), "HostDeparture");
    }
}
