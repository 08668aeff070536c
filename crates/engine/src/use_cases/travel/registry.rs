//! Destination registry.
//!
//! One registry per network. The built-in stop is always inserted first; pack
//! stops follow in pack load order, then entry order. Menus list destinations in
//! exactly this order.

use std::collections::HashSet;

use transit_domain::{
    Destination, Facing, LanguageCode, LocationName, NetworkKind, PackId, StopId, WarpTarget,
    MISSING_TRANSLATION_PLACEHOLDER,
};

use crate::infrastructure::ports::{RawStop, WorldPort};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate stop id {id} on the {network} network")]
    DuplicateId { network: NetworkKind, id: StopId },

    #[error("Invalid stop {id}: {reason}")]
    InvalidEntry { id: StopId, reason: String },

    #[error("Stop {id} targets unknown location {location}")]
    UnresolvedLocation { id: StopId, location: LocationName },
}

impl RegistryError {
    fn invalid(id: &StopId, reason: impl ToString) -> Self {
        Self::InvalidEntry {
            id: id.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Ordered, duplicate-free destinations of one network.
#[derive(Debug, Clone)]
pub struct DestinationRegistry {
    network: NetworkKind,
    destinations: Vec<Destination>,
}

impl DestinationRegistry {
    /// Start a registry holding only the network's built-in stop.
    pub fn new(builtin: Destination) -> Self {
        Self {
            network: builtin.network(),
            destinations: vec![builtin],
        }
    }

    pub fn network(&self) -> NetworkKind {
        self.network
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn get(&self, id: &StopId) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id() == id)
    }

    /// Register the stops `pack` contributes to this network.
    ///
    /// Entry `i` gets the id `{pack}{i}`, so indices of skipped entries are not reused.
    /// Invalid entries are logged and skipped. A duplicate id rejects the whole pack
    /// and leaves the registry untouched.
    pub fn register(
        &mut self,
        pack: &PackId,
        entries: &[RawStop],
        language: &LanguageCode,
    ) -> Result<(), RegistryError> {
        let mut accepted = Vec::with_capacity(entries.len());
        for (index, raw) in entries.iter().enumerate() {
            let id = StopId::for_pack_entry(pack, index);
            match build_destination(self.network, id, raw, language) {
                Ok(destination) => accepted.push(destination),
                Err(e) => {
                    tracing::warn!(
                        pack_id = %pack,
                        network = %self.network,
                        error = %e,
                        "Skipping invalid stop"
                    );
                }
            }
        }

        let mut seen: HashSet<&StopId> = self.destinations.iter().map(Destination::id).collect();
        for destination in &accepted {
            if !seen.insert(destination.id()) {
                return Err(RegistryError::DuplicateId {
                    network: self.network,
                    id: destination.id().clone(),
                });
            }
        }

        tracing::debug!(
            pack_id = %pack,
            network = %self.network,
            accepted = accepted.len(),
            skipped = entries.len() - accepted.len(),
            "Registered pack stops"
        );
        self.destinations.extend(accepted);
        Ok(())
    }

    /// Drop every destination whose location the world does not know.
    ///
    /// Runs once per session load; returns what was removed.
    pub fn prune_unresolved(&mut self, world: &dyn WorldPort) -> Vec<RegistryError> {
        let mut pruned = Vec::new();
        self.destinations.retain(|destination| {
            if world.location_exists(destination.location()) {
                return true;
            }
            tracing::warn!(
                stop_id = %destination.id(),
                network = %destination.network(),
                location = %destination.location(),
                "Could not find location"
            );
            pruned.push(RegistryError::UnresolvedLocation {
                id: destination.id().clone(),
                location: destination.location().clone(),
            });
            false
        });
        pruned
    }
}

fn build_destination(
    network: NetworkKind,
    id: StopId,
    raw: &RawStop,
    language: &LanguageCode,
) -> Result<Destination, RegistryError> {
    let location = LocationName::new(raw.target_map_name.as_str())
        .map_err(|e| RegistryError::invalid(&id, e))?;
    let cost = u32::try_from(raw.cost)
        .map_err(|_| RegistryError::invalid(&id, format!("cost {} is out of range", raw.cost)))?;
    let facing = Facing::from_index(raw.facing_direction_after_warp)
        .map_err(|e| RegistryError::invalid(&id, e))?;

    let display_name = match raw.localized_display_name.resolve(language) {
        Ok(name) => name.to_string(),
        Err(e) => {
            tracing::warn!(stop_id = %id, error = %e, "Using placeholder display name");
            MISSING_TRANSLATION_PLACEHOLDER.to_string()
        }
    };

    let target = WarpTarget::new(location, raw.target_x, raw.target_y).facing(facing);
    Ok(Destination::new(id, network, target, cost, display_name)
        .with_condition(raw.conditions.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockWorldPort;
    use transit_domain::{ConditionExpr, LocalizedText};

    fn builtin() -> Destination {
        Destination::new(
            StopId::new("transit.station").expect("valid id"),
            NetworkKind::Train,
            WarpTarget::new(LocationName::new("Railroad").expect("valid name"), 32, 40),
            0,
            "Railroad",
        )
    }

    fn raw(location: &str, cost: i64, name: &str) -> RawStop {
        RawStop {
            localized_display_name: LocalizedText::new().with("en", name),
            target_map_name: location.to_string(),
            cost,
            ..RawStop::default()
        }
    }

    fn pack(id: &str) -> PackId {
        PackId::new(id).expect("valid id")
    }

    fn english() -> LanguageCode {
        LanguageCode::default_language()
    }

    #[test]
    fn builtin_stop_comes_first() {
        let mut registry = DestinationRegistry::new(builtin());
        registry
            .register(&pack("Author.Forest"), &[raw("Forest", 50, "Forest Outpost")], &english())
            .expect("registered");

        let ids: Vec<&str> = registry.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, ["transit.station", "Author.Forest0"]);
    }

    #[test]
    fn size_is_accepted_entries_plus_builtin() {
        let mut registry = DestinationRegistry::new(builtin());
        registry
            .register(
                &pack("Author.A"),
                &[raw("Forest", 50, "Forest"), raw("Desert", 10, "Desert")],
                &english(),
            )
            .expect("registered");
        registry
            .register(&pack("Author.B"), &[raw("Beach", 0, "Beach")], &english())
            .expect("registered");
        registry
            .register(&pack("Author.C"), &[], &english())
            .expect("registered");

        assert_eq!(registry.len(), 1 + 2 + 1);
    }

    #[test]
    fn invalid_entries_are_skipped_without_reusing_indices() {
        let mut registry = DestinationRegistry::new(builtin());
        let entries = [
            raw("Forest", -5, "Negative"),
            raw("  ", 0, "No location"),
            RawStop {
                facing_direction_after_warp: 9,
                ..raw("Cave", 0, "Bad facing")
            },
            raw("Desert", 10, "Desert"),
        ];
        registry
            .register(&pack("Author.Mixed"), &entries, &english())
            .expect("registered");

        assert_eq!(registry.len(), 2);
        let desert = registry
            .get(&StopId::new("Author.Mixed3").expect("valid id"))
            .expect("desert registered under its own index");
        assert_eq!(desert.cost(), 10);
    }

    #[test]
    fn display_name_uses_active_language_then_fallback() {
        let mut registry = DestinationRegistry::new(builtin());
        let entries = [
            RawStop {
                localized_display_name: LocalizedText::new()
                    .with("en", "Harbor")
                    .with("de", "Hafen"),
                ..raw("Harbor", 0, "")
            },
            RawStop {
                localized_display_name: LocalizedText::new().with("en", "Lighthouse"),
                ..raw("Lighthouse", 0, "")
            },
            RawStop {
                localized_display_name: LocalizedText::new().with("fr", "Phare"),
                ..raw("Cliff", 0, "")
            },
        ];
        let german = LanguageCode::new("de").expect("valid language");
        registry
            .register(&pack("Author.Coast"), &entries, &german)
            .expect("registered");

        let names: Vec<&str> = registry.iter().skip(1).map(|d| d.display_name()).collect();
        assert_eq!(names, ["Hafen", "Lighthouse", MISSING_TRANSLATION_PLACEHOLDER]);
    }

    #[test]
    fn conditions_and_coordinates_are_carried_over() {
        let mut registry = DestinationRegistry::new(builtin());
        let entry = RawStop {
            target_x: 7,
            target_y: 11,
            facing_direction_after_warp: 1,
            conditions: ConditionExpr::single("z winter"),
            ..raw("Forest", 50, "Forest")
        };
        registry
            .register(&pack("Author.Forest"), &[entry], &english())
            .expect("registered");

        let forest = registry.iter().nth(1).expect("forest registered");
        assert_eq!(forest.target().x, 7);
        assert_eq!(forest.target().y, 11);
        assert_eq!(forest.target().facing, Facing::Right);
        assert_eq!(forest.condition().clauses(), ["z winter".to_string()]);
    }

    #[test]
    fn duplicate_id_rejects_the_whole_pack() {
        let mut registry = DestinationRegistry::new(builtin());
        registry
            .register(&pack("Author.Forest"), &[raw("Forest", 50, "Forest")], &english())
            .expect("registered");

        let err = registry
            .register(
                &pack("Author.Forest"),
                &[raw("Forest", 50, "Forest"), raw("Desert", 5, "Desert")],
                &english(),
            )
            .expect_err("duplicate pack rejected");

        assert!(matches!(err, RegistryError::DuplicateId { .. }));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn prune_removes_unknown_locations() {
        let mut registry = DestinationRegistry::new(builtin());
        registry
            .register(
                &pack("Author.A"),
                &[raw("Forest", 50, "Forest"), raw("Atlantis", 5, "Atlantis")],
                &english(),
            )
            .expect("registered");

        let mut world = MockWorldPort::new();
        world
            .expect_location_exists()
            .returning(|location| location.as_str() != "Atlantis");

        let pruned = registry.prune_unresolved(&world);

        assert_eq!(pruned.len(), 1);
        assert!(matches!(
            &pruned[0],
            RegistryError::UnresolvedLocation { location, .. } if location.as_str() == "Atlantis"
        ));
        let ids: Vec<&str> = registry.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, ["transit.station", "Author.A0"]);
    }
}
