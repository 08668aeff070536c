//! Turning eligible destinations into a labeled menu, and picks back into destinations.

use transit_domain::{Destination, StopId};

use crate::infrastructure::ports::{Choice, ChoiceId};

use super::registry::DestinationRegistry;

/// Label shown for a destination: the name, with the price appended when it costs anything.
pub fn priced_label(name: &str, cost: u32) -> String {
    if cost == 0 {
        name.to_string()
    } else {
        format!("{name} - {cost}g")
    }
}

/// Build the choice list: destinations in order, then `extras`, then exactly one cancel entry.
pub fn present(
    eligible: &[&Destination],
    extras: impl IntoIterator<Item = Choice>,
    cancel_label: impl Into<String>,
) -> Vec<Choice> {
    eligible
        .iter()
        .map(|destination| {
            Choice::new(
                ChoiceId::Stop(destination.id().clone()),
                priced_label(destination.display_name(), destination.cost()),
            )
        })
        .chain(extras)
        .chain(std::iter::once(Choice::new(ChoiceId::Cancel, cancel_label)))
        .collect()
}

/// A question ready for the dialog surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationMenu {
    pub prompt: String,
    pub choices: Vec<Choice>,
}

/// What opening a station produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The menu was shown
    Opened(DestinationMenu),
    /// Nothing to offer; the notice was shown instead
    NoDestinations { notice: String },
    /// The network is closed to the player; nothing was shown
    Unavailable,
}

/// A dialog answer mapped back onto the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    Cancel,
    HostDeparture,
    Destination(&'a Destination),
    Unknown,
}

pub fn resolve_selection<'a>(registry: &'a DestinationRegistry, answer: &str) -> Selection<'a> {
    match answer {
        ChoiceId::CANCEL => Selection::Cancel,
        ChoiceId::HOST_DEPARTURE => Selection::HostDeparture,
        other => StopId::new(other)
            .ok()
            .and_then(|id| registry.get(&id))
            .map_or(Selection::Unknown, Selection::Destination),
    }
}
