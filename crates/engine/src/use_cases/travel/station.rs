//! Station orchestration: session rebuild, menus, selections and the arrival hook.

use std::sync::Arc;

use transit_domain::{Destination, DomainError, LocationName, NetworkKind, StopId, WarpTarget};

use crate::infrastructure::config::StationConfig;
use crate::infrastructure::ports::{
    AudioPort, Choice, ChoiceId, ClockPort, ConditionPort, DialogPort, LoadedPack,
    LocalizationPort, MenuTransition, TranslationArgs, WalletPort, WorldPort,
};
use crate::stores::NotifierState;

use super::arrival::{ArrivalNotifier, ArrivalOutcome};
use super::eligibility::{condition_holds, filter_eligible};
use super::keys;
use super::menu::{
    present, priced_label, resolve_selection, DestinationMenu, MenuOutcome, Selection,
};
use super::registry::DestinationRegistry;
use super::tile_action::TileAction;
use super::warp::{charge, WarpError, WarpTransaction};

/// Id of the stop every network starts with.
pub const BUILTIN_STOP_ID: &str = "transit.station";

const RAILROAD_LOCATION: &str = "Railroad";
const BOAT_TUNNEL_LOCATION: &str = "BoatTunnel";
const BOAT_TUNNEL_WARP: (i32, i32) = (4, 9);

/// Host collaborators the station talks to.
#[derive(Clone)]
pub struct StationPorts {
    pub world: Arc<dyn WorldPort>,
    /// `None` when no condition engine is installed; conditional stops are then hidden
    pub conditions: Option<Arc<dyn ConditionPort>>,
    pub localization: Arc<dyn LocalizationPort>,
    pub audio: Arc<dyn AudioPort>,
    pub dialog: Arc<dyn DialogPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Counts from one session rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub train_stops: usize,
    pub boat_stops: usize,
    /// Pack contributions refused as a whole (one per pack and network)
    pub rejected_packs: usize,
    pub pruned_stops: usize,
}

/// Result of answering a station menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Cancelled,
    Warped { destination: StopId },
    InsufficientFunds(WarpError),
    DepartureStarted,
    DepartureUnaffordable { price: u32 },
    /// Unknown id, or a host departure that is not on offer here
    Ignored,
}

pub struct Station {
    config: StationConfig,
    world: Arc<dyn WorldPort>,
    conditions: Option<Arc<dyn ConditionPort>>,
    localization: Arc<dyn LocalizationPort>,
    dialog: Arc<dyn DialogPort>,
    train: DestinationRegistry,
    boat: DestinationRegistry,
    warp: WarpTransaction,
    arrival: ArrivalNotifier,
}

impl Station {
    /// A station holding only the built-in stops, before any session is loaded.
    pub fn new(ports: StationPorts, config: StationConfig) -> Result<Self, DomainError> {
        let train = DestinationRegistry::new(builtin_stop(
            NetworkKind::Train,
            &config,
            ports.localization.as_ref(),
        )?);
        let boat = DestinationRegistry::new(builtin_stop(
            NetworkKind::Boat,
            &config,
            ports.localization.as_ref(),
        )?);
        let arrival = ArrivalNotifier::new(
            ports.audio,
            ports.dialog.clone(),
            ports.clock,
            config.arrival_timeout,
        );

        Ok(Self {
            warp: WarpTransaction::new(ports.world.clone()),
            world: ports.world,
            conditions: ports.conditions,
            localization: ports.localization,
            dialog: ports.dialog,
            train,
            boat,
            arrival,
            config,
        })
    }

    /// Rebuild both registries from `packs` for a new session.
    ///
    /// Registries are built aside and swapped in at the end, so menus never see a
    /// half-built network. Any pending arrival from the previous session is dropped.
    pub fn rebuild(&mut self, packs: &[LoadedPack]) -> Result<SessionSummary, DomainError> {
        let language = self.localization.current_language();
        let mut summary = SessionSummary::default();

        let mut registries = [
            DestinationRegistry::new(builtin_stop(
                NetworkKind::Train,
                &self.config,
                self.localization.as_ref(),
            )?),
            DestinationRegistry::new(builtin_stop(
                NetworkKind::Boat,
                &self.config,
                self.localization.as_ref(),
            )?),
        ];

        for pack in packs {
            for registry in &mut registries {
                let entries = pack.content.stops(registry.network());
                if let Err(e) = registry.register(&pack.id, entries, &language) {
                    tracing::error!(pack_id = %pack.id, error = %e, "Rejected content pack");
                    summary.rejected_packs += 1;
                }
            }
        }
        for registry in &mut registries {
            summary.pruned_stops += registry.prune_unresolved(self.world.as_ref()).len();
        }

        let [train, boat] = registries;
        summary.train_stops = train.len();
        summary.boat_stops = boat.len();
        self.train = train;
        self.boat = boat;

        if let Some(dropped) = self.arrival.reset() {
            tracing::debug!(stop_id = %dropped, "Dropped pending arrival on session load");
        }
        tracing::info!(
            packs = packs.len(),
            train_stops = summary.train_stops,
            boat_stops = summary.boat_stops,
            rejected = summary.rejected_packs,
            pruned = summary.pruned_stops,
            language = %language,
            "Station network loaded"
        );
        Ok(summary)
    }

    pub fn registry(&self, network: NetworkKind) -> &DestinationRegistry {
        match network {
            NetworkKind::Train => &self.train,
            NetworkKind::Boat => &self.boat,
        }
    }

    pub fn eligible(&self, network: NetworkKind, current: &LocationName) -> Vec<&Destination> {
        filter_eligible(self.registry(network), current, self.conditions.as_deref())
    }

    /// Open the menu for `network` at `current` on the dialog surface.
    pub fn open_menu(&self, network: NetworkKind, current: &LocationName) -> MenuOutcome {
        if network == NetworkKind::Boat
            && !condition_holds(
                &self.config.boat_access_condition,
                network,
                current,
                self.conditions.as_deref(),
            )
        {
            tracing::debug!(location = %current, "Boat network not available yet");
            return MenuOutcome::Unavailable;
        }

        let eligible = self.eligible(network, current);
        let extras: Vec<Choice> = self.departure_choice(network, current).into_iter().collect();
        if eligible.is_empty() && extras.is_empty() {
            let notice = self.translate(keys::NO_DESTINATIONS, &TranslationArgs::new());
            self.dialog.show_notice(&notice);
            return MenuOutcome::NoDestinations { notice };
        }

        let menu = DestinationMenu {
            prompt: self.translate(keys::CHOOSE_DESTINATION, &TranslationArgs::new()),
            choices: present(
                &eligible,
                extras,
                self.translate(keys::MENU_CANCEL_OPTION, &TranslationArgs::new()),
            ),
        };
        self.dialog.show_question(&menu.prompt, &menu.choices);
        tracing::debug!(
            network = %network,
            location = %current,
            choices = menu.choices.len(),
            "Opened destination menu"
        );
        MenuOutcome::Opened(menu)
    }

    /// Open whichever menu a tile `Action` property names. Other actions are not ours.
    pub fn interact(&self, tile_action: &str, current: &LocationName) -> Option<MenuOutcome> {
        let action: TileAction = tile_action.parse().ok()?;
        tracing::debug!(%action, location = %current, "Station tile used");
        Some(self.open_menu(action.network(), current))
    }

    /// Handle the answer the dialog surface reported for a `network` menu.
    ///
    /// Destinations are re-checked against the current eligibility, so an answer
    /// for the current location or a stop whose condition no longer holds is ignored.
    pub fn choose(
        &mut self,
        network: NetworkKind,
        current: &LocationName,
        answer: &str,
        wallet: &mut dyn WalletPort,
    ) -> SelectionOutcome {
        let destination = match resolve_selection(self.registry(network), answer) {
            Selection::Cancel => return SelectionOutcome::Cancelled,
            Selection::Unknown => {
                tracing::warn!(network = %network, answer, "Ignoring unknown menu selection");
                return SelectionOutcome::Ignored;
            }
            Selection::HostDeparture => return self.depart(network, current, wallet),
            Selection::Destination(destination) => destination.clone(),
        };

        let still_eligible = self
            .eligible(network, current)
            .iter()
            .any(|eligible| eligible.id() == destination.id());
        if !still_eligible {
            tracing::warn!(
                stop_id = %destination.id(),
                location = %current,
                "Ignoring selection of an ineligible stop"
            );
            return SelectionOutcome::Ignored;
        }
        self.warp_to(&destination, wallet)
    }

    /// Forward a menu transition to the arrival notifier.
    pub fn on_menu_changed(&mut self, transition: MenuTransition) -> ArrivalOutcome {
        self.arrival.observe(transition)
    }

    pub fn notifier_state(&self) -> NotifierState {
        self.arrival.state()
    }

    fn warp_to(
        &mut self,
        destination: &Destination,
        wallet: &mut dyn WalletPort,
    ) -> SelectionOutcome {
        let name_args = TranslationArgs::new().arg("DestinationName", destination.display_name());
        if let Err(e) = self.warp.attempt(destination, wallet) {
            let notice = self.translate(keys::NOT_ENOUGH_MONEY, &name_args);
            self.dialog.show_notice(&notice);
            return SelectionOutcome::InsufficientFunds(e);
        }

        if destination.network() == NetworkKind::Train {
            let message = self.translate(keys::ARRIVAL_MESSAGE, &name_args);
            self.arrival.arm(destination.id(), message);
        }
        SelectionOutcome::Warped {
            destination: destination.id().clone(),
        }
    }

    fn depart(
        &self,
        network: NetworkKind,
        current: &LocationName,
        wallet: &mut dyn WalletPort,
    ) -> SelectionOutcome {
        let offered = match network {
            NetworkKind::Boat => self.world.host_departure(current),
            NetworkKind::Train => None,
        };
        let Some(departure) = offered else {
            tracing::warn!(network = %network, location = %current, "No host departure on offer");
            return SelectionOutcome::Ignored;
        };

        if !charge(wallet, departure.price) {
            let notice = self.translate(keys::NOT_ENOUGH_MONEY_FOR_TICKET, &TranslationArgs::new());
            self.dialog.show_notice(&notice);
            return SelectionOutcome::DepartureUnaffordable {
                price: departure.price,
            };
        }
        self.world.start_departure();
        tracing::info!(location = %current, price = departure.price, "Host departure started");
        SelectionOutcome::DepartureStarted
    }

    fn departure_choice(&self, network: NetworkKind, current: &LocationName) -> Option<Choice> {
        if network != NetworkKind::Boat {
            return None;
        }
        self.world.host_departure(current).map(|departure| {
            let name = self.translate(&departure.name_key, &TranslationArgs::new());
            Choice::new(ChoiceId::HostDeparture, priced_label(&name, departure.price))
        })
    }

    fn translate(&self, key: &str, args: &TranslationArgs) -> String {
        self.localization.translate(key, args)
    }
}

fn builtin_stop(
    network: NetworkKind,
    config: &StationConfig,
    localization: &dyn LocalizationPort,
) -> Result<Destination, DomainError> {
    let (location, (x, y), name_key) = match network {
        NetworkKind::Train => (
            RAILROAD_LOCATION,
            (config.railroad_warp_x, config.railroad_warp_y),
            keys::TRAIN_STATION_DISPLAY_NAME,
        ),
        NetworkKind::Boat => (
            BOAT_TUNNEL_LOCATION,
            BOAT_TUNNEL_WARP,
            keys::BOAT_STATION_DISPLAY_NAME,
        ),
    };
    Ok(Destination::new(
        StopId::new(BUILTIN_STOP_ID)?,
        network,
        WarpTarget::new(LocationName::new(location)?, x, y),
        0,
        localization.translate(name_key, &TranslationArgs::new()),
    ))
}
