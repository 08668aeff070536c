//! Travel use cases: the train and boat destination networks.
//!
//! A session load builds one [`DestinationRegistry`] per network. Opening a
//! station filters it by location and conditions and shows the choices; a pick
//! charges the wallet, asks the world for a transfer, and for train trips arms
//! the [`ArrivalNotifier`].

mod arrival;
mod eligibility;
mod menu;
mod registry;
mod station;
mod tile_action;
mod warp;


pub use arrival::{ArrivalNotifier, ArrivalOutcome, AMBIENT_CUE, ARRIVAL_CUE};
pub use eligibility::filter_eligible;
pub use menu::{
    present, priced_label, resolve_selection, DestinationMenu, MenuOutcome, Selection,
};
pub use registry::{DestinationRegistry, RegistryError};
pub use station::{SelectionOutcome, SessionSummary, Station, StationPorts, BUILTIN_STOP_ID};
pub use tile_action::TileAction;
pub use warp::{WarpError, WarpTransaction};

/// Localization keys used by the station menus.
pub mod keys {
    pub const CHOOSE_DESTINATION: &str = "ChooseDestination";
    pub const NO_DESTINATIONS: &str = "NoDestinations";
    pub const MENU_CANCEL_OPTION: &str = "MenuCancelOption";
    pub const NOT_ENOUGH_MONEY: &str = "NotEnoughMoney";
    pub const NOT_ENOUGH_MONEY_FOR_TICKET: &str = "NotEnoughMoneyForTicket";
    pub const ARRIVAL_MESSAGE: &str = "ArrivalMessage";
    pub const TRAIN_STATION_DISPLAY_NAME: &str = "TrainStationDisplayName";
    pub const BOAT_STATION_DISPLAY_NAME: &str = "BoatStationDisplayName";
}
