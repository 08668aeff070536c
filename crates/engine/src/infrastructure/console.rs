//! Console adapters for running the station headless.
//!
//! Used by the `transit-engine` binary: transfers and sounds are logged, dialogs are
//! printed to stdout, and money lives in memory.

use std::collections::HashSet;

use transit_domain::LocationName;

use crate::infrastructure::ports::{
    AudioPort, Choice, DialogPort, HostDeparture, LoopingCue, TransferRequest, WalletPort,
    WorldPort,
};

/// Location the host runs its own ferry from
pub const FERRY_LOCATION: &str = "BoatTunnel";

/// A world that knows a fixed set of location names.
pub struct ConsoleWorld {
    locations: HashSet<String>,
    ferry_price: Option<u32>,
}

impl ConsoleWorld {
    pub fn new(locations: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            ferry_price: None,
        }
    }

    /// Offer the host ferry at the boat tunnel for `price`.
    pub fn with_ferry(mut self, price: u32) -> Self {
        self.ferry_price = Some(price);
        self
    }
}

impl WorldPort for ConsoleWorld {
    fn location_exists(&self, location: &LocationName) -> bool {
        self.locations.contains(location.as_str())
    }

    fn request_transfer(&self, request: TransferRequest) {
        tracing::info!(
            location = %request.location,
            x = request.x,
            y = request.y,
            facing = request.facing.as_index(),
            "Transfer requested"
        );
        println!(
            "-> warping to {} ({}, {})",
            request.location, request.x, request.y
        );
    }

    fn host_departure(&self, location: &LocationName) -> Option<HostDeparture> {
        if location.as_str() != FERRY_LOCATION {
            return None;
        }
        self.ferry_price.map(|price| HostDeparture {
            name_key: "GingerIsland".to_string(),
            price,
        })
    }

    fn start_departure(&self) {
        tracing::info!("Host departure started");
        println!("-> the ferry departs");
    }
}

pub struct ConsoleDialog;

impl DialogPort for ConsoleDialog {
    fn show_notice(&self, text: &str) {
        println!("{}", text);
    }

    fn show_question(&self, prompt: &str, choices: &[Choice]) {
        println!("{}", prompt);
        for (index, choice) in choices.iter().enumerate() {
            println!("  {}. {} [{}]", index + 1, choice.label, choice.id.as_str());
        }
    }
}

pub struct ConsoleAudio;

struct LoggedCue(String);

impl LoopingCue for LoggedCue {
    fn stop(&mut self) {
        tracing::debug!(cue = %self.0, "Looped cue stopped");
    }
}

impl AudioPort for ConsoleAudio {
    fn start_loop(&self, cue: &str) -> Box<dyn LoopingCue> {
        tracing::debug!(cue, "Looped cue started");
        Box::new(LoggedCue(cue.to_string()))
    }

    fn play_once(&self, cue: &str) {
        tracing::debug!(cue, "Cue played");
    }
}

/// Player money held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryWallet {
    balance: i64,
}

impl MemoryWallet {
    pub fn new(balance: i64) -> Self {
        Self { balance }
    }
}

impl WalletPort for MemoryWallet {
    fn balance(&self) -> i64 {
        self.balance
    }

    fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> LocationName {
        LocationName::new(s).expect("valid name")
    }

    #[test]
    fn world_knows_only_listed_locations() {
        let world = ConsoleWorld::new(["Railroad", "Forest"]);
        assert!(world.location_exists(&name("Forest")));
        assert!(!world.location_exists(&name("Desert")));
    }

    #[test]
    fn ferry_is_offered_only_at_the_boat_tunnel() {
        let world = ConsoleWorld::new(["BoatTunnel"]).with_ferry(1000);
        assert_eq!(
            world.host_departure(&name("BoatTunnel")).map(|d| d.price),
            Some(1000)
        );
        assert!(world.host_departure(&name("Beach")).is_none());
        assert!(ConsoleWorld::new(["BoatTunnel"])
            .host_departure(&name("BoatTunnel"))
            .is_none());
    }
}
