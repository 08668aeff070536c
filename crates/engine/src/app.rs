//! Application state and composition.

use std::sync::Arc;

use transit_domain::DomainError;

use crate::infrastructure::{
    clock::SystemClock,
    config::StationConfig,
    ports::{
        AudioPort, ClockPort, ConditionPort, ContentPackSource, DialogPort, LocalizationPort,
        WorldPort,
    },
};
use crate::use_cases::travel::{SessionSummary, Station, StationPorts};

/// Main application state.
///
/// Holds the station and the pack source each session is rebuilt from.
pub struct App {
    pub station: Station,
    packs: Arc<dyn ContentPackSource>,
}

/// Host adapters supplied by whoever embeds the engine.
pub struct HostAdapters {
    pub world: Arc<dyn WorldPort>,
    pub conditions: Option<Arc<dyn ConditionPort>>,
    pub localization: Arc<dyn LocalizationPort>,
    pub audio: Arc<dyn AudioPort>,
    pub dialog: Arc<dyn DialogPort>,
    pub packs: Arc<dyn ContentPackSource>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(host: HostAdapters, config: StationConfig) -> Result<Self, DomainError> {
        let clock_port: Arc<dyn ClockPort> = Arc::new(SystemClock);
        Self::with_clock(host, config, clock_port)
    }

    pub fn with_clock(
        host: HostAdapters,
        config: StationConfig,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, DomainError> {
        let ports = StationPorts {
            world: host.world,
            conditions: host.conditions,
            localization: host.localization,
            audio: host.audio,
            dialog: host.dialog,
            clock,
        };

        Ok(Self {
            station: Station::new(ports, config)?,
            packs: host.packs,
        })
    }

    /// Load packs and rebuild both networks. Call once per session load.
    pub fn load_session(&mut self) -> Result<SessionSummary, DomainError> {
        let packs = self.packs.load_packs();
        self.station.rebuild(&packs)
    }
}
