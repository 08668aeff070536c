//! Transit engine - headless station console.
//!
//! Loads packs, opens a station menu at `TRANSIT_CURRENT_LOCATION` and, when
//! `TRANSIT_CHOICE` is set, answers it with a wallet holding `TRANSIT_BALANCE`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transit_domain::{LocationName, NetworkKind};

use transit_engine::infrastructure::{
    config::StationConfig,
    console::{ConsoleAudio, ConsoleDialog, ConsoleWorld, MemoryWallet},
    content_packs::DirectoryPackSource,
    localization::StringTable,
    ports::{MenuTransition, WalletPort},
};
use transit_engine::use_cases::travel::MenuOutcome;
use transit_engine::{App, HostAdapters};

/// Locations the console world knows when `TRANSIT_KNOWN_LOCATIONS` is unset
const DEFAULT_LOCATIONS: &str = "Railroad,BoatTunnel,Town,Beach,Forest,Mountain,Desert";
const DEFAULT_FERRY_PRICE: u32 = 1000;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transit_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting transit engine");

    let config = StationConfig::from_env()?;
    let current = LocationName::new(
        std::env::var("TRANSIT_CURRENT_LOCATION").unwrap_or_else(|_| "Railroad".into()),
    )?;
    let network: NetworkKind = std::env::var("TRANSIT_NETWORK")
        .unwrap_or_else(|_| "train".into())
        .parse()?;
    let locations =
        std::env::var("TRANSIT_KNOWN_LOCATIONS").unwrap_or_else(|_| DEFAULT_LOCATIONS.into());

    tracing::info!(packs_dir = %config.packs_dir.display(), "Loading content packs");
    let host = HostAdapters {
        world: Arc::new(
            ConsoleWorld::new(
                locations
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty()),
            )
            .with_ferry(DEFAULT_FERRY_PRICE),
        ),
        // No condition engine in the console build; conditional stops stay hidden.
        conditions: None,
        localization: Arc::new(StringTable::english()),
        audio: Arc::new(ConsoleAudio),
        dialog: Arc::new(ConsoleDialog),
        packs: Arc::new(DirectoryPackSource::new(config.packs_dir.clone())),
    };

    let mut app = App::new(host, config)?;
    let summary = app.load_session()?;
    tracing::info!(
        train_stops = summary.train_stops,
        boat_stops = summary.boat_stops,
        "Session ready"
    );

    let MenuOutcome::Opened(_) = app.station.open_menu(network, &current) else {
        return Ok(());
    };

    let Ok(answer) = std::env::var("TRANSIT_CHOICE") else {
        return Ok(());
    };
    let balance: i64 = std::env::var("TRANSIT_BALANCE")
        .unwrap_or_else(|_| "0".into())
        .parse()?;
    let mut wallet = MemoryWallet::new(balance);

    let outcome = app
        .station
        .choose(network, &current, answer.trim(), &mut wallet);
    tracing::info!(?outcome, balance = wallet.balance(), "Selection handled");

    // The console has no real menu stack; treat the next prompt as a dialogue box.
    app.station.on_menu_changed(MenuTransition::DialogOpened);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
