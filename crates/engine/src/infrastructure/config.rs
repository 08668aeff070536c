//! Station configuration
//!
//! Loaded from `TRANSIT_*` environment variables. The binary loads `.env.local` / `.env`
//! first, so either source works; unset variables fall back to the defaults below.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use transit_domain::ConditionExpr;

/// Default arrival tile at the railroad station
const DEFAULT_RAILROAD_WARP: (i32, i32) = (32, 40);

/// Clause the condition evaluator checks before the boat menu may open
const DEFAULT_BOAT_ACCESS_CLAUSE: &str = "f willyBoatFixed";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment variable {key}={value}: {reason}")]
    InvalidVar {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the station network
#[derive(Debug, Clone, PartialEq)]
pub struct StationConfig {
    /// Arrival tile for the built-in railroad stop
    pub railroad_warp_x: i32,
    pub railroad_warp_y: i32,
    /// Directory holding one sub-directory per content pack
    pub packs_dir: PathBuf,
    /// Condition that must hold for the boat menu to open (empty = always)
    pub boat_access_condition: ConditionExpr,
    /// How long an armed arrival notification survives; `None` keeps it indefinitely
    pub arrival_timeout: Option<chrono::Duration>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            railroad_warp_x: DEFAULT_RAILROAD_WARP.0,
            railroad_warp_y: DEFAULT_RAILROAD_WARP.1,
            packs_dir: PathBuf::from("./packs"),
            boat_access_condition: ConditionExpr::single(DEFAULT_BOAT_ACCESS_CLAUSE),
            arrival_timeout: None,
        }
    }
}

impl StationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, test maps).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let arrival_timeout_secs: u64 = parse_var(&lookup, "TRANSIT_ARRIVAL_TIMEOUT_SECS", 0)?;
        let arrival_timeout = if arrival_timeout_secs == 0 {
            None
        } else {
            let secs = i64::try_from(arrival_timeout_secs).map_err(|e| ConfigError::InvalidVar {
                key: "TRANSIT_ARRIVAL_TIMEOUT_SECS",
                value: arrival_timeout_secs.to_string(),
                reason: e.to_string(),
            })?;
            Some(chrono::Duration::seconds(secs))
        };

        Ok(Self {
            railroad_warp_x: parse_var(
                &lookup,
                "TRANSIT_RAILROAD_WARP_X",
                defaults.railroad_warp_x,
            )?,
            railroad_warp_y: parse_var(
                &lookup,
                "TRANSIT_RAILROAD_WARP_Y",
                defaults.railroad_warp_y,
            )?,
            packs_dir: lookup("TRANSIT_PACKS_DIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.packs_dir),
            boat_access_condition: lookup("TRANSIT_BOAT_ACCESS_CONDITION")
                .map(ConditionExpr::single)
                .unwrap_or(defaults.boat_access_condition),
            arrival_timeout,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            key,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
