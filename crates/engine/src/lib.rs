//! Transit engine library.
//!
//! Fast-travel network core: destination registries for the train and boat
//! networks, station menus, paid warps and the post-warp arrival notice.
//!
//! ## Structure
//!
//! - `use_cases/` - Station orchestration (registry, eligibility, menus, warps, arrival)
//! - `stores/` - In-memory session state
//! - `infrastructure/` - Ports plus console, file and config adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::{App, HostAdapters};
