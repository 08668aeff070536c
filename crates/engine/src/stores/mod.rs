//! In-memory state storage modules.
//!
//! Stores manage transient session state that is never persisted:
//! - `PendingWarpStore` - The warp awaiting its arrival notification

pub mod pending_warp;

pub use pending_warp::{NotifierState, PendingWarp, PendingWarpStore};
