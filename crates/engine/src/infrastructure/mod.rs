//! Infrastructure implementations.
//!
//! Contains port trait implementations for the host collaborators.

pub mod clock;
pub mod config;
pub mod console;
pub mod content_packs;
pub mod localization;
pub mod ports;
