//! Port traits for host boundaries.
//!
//! Every host dependency the station needs goes through one of these traits;
//! use cases and stores are concrete. Ports exist for:
//! - World transfers and location lookups (the host game)
//! - The player's wallet
//! - Condition evaluation (an external precondition engine)
//! - Localization, audio and dialogs (host UI)
//! - Content pack loading
//! - Clock (for testing)

mod error;
mod external;
mod testing;
pub mod types;

// =============================================================================
// Types from types module (re-export for visibility)
// =============================================================================
pub use types::{
    Choice, ChoiceId, ContentPack, EvaluationContext, HostDeparture, LoadedPack, MenuTransition,
    RawStop, TransferRequest, TranslationArgs,
};

// =============================================================================
// Host Collaborator Ports
// =============================================================================
pub use external::{
    AudioPort, ConditionPort, ContentPackSource, DialogPort, LocalizationPort, LoopingCue,
    WalletPort, WorldPort,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{
    MockAudioPort, MockConditionPort, MockContentPackSource, MockDialogPort,
    MockLocalizationPort, MockLoopingCue, MockWalletPort, MockWorldPort,
};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ConditionError, PackLoadError};
