//! Host collaborator port traits (world, wallet, conditions, localization, audio, dialogs).

use transit_domain::{ConditionExpr, LanguageCode, LocationName};

use super::error::ConditionError;
use super::types::{
    Choice, EvaluationContext, HostDeparture, LoadedPack, TransferRequest, TranslationArgs,
};

// =============================================================================
// World
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait WorldPort: Send + Sync {
    /// Whether the host knows a location with this name.
    fn location_exists(&self, location: &LocationName) -> bool;

    /// Ask the host to move the player. Completion is observed later as a menu transition.
    fn request_transfer(&self, request: TransferRequest);

    /// A host-run departure offered at `location`, if any.
    fn host_departure(&self, location: &LocationName) -> Option<HostDeparture>;

    /// Start the host-run departure at the current location.
    fn start_departure(&self);
}

// =============================================================================
// Wallet
// =============================================================================

/// The player's money.
///
/// Nothing on the host side keeps the balance non-negative; callers must check first.
#[cfg_attr(test, mockall::automock)]
pub trait WalletPort: Send {
    fn balance(&self) -> i64;
    fn set_balance(&mut self, balance: i64);
}

// =============================================================================
// Conditions
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ConditionPort: Send + Sync {
    fn evaluate(
        &self,
        condition: &ConditionExpr,
        context: &EvaluationContext,
    ) -> Result<bool, ConditionError>;
}

// =============================================================================
// Localization
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait LocalizationPort: Send + Sync {
    fn current_language(&self) -> LanguageCode;

    /// Resolve `key` for the current language, substituting `args`.
    fn translate(&self, key: &str, args: &TranslationArgs) -> String;
}

// =============================================================================
// Audio
// =============================================================================

/// A playing looped sound. Dropping the handle without `stop` leaves it playing.
#[cfg_attr(test, mockall::automock)]
pub trait LoopingCue: Send {
    fn stop(&mut self);
}

#[cfg_attr(test, mockall::automock)]
pub trait AudioPort: Send + Sync {
    fn start_loop(&self, cue: &str) -> Box<dyn LoopingCue>;
    fn play_once(&self, cue: &str);
}

// =============================================================================
// Dialogs
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait DialogPort: Send + Sync {
    /// Show a message box with no choices.
    fn show_notice(&self, text: &str);

    /// Open the question dialog. The selected choice id comes back through the caller.
    fn show_question(&self, prompt: &str, choices: &[Choice]);
}

// =============================================================================
// Content packs
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ContentPackSource: Send + Sync {
    /// Every readable pack, in load order. Unreadable packs are logged and left out.
    fn load_packs(&self) -> Vec<LoadedPack>;
}
