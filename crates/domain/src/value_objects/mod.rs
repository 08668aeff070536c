//! Value objects - Immutable objects defined by their attributes

mod condition;
mod facing;
mod localized_text;
mod names;
mod network;

pub use condition::ConditionExpr;
pub use facing::Facing;
pub use localized_text::{LanguageCode, LocalizedText, MISSING_TRANSLATION_PLACEHOLDER};
pub use names::LocationName;
pub use network::NetworkKind;
