//! Transit Domain - destination types and value objects for the fast-travel network.
//!
//! Nothing here talks to the host game; the engine crate wires these types to
//! collaborators through ports.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Destination, WarpTarget};
pub use error::DomainError;
pub use ids::{PackId, StopId};
pub use value_objects::{
    ConditionExpr, Facing, LanguageCode, LocalizedText, LocationName, NetworkKind,
    MISSING_TRANSLATION_PLACEHOLDER,
};
