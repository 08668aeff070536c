//! Domain entities - Core business objects with identity

mod destination;

pub use destination::{Destination, WarpTarget};
