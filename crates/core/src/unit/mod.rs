//! Housing units and the read-only snapshot the calculations run on.

pub mod error;
pub mod snapshot;
pub mod types;

pub use error::UnitError;
pub use snapshot::UnitSnapshot;
pub use types::{NewUnit, Unit, validate_unit};
