//! Prognos-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod cadence;
mod config;
mod error;
mod model;

pub use cadence::Cadence;
pub use config::{ModelOptions, PrognosConfig};
pub use error::PrognosError;
pub use model::ModelKey;
