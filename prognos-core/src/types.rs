//! Re-export of foundational types from `prognos-types`.
// Consolidated re-exports so downstream crates can depend on `prognos-core` only

pub use prognos_types::{Cadence, ModelKey, ModelOptions, PrognosConfig, PrognosError};

pub use chrono_tz::Tz;

/// Forecast output: one predicted value per future key, in chronological order.
pub type ForecastResult = std::collections::BTreeMap<crate::TemporalKey, f64>;

/// Anomaly output: flagged observations in series order.
pub type AnomalyResult = Vec<(crate::TemporalKey, f64)>;
