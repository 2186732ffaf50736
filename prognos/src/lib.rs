//! Prognos puts a forecasting model behind two calls: `forecast` and `anomalies`.
//!
//! Overview
//! - Infers the sampling cadence of a series from its keys (`YS`, `QS`, `MS`,
//!   `W`, `D` or a fixed number of seconds).
//! - Converts caller keys (plain dates, zoned, UTC or local date-times) into a
//!   canonical `ds`/`y` frame and converts model output back into the same
//!   representation.
//! - Drives any backend implementing `prognos_core::ForecastModel`.
//! - Normalizes model failures into `PrognosError`.
//!
//! Key behaviors and trade-offs
//! - Key kind: the first key decides the representation of every output key.
//!   `strict_key_kinds(true)` rejects mixed series instead.
//! - Cadence: calendar cadences are read in the keys' own zone, so midnight in
//!   New York is daily even though it is 04:00/05:00 UTC. Sub-daily cadences
//!   use the smallest gap, which must divide every other gap.
//! - Future keys: calendar cadences step on the first key's wall clock, so a
//!   daily series in New York stays at local midnight across DST changes.
//! - Anomalies: flagged against a 99% interval by default; lowering
//!   `anomaly_interval_width` flags more points.
//! - Models are asked to stay quiet while fitting unless `quiet(false)` is set.
//!
//! Examples
//! Forecasting a daily series:
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use prognos::{Prognos, Series};
//! use prognos_linear::LinearModel;
//!
//! let prognos = Prognos::builder()
//!     .with_model(Arc::new(LinearModel::new()))
//!     .build()?;
//!
//! let series: Series = (0..30)
//!     .map(|i| (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i), i as f64))
//!     .collect();
//! let next_week = prognos.forecast(&series, 7).await?;
//! ```
//!
//! Flagging outliers:
//! ```rust,ignore
//! for (key, value) in prognos.anomalies(&series).await? {
//!     println!("{key}: {value}");
//! }
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod pipeline;

pub use core::{Prognos, PrognosBuilder};
pub use pipeline::forecast::ForecastRow;

// Re-export core types for convenience
pub use prognos_core::{
    AnomalyResult,
    Cadence,
    CanonicalFrame,
    FittedModel,
    ForecastModel,
    ForecastResult,
    ModelKey,
    ModelOptions,
    PredictionFrame,
    PrognosConfig,
    PrognosError,
    Series,
    TemporalKey,
    TemporalKeyKind,
    Tz,
    infer_cadence,
};
