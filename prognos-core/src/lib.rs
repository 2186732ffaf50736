//! prognos-core
//!
//! Core types, traits, and utilities shared across the prognos workspace.
//!
//! - `types`: re-exports of errors, cadence codes, and configuration.
//! - `model`: the `ForecastModel` / `FittedModel` contract implemented by backends.
//! - `temporal`: caller key representations and their canonical round trip.
//! - `series`: the ordered key → observation mapping callers hand in.
//! - `frame`: canonical `ds`/`y` input frames and prediction frames.
//! - `timeseries`: cadence inference and future-timestamp generation.
//!
//! Async runtime
//! -------------
//! Model traits are declared with `async_trait` so backends may await remote
//! services or offload CPU-bound fitting to a blocking pool. Nothing in this
//! crate spawns tasks itself.
#![warn(missing_docs)]

/// Canonical input and prediction frames.
pub mod frame;
/// Model traits implemented by forecasting backends.
pub mod model;
/// Ordered series of temporal keys and observations.
pub mod series;
/// Caller key kinds and their conversion to and from canonical instants.
pub mod temporal;
/// Time-series utilities for cadence inference and future timestamps.
pub mod timeseries;
pub mod types;

pub use frame::{CanonicalFrame, CanonicalRow, PredictionFrame, PredictionRow};
pub use model::{FittedModel, ForecastModel};
pub use series::Series;
pub use temporal::{TemporalKey, TemporalKeyKind, classify, from_canonical, to_canonical};
pub use timeseries::future::{future_timestamps, make_future};
pub use timeseries::infer::infer_cadence;
pub use types::*;
