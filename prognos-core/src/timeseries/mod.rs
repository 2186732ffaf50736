//! Time-series utilities shared by the orchestrator and model backends.
//!
//! Modules include:
//! - `infer`: classify a timestamp set into a canonical cadence
//! - `future`: generate future timestamps for a cadence
/// Cadence inference from calendar fields and fixed-step gaps.
pub mod infer;
/// Future-timestamp generation for `FittedModel::make_future`.
pub mod future;
