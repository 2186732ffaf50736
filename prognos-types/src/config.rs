//! Configuration types shared across the orchestrator and model backends.

use serde::{Deserialize, Serialize};

use crate::PrognosError;

/// Per-call options handed to a model's `fit`.
///
/// A fresh value is derived from [`PrognosConfig`] for every call; models must
/// not keep it beyond the fitted handle they return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Probability mass of the central uncertainty interval, in (0, 1).
    pub interval_width: f64,
    /// Suppress the model's diagnostic output for this fit.
    pub quiet: bool,
    /// Optional seed for models with stochastic fitting.
    pub seed: Option<u64>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            interval_width: 0.80,
            quiet: true,
            seed: None,
        }
    }
}

/// Global configuration for the `Prognos` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrognosConfig {
    /// Minimum number of observations `forecast` accepts.
    pub min_points: usize,
    /// Interval width used when fitting for `forecast`.
    pub forecast_interval_width: f64,
    /// Interval width used when fitting for `anomalies`.
    ///
    /// Observations outside this interval are reported as anomalies, so it is
    /// kept close to 1.
    pub anomaly_interval_width: f64,
    /// Ask the model to stay silent while fitting.
    pub quiet: bool,
    /// Seed forwarded to the model on every fit.
    pub seed: Option<u64>,
    /// Reject series whose keys do not all share the first key's kind.
    ///
    /// When disabled, the first key decides the kind for the whole series.
    pub strict_key_kinds: bool,
}

impl Default for PrognosConfig {
    fn default() -> Self {
        Self {
            min_points: 10,
            forecast_interval_width: 0.80,
            anomaly_interval_width: 0.99,
            quiet: true,
            seed: None,
            strict_key_kinds: false,
        }
    }
}

impl PrognosConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    /// Returns `InvalidArg` if an interval width is outside (0, 1) or if
    /// `min_points` is below 2.
    pub fn validate(&self) -> Result<(), PrognosError> {
        for (name, w) in [
            ("forecast_interval_width", self.forecast_interval_width),
            ("anomaly_interval_width", self.anomaly_interval_width),
        ] {
            if !(w > 0.0 && w < 1.0) {
                return Err(PrognosError::invalid_arg(format!(
                    "{name} must be in (0, 1), got {w}"
                )));
            }
        }
        if self.min_points < 2 {
            return Err(PrognosError::invalid_arg(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }
        Ok(())
    }

    /// Options for a forecasting fit.
    #[must_use]
    pub const fn forecast_options(&self) -> ModelOptions {
        ModelOptions {
            interval_width: self.forecast_interval_width,
            quiet: self.quiet,
            seed: self.seed,
        }
    }

    /// Options for an anomaly-detection fit.
    #[must_use]
    pub const fn anomaly_options(&self) -> ModelOptions {
        ModelOptions {
            interval_width: self.anomaly_interval_width,
            quiet: self.quiet,
            seed: self.seed,
        }
    }
}
