//! Mock forecasting models for tests and CI-safe demos.
//!
//! - [`MockModel`]: deterministic mean model; no randomness, no numerics
//!   beyond a mean and a spread.
//! - [`DynamicMockModel`]: defers fit and predict to a controller so tests can
//!   script failures, hangs and custom predictions, and inspect every call the
//!   orchestrator made.
#![warn(missing_docs)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use prognos_core::{
    CanonicalFrame, FittedModel, ForecastModel, ModelOptions, PredictionFrame, PredictionRow,
    PrognosError,
};

mod dynamic;

pub use dynamic::{
    DynamicMockController, DynamicMockModel, FitCall, FutureCall, MockBehavior, PredictFn,
};

/// Mock model for CI-safe examples. Predicts the mean of the observed values.
///
/// The interval is `mean ± spread * interval_width`, where `spread` is the
/// largest absolute deviation from the mean seen during fitting. Input is
/// validated the same way a real backend would.
pub struct MockModel;

impl Default for MockModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockModel {
    /// Create the mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ForecastModel for MockModel {
    fn name(&self) -> &'static str {
        "prognos-mock"
    }

    async fn fit(
        &self,
        frame: CanonicalFrame,
        options: ModelOptions,
    ) -> Result<Box<dyn FittedModel>, PrognosError> {
        Ok(Box::new(MeanFit::fit(&frame, options)?))
    }
}

/// Fitted mean model shared by both mocks.
#[derive(Debug, Clone)]
pub struct MeanFit {
    history: Vec<DateTime<Utc>>,
    mean: f64,
    half_width: f64,
}

impl MeanFit {
    /// Fit the mean model to `frame`.
    ///
    /// # Errors
    /// - `Validation("Found infinity in column y.")` for infinite values.
    /// - `Validation` if fewer than two values are present.
    pub fn fit(frame: &CanonicalFrame, options: ModelOptions) -> Result<Self, PrognosError> {
        frame.ensure_finite()?;
        let observed = frame.observed_sorted();
        if observed.len() < 2 {
            return Err(PrognosError::validation(
                "Dataframe has less than 2 non-NaN rows.",
            ));
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = observed.iter().map(|r| r.y).sum::<f64>() / observed.len() as f64;
        let spread = observed
            .iter()
            .map(|r| (r.y - mean).abs())
            .fold(0.0_f64, f64::max);

        let mut history = frame.ds();
        history.sort_unstable();
        Ok(Self {
            history,
            mean,
            half_width: spread * options.interval_width,
        })
    }

    /// Fitted mean.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Predict the mean and its band at every timestamp.
    #[must_use]
    pub fn predict_at(&self, timestamps: &[DateTime<Utc>]) -> PredictionFrame {
        timestamps
            .iter()
            .map(|&ds| PredictionRow {
                ds,
                yhat: self.mean,
                yhat_lower: self.mean - self.half_width,
                yhat_upper: self.mean + self.half_width,
            })
            .collect()
    }
}

#[async_trait]
impl FittedModel for MeanFit {
    fn history(&self) -> &[DateTime<Utc>] {
        &self.history
    }

    async fn predict(&self, timestamps: &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError> {
        Ok(self.predict_at(timestamps))
    }
}
