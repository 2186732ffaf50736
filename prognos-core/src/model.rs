use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::frame::{CanonicalFrame, PredictionFrame};
use crate::temporal::TemporalKeyKind;
use crate::timeseries::future::make_future;
use crate::{Cadence, ModelKey, ModelOptions, PrognosError};

/// A forecasting backend.
///
/// Implementations own the statistical model: trend, seasonality, holiday
/// effects and the optimizer that estimates them. The orchestrator only relies
/// on the contract below.
#[async_trait]
pub trait ForecastModel: Send + Sync {
    /// Human-readable model name (e.g. "prognos-linear").
    fn name(&self) -> &'static str;

    /// Typed key derived from [`name`](Self::name).
    fn key(&self) -> ModelKey {
        ModelKey::new(self.name())
    }

    /// Fit a fresh model to `frame`.
    ///
    /// Implementations must honor `options.quiet` by emitting no diagnostic
    /// output for this fit, and must use `options.interval_width` for the
    /// bounds returned by the fitted handle.
    ///
    /// # Errors
    /// - `Validation("Found infinity in column y.")` if any value is infinite.
    /// - `Validation` for other malformed input (e.g. too few observed rows).
    /// - `ModelFitting` for any other failure.
    async fn fit(
        &self,
        frame: CanonicalFrame,
        options: ModelOptions,
    ) -> Result<Box<dyn FittedModel>, PrognosError>;
}

/// A model fitted to one frame.
#[async_trait]
pub trait FittedModel: Send + Sync {
    /// Timestamps of the history the model was fitted on, sorted ascending.
    fn history(&self) -> &[DateTime<Utc>];

    /// Timestamps to predict: `periods` steps of `cadence` after the last
    /// history timestamp, optionally preceded by the history itself.
    ///
    /// Calendar cadences are stepped on the wall clock of `calendar`, the kind
    /// of the caller's keys, so a daily series in a DST zone stays at the same
    /// local time.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the model has no history or the steps overflow
    /// the representable range.
    fn make_future(
        &self,
        periods: usize,
        include_history: bool,
        cadence: Cadence,
        calendar: TemporalKeyKind,
    ) -> Result<Vec<DateTime<Utc>>, PrognosError> {
        make_future(self.history(), periods, include_history, cadence, calendar)
    }

    /// Predict at `timestamps`, one row per timestamp, in the same order.
    ///
    /// # Errors
    /// Returns `ModelFitting` if the model cannot produce predictions.
    async fn predict(&self, timestamps: &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError>;
}
