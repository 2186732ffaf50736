//! prognos-linear
//!
//! Reference forecasting backend implementing `ForecastModel` with ordinary
//! least squares: a linear trend plus Fourier seasonalities (yearly, weekly,
//! daily) that are switched on from the span and spacing of the history.
//! Prediction intervals assume normal residuals.
//!
//! Fitting is CPU-bound and runs on tokio's blocking pool.
#![warn(missing_docs)]

mod builder;
mod fit;
/// Seasonal components and their automatic detection.
pub mod seasonality;

use async_trait::async_trait;
use prognos_core::{
    CanonicalFrame, FittedModel, ForecastModel, ModelKey, ModelOptions, PrognosError,
};

pub use builder::LinearModelBuilder;
pub use fit::FittedLinear;
pub use seasonality::{Seasonality, SeasonalitySettings, Toggle};

/// Linear trend + seasonality model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModel {
    seasonality: SeasonalitySettings,
}

impl LinearModel {
    /// Static model key.
    pub const KEY: ModelKey = ModelKey::new("prognos-linear");

    /// Model with automatic seasonality detection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seasonality switches this model fits with.
    #[must_use]
    pub const fn seasonality(&self) -> SeasonalitySettings {
        self.seasonality
    }

    fn tag_join_error(e: &tokio::task::JoinError) -> PrognosError {
        PrognosError::model_fitting(Self::KEY.as_str(), format!("fit task failed: {e}"))
    }
}

#[async_trait]
impl ForecastModel for LinearModel {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "prognos_linear::fit",
            skip(self, frame, options),
            fields(rows = frame.len(), interval_width = options.interval_width),
        )
    )]
    async fn fit(
        &self,
        frame: CanonicalFrame,
        options: ModelOptions,
    ) -> Result<Box<dyn FittedModel>, PrognosError> {
        let settings = self.seasonality;
        let fitted = tokio::task::spawn_blocking(move || fit::fit_blocking(&frame, settings, options))
            .await
            .map_err(|e| Self::tag_join_error(&e))??;
        Ok(Box::new(fitted))
    }
}
