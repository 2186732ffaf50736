use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nalgebra::{DMatrix, DVector};
use prognos_core::{
    CanonicalFrame, FittedModel, ModelOptions, PredictionFrame, PredictionRow, PrognosError,
};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::LinearModel;
use crate::seasonality::{Seasonality, SeasonalitySettings};

const SVD_EPS: f64 = 1e-10;
const NAME: &str = LinearModel::KEY.as_str();

/// A linear model fitted to one frame.
///
/// `yhat(t) = intercept + slope * t + Σ fourier(t) · β`, with `t` the time
/// scaled so the observed history spans `[0, 1]` and values scaled by the
/// largest absolute observation.
#[derive(Debug, Clone)]
pub struct FittedLinear {
    history: Vec<DateTime<Utc>>,
    start: DateTime<Utc>,
    span_secs: f64,
    y_scale: f64,
    seasonalities: Vec<Seasonality>,
    beta: DVector<f64>,
    half_width: f64,
}

impl FittedLinear {
    /// Seasonalities included in the fit.
    #[must_use]
    pub fn seasonalities(&self) -> &[Seasonality] {
        &self.seasonalities
    }

    /// Half the width of the prediction interval, in the units of `y`.
    #[must_use]
    pub const fn half_width(&self) -> f64 {
        self.half_width
    }

    fn columns(&self) -> usize {
        2 + self.seasonalities.iter().map(Seasonality::width).sum::<usize>()
    }

    fn design_row(&self, ds: DateTime<Utc>, out: &mut Vec<f64>) {
        #[allow(clippy::cast_precision_loss)]
        let t = (ds - self.start).num_milliseconds() as f64 / 1000.0 / self.span_secs;
        out.push(1.0);
        out.push(t);
        for s in &self.seasonalities {
            s.push_features(ds, out);
        }
    }

    fn design(&self, timestamps: &[DateTime<Utc>]) -> DMatrix<f64> {
        let cols = self.columns();
        let mut flat = Vec::with_capacity(timestamps.len() * cols);
        for &ds in timestamps {
            self.design_row(ds, &mut flat);
        }
        DMatrix::from_row_slice(timestamps.len(), cols, &flat)
    }

    /// Point predictions and bounds for `timestamps`.
    #[must_use]
    pub fn predict_at(&self, timestamps: &[DateTime<Utc>]) -> PredictionFrame {
        let yhat = self.design(timestamps) * &self.beta;
        timestamps
            .iter()
            .zip(yhat.iter())
            .map(|(&ds, &scaled)| {
                let yhat = scaled * self.y_scale;
                PredictionRow {
                    ds,
                    yhat,
                    yhat_lower: yhat - self.half_width,
                    yhat_upper: yhat + self.half_width,
                }
            })
            .collect()
    }
}

/// Two-sided standard normal quantile for a central interval of `width`.
fn interval_z(width: f64) -> Result<f64, PrognosError> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| PrognosError::model_fitting(NAME, e.to_string()))?;
    Ok(normal.inverse_cdf((1.0 + width) / 2.0))
}

/// Fit synchronously. Runs on a blocking thread.
pub(crate) fn fit_blocking(
    frame: &CanonicalFrame,
    settings: SeasonalitySettings,
    options: ModelOptions,
) -> Result<FittedLinear, PrognosError> {
    frame.ensure_finite()?;
    let rows = frame.observed_sorted();
    if rows.len() < 2 {
        return Err(PrognosError::validation(
            "Dataframe has less than 2 non-NaN rows.",
        ));
    }

    let mut history = frame.ds();
    history.sort_unstable();

    let observed: Vec<DateTime<Utc>> = rows.iter().map(|r| r.ds).collect();
    let start = observed[0];
    let end = observed[observed.len() - 1];
    #[allow(clippy::cast_precision_loss)]
    let span = (end - start).num_milliseconds() as f64 / 1000.0;
    let span_secs = if span > 0.0 { span } else { 1.0 };

    let max_abs = rows.iter().map(|r| r.y.abs()).fold(0.0_f64, f64::max);
    let y_scale = if max_abs > 0.0 { max_abs } else { 1.0 };

    let seasonalities = settings.resolve(&observed);
    let mut fitted = FittedLinear {
        history,
        start,
        span_secs,
        y_scale,
        seasonalities,
        beta: DVector::zeros(0),
        half_width: 0.0,
    };

    let x = fitted.design(&observed);
    let y = DVector::from_iterator(rows.len(), rows.iter().map(|r| r.y / y_scale));
    let svd = x.clone().svd(true, true);
    let beta = svd
        .solve(&y, SVD_EPS)
        .map_err(|e| PrognosError::model_fitting(NAME, e))?;

    let residuals = &y - &x * &beta;
    let dof = rows.len().saturating_sub(fitted.columns()).max(1);
    #[allow(clippy::cast_precision_loss)]
    let sigma = (residuals.norm_squared() / dof as f64).sqrt() * y_scale;
    let half_width = interval_z(options.interval_width)? * sigma;
    if !half_width.is_finite() {
        return Err(PrognosError::model_fitting(
            NAME,
            format!("non-finite interval for width {}", options.interval_width),
        ));
    }

    #[cfg(feature = "tracing")]
    if !options.quiet {
        for s in &fitted.seasonalities {
            tracing::debug!(target: "prognos_linear", seasonality = s.name, order = s.order, "fitting seasonality");
        }
        tracing::debug!(
            target: "prognos_linear",
            rows = rows.len(),
            columns = fitted.columns(),
            sigma,
            "linear fit complete"
        );
    }

    fitted.beta = beta;
    fitted.half_width = half_width;
    Ok(fitted)
}

#[async_trait]
impl FittedModel for FittedLinear {
    fn history(&self) -> &[DateTime<Utc>] {
        &self.history
    }

    async fn predict(&self, timestamps: &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError> {
        Ok(self.predict_at(timestamps))
    }
}
