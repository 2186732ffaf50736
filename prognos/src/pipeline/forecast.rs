use chrono::{DateTime, FixedOffset};
use prognos_core::{ForecastResult, PrognosError, Series, TemporalKey, infer_cadence};

use crate::Prognos;
use crate::core::{Prepared, tag_err};
use crate::pipeline::util::ensure_aligned;

/// One forecast step with its uncertainty interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRow {
    /// Future key, in the representation of the input series' first key.
    pub key: TemporalKey,
    /// Point forecast.
    pub yhat: f64,
    /// Lower bound of the forecast interval.
    pub yhat_lower: f64,
    /// Upper bound of the forecast interval.
    pub yhat_upper: f64,
}

impl Prognos {
    /// Forecast `count` future values of `series`.
    ///
    /// The cadence of the series is inferred from its keys, the model is fitted
    /// on the whole series, and `count` steps of that cadence after the last
    /// key are predicted. Output keys have the same representation as the first
    /// input key (plain date, zoned, UTC or local). Calendar cadences step on
    /// that key's wall clock, so daily keys in a DST zone stay at local
    /// midnight.
    ///
    /// # Errors
    /// - `InvalidArg` if `count` is zero, in strict mode when key kinds are mixed,
    ///   or when the future steps do not map to distinct keys of the first
    ///   key's kind (a plain-date first key followed by sub-daily keys).
    /// - `InsufficientData` if the series has fewer than `min_points` observations.
    /// - `UnknownFrequency` if no cadence fits the keys.
    /// - `Validation` from the model (e.g. an infinite value).
    /// - `ModelFitting` for any other model failure.
    pub async fn forecast(
        &self,
        series: &Series,
        count: usize,
    ) -> Result<ForecastResult, PrognosError> {
        let rows = self.forecast_detailed(series, count).await?;
        Ok(rows.into_iter().map(|r| (r.key, r.yhat)).collect())
    }

    /// Forecast `count` future values of `series`, keeping the interval bounds.
    ///
    /// Rows are in chronological order. See [`forecast`](Self::forecast) for
    /// the pipeline and its errors.
    ///
    /// # Errors
    /// Same as [`forecast`](Self::forecast).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "prognos::forecast",
            skip(self, series),
            fields(model = self.model.name(), points = series.len(), count = count),
        )
    )]
    pub async fn forecast_detailed(
        &self,
        series: &Series,
        count: usize,
    ) -> Result<Vec<ForecastRow>, PrognosError> {
        if count == 0 {
            return Err(PrognosError::invalid_arg(
                "count must be at least 1 future period",
            ));
        }
        if series.len() < self.cfg.min_points {
            return Err(PrognosError::insufficient_data(
                self.cfg.min_points,
                series.len(),
            ));
        }

        let Prepared { kind, frame } = self.prepare(series)?;
        let civil: Vec<DateTime<FixedOffset>> = series.keys().map(TemporalKey::civil).collect();
        let cadence = infer_cadence(&civil)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "prognos::forecast", %cadence, %kind, "inferred cadence");

        let name = self.model.name();
        let fitted = self
            .model
            .fit(frame, self.cfg.forecast_options())
            .await
            .map_err(|e| tag_err(name, e))?;
        let future = fitted.make_future(count, false, cadence, kind)?;
        let predictions = fitted
            .predict(&future)
            .await
            .map_err(|e| tag_err(name, e))?;
        ensure_aligned(name, &predictions, &future)?;

        let rows: Vec<ForecastRow> = predictions
            .into_rows()
            .into_iter()
            .map(|r| ForecastRow {
                key: TemporalKey::from_canonical(r.ds, kind),
                yhat: r.yhat,
                yhat_lower: r.yhat_lower,
                yhat_upper: r.yhat_upper,
            })
            .collect();
        // A sub-daily cadence retyped into plain dates collapses onto one day.
        if rows.windows(2).any(|w| w[0].key >= w[1].key) {
            return Err(PrognosError::InvalidArg(format!(
                "{cadence} steps cannot be represented as distinct {kind} keys"
            )));
        }
        Ok(rows)
    }

    /// Forecast several independent series concurrently.
    ///
    /// Returns one outcome per input, in input order. A failing series does
    /// not affect the others.
    pub async fn forecast_many(
        &self,
        series: &[Series],
        count: usize,
    ) -> Vec<Result<ForecastResult, PrognosError>> {
        if series.is_empty() {
            return vec![];
        }
        let tasks = series.iter().map(|s| self.forecast(s, count));
        futures::future::join_all(tasks).await
    }
}
