use prognos_core::{AnomalyResult, PrognosError, Series, TemporalKey};

use crate::Prognos;
use crate::core::{Prepared, tag_err};
use crate::pipeline::util::ensure_aligned;

impl Prognos {
    /// Flag observations that fall outside the model's near-certain interval.
    ///
    /// The model is fitted on the whole series with
    /// `anomaly_interval_width` (0.99 by default) and asked to predict every
    /// historical timestamp. An observation is flagged when it is strictly
    /// below `yhat_lower` or strictly above `yhat_upper`; missing values are
    /// never flagged. Flagged `(key, value)` pairs come back in series order.
    ///
    /// There is no minimum length beyond what the model itself requires.
    ///
    /// # Errors
    /// - `InvalidArg` if the series is empty, or in strict mode when key kinds are mixed.
    /// - `Validation` from the model (e.g. an infinite value, too few rows).
    /// - `ModelFitting` for any other model failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "prognos::anomalies",
            skip(self, series),
            fields(model = self.model.name(), points = series.len()),
        )
    )]
    pub async fn anomalies(&self, series: &Series) -> Result<AnomalyResult, PrognosError> {
        let Prepared { kind, frame } = self.prepare(series)?;
        let timestamps = frame.ds();
        let values = frame.y();

        let name = self.model.name();
        let fitted = self
            .model
            .fit(frame, self.cfg.anomaly_options())
            .await
            .map_err(|e| tag_err(name, e))?;
        let predictions = fitted
            .predict(&timestamps)
            .await
            .map_err(|e| tag_err(name, e))?;
        ensure_aligned(name, &predictions, &timestamps)?;

        let flagged: AnomalyResult = predictions
            .rows()
            .iter()
            .zip(values)
            .filter(|(row, y)| row.is_outside(*y))
            .map(|(row, y)| (TemporalKey::from_canonical(row.ds, kind), y))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "prognos::anomalies", flagged = flagged.len(), "anomaly scan complete");
        Ok(flagged)
    }
}
