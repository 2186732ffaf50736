use chrono::{DateTime, Utc};
use prognos_core::{PredictionFrame, PrognosError};

/// Reject predictions that do not line up with the timestamps they were
/// requested for.
///
/// # Errors
/// Returns `ModelFitting` for `model` when the row count or any `ds` differs.
pub(crate) fn ensure_aligned(
    model: &str,
    predictions: &PredictionFrame,
    requested: &[DateTime<Utc>],
) -> Result<(), PrognosError> {
    if predictions.is_aligned_with(requested) {
        return Ok(());
    }
    Err(PrognosError::model_fitting(
        model,
        format!(
            "predictions do not match the requested timestamps: expected {} rows, got {}",
            requested.len(),
            predictions.len()
        ),
    ))
}
