use chrono::{DateTime, Utc};

use crate::PrognosError;

/// Name of the timestamp column.
pub const DS: &str = "ds";
/// Name of the observation column.
pub const Y: &str = "y";

/// One row of a canonical frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalRow {
    /// Absolute instant of the observation.
    pub ds: DateTime<Utc>,
    /// Observed value; `NaN` marks a missing value.
    pub y: f64,
}

/// Two-column `ds`/`y` table handed to a model's `fit`.
///
/// Rows keep the order they were built in; no zone or key-kind metadata is
/// retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalFrame {
    rows: Vec<CanonicalRow>,
}

impl CanonicalFrame {
    /// Build a frame from rows.
    #[must_use]
    pub const fn new(rows: Vec<CanonicalRow>) -> Self {
        Self { rows }
    }

    /// Append a row.
    pub fn push(&mut self, ds: DateTime<Utc>, y: f64) {
        self.rows.push(CanonicalRow { ds, y });
    }

    /// Rows in build order.
    #[must_use]
    pub fn rows(&self) -> &[CanonicalRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `ds` column.
    #[must_use]
    pub fn ds(&self) -> Vec<DateTime<Utc>> {
        self.rows.iter().map(|r| r.ds).collect()
    }

    /// The `y` column.
    #[must_use]
    pub fn y(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.y).collect()
    }

    /// Reject infinite observations.
    ///
    /// # Errors
    /// Returns `Validation("Found infinity in column y.")` if any value is
    /// positive or negative infinity.
    pub fn ensure_finite(&self) -> Result<(), PrognosError> {
        if self.rows.iter().any(|r| r.y.is_infinite()) {
            return Err(PrognosError::validation(format!(
                "Found infinity in column {Y}."
            )));
        }
        Ok(())
    }

    /// Number of rows whose value is not missing.
    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.rows.iter().filter(|r| !r.y.is_nan()).count()
    }

    /// Rows with a present value, sorted by `ds`.
    #[must_use]
    pub fn observed_sorted(&self) -> Vec<CanonicalRow> {
        let mut out: Vec<CanonicalRow> = self.rows.iter().filter(|r| !r.y.is_nan()).copied().collect();
        out.sort_by_key(|r| r.ds);
        out
    }
}

impl FromIterator<CanonicalRow> for CanonicalFrame {
    fn from_iter<I: IntoIterator<Item = CanonicalRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// One row of a model prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRow {
    /// Instant the prediction is for.
    pub ds: DateTime<Utc>,
    /// Point prediction.
    pub yhat: f64,
    /// Lower bound of the central interval.
    pub yhat_lower: f64,
    /// Upper bound of the central interval.
    pub yhat_upper: f64,
}

impl PredictionRow {
    /// Returns true when `value` lies strictly outside `[yhat_lower, yhat_upper]`.
    ///
    /// Missing values (`NaN`) are never outside.
    #[must_use]
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.yhat_lower || value > self.yhat_upper
    }
}

/// Model output aligned row-for-row with the timestamps it was asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionFrame {
    rows: Vec<PredictionRow>,
}

impl PredictionFrame {
    /// Build a prediction frame from rows.
    #[must_use]
    pub const fn new(rows: Vec<PredictionRow>) -> Self {
        Self { rows }
    }

    /// Rows in prediction order.
    #[must_use]
    pub fn rows(&self) -> &[PredictionRow] {
        &self.rows
    }

    /// Consume the frame and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<PredictionRow> {
        self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the rows match `timestamps` one-to-one and in order.
    #[must_use]
    pub fn is_aligned_with(&self, timestamps: &[DateTime<Utc>]) -> bool {
        self.rows.len() == timestamps.len()
            && self.rows.iter().zip(timestamps).all(|(r, ts)| r.ds == *ts)
    }
}

impl FromIterator<PredictionRow> for PredictionFrame {
    fn from_iter<I: IntoIterator<Item = PredictionRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
