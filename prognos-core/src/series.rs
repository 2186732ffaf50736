//! Ordered mapping from temporal keys to observations.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::frame::{CanonicalFrame, CanonicalRow};
use crate::temporal::{TemporalKey, TemporalKeyKind, classify};
use crate::PrognosError;

/// A univariate series keyed by [`TemporalKey`].
///
/// Keys are unique and kept in chronological order. `NaN` values are allowed
/// and stand for missing observations; the model decides what to do with
/// them.
///
/// ```
/// use chrono::NaiveDate;
/// use prognos_core::Series;
///
/// let series: Series = (1..=3)
///     .map(|d| (NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), f64::from(d)))
///     .collect();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.first_key().unwrap().to_string(), "2024-01-01");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: BTreeMap<TemporalKey, f64>,
}

impl Series {
    /// Create an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Insert an observation, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<TemporalKey>, value: f64) -> Option<f64> {
        self.points.insert(key.into(), value)
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest key.
    #[must_use]
    pub fn first_key(&self) -> Option<&TemporalKey> {
        self.points.keys().next()
    }

    /// Value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &TemporalKey) -> Option<f64> {
        self.points.get(key).copied()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TemporalKey, f64)> {
        self.points.iter().map(|(k, v)| (k, *v))
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> btree_map::Keys<'_, TemporalKey, f64> {
        self.points.keys()
    }

    /// Iterate values in key order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.values().copied()
    }

    /// Kind of the series as decided by its first key.
    #[must_use]
    pub fn kind(&self) -> Option<TemporalKeyKind> {
        self.first_key().map(classify)
    }

    /// Kind of the series, checking that every key shares it.
    ///
    /// # Errors
    /// - Returns `InvalidArg` if the series is empty.
    /// - Returns `InvalidArg` naming the first key whose kind differs from the
    ///   first key's kind.
    pub fn uniform_kind(&self) -> Result<TemporalKeyKind, PrognosError> {
        let kind = self
            .kind()
            .ok_or_else(|| PrognosError::invalid_arg("series is empty"))?;
        if let Some(bad) = self.keys().find(|k| k.kind() != kind) {
            return Err(PrognosError::invalid_arg(format!(
                "mixed key kinds: expected {kind}, found {} at {bad}",
                bad.kind()
            )));
        }
        Ok(kind)
    }

    /// Canonical `ds`/`y` frame in key order.
    #[must_use]
    pub fn to_frame(&self) -> CanonicalFrame {
        self.points
            .iter()
            .map(|(k, v)| CanonicalRow {
                ds: k.to_canonical(),
                y: *v,
            })
            .collect()
    }
}

impl<K: Into<TemporalKey>> FromIterator<(K, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl<K: Into<TemporalKey>> Extend<(K, f64)> for Series {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.points.insert(k.into(), v);
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = (&'a TemporalKey, &'a f64);
    type IntoIter = btree_map::Iter<'a, TemporalKey, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<BTreeMap<TemporalKey, f64>> for Series {
    fn from(points: BTreeMap<TemporalKey, f64>) -> Self {
        Self { points }
    }
}
