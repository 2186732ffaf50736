use std::f64::consts::PI;

use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Whether a seasonality is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    /// Decide from the span and spacing of the history.
    #[default]
    Auto,
    /// Always fit.
    On,
    /// Never fit.
    Off,
}

/// A periodic component modeled by a Fourier series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seasonality {
    /// Name used in diagnostics.
    pub name: &'static str,
    /// Period in days.
    pub period_days: f64,
    /// Number of sine/cosine pairs.
    pub order: usize,
}

impl Seasonality {
    /// Period 365.25 days, order 10.
    pub const YEARLY: Self = Self {
        name: "yearly",
        period_days: 365.25,
        order: 10,
    };
    /// Period 7 days, order 3.
    pub const WEEKLY: Self = Self {
        name: "weekly",
        period_days: 7.0,
        order: 3,
    };
    /// Period 1 day, order 4.
    pub const DAILY: Self = Self {
        name: "daily",
        period_days: 1.0,
        order: 4,
    };

    /// Number of regression columns this seasonality adds.
    #[must_use]
    pub const fn width(&self) -> usize {
        2 * self.order
    }

    /// Append `sin, cos` pairs for orders `1..=order` at instant `ds`.
    ///
    /// Time is measured in days since the Unix epoch, so features of the same
    /// instant do not depend on the history they were fitted on.
    pub fn push_features(&self, ds: DateTime<Utc>, out: &mut Vec<f64>) {
        #[allow(clippy::cast_precision_loss)]
        let t = ds.timestamp() as f64 / SECONDS_PER_DAY
            + f64::from(ds.timestamp_subsec_nanos()) / 1e9 / SECONDS_PER_DAY;
        for k in 1..=self.order {
            #[allow(clippy::cast_precision_loss)]
            let x = 2.0 * PI * (k as f64) * t / self.period_days;
            out.push(x.sin());
            out.push(x.cos());
        }
    }
}

/// Per-seasonality switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonalitySettings {
    /// Yearly component.
    pub yearly: Toggle,
    /// Weekly component.
    pub weekly: Toggle,
    /// Daily component.
    pub daily: Toggle,
}

impl SeasonalitySettings {
    /// Seasonalities to fit for a sorted history.
    ///
    /// `Auto` enables yearly with at least two years of history, weekly with
    /// at least two weeks of history sampled more often than weekly, and daily
    /// with at least two days of history sampled more often than daily.
    #[must_use]
    pub fn resolve(&self, sorted: &[DateTime<Utc>]) -> Vec<Seasonality> {
        let span = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => *last - *first,
            _ => TimeDelta::zero(),
        };
        let min_gap = sorted
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|d| *d > TimeDelta::zero())
            .min();
        let finer_than = |limit: TimeDelta| min_gap.is_some_and(|g| g < limit);

        let candidates = [
            (self.yearly, Seasonality::YEARLY, span >= TimeDelta::days(730)),
            (
                self.weekly,
                Seasonality::WEEKLY,
                span >= TimeDelta::days(14) && finer_than(TimeDelta::days(7)),
            ),
            (
                self.daily,
                Seasonality::DAILY,
                span >= TimeDelta::days(2) && finer_than(TimeDelta::days(1)),
            ),
        ];
        candidates
            .into_iter()
            .filter_map(|(toggle, s, auto)| match toggle {
                Toggle::On => Some(s),
                Toggle::Off => None,
                Toggle::Auto => auto.then_some(s),
            })
            .collect()
    }
}
