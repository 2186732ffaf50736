use std::sync::Arc;

use chrono::{Days, NaiveDate};
use prognos::{Series, TemporalKey};
use prognos_core::ForecastModel;
use prognos_linear::LinearModel;

/// Return a model for demos.
///
/// Uses the mean mock when `PROGNOS_DEMOS_USE_MOCK` is set, the linear
/// backend otherwise.
#[must_use]
pub fn get_model() -> Arc<dyn ForecastModel> {
    if std::env::var("PROGNOS_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Model for CI) ---");
        Arc::new(prognos_mock::MockModel::new())
    } else {
        Arc::new(LinearModel::new())
    }
}

/// `n` daily observations from `start`, a trend with a weekly swing.
#[must_use]
pub fn daily_sales(start: NaiveDate, n: u64) -> Series {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64;
            let weekday = (t * std::f64::consts::TAU / 7.0).sin();
            (start + Days::new(i), 200.0 + 1.5 * t + 25.0 * weekday)
        })
        .collect()
}

/// Print `(key, value)` pairs one per line.
pub fn print_rows<'a>(rows: impl IntoIterator<Item = (&'a TemporalKey, &'a f64)>) {
    for (key, value) in rows {
        println!("  {key}  {value:>10.2}");
    }
}
