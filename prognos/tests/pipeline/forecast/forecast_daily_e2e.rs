use chrono::TimeDelta;
use prognos::{TemporalKey, TemporalKeyKind};

use crate::helpers::{date, daily_dates, dt, utc_every, with_linear};

#[tokio::test]
async fn four_hundred_days_forecast_ten_more() {
    let series = daily_dates(date(2023, 1, 1), 400, |i| {
        100.0 + 0.25 * i as f64 + 5.0 * (i % 7) as f64
    });
    let out = with_linear().forecast(&series, 10).await.expect("forecast ok");

    assert_eq!(out.len(), 10);
    let keys: Vec<&TemporalKey> = out.keys().collect();
    assert!(keys.iter().all(|k| k.kind() == TemporalKeyKind::PlainDate));
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    // 2023-01-01 + 400 days = 2024-02-05
    assert_eq!(keys[0].as_date(), Some(date(2024, 2, 5)));
    assert_eq!(keys[9].as_date(), Some(date(2024, 2, 14)));
    assert!(out.values().all(|v| v.is_finite()));
}

#[tokio::test]
async fn detailed_rows_bracket_the_point_forecast() {
    let series = daily_dates(date(2023, 6, 1), 60, |i| 10.0 + (i % 3) as f64);
    let rows = with_linear()
        .forecast_detailed(&series, 4)
        .await
        .expect("forecast ok");
    assert_eq!(rows.len(), 4);
    for r in &rows {
        assert!(r.yhat_lower < r.yhat && r.yhat < r.yhat_upper, "{r:?}");
    }
}

#[tokio::test]
async fn hourly_utc_series_steps_by_the_hour() {
    let start = dt(2024, 3, 1, 0, 30, 0);
    let series = utc_every(start, TimeDelta::hours(1), 48, |i| f64::from(i % 24));
    let out = with_linear().forecast(&series, 3).await.expect("forecast ok");
    let keys: Vec<TemporalKey> = out.keys().copied().collect();
    assert_eq!(
        keys,
        [
            TemporalKey::Utc(dt(2024, 3, 3, 0, 30, 0)),
            TemporalKey::Utc(dt(2024, 3, 3, 1, 30, 0)),
            TemporalKey::Utc(dt(2024, 3, 3, 2, 30, 0)),
        ]
    );
}

#[tokio::test]
async fn month_starts_continue_on_month_starts() {
    let series: prognos::Series = (0..24)
        .map(|m| (date(2021 + m / 12, 1 + (m % 12) as u32, 1), f64::from(m)))
        .collect();
    let out = with_linear().forecast(&series, 3).await.expect("forecast ok");
    let dates: Vec<_> = out.keys().filter_map(TemporalKey::as_date).collect();
    assert_eq!(dates, [date(2023, 1, 1), date(2023, 2, 1), date(2023, 3, 1)]);
}
