use prognos::{TemporalKey, TemporalKeyKind};

use crate::helpers::{date, daily_dates, with_linear, zoned_midnights};

#[tokio::test]
async fn single_outlier_on_a_trend_is_the_only_anomaly() {
    let series = daily_dates(date(2024, 1, 1), 60, |i| {
        let base = 10.0 + 0.5 * i as f64;
        if i == 30 { base + 100.0 } else { base }
    });
    let flagged = with_linear().anomalies(&series).await.expect("anomalies ok");
    assert_eq!(flagged.len(), 1, "{flagged:?}");
    let (key, value) = flagged[0];
    assert_eq!(key, TemporalKey::Date(date(2024, 1, 31)));
    assert!((value - 125.0).abs() < 1e-12);
}

#[tokio::test]
async fn bounded_noise_is_not_anomalous() {
    let series = daily_dates(date(2024, 1, 1), 30, |i| {
        let i = i as f64;
        5.0 + 0.1 * i + 0.3 * (1.3 * i).sin()
    });
    let flagged = with_linear().anomalies(&series).await.expect("anomalies ok");
    assert!(flagged.is_empty(), "{flagged:?}");
}

#[tokio::test]
async fn flagged_keys_keep_the_zone() {
    let berlin = chrono_tz::Europe::Berlin;
    let series = zoned_midnights(berlin, date(2024, 2, 1), 40, |i| {
        if i == 20 { 500.0 } else { 1.0 + 0.01 * i as f64 }
    });
    let flagged = with_linear().anomalies(&series).await.expect("anomalies ok");
    assert_eq!(flagged.len(), 1, "{flagged:?}");
    assert_eq!(flagged[0].0.kind(), TemporalKeyKind::Zoned(berlin));
    assert_eq!(Some(&flagged[0].0), series.keys().nth(20));
}
