use prognos::PrognosError;

use crate::helpers::{date, daily_dates, with_mock};

#[tokio::test]
async fn each_series_gets_its_own_outcome() {
    let ok = daily_dates(date(2024, 1, 1), 12, |i| i as f64);
    let short = daily_dates(date(2024, 1, 1), 4, |i| i as f64);
    let other = daily_dates(date(2023, 6, 1), 20, |_| 3.0);

    let out = with_mock()
        .forecast_many(&[ok, short, other], 2)
        .await;
    assert_eq!(out.len(), 3);

    let first = out[0].as_ref().expect("first ok");
    assert_eq!(
        first.keys().next().and_then(|k| k.as_date()),
        Some(date(2024, 1, 13))
    );
    assert_eq!(
        out[1],
        Err(PrognosError::InsufficientData { required: 10, actual: 4 })
    );
    let third = out[2].as_ref().expect("third ok");
    assert!(third.values().all(|v| (v - 3.0).abs() < 1e-12));
}

#[tokio::test]
async fn empty_batch_is_empty() {
    assert!(with_mock().forecast_many(&[], 3).await.is_empty());
}
