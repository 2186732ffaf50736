use std::sync::Arc;

use prognos::{Prognos, PrognosConfig, PrognosError};
use prognos_mock::MockModel;

use crate::helpers::{date, daily_dates, dt, with_dynamic};

#[test]
fn build_requires_a_model() {
    let err = Prognos::builder().build().err().expect("must fail");
    assert!(matches!(err, PrognosError::InvalidArg(_)));
}

#[test]
fn build_validates_widths_and_min_points() {
    for builder in [
        Prognos::builder().forecast_interval_width(1.0),
        Prognos::builder().anomaly_interval_width(0.0),
        Prognos::builder().anomaly_interval_width(f64::NAN),
        Prognos::builder().min_points(1),
    ] {
        let err = builder
            .with_model(Arc::new(MockModel::new()))
            .build()
            .err()
            .expect("must fail");
        assert!(matches!(err, PrognosError::InvalidArg(_)), "{err:?}");
    }
}

#[test]
fn defaults_follow_the_config() {
    let p = Prognos::builder()
        .with_model(Arc::new(MockModel::new()))
        .build()
        .unwrap();
    let cfg = p.config();
    assert_eq!(cfg.min_points, 10);
    assert!((cfg.forecast_interval_width - 0.80).abs() < f64::EPSILON);
    assert!((cfg.anomaly_interval_width - 0.99).abs() < f64::EPSILON);
    assert!(cfg.quiet);
    assert_eq!(cfg.seed, None);
    assert!(!cfg.strict_key_kinds);
    assert_eq!(p.model_name(), "prognos-mock");
}

#[test]
fn whole_config_can_be_supplied() {
    let cfg = PrognosConfig {
        min_points: 3,
        seed: Some(11),
        ..PrognosConfig::default()
    };
    let p = Prognos::builder()
        .config(cfg)
        .with_model(Arc::new(MockModel::new()))
        .build()
        .unwrap();
    assert_eq!(p.config().min_points, 3);
    assert_eq!(p.config().seed, Some(11));
}

#[tokio::test]
async fn strict_mode_rejects_mixed_kinds() {
    let mut series = daily_dates(date(2024, 1, 1), 12, |i| i as f64);
    series.insert(dt(2024, 2, 1, 0, 0, 0), 1.0);

    let (lenient, _) = with_dynamic();
    assert!(lenient.forecast(&series, 1).await.is_ok());

    let strict = Prognos::builder()
        .with_model(Arc::new(MockModel::new()))
        .strict_key_kinds(true)
        .build()
        .unwrap();
    let err = strict.forecast(&series, 1).await.unwrap_err();
    assert!(matches!(err, PrognosError::InvalidArg(ref m) if m.contains("mixed key kinds")));
    let err = strict.anomalies(&series).await.unwrap_err();
    assert!(matches!(err, PrognosError::InvalidArg(_)));
}
