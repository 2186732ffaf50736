use prognos::PrognosError;
use prognos_core::PredictionFrame;
use prognos_mock::MockBehavior;

use crate::helpers::{MOCK, date, daily_dates, with_dynamic};

#[tokio::test]
async fn foreign_fit_errors_are_tagged_with_the_model() {
    let (p, ctl) = with_dynamic();
    ctl.set_fit_behavior(MockBehavior::Fail(PrognosError::invalid_arg("solver exploded")));
    let series = daily_dates(date(2024, 1, 1), 20, |i| i as f64);
    let err = p.forecast(&series, 3).await.unwrap_err();
    assert_eq!(
        err,
        PrognosError::ModelFitting {
            model: MOCK.to_string(),
            msg: "invalid argument: solver exploded".to_string(),
        }
    );
}

#[tokio::test]
async fn validation_errors_pass_through_verbatim() {
    let (p, ctl) = with_dynamic();
    let v = PrognosError::validation("ds column has duplicates");
    ctl.set_fit_behavior(MockBehavior::Fail(v.clone()));
    let series = daily_dates(date(2024, 1, 1), 20, |i| i as f64);
    assert_eq!(p.forecast(&series, 3).await.unwrap_err(), v);
    assert_eq!(p.anomalies(&series).await.unwrap_err(), v);
}

#[tokio::test]
async fn predict_errors_are_tagged() {
    let (p, ctl) = with_dynamic();
    ctl.set_predict_behavior(MockBehavior::Fail(PrognosError::UnknownFrequency));
    let series = daily_dates(date(2024, 1, 1), 20, |i| i as f64);
    let err = p.anomalies(&series).await.unwrap_err();
    assert!(matches!(err, PrognosError::ModelFitting { ref model, .. } if model == MOCK));
}

#[tokio::test]
async fn misaligned_predictions_are_model_failures() {
    let (p, ctl) = with_dynamic();
    ctl.set_predict_behavior(MockBehavior::Return(PredictionFrame::default()));
    let series = daily_dates(date(2024, 1, 1), 20, |i| i as f64);

    let err = p.forecast(&series, 3).await.unwrap_err();
    let PrognosError::ModelFitting { model, msg } = err else {
        panic!("expected ModelFitting, got {err:?}");
    };
    assert_eq!(model, MOCK);
    assert!(msg.contains("expected 3 rows, got 0"), "{msg}");

    let err = p.anomalies(&series).await.unwrap_err();
    assert!(matches!(err, PrognosError::ModelFitting { .. }));
}
