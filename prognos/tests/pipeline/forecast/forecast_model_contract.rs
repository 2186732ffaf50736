use std::sync::Arc;

use chrono::TimeDelta;
use prognos::{Cadence, ModelOptions, Prognos, TemporalKeyKind};
use prognos_mock::{DynamicMockModel, FutureCall};

use crate::helpers::{MOCK, date, daily_dates, dt, utc_every, with_dynamic, zoned_midnights};

#[tokio::test]
async fn forecast_fits_once_and_asks_for_future_only() {
    let (p, ctl) = with_dynamic();
    let series = daily_dates(date(2024, 1, 1), 15, |i| i as f64);
    p.forecast(&series, 4).await.expect("forecast ok");

    let fits = ctl.fit_calls();
    assert_eq!(fits.len(), 1);
    assert_eq!(fits[0].frame.len(), 15);
    assert_eq!(fits[0].frame.ds()[0], dt(2024, 1, 1, 0, 0, 0));
    assert_eq!(
        fits[0].options,
        ModelOptions {
            interval_width: 0.80,
            quiet: true,
            seed: None,
        }
    );
    assert_eq!(
        ctl.future_calls(),
        [FutureCall {
            periods: 4,
            include_history: false,
            cadence: Cadence::Daily,
            calendar: TemporalKeyKind::PlainDate,
        }]
    );
    let predicted = ctl.predict_calls();
    assert_eq!(predicted.len(), 1);
    assert_eq!(predicted[0].len(), 4);
    assert_eq!(predicted[0][0], dt(2024, 1, 16, 0, 0, 0));
}

#[tokio::test]
async fn builder_options_reach_the_model() {
    let (model, ctl) = DynamicMockModel::new_with_controller(MOCK);
    let p = Prognos::builder()
        .with_model(Arc::clone(&model))
        .forecast_interval_width(0.5)
        .anomaly_interval_width(0.9)
        .quiet(false)
        .seed(42)
        .build()
        .unwrap();
    let series = daily_dates(date(2024, 1, 1), 12, |i| i as f64);
    p.forecast(&series, 1).await.unwrap();
    p.anomalies(&series).await.unwrap();

    let opts: Vec<ModelOptions> = ctl.fit_calls().into_iter().map(|c| c.options).collect();
    assert_eq!(
        opts,
        [
            ModelOptions {
                interval_width: 0.5,
                quiet: false,
                seed: Some(42),
            },
            ModelOptions {
                interval_width: 0.9,
                quiet: false,
                seed: Some(42),
            },
        ]
    );
}

#[tokio::test]
async fn inferred_cadence_is_forwarded() {
    let cases = [
        (
            utc_every(dt(2024, 1, 1, 0, 0, 15), TimeDelta::seconds(90), 10, f64::from),
            Cadence::seconds(90).unwrap(),
        ),
        (
            (0..10)
                .map(|y| (date(2000 + y, 1, 1), f64::from(y)))
                .collect(),
            Cadence::YearStart,
        ),
        (
            (0..10)
                .map(|q| (date(2000 + q / 4, 1 + 3 * (q % 4) as u32, 1), f64::from(q)))
                .collect(),
            Cadence::QuarterStart,
        ),
        (
            // 2024-01-01 is a Monday
            (0..10)
                .map(|w| (date(2024, 1, 1) + chrono::Days::new(7 * w), 1.0))
                .collect(),
            Cadence::Weekly,
        ),
    ];
    for (series, expected) in cases {
        let (p, ctl) = with_dynamic();
        p.forecast(&series, 1).await.expect("forecast ok");
        assert_eq!(ctl.future_calls()[0].cadence, expected);
        assert_eq!(ctl.future_calls()[0].calendar, series.kind().unwrap());
    }
}

#[tokio::test]
async fn key_zone_is_the_stepping_calendar() {
    let berlin = chrono_tz::Europe::Berlin;
    let (p, ctl) = with_dynamic();
    let series = zoned_midnights(berlin, date(2024, 3, 20), 12, |_| 1.0);
    p.forecast(&series, 2).await.expect("forecast ok");
    assert_eq!(ctl.future_calls()[0].calendar, TemporalKeyKind::Zoned(berlin));
    // Berlin moves to summer time on 2024-03-31: the next midnight is 23h later.
    let predicted = ctl.predict_calls();
    assert_eq!(predicted[0][0], dt(2024, 3, 31, 22, 0, 0));
    assert_eq!(predicted[0][1], dt(2024, 4, 1, 22, 0, 0));
}
