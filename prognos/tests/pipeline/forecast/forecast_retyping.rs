use chrono::{Local, TimeDelta, TimeZone, Timelike};
use prognos::{PrognosError, Series, TemporalKey, TemporalKeyKind};

use crate::helpers::{date, dt, utc_every, with_mock, zoned_midnights};

#[tokio::test]
async fn zoned_daily_keys_come_back_in_the_same_zone() {
    let ny = chrono_tz::America::New_York;
    let series = zoned_midnights(ny, date(2024, 1, 1), 14, |i| i as f64);
    let out = with_mock().forecast(&series, 3).await.expect("forecast ok");

    let keys: Vec<TemporalKey> = out.keys().copied().collect();
    assert_eq!(keys.len(), 3);
    for (k, day) in keys.iter().zip(15..) {
        let TemporalKey::Zoned(t) = k else {
            panic!("expected zoned key, got {k:?}");
        };
        assert_eq!(t.timezone(), ny);
        assert_eq!(*t, ny.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap());
    }
}

#[tokio::test]
async fn zoned_daily_keys_stay_at_midnight_across_spring_forward() {
    let ny = chrono_tz::America::New_York;
    let series = zoned_midnights(ny, date(2024, 2, 25), 14, |i| i as f64);
    let out = with_mock().forecast(&series, 3).await.expect("forecast ok");

    let expected: Vec<TemporalKey> = (10..13)
        .map(|d| TemporalKey::Zoned(ny.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()))
        .collect();
    assert_eq!(out.keys().copied().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn zoned_month_starts_stay_on_the_first_across_fall_back() {
    let ny = chrono_tz::America::New_York;
    let series: Series = (0..12)
        .map(|i| {
            let (y, m) = if i == 0 { (2023, 12) } else { (2024, i) };
            (ny.with_ymd_and_hms(y, m, 1, 0, 0, 0).unwrap(), f64::from(i))
        })
        .collect();
    let out = with_mock().forecast(&series, 2).await.expect("forecast ok");

    let expected = [
        TemporalKey::Zoned(ny.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()),
        TemporalKey::Zoned(ny.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
    ];
    assert_eq!(out.keys().copied().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn sub_daily_steps_cannot_be_retyped_into_dates() {
    let mut series = Series::new();
    series.insert(date(2024, 1, 1), 0.0);
    for h in 1..10 {
        series.insert(dt(2024, 1, 1, h, 0, 0), f64::from(h));
    }
    let err = with_mock().forecast(&series, 2).await.unwrap_err();
    assert!(matches!(err, PrognosError::InvalidArg(_)), "{err:?}");
    assert!(err.to_string().contains("3600S"), "{err}");
}

#[tokio::test]
async fn half_hour_zone_is_preserved() {
    let kolkata = chrono_tz::Asia::Kolkata;
    let start = kolkata.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let series: prognos::Series = (0..12)
        .map(|i| (start + TimeDelta::minutes(15 * i), f64::from(i32::try_from(i).unwrap())))
        .collect();
    let out = with_mock().forecast(&series, 2).await.expect("forecast ok");
    let keys: Vec<TemporalKey> = out.keys().copied().collect();
    assert_eq!(
        keys,
        [
            TemporalKey::Zoned(start + TimeDelta::minutes(15 * 12)),
            TemporalKey::Zoned(start + TimeDelta::minutes(15 * 13)),
        ]
    );
    assert!(keys.iter().all(|k| k.kind() == TemporalKeyKind::Zoned(kolkata)));
}

#[tokio::test]
async fn utc_named_zone_stays_zoned() {
    let series: prognos::Series = (0..10)
        .map(|i| {
            let t = chrono_tz::UTC.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap() + TimeDelta::hours(i);
            (t, 1.0)
        })
        .collect();
    let out = with_mock().forecast(&series, 1).await.expect("forecast ok");
    let key = out.keys().next().copied().unwrap();
    assert_eq!(key.kind(), TemporalKeyKind::Zoned(chrono_tz::UTC));
}

#[tokio::test]
async fn utc_keys_stay_utc() {
    let series = utc_every(dt(2024, 1, 1, 12, 0, 0), TimeDelta::minutes(5), 20, f64::from);
    let out = with_mock().forecast(&series, 2).await.expect("forecast ok");
    assert!(out.keys().all(|k| k.kind() == TemporalKeyKind::Utc));
    assert_eq!(
        out.keys().next().copied(),
        Some(TemporalKey::Utc(dt(2024, 1, 1, 13, 40, 0)))
    );
}

#[tokio::test]
async fn local_keys_stay_local() {
    let base = dt(2024, 1, 1, 12, 0, 7);
    let series: prognos::Series = (0..10)
        .map(|i| ((base + TimeDelta::hours(i)).with_timezone(&Local), 1.0))
        .collect();
    let out = with_mock().forecast(&series, 2).await.expect("forecast ok");
    let keys: Vec<TemporalKey> = out.keys().copied().collect();
    let TemporalKey::Local(first) = keys[0] else {
        panic!("expected a local key, got {:?}", keys[0]);
    };
    assert_eq!(first, (base + TimeDelta::hours(10)).with_timezone(&Local));
    assert_eq!(first.second(), 7);
}

#[tokio::test]
async fn plain_dates_stay_dates() {
    let series = crate::helpers::daily_dates(date(2020, 2, 20), 10, |i| i as f64);
    let out = with_mock().forecast(&series, 2).await.expect("forecast ok");
    let dates: Vec<_> = out.keys().filter_map(TemporalKey::as_date).collect();
    // leap year: 2020-02-29 exists
    assert_eq!(dates, [date(2020, 3, 1), date(2020, 3, 2)]);
}
