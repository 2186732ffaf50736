use chrono::{DateTime, Days, Local, Months, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::temporal::TemporalKeyKind;
use crate::{Cadence, PrognosError};

fn out_of_range() -> PrognosError {
    PrognosError::invalid_arg("future timestamps overflow the supported date range")
}

// Wall-clock times skipped by a DST jump resolve one hour later.
fn resolve<Z: TimeZone>(zone: &Z, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            zone.from_local_datetime(&shifted).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}

fn civil_step<Z: TimeZone>(
    zone: &Z,
    last: DateTime<Utc>,
    i: u32,
    cadence: Cadence,
) -> Option<DateTime<Utc>> {
    let wall = last.with_timezone(zone).naive_local();
    let stepped = match (cadence.step_months(), cadence.step_days()) {
        (Some(months), _) => wall.checked_add_months(Months::new(months.checked_mul(i)?))?,
        (None, Some(days)) => wall.checked_add_days(Days::new(days.checked_mul(u64::from(i))?))?,
        (None, None) => return None,
    };
    resolve(zone, stepped)
}

// The i-th step is computed from `last` directly rather than from the previous
// step, so month-end clamping never accumulates.
fn nth_step(
    last: DateTime<Utc>,
    i: usize,
    cadence: Cadence,
    calendar: TemporalKeyKind,
) -> Option<DateTime<Utc>> {
    let i = u32::try_from(i).ok()?;
    if !cadence.is_daily_or_coarser() {
        let seconds = cadence.step_seconds()?.checked_mul(u64::from(i))?;
        let delta = TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?;
        return last.checked_add_signed(delta);
    }
    match calendar {
        TemporalKeyKind::Zoned(tz) => civil_step(&tz, last, i, cadence),
        TemporalKeyKind::Local => civil_step(&Local, last, i, cadence),
        TemporalKeyKind::PlainDate | TemporalKeyKind::Utc => civil_step(&Utc, last, i, cadence),
    }
}

/// Generate `periods` timestamps stepping forward from `last` by `cadence`.
///
/// `last` itself is not included. Calendar cadences are stepped on the wall
/// clock of `calendar`: `YS`, `QS` and `MS` add 12, 3 and 1 months, `W` and
/// `D` add 7 and 1 days, and the time of day is kept across DST changes.
/// Plain dates and UTC keys use the UTC calendar. `<n>S` adds n seconds to
/// the instant regardless of `calendar`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prognos_core::{Cadence, TemporalKeyKind, future_timestamps};
///
/// let last = Utc.with_ymd_and_hms(2023, 10, 1, 0, 0, 0).unwrap();
/// let next = future_timestamps(last, 2, Cadence::QuarterStart, TemporalKeyKind::Utc).unwrap();
/// assert_eq!(next[0], Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(next[1], Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
/// ```
///
/// # Errors
/// Returns `InvalidArg` if a step falls outside chrono's representable range.
pub fn future_timestamps(
    last: DateTime<Utc>,
    periods: usize,
    cadence: Cadence,
    calendar: TemporalKeyKind,
) -> Result<Vec<DateTime<Utc>>, PrognosError> {
    (1..=periods)
        .map(|i| nth_step(last, i, cadence, calendar).ok_or_else(out_of_range))
        .collect()
}

/// Build the timestamps a fitted model should predict.
///
/// With `include_history` the (sorted) history comes first, followed by
/// `periods` future steps after the latest history timestamp, taken on the
/// wall clock of `calendar` (see [`future_timestamps`]).
///
/// # Errors
/// - Returns `InvalidArg` if `history` is empty.
/// - Returns `InvalidArg` if a step overflows the representable range.
pub fn make_future(
    history: &[DateTime<Utc>],
    periods: usize,
    include_history: bool,
    cadence: Cadence,
    calendar: TemporalKeyKind,
) -> Result<Vec<DateTime<Utc>>, PrognosError> {
    let last = history
        .iter()
        .max()
        .copied()
        .ok_or_else(|| PrognosError::invalid_arg("model has no history to extend"))?;
    let future = future_timestamps(last, periods, cadence, calendar)?;
    if !include_history {
        return Ok(future);
    }
    let mut out: Vec<DateTime<Utc>> = Vec::with_capacity(history.len() + future.len());
    out.extend_from_slice(history);
    out.sort_unstable();
    out.extend(future);
    Ok(out)
}
