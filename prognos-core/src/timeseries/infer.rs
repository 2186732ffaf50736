use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Timelike, Utc};

use crate::{Cadence, PrognosError};

/// Infer the canonical cadence of a set of timestamps.
///
/// Calendar checks read each timestamp in its own zone, so pass keys in the
/// offset the caller sees them in. Checks run coarsest first and the first
/// match wins:
///
/// 1. If every timestamp is at midnight, return the coarsest of
///    `YearStart` (all January 1st), `QuarterStart` (all first of Jan/Apr/Jul/Oct),
///    `MonthStart` (all first of month), `Weekly` (all on one weekday), else `Daily`.
/// 2. Otherwise sort, take the gaps between neighbours and let `g` be the
///    smallest. Return `Seconds(g)` when `g` is a positive whole number of
///    seconds that divides every gap.
///
/// Only the smallest gap is tried as a divisor: gaps of 200s and 300s do not
/// resolve to 100s.
///
/// Quarter starts are also month starts; the coarser code wins:
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use prognos_core::{Cadence, infer_cadence};
///
/// let ts = [1, 4, 7].map(|m| Utc.with_ymd_and_hms(2020, m, 1, 0, 0, 0).unwrap());
/// assert_eq!(infer_cadence(&ts).unwrap(), Cadence::QuarterStart);
/// ```
///
/// Sub-daily timestamps with irregular gaps that share the smallest gap:
///
/// ```
/// use chrono::{DateTime, Utc};
/// use prognos_core::{Cadence, infer_cadence};
///
/// let ts: Vec<DateTime<Utc>> = [0, 3600, 10_800, 14_400, 28_800]
///     .into_iter()
///     .map(|s| DateTime::from_timestamp(1_700_000_000 + s, 0).unwrap())
///     .collect();
/// assert_eq!(infer_cadence(&ts).unwrap(), Cadence::seconds(3600).unwrap());
/// ```
///
/// # Errors
/// - `InvalidArg` if `timestamps` is empty, or if the sub-daily path is
///   reached with a single timestamp.
/// - `UnknownFrequency` if no cadence fits (duplicates, fractional-second
///   gaps, or a gap that is not a multiple of the smallest one).
pub fn infer_cadence<Tz: TimeZone>(timestamps: &[DateTime<Tz>]) -> Result<Cadence, PrognosError> {
    if timestamps.is_empty() {
        return Err(PrognosError::invalid_arg(
            "cannot infer the cadence of an empty timestamp set",
        ));
    }
    let inferred = match calendar_cadence(timestamps) {
        Some(cadence) => Ok(cadence),
        None => fixed_step_cadence(timestamps),
    };
    #[cfg(feature = "tracing")]
    match &inferred {
        Ok(cadence) => tracing::debug!(
            target: "prognos_core::infer",
            points = timestamps.len(),
            %cadence,
            "inferred cadence"
        ),
        Err(e) => tracing::debug!(
            target: "prognos_core::infer",
            points = timestamps.len(),
            error = %e,
            "no cadence fits"
        ),
    }
    inferred
}

fn is_midnight<Tz: TimeZone>(ts: &DateTime<Tz>) -> bool {
    ts.num_seconds_from_midnight() == 0 && ts.nanosecond() == 0
}

fn calendar_cadence<Tz: TimeZone>(timestamps: &[DateTime<Tz>]) -> Option<Cadence> {
    if !timestamps.iter().all(is_midnight) {
        return None;
    }
    let weekday = timestamps.first()?.weekday();
    let week = timestamps.iter().all(|t| t.weekday() == weekday);
    let month = timestamps.iter().all(|t| t.day() == 1);
    let quarter = month && timestamps.iter().all(|t| t.month() % 3 == 1);
    let year = quarter && timestamps.iter().all(|t| t.month() == 1);

    let cadence = if year {
        Cadence::YearStart
    } else if quarter {
        Cadence::QuarterStart
    } else if month {
        Cadence::MonthStart
    } else if week {
        Cadence::Weekly
    } else {
        Cadence::Daily
    };
    Some(cadence)
}

fn fixed_step_cadence<Tz: TimeZone>(timestamps: &[DateTime<Tz>]) -> Result<Cadence, PrognosError> {
    if timestamps.len() < 2 {
        return Err(PrognosError::invalid_arg(
            "at least two timestamps are required to infer a sub-daily cadence",
        ));
    }
    let mut instants: Vec<DateTime<Utc>> =
        timestamps.iter().map(|t| t.with_timezone(&Utc)).collect();
    instants.sort_unstable();

    let deltas: Vec<TimeDelta> = instants.windows(2).map(|w| w[1] - w[0]).collect();
    let Some(&min) = deltas.iter().min() else {
        return Err(PrognosError::UnknownFrequency);
    };

    // A zero or fractional smallest gap has no whole-second step to offer.
    if min <= TimeDelta::zero() || min.subsec_nanos() != 0 {
        return Err(PrognosError::UnknownFrequency);
    }
    let step = min.num_seconds();
    let divides_all = deltas
        .iter()
        .all(|d| d.subsec_nanos() == 0 && d.num_seconds() % step == 0);
    if !divides_all {
        return Err(PrognosError::UnknownFrequency);
    }

    u64::try_from(step)
        .ok()
        .and_then(Cadence::seconds)
        .ok_or(PrognosError::UnknownFrequency)
}
