//! Caller-facing temporal keys and the canonical round trip.
//!
//! Callers key their series with whatever chrono type they already hold. The
//! model only understands absolute UTC instants, so every call classifies the
//! first key once, converts all keys to canonical instants, and converts the
//! model's output back into the same kind on the way out.
//!
//! Round trip: `from_canonical(to_canonical(k), classify(k)) == k` for every
//! key `k`, zone identity included.

use core::cmp::Ordering;
use core::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// A temporal key as supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub enum TemporalKey {
    /// Calendar date without time of day or zone.
    Date(NaiveDate),
    /// Date-time carrying an IANA zone identity.
    Zoned(DateTime<Tz>),
    /// Date-time explicitly expressed in UTC.
    Utc(DateTime<Utc>),
    /// Date-time on the process-local clock.
    Local(DateTime<Local>),
}

/// Representation class of a caller's keys, captured once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalKeyKind {
    /// Keys are plain calendar dates.
    PlainDate,
    /// Keys carry this zone identity.
    Zoned(Tz),
    /// Keys are UTC date-times.
    Utc,
    /// Keys are local-clock date-times.
    Local,
}

impl TemporalKeyKind {
    const fn rank(&self) -> u8 {
        match self {
            Self::PlainDate => 0,
            Self::Zoned(_) => 1,
            Self::Utc => 2,
            Self::Local => 3,
        }
    }
}

impl fmt::Display for TemporalKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainDate => f.write_str("date"),
            Self::Zoned(tz) => write!(f, "zoned({})", tz.name()),
            Self::Utc => f.write_str("utc"),
            Self::Local => f.write_str("local"),
        }
    }
}

impl TemporalKey {
    /// Kind of this key.
    ///
    /// A zoned key keeps its zone even when that zone is UTC, so that the
    /// zone identity survives the round trip.
    #[must_use]
    pub fn kind(&self) -> TemporalKeyKind {
        match self {
            Self::Date(_) => TemporalKeyKind::PlainDate,
            Self::Zoned(dt) => TemporalKeyKind::Zoned(dt.timezone()),
            Self::Utc(_) => TemporalKeyKind::Utc,
            Self::Local(_) => TemporalKeyKind::Local,
        }
    }

    /// Absolute instant of this key. Plain dates map to midnight UTC.
    #[must_use]
    pub fn to_canonical(&self) -> DateTime<Utc> {
        match self {
            Self::Date(d) => d.and_time(NaiveTime::MIN).and_utc(),
            Self::Zoned(dt) => dt.with_timezone(&Utc),
            Self::Utc(dt) => *dt,
            Self::Local(dt) => dt.with_timezone(&Utc),
        }
    }

    /// The key's instant observed in its own civil offset.
    ///
    /// Calendar fields (hour, weekday, day of month) of the returned value are
    /// the ones the caller sees, which is what cadence inference reads.
    #[must_use]
    pub fn civil(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Date(_) => self.to_canonical().fixed_offset(),
            Self::Zoned(dt) => dt.fixed_offset(),
            Self::Utc(dt) => dt.fixed_offset(),
            Self::Local(dt) => dt.fixed_offset(),
        }
    }

    /// Rebuild a key of `kind` from a canonical instant.
    #[must_use]
    pub fn from_canonical(instant: DateTime<Utc>, kind: TemporalKeyKind) -> Self {
        match kind {
            TemporalKeyKind::PlainDate => Self::Date(instant.date_naive()),
            TemporalKeyKind::Zoned(tz) => Self::Zoned(instant.with_timezone(&tz)),
            TemporalKeyKind::Utc => Self::Utc(instant),
            TemporalKeyKind::Local => Self::Local(instant.with_timezone(&Local)),
        }
    }

    /// Plain date, if this key is one.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    fn zone_name(&self) -> &'static str {
        match self {
            Self::Zoned(dt) => dt.timezone().name(),
            _ => "",
        }
    }
}

/// Classify a series by its first key.
#[must_use]
pub fn classify(first_key: &TemporalKey) -> TemporalKeyKind {
    first_key.kind()
}

/// Convert a key to its canonical instant.
#[must_use]
pub fn to_canonical(key: &TemporalKey) -> DateTime<Utc> {
    key.to_canonical()
}

/// Convert a canonical instant back into a key of `kind`.
#[must_use]
pub fn from_canonical(instant: DateTime<Utc>, kind: TemporalKeyKind) -> TemporalKey {
    TemporalKey::from_canonical(instant, kind)
}

// Total order: instant first, then kind, then zone name. Equality agrees with it,
// so two zoned keys at the same instant in different zones are distinct.
impl Ord for TemporalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_canonical()
            .cmp(&other.to_canonical())
            .then_with(|| self.kind().rank().cmp(&other.kind().rank()))
            .then_with(|| self.zone_name().cmp(other.zone_name()))
    }
}

impl PartialOrd for TemporalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TemporalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TemporalKey {}

impl fmt::Display for TemporalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{d}"),
            Self::Zoned(dt) => write!(f, "{} {}", dt.format("%Y-%m-%d %H:%M:%S%:z"), dt.timezone().name()),
            Self::Utc(dt) => write!(f, "{dt}"),
            Self::Local(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<NaiveDate> for TemporalKey {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<DateTime<Tz>> for TemporalKey {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for TemporalKey {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }
}

impl From<DateTime<Local>> for TemporalKey {
    fn from(dt: DateTime<Local>) -> Self {
        Self::Local(dt)
    }
}
