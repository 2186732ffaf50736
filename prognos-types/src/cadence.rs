//! Canonical sampling-frequency tokens.

use core::fmt;
use core::num::NonZeroU64;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PrognosError;

const DAY_SECONDS: u64 = 86_400;
const WEEK_SECONDS: u64 = 7 * DAY_SECONDS;

/// Canonical cadence of a series, as handed to a model's future-timestamp
/// generator.
///
/// String codes follow the familiar offset aliases: `YS`, `QS`, `MS`, `W`,
/// `D` and `<n>S` for a fixed number of seconds.
///
/// ```
/// use prognos_types::Cadence;
///
/// let hourly = Cadence::seconds(3600).unwrap();
/// assert_eq!(hourly.to_string(), "3600S");
/// assert_eq!("QS".parse::<Cadence>().unwrap(), Cadence::QuarterStart);
/// assert!(Cadence::seconds(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Cadence {
    /// First day of every year.
    YearStart,
    /// First day of January, April, July and October.
    QuarterStart,
    /// First day of every month.
    MonthStart,
    /// Every seven days.
    Weekly,
    /// Every day.
    Daily,
    /// A fixed positive number of seconds.
    Seconds(NonZeroU64),
}

impl Cadence {
    /// Build a `Seconds` cadence; returns `None` for zero.
    #[must_use]
    pub const fn seconds(n: u64) -> Option<Self> {
        match NonZeroU64::new(n) {
            Some(n) => Some(Self::Seconds(n)),
            None => None,
        }
    }

    /// Canonical string code of this cadence.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::YearStart => "YS".to_string(),
            Self::QuarterStart => "QS".to_string(),
            Self::MonthStart => "MS".to_string(),
            Self::Weekly => "W".to_string(),
            Self::Daily => "D".to_string(),
            Self::Seconds(n) => format!("{n}S"),
        }
    }

    /// Number of calendar months per step for month-anchored cadences.
    #[must_use]
    pub const fn step_months(&self) -> Option<u32> {
        match self {
            Self::YearStart => Some(12),
            Self::QuarterStart => Some(3),
            Self::MonthStart => Some(1),
            Self::Weekly | Self::Daily | Self::Seconds(_) => None,
        }
    }

    /// Number of calendar days per step for day-anchored cadences.
    #[must_use]
    pub const fn step_days(&self) -> Option<u64> {
        match self {
            Self::Weekly => Some(7),
            Self::Daily => Some(1),
            Self::YearStart | Self::QuarterStart | Self::MonthStart | Self::Seconds(_) => None,
        }
    }

    /// Number of seconds per step for fixed-length cadences.
    #[must_use]
    pub const fn step_seconds(&self) -> Option<u64> {
        match self {
            Self::Weekly => Some(WEEK_SECONDS),
            Self::Daily => Some(DAY_SECONDS),
            Self::Seconds(n) => Some(n.get()),
            Self::YearStart | Self::QuarterStart | Self::MonthStart => None,
        }
    }

    /// Returns true for cadences that only produce midnight timestamps.
    #[must_use]
    pub const fn is_daily_or_coarser(&self) -> bool {
        !matches!(self, Self::Seconds(_))
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for Cadence {
    type Err = PrognosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "YS" => Ok(Self::YearStart),
            "QS" => Ok(Self::QuarterStart),
            "MS" => Ok(Self::MonthStart),
            "W" => Ok(Self::Weekly),
            "D" => Ok(Self::Daily),
            other => other
                .strip_suffix('S')
                .and_then(|n| n.parse::<u64>().ok())
                .and_then(Self::seconds)
                .ok_or_else(|| PrognosError::invalid_arg(format!("unknown cadence code: {s}"))),
        }
    }
}

impl From<Cadence> for String {
    fn from(c: Cadence) -> Self {
        c.code()
    }
}

impl TryFrom<String> for Cadence {
    type Error = PrognosError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
