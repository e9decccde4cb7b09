use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::OnceLock};
use thiserror::Error as ThisError;
use time::{Date as TimeDate, Month, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

fn format() -> &'static [FormatItem<'static>] {
    FORMAT.get_or_init(|| {
        time::format_description::parse("[year]-[month]-[day]")
            .expect("static date format description is valid")
    })
}

///
/// DateError
///

#[derive(Debug, ThisError)]
pub enum DateError {
    #[error("invalid date string: {0}")]
    InvalidString(String),
}

///
/// Date
///
/// Calendar date stored as whole days since 1970-01-01.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    const EPOCH_JULIAN: i32 = Self::epoch_date().to_julian_day();

    const fn epoch_date() -> TimeDate {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    /// Construct from a calendar date, clamping out-of-range components
    /// to the epoch.
    #[must_use]
    pub fn new(y: i32, m: u8, d: u8) -> Self {
        let m = m.clamp(1, 12);

        let Ok(month) = Month::try_from(m) else {
            return Self::EPOCH;
        };

        TimeDate::from_calendar_date(y, month, d).map_or(Self::EPOCH, Self::from_time_date)
    }

    /// Construct from whole days since the epoch.
    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Whole days since the epoch.
    #[must_use]
    pub const fn days(self) -> i32 {
        self.0
    }

    fn from_time_date(date: TimeDate) -> Self {
        Self(date.to_julian_day() - Self::EPOCH_JULIAN)
    }

    fn to_time_date(self) -> Option<TimeDate> {
        TimeDate::from_julian_day(Self::EPOCH_JULIAN.checked_add(self.0)?).ok()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_time_date().and_then(|d| d.format(&format()).ok()) {
            Some(s) => f.write_str(&s),
            None => write!(f, "days:{}", self.0),
        }
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeDate::parse(s, &format())
            .map(Self::from_time_date)
            .map_err(|_| DateError::InvalidString(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_iso_strings() {
        let date: Date = "2024-01-02".parse().unwrap();
        assert_eq!(date.to_string(), "2024-01-02");
        assert_eq!(date, Date::new(2024, 1, 2));
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(Date::new(1970, 1, 1), Date::EPOCH);
        assert_eq!(Date::EPOCH.days(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!("not-a-date".parse::<Date>().is_err());
    }
}
