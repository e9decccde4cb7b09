use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// TimestampError
///

#[derive(Debug, ThisError)]
pub enum TimestampError {
    #[error("invalid timestamp string: {0}")]
    InvalidString(String),

    #[error("timestamp predates the unix epoch")]
    BeforeEpoch,
}

///
/// Timestamp
/// (in seconds since the unix epoch)
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    /// Seconds since the unix epoch.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        self.0
    }

    /// RFC 3339 rendering, when the value is representable by the
    /// underlying calendar type.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let secs = i64::try_from(self.0).ok()?;

        OffsetDateTime::from_unix_timestamp(secs)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // bare integers are taken as seconds
        if let Ok(secs) = s.parse::<u64>() {
            return Ok(Self(secs));
        }

        let parsed = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|_| TimestampError::InvalidString(s.to_string()))?;

        u64::try_from(parsed.unix_timestamp())
            .map(Self)
            .map_err(|_| TimestampError::BeforeEpoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_bare_seconds() {
        let a: Timestamp = "1970-01-01T00:01:40Z".parse().unwrap();
        let b: Timestamp = "100".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seconds(), 100);
    }

    #[test]
    fn rejects_pre_epoch_instants() {
        let result = "1969-12-31T23:59:59Z".parse::<Timestamp>();
        assert!(matches!(result, Err(TimestampError::BeforeEpoch)));
    }

    #[test]
    fn renders_rfc3339() {
        let ts = Timestamp::from_seconds(0);
        assert_eq!(ts.to_rfc3339().as_deref(), Some("1970-01-01T00:00:00Z"));
    }
}
