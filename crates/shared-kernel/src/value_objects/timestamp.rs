// crates/shared-kernel/src/value_objects/timestamp.rs
use std::{
    fmt,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Textual form used everywhere a timestamp leaves the process.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time in the local zone, truncated to whole seconds.
///
/// Serialized as `YYYY-MM-DD HH:MM:SS` so CSV and JSON output round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// `None` when `time` lies outside the range chrono can represent.
    pub fn from_system_time(time: SystemTime) -> Option<Self> {
        let utc = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => {
                DateTime::<Utc>::from_timestamp(i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())
            }
            Err(before) => {
                let before = before.duration();
                let secs = i64::try_from(before.as_secs()).ok()?;
                match before.subsec_nanos() {
                    0 => DateTime::<Utc>::from_timestamp(-secs, 0),
                    nanos => DateTime::<Utc>::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
                }
            }
        }?;

        let offset = Local.offset_from_utc_datetime(&utc.naive_utc()).fix();
        let naive = utc
            .naive_utc()
            .checked_add_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))?;
        Some(Self(naive.with_nanosecond(0).unwrap_or(naive)))
    }

    pub fn from_local(time: DateTime<Local>) -> Self {
        let naive = time.naive_local();
        Self(naive.with_nanosecond(0).unwrap_or(naive))
    }

    pub fn now() -> Self {
        Self::from_local(Local::now())
    }

    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Absolute distance to `other` in whole seconds.
    #[must_use]
    pub fn seconds_from(&self, other: &Self) -> i64 {
        (self.0 - other.0).num_seconds().abs()
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
