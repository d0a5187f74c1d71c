use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// ISO-8601 layout used for persisted timestamps (microsecond precision).
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Wall-clock timestamp with microsecond precision.
///
/// Timestamps are naive local time. They are persisted and displayed as
/// `YYYY-MM-DDTHH:MM:SS.ffffff`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time, truncated to microseconds.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let micros = now.nanosecond() / 1_000 * 1_000;
        Self(now.with_nanosecond(micros).unwrap_or(now))
    }

    /// Wrap an existing date-time.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// The underlying date-time.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// ISO-8601 form with six fractional digits.
    pub fn to_iso(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Parse the ISO-8601 form produced by [`Self::to_iso`].
    ///
    /// Any number of fractional digits is accepted, including none.
    pub fn parse_iso(s: &str) -> Result<Self, TypeError> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(Self)
            .map_err(|e| TypeError::InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_iso()
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_iso())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}
