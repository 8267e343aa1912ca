use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use derive_more::Display;
use serde::{Serialize, Serializer};

/// Naive layouts accepted for schema defaults, interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

///
/// Timestamp
/// (UTC, sub-second precision kept)
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{}", _0.to_rfc3339())]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub const fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Build from calendar parts; `None` for an impossible date or time.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(h, m, s)?;
        Some(Self(Utc.from_utc_datetime(&naive)))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            DateTime::parse_from_rfc3339(s).map_err(|e| format!("timestamp parse error: {e}"))?;

        Ok(Self(dt.with_timezone(&Utc)))
    }

    ///
    /// Parse a schema default.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f]` (with or without the `T`
    /// separator) and a bare `YYYY-MM-DD`, which means midnight. Inputs
    /// without an offset are taken as UTC.
    ///
    pub fn parse_flexible(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Ok(ts) = Self::parse_rfc3339(s) {
            return Ok(ts);
        }

        for layout in NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("timestamp parse error: {e}"))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| "timestamp parse error: invalid midnight".to_string())?;

        Ok(Self(Utc.from_utc_datetime(&midnight)))
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.to_rfc3339())
    }
}
