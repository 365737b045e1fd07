//! Date interpretation with JavaScript `Date` semantics.
//!
//! PostBin reports `now` and `expires` as epoch milliseconds, but bins that went
//! through other tools may carry ISO strings instead. Values are read the way
//! `new Date(value)` reads them and rendered the way `toISOString()` renders
//! them. Values that do not parse become an invalid date rather than an error.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde_json::Value;

/// Rendering of an invalid date
pub const INVALID_DATE: &str = "Invalid Date";

/// Largest distance from the epoch a JavaScript date may have, in milliseconds
const MAX_TIME_MS: f64 = 8.64e15;

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A point in time, or the invalid-date sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsDate(Option<DateTime<Utc>>);

impl JsDate {
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Milliseconds since the Unix epoch; the fraction is truncated toward zero.
    pub fn from_millis(ms: f64) -> Self {
        if !ms.is_finite() || ms.abs() > MAX_TIME_MS {
            return Self::invalid();
        }
        Self(DateTime::<Utc>::from_timestamp_millis(ms.trunc() as i64))
    }

    /// Parse a date string.
    ///
    /// Accepts RFC 3339, ISO dates without an offset (read as UTC), date-only
    /// `YYYY-MM-DD` (UTC midnight) and RFC 2822. `24:00` (with zero minutes,
    /// seconds and fraction) means midnight at the start of the next day.
    /// Leap seconds are invalid.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::invalid();
        }

        let parsed = match next_day_midnight(text) {
            Some(midnight) => parse_utc(&midnight).and_then(|dt| dt.checked_add_days(Days::new(1))),
            None => parse_utc(text),
        };

        // chrono stores a leap second as a nanosecond count of 1e9 or more
        Self(parsed.filter(|dt| dt.nanosecond() < 1_000_000_000))
    }

    /// Interpret a JSON value the way `new Date(value)` would.
    ///
    /// `None` stands for a missing field.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => n.as_f64().map_or(Self::invalid(), Self::from_millis),
            Some(Value::String(s)) => Self::parse(s),
            Some(Value::Null) => Self::from_millis(0.0),
            Some(Value::Bool(b)) => Self::from_millis(if *b { 1.0 } else { 0.0 }),
            Some(Value::Array(_)) | Some(Value::Object(_)) | None => Self::invalid(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// `YYYY-MM-DDTHH:mm:ss.sssZ`, with a signed six-digit year outside 0..=9999
    pub fn to_iso_string(&self) -> String {
        let Some(dt) = self.0 else {
            return INVALID_DATE.to_string();
        };

        let year = dt.year();
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else if year < 0 {
            format!("-{:06}", -year)
        } else {
            format!("+{year:06}")
        };

        format!("{year}-{}", dt.format("%m-%dT%H:%M:%S%.3fZ"))
    }
}

fn parse_utc(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = text
        .strip_suffix('Z')
        .or_else(|| text.strip_suffix('z'))
        .unwrap_or(text);
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Rewrite `<date>T24:00[:00[.000]]<zone>` to `<date>T00:00...<zone>`; the
/// caller moves the result one day forward. `None` for any other input.
fn next_day_midnight(text: &str) -> Option<String> {
    let (date, time) = text.split_once('T')?;
    let rest = time.strip_prefix("24")?;

    let clock_len = rest
        .find(|c: char| !matches!(c, ':' | '0' | '.'))
        .unwrap_or(rest.len());
    let (clock, zone) = rest.split_at(clock_len);

    let zone_ok = zone.is_empty() || zone.starts_with(|c: char| matches!(c, 'Z' | 'z' | '+' | '-'));
    if !clock.starts_with(':') || !zone_ok {
        return None;
    }

    Some(format!("{date}T00{clock}{zone}"))
}
