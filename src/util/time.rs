//! Wall-clock access and timestamp display.
//!
//! The browser has no usable `SystemTime`, so the `csr` build reads
//! `Date.now()` instead.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::DateTime;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub fn now_secs() -> i64 {
    now_ms().div_euclid(1000)
}

/// Formats epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn format_utc_ms(ms: i64) -> String {
    format_utc_secs(ms.div_euclid(1000))
}

/// Formats epoch seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
///
/// Out-of-range values render as `—`.
pub fn format_utc_secs(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0).map_or_else(|| "—".to_owned(), |dt| dt.format(DISPLAY_FORMAT).to_string())
}
