//! Timestamp encoding for the `time` field
//!
//! Records carry RFC 3339 with up to nanosecond precision. Trailing zeros of
//! the fraction are dropped, and a whole second has no fraction at all:
//! `2025-01-08T10:30:45.12Z`, `2025-01-08T10:30:45Z`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format `datetime` as RFC 3339 with a trimmed nanosecond fraction
///
/// # Examples
///
/// ```
/// use logger_factory::core::rfc3339_nano;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
///     + chrono::Duration::milliseconds(120);
/// assert_eq!(rfc3339_nano(&ts), "2025-01-08T10:30:45.12Z");
/// ```
#[must_use]
pub fn rfc3339_nano(datetime: &DateTime<Utc>) -> String {
    let full = datetime.to_rfc3339_opts(SecondsFormat::Nanos, true);
    match full.rfind('.') {
        Some(dot) => {
            // Always "...ss.fffffffffZ" with a UTC designator
            let fraction = full[dot + 1..full.len() - 1].trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}Z", &full[..dot])
            } else {
                format!("{}.{}Z", &full[..dot], fraction)
            }
        }
        None => full,
    }
}
