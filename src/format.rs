//! Scalar formatting for header values.
//!
//! All functions here are total: every representable value has a rendering.

use chrono::{DateTime, Utc};

/// The wire timestamp layout, e.g. `Sat, 01 Jan 2000 12:34:56 GMT`.
pub const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

#[inline]
#[must_use]
pub fn format_bool(v: bool, as_int: bool) -> &'static str {
    match (v, as_int) {
        (true, false) => "true",
        (false, false) => "false",
        (true, true) => "1",
        (false, true) => "0",
    }
}

#[inline]
#[must_use]
pub fn format_int(v: i128) -> String {
    v.to_string()
}

#[inline]
#[must_use]
pub fn format_uint(v: u128) -> String {
    v.to_string()
}

/// Formats at `f32` precision, so `0.1f32` stays `0.1`.
#[inline]
#[must_use]
pub fn format_f32(v: f32) -> String {
    v.to_string()
}

#[inline]
#[must_use]
pub fn format_f64(v: f64) -> String {
    v.to_string()
}

/// Renders a timestamp in the fixed wire format used by HTTP date headers.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use header_lines::format::format_http_date;
///
/// let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 34, 56).unwrap();
/// assert_eq!(format_http_date(&t), "Sat, 01 Jan 2000 12:34:56 GMT");
/// ```
#[must_use]
pub fn format_http_date(t: &DateTime<Utc>) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Renders a timestamp either as an HTTP date or, with `unix`, as epoch seconds.
#[must_use]
pub fn format_time(t: &DateTime<Utc>, unix: bool) -> String {
    if unix {
        t.timestamp().to_string()
    } else {
        format_http_date(t)
    }
}
