//! Timestamp values.
//!
//! Serde has no notion of a time value: chrono serializes a `DateTime` as a
//! plain RFC 3339 string. To be rendered as a header date (or as epoch seconds
//! with the `unix` option) a field has to say it holds a time, either with the
//! [`Timestamp`] type or with the [`timestamp`](crate::timestamp) helpers:
//!
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use header_lines::{to_lines, Timestamp};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Cache {
//!     #[serde(rename = "Last-Modified")]
//!     last_modified: Timestamp,
//!     #[serde(rename = "X-Expires,unix", with = "header_lines::timestamp")]
//!     expires: DateTime<Utc>,
//! }
//!
//! let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 34, 56).unwrap();
//! let lines = to_lines(&Cache { last_modified: t.into(), expires: t }).unwrap();
//! assert_eq!(lines, vec![
//!     "Last-Modified: Sat, 01 Jan 2000 12:34:56 GMT",
//!     "X-Expires: 946730096",
//! ]);
//! ```
//!
//! Other serializers see the same RFC 3339 string chrono would produce.

use crate::ser::TextSerializer;
use crate::Error;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::cell::Cell;
use std::fmt;

/// Newtype name this crate's serializer recognizes as a time value.
pub(crate) const TIMESTAMP_TOKEN: &str = "$header_lines::Timestamp";

#[derive(Clone, Copy)]
enum CaptureSlot {
    Idle,
    Armed,
    Taken(DateTime<Utc>),
}

thread_local! {
    static CAPTURE: Cell<CaptureSlot> = const { Cell::new(CaptureSlot::Idle) };
}

/// A UTC instant rendered as a header date.
///
/// The zero timestamp, used by `omitempty`, is the Unix epoch (the
/// [`Default`] value). A field holding exactly `1970-01-01T00:00:00Z` is
/// therefore dropped by `omitempty`; use `Option<Timestamp>` when the epoch is
/// a meaningful value, since `Some` is never omitted.
///
/// ```rust
/// use header_lines::{to_lines, Timestamp};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Cache {
///     #[serde(rename = "Expires,omitempty")]
///     expires: Timestamp,
///     #[serde(rename = "Last-Modified,omitempty")]
///     last_modified: Option<Timestamp>,
/// }
///
/// let epoch = Timestamp::default();
/// let lines = to_lines(&Cache { expires: epoch, last_modified: Some(epoch) }).unwrap();
/// assert_eq!(lines, vec!["Last-Modified: Thu, 01 Jan 1970 00:00:00 GMT"]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Returns `true` for the Unix epoch.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.timestamp() == 0 && self.0.timestamp_subsec_nanos() == 0
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(t: DateTime<Utc>) -> Self {
        Timestamp(t)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(t: Timestamp) -> Self {
        t.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_http_date(&self.0))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(TIMESTAMP_TOKEN, &Instant(&self.0))
    }
}

/// Token payload: hands the instant over as-is while a capture is armed, and
/// serializes as chrono's RFC 3339 text otherwise.
struct Instant<'a>(&'a DateTime<Utc>);

impl Serialize for Instant<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let armed = CAPTURE.with(|slot| match slot.get() {
            CaptureSlot::Armed => {
                slot.set(CaptureSlot::Taken(*self.0));
                true
            }
            _ => false,
        });
        if armed {
            serializer.serialize_unit()
        } else {
            self.0.serialize(serializer)
        }
    }
}

/// Recovers the instant carried by a timestamp token payload.
pub(crate) fn capture<T>(value: &T) -> crate::Result<DateTime<Utc>>
where
    T: Serialize + ?Sized,
{
    let previous = CAPTURE.with(|slot| slot.replace(CaptureSlot::Armed));
    let probe = value.serialize(TextSerializer);
    let slot = CAPTURE.with(|slot| slot.replace(previous));

    match slot {
        CaptureSlot::Taken(t) => Ok(t),
        _ => {
            // a payload written by hand: accept RFC 3339 text
            let text = probe?;
            DateTime::parse_from_rfc3339(&text)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| Error::invalid_timestamp(format!("`{text}`: {e}")))
        }
    }
}

/// `#[serde(with = "header_lines::timestamp")]` for `DateTime<Utc>` fields.
pub mod timestamp {
    use super::Timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(t: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        Timestamp(*t).serialize(serializer)
    }

    /// `#[serde(with = "header_lines::timestamp::option")]` for `Option<DateTime<Utc>>` fields.
    pub mod option {
        use super::Timestamp;
        use chrono::{DateTime, Utc};
        use serde::Serializer;

        pub fn serialize<S: Serializer>(
            t: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match t {
                Some(t) => serializer.serialize_some(&Timestamp(*t)),
                None => serializer.serialize_none(),
            }
        }
    }
}
