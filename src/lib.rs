//! # header_lines
//!
//! A Serde serializer that flattens Rust structs into `Key: Value` header lines.
//!
//! ## What does it do?
//!
//! Header-based protocols (HTTP, MIME, SIP, STOMP, ...) carry their metadata as
//! flat, repeatable `Name: value` lines. This crate walks any value that
//! implements `Serialize` and produces those lines, one per field, one per
//! element of a sequence, and one per entry of a map.
//!
//! ## Key Features
//!
//! - **Declaration order**: Lines come out in field order, element order and
//!   map visiting order
//! - **Field tags**: `"Name,omitempty,int,unix"` tags rename fields, drop empty
//!   ones, and pick boolean and timestamp formats
//! - **Flattening**: `#[serde(flatten)]` and nested structs contribute their
//!   lines in place, without key prefixes
//! - **Custom encoding**: Types implementing [`EncodeHeader`] write their own lines
//! - **No escaping**: Values are written as-is
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use header_lines::to_lines;
//!
//! #[derive(Serialize)]
//! struct Request {
//!     #[serde(rename = "Host")]
//!     host: String,
//!     #[serde(rename = "Accept")]
//!     accept: Vec<String>,
//!     #[serde(rename = "X-Retry,omitempty")]
//!     retry: u32,
//!     #[serde(rename = "X-Cached,int")]
//!     cached: bool,
//! }
//!
//! let request = Request {
//!     host: "example.com".to_string(),
//!     accept: vec!["text/html".to_string(), "*/*".to_string()],
//!     retry: 0,
//!     cached: true,
//! };
//!
//! let lines = to_lines(&request).unwrap();
//! assert_eq!(lines, vec![
//!     "Host: example.com",
//!     "Accept: text/html",
//!     "Accept: */*",
//!     "X-Cached: 1",
//! ]);
//! ```
//!
//! ## Value Rules
//!
//! | Rust value                   | Lines                                           |
//! |------------------------------|-------------------------------------------------|
//! | `bool`                       | `true`/`false`, or `1`/`0` with `int`           |
//! | integers, floats             | decimal text                                    |
//! | `String`, `&str`, `char`     | the text itself                                 |
//! | `None`, `()`                 | an empty value                                  |
//! | `Some(v)`                    | the lines of `v`; never dropped by `omitempty`  |
//! | [`Timestamp`]                | `Sat, 01 Jan 2000 12:34:56 GMT`, or epoch seconds with `unix` |
//! | `Vec<T>`, arrays, tuples     | one line per element under the field's key     |
//! | maps, [`HeaderMap`]          | one line per value under the map's own keys    |
//! | nested structs               | their own lines, spliced in place              |
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - The input value is only read
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Encoding a request struct
//! - **`custom_hook.rs`** - Writing lines with [`EncodeHeader`]
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod format;
pub mod hook;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod tag;
pub mod time;

pub use error::{Error, Result};
pub use hook::{hook, EncodeHeader};
pub use map::HeaderMap;
pub use options::{HeaderOptions, LineEnding};
pub use ser::Serializer;
pub use time::{timestamp, Timestamp};

use serde::Serialize;
use std::io;

/// Encode any `T: Serialize` record as header lines.
///
/// # Examples
///
/// ```rust
/// use header_lines::to_lines;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let lines = to_lines(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(lines, vec!["x: 1", "y: 2"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `value` is not a record, a map or `None`,
/// and propagates any error returned by an [`EncodeHeader`] hook.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines<T>(value: &T) -> Result<Vec<String>>
where
    T: ?Sized + Serialize,
{
    to_lines_with_options(value, HeaderOptions::default())
}

/// Encode any `T: Serialize` record as header lines with custom options.
///
/// # Examples
///
/// ```rust
/// use header_lines::{to_lines_with_options, HeaderOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Flags { gzip: bool }
///
/// let options = HeaderOptions::new().with_tag("gzip", "X-Gzip,int");
/// let lines = to_lines_with_options(&Flags { gzip: false }, options).unwrap();
/// assert_eq!(lines, vec!["X-Gzip: 0"]);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_lines_with_options<T>(value: &T, options: HeaderOptions) -> Result<Vec<String>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_lines())
}

/// Encode any `T: Serialize` record as a header block.
///
/// Every line is terminated with the configured [`LineEnding`] (CRLF by default).
///
/// # Examples
///
/// ```rust
/// use header_lines::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\r\ny: 2\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, HeaderOptions::default())
}

/// Encode any `T: Serialize` record as a header block with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: HeaderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let line_ending = options.line_ending;
    let lines = to_lines_with_options(value, options)?;

    let mut block = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        block.push_str(line);
        block.push_str(line_ending.as_str());
    }
    Ok(block)
}

/// Encode any `T: Serialize` record as a header block written to `writer`.
///
/// # Examples
///
/// ```rust
/// use header_lines::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x: 1\r\ny: 2\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, HeaderOptions::default())
}

/// Encode any `T: Serialize` record as a header block written to `writer`, with custom options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: HeaderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let block = to_string_with_options(value, options)?;
    writer
        .write_all(block.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
