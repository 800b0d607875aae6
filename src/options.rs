//! Configuration options for header-line encoding.
//!
//! This module provides:
//!
//! - [`HeaderOptions`]: Main configuration struct, including the registry of
//!   field tags
//! - [`LineEnding`]: Terminator used when lines are joined into one block
//!
//! ## Examples
//!
//! ```rust
//! use header_lines::{to_lines_with_options, HeaderOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Flags { compressed: bool, cached: bool }
//!
//! // Keep the field names, render `compressed` as 1/0 and drop `cached`
//! let options = HeaderOptions::new()
//!     .with_tag("compressed", ",int")
//!     .with_tag("cached", "-");
//!
//! let lines = to_lines_with_options(&Flags { compressed: true, cached: false }, options).unwrap();
//! assert_eq!(lines, vec!["compressed: 1"]);
//! ```

use crate::tag::FieldTag;
use crate::Result;
use indexmap::IndexMap;

/// Line terminator for [`to_string`](crate::to_string) and [`to_writer`](crate::to_writer).
///
/// # Examples
///
/// ```rust
/// use header_lines::LineEnding;
///
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`, as on the wire for HTTP and MIME
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Configuration options for header-line encoding.
///
/// # Examples
///
/// ```rust
/// use header_lines::{HeaderOptions, LineEnding};
///
/// let options = HeaderOptions::new()
///     .with_line_ending(LineEnding::Lf)
///     .with_sorted_maps(true)
///     .with_max_depth(16);
/// assert!(options.sort_maps);
/// ```
#[derive(Clone, Debug)]
pub struct HeaderOptions {
    pub line_ending: LineEnding,
    /// Sort the entries of sized maps (header containers) by key. Records that
    /// serde emits as maps because of `#[serde(flatten)]` are never reordered.
    pub sort_maps: bool,
    /// Deepest allowed nesting of records, the top-level record included.
    pub max_depth: usize,
    tags: IndexMap<String, FieldTag>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        HeaderOptions {
            line_ending: LineEnding::default(),
            sort_maps: false,
            max_depth: 128,
            tags: IndexMap::new(),
        }
    }
}

impl HeaderOptions {
    /// Creates default options (CRLF, container order preserved, depth 128, no tags).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::HeaderOptions;
    ///
    /// let options = HeaderOptions::new();
    /// assert_eq!(options.max_depth, 128);
    /// assert!(!options.sort_maps);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[must_use]
    pub fn with_sorted_maps(mut self, sort_maps: bool) -> Self {
        self.sort_maps = sort_maps;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Registers a tag for every field whose serde name is `field`.
    ///
    /// The tag is parsed once here. An empty name keeps the declared name, so
    /// `",omitempty"` only adds the option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::HeaderOptions;
    ///
    /// let options = HeaderOptions::new().with_tag("request_id", "X-Request-Id,omitempty");
    /// let tag = options.resolve("request_id").unwrap();
    /// assert_eq!(tag.key(), "X-Request-Id");
    /// assert!(tag.omit_empty());
    /// ```
    #[must_use]
    pub fn with_tag(mut self, field: &str, tag: &str) -> Self {
        self.tags
            .insert(field.to_string(), FieldTag::resolve(field, Some(tag)));
        self
    }

    /// Resolves the tag for a serde key: a registered tag wins, otherwise the
    /// key is read as an inline tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`](crate::Error::InvalidTag) for an inline
    /// tag without a name.
    pub fn resolve(&self, key: &str) -> Result<FieldTag> {
        match self.tags.get(key) {
            Some(tag) => Ok(tag.clone()),
            None => FieldTag::from_key(key),
        }
    }
}
