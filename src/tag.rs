//! Field tag resolution.
//!
//! A field tag is a short string of the form `"Name,option1,option2"` that
//! decides the header key a field is written under and how its value is
//! rendered. The tag `"-"` drops the field entirely.
//!
//! Tags reach the encoder in one of two ways:
//!
//! - **Inline**, as the serde key of the field:
//!   `#[serde(rename = "X-Retry,omitempty")]`
//! - **Registered** on [`HeaderOptions::with_tag`](crate::HeaderOptions::with_tag),
//!   keyed by the field's serde name. Registered tags may leave the name empty
//!   (`",int"`) to keep the declared name.
//!
//! ## Options
//!
//! | Option      | Effect                                              |
//! |-------------|-----------------------------------------------------|
//! | `omitempty` | skip the field when its value is empty              |
//! | `int`       | render booleans as `1`/`0`                          |
//! | `unix`      | render timestamps as Unix epoch seconds             |
//!
//! Unknown options are carried along and ignored.
//!
//! ## Examples
//!
//! ```rust
//! use header_lines::tag::{parse_tag, FieldTag};
//!
//! let (name, options) = parse_tag("X-Count,omitempty,int");
//! assert_eq!(name, "X-Count");
//! assert!(options.contains("int"));
//!
//! let tag = FieldTag::resolve("count", Some(",omitempty"));
//! assert_eq!(tag.key(), "count");
//! assert!(tag.omit_empty());
//! ```

use crate::{Error, Result};

/// Marker tag that removes a field from the output.
pub const SKIP: &str = "-";

/// Skip the field when its value is empty.
pub const OMIT_EMPTY: &str = "omitempty";

/// Render booleans as `1`/`0`.
pub const INT: &str = "int";

/// Render timestamps as epoch seconds.
pub const UNIX: &str = "unix";

/// The comma-separated options that follow the name in a field tag.
///
/// Membership only: options carry no values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagOptions(Vec<String>);

impl TagOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `option` is present. The comparison is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::tag::parse_tag;
    ///
    /// let (_, options) = parse_tag("field,foobar,foo");
    /// assert!(options.contains("foo"));
    /// assert!(!options.contains("bar"));
    /// assert!(!options.contains("Foo"));
    /// ```
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|o| o == option)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagOptions {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        TagOptions(iter.into_iter().map(Into::into).collect())
    }
}

/// Splits a raw tag into its name and its option set.
///
/// Everything before the first comma is the name (possibly empty); the rest is
/// split on commas into options.
#[must_use]
pub fn parse_tag(tag: &str) -> (&str, TagOptions) {
    match tag.split_once(',') {
        Some((name, rest)) => (name, rest.split(',').filter(|o| !o.is_empty()).collect()),
        None => (tag, TagOptions::new()),
    }
}

/// Resolved metadata for one field: the key it is written under and its options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTag {
    key: String,
    skip: bool,
    options: TagOptions,
}

impl FieldTag {
    /// Resolves a field's metadata against its declared name.
    ///
    /// With no tag the declared name is used and no options are set. An empty
    /// name in the tag also falls back to the declared name.
    #[must_use]
    pub fn resolve(declared: &str, tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return FieldTag::plain(declared);
        };
        if tag == SKIP {
            return FieldTag {
                key: declared.to_string(),
                skip: true,
                options: TagOptions::new(),
            };
        }

        let (name, options) = parse_tag(tag);
        FieldTag {
            key: if name.is_empty() { declared } else { name }.to_string(),
            skip: false,
            options,
        }
    }

    /// Resolves a serde key that may carry an inline tag.
    ///
    /// A serde `rename` replaces the declared identifier, so an inline tag has
    /// to spell out its header name; `",omitempty"` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] for an inline tag with an empty name.
    pub fn from_key(key: &str) -> Result<Self> {
        if key == SKIP || !key.contains(',') {
            return Ok(FieldTag::resolve(key, (key == SKIP).then_some(key)));
        }

        let (name, options) = parse_tag(key);
        if name.is_empty() {
            return Err(Error::invalid_tag(key));
        }
        Ok(FieldTag {
            key: name.to_string(),
            skip: false,
            options,
        })
    }

    fn plain(key: &str) -> Self {
        FieldTag {
            key: key.to_string(),
            skip: false,
            options: TagOptions::new(),
        }
    }

    /// The header key this field is written under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the field was tagged `-`.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    #[must_use]
    pub const fn options(&self) -> &TagOptions {
        &self.options
    }

    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.options.contains(OMIT_EMPTY)
    }

    #[must_use]
    pub fn bool_as_int(&self) -> bool {
        self.options.contains(INT)
    }

    #[must_use]
    pub fn unix_time(&self) -> bool {
        self.options.contains(UNIX)
    }
}
