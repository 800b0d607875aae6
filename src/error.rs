//! Error types for header-line encoding.
//!
//! Encoding is a pure transformation, so there are only a handful of ways it
//! can fail:
//!
//! - **Invalid input**: the top-level value is not a record (or `None`)
//! - **Marshal failures**: a custom [`EncodeHeader`](crate::EncodeHeader) hook
//!   returned an error; it reaches the caller unchanged
//! - **Unsupported types**: values with no header-line rendering, such as
//!   data-carrying enum variants or nested sequences
//! - **Invalid tags**: field metadata that cannot be resolved to a key
//!
//! Nil values, missing metadata, empty collections and zero values are never
//! errors.
//!
//! ## Examples
//!
//! ```rust
//! use header_lines::{to_lines, Error};
//!
//! let result = to_lines(&42);
//! assert!(matches!(result, Err(Error::InvalidInput(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding header lines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The top-level value is neither absent nor a record.
    #[error("Invalid input: expected a struct, a map or None, found {0}")]
    InvalidInput(String),

    /// A custom header hook failed.
    #[error("Header marshaler failed: {0}")]
    Marshal(String),

    /// A value with no header-line representation.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Field metadata that does not resolve to a header key.
    #[error("Invalid field tag `{0}`: an inline tag must start with the header name")]
    InvalidTag(String),

    /// A timestamp that could not be captured from its serialized form.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Records nested deeper than [`HeaderOptions::max_depth`](crate::HeaderOptions).
    #[error("Records nested deeper than {0} levels")]
    DepthLimitExceeded(usize),

    /// IO error while writing an encoded block
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid input error naming the kind of value that was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::Error;
    ///
    /// let err = Error::invalid_input("bool");
    /// assert!(err.to_string().contains("found bool"));
    /// ```
    pub fn invalid_input(found: &str) -> Self {
        Error::InvalidInput(found.to_string())
    }

    /// Creates the error a custom header hook reports when it cannot render its value.
    ///
    /// The encoder hands this error back to the caller exactly as the hook returned it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::Error;
    ///
    /// let err = Error::marshal("argument list too long");
    /// assert!(err.is_marshal());
    /// ```
    pub fn marshal<T: fmt::Display>(msg: T) -> Self {
        Error::Marshal(msg.to_string())
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid tag error for the given raw tag.
    pub fn invalid_tag(tag: &str) -> Self {
        Error::InvalidTag(tag.to_string())
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidTimestamp(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if the top-level value was not a record.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Returns `true` if a custom header hook failed.
    #[must_use]
    pub const fn is_marshal(&self) -> bool {
        matches!(self, Error::Marshal(_))
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
