//! Multi-valued header container.
//!
//! [`HeaderMap`] keeps every header name once, in first-insertion order, with
//! all of its values. Any map is flattened by the encoder using the map's own
//! keys, so a `HeaderMap` field contributes one line per value:
//!
//! ```rust
//! use header_lines::{to_lines, HeaderMap};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Response {
//!     #[serde(rename = "Status")]
//!     status: u16,
//!     extra: HeaderMap,
//! }
//!
//! let mut extra = HeaderMap::new();
//! extra.append("Set-Cookie", "a=1");
//! extra.append("Set-Cookie", "b=2");
//! extra.insert("Vary", "Accept");
//!
//! let lines = to_lines(&Response { status: 200, extra }).unwrap();
//! assert_eq!(lines, vec![
//!     "Status: 200",
//!     "Set-Cookie: a=1",
//!     "Set-Cookie: b=2",
//!     "Vary: Accept",
//! ]);
//! ```
//!
//! ## Why IndexMap?
//!
//! A `HashMap` visits its entries in an arbitrary order, which makes the
//! encoded lines differ from run to run. `IndexMap` keeps insertion order.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// An ordered map from header names to one or more values.
///
/// Names are compared exactly; no case folding is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap(IndexMap<String, Vec<String>>);

impl HeaderMap {
    /// Creates an empty `HeaderMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::HeaderMap;
    ///
    /// let map = HeaderMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        HeaderMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HeaderMap(IndexMap::with_capacity(capacity))
    }

    /// Sets `name` to the single value `value`, returning the values it replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// assert!(map.insert("Host", "a").is_none());
    /// assert_eq!(map.insert("Host", "b"), Some(vec!["a".to_string()]));
    /// assert_eq!(map.get("Host"), Some("b"));
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<Vec<String>> {
        self.0.insert(name.into(), vec![value.into()])
    }

    /// Adds a value to `name`, keeping the values already there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use header_lines::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.append("Accept", "text/html");
    /// map.append("Accept", "*/*");
    /// assert_eq!(map.get_all("Accept"), ["text/html", "*/*"]);
    /// ```
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Returns the first value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of `name`, empty if it is absent.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Removes `name`, keeping the order of the remaining names.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over names and their values, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for HeaderMap {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}
