//! Custom header encoding.
//!
//! A type that needs full control over its header lines implements
//! [`EncodeHeader`]. The encoder hands it the field's key and every line
//! produced so far, and takes whatever it returns as the new set of lines.
//! Default handling (omitempty, `Option` unwrapping, per-type rendering) does
//! not apply to such a field.
//!
//! Serde cannot see trait impls, so the field is routed through [`hook`]:
//!
//! ```rust
//! use header_lines::{hook, to_lines, EncodeHeader, Result};
//! use serde::Serialize;
//!
//! struct Args(Vec<String>);
//!
//! impl EncodeHeader for Args {
//!     fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
//!         for (i, arg) in self.0.iter().enumerate() {
//!             lines.push(format!("{key}.{i}: {arg}"));
//!         }
//!         Ok(lines)
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Call {
//!     #[serde(rename = "Arg", serialize_with = "hook")]
//!     args: Args,
//! }
//!
//! let call = Call { args: Args(vec!["a".into(), "b".into()]) };
//! assert_eq!(to_lines(&call).unwrap(), vec!["Arg.0: a", "Arg.1: b"]);
//! ```
//!
//! `Option<T>` is itself an `EncodeHeader` whose `None` adds nothing, so a
//! missing marshaler contributes no lines. This holds only when the `Option`
//! field itself is routed through [`hook`]. A type whose hand-written
//! `Serialize` impl calls `hook` is only reached for `Some`, and a plain
//! `None` renders as an empty value like any other missing field:
//!
//! ```rust
//! use header_lines::{hook, to_lines, EncodeHeader, Result};
//! use serde::{Serialize, Serializer};
//!
//! struct Token(&'static str);
//!
//! impl EncodeHeader for Token {
//!     fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
//!         lines.push(format!("{key}: Bearer {}", self.0));
//!         Ok(lines)
//!     }
//! }
//!
//! impl Serialize for Token {
//!     fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
//!         hook(self, serializer)
//!     }
//! }
//!
//! #[derive(Serialize)]
//! struct Request {
//!     #[serde(rename = "Authorization", serialize_with = "hook")]
//!     auth: Option<Token>,
//!     #[serde(rename = "Proxy-Authorization")]
//!     proxy: Option<Token>,
//! }
//!
//! let lines = to_lines(&Request { auth: None, proxy: None }).unwrap();
//! assert_eq!(lines, vec!["Proxy-Authorization: "]);
//! ```

use crate::ser::TextSerializer;
use crate::{Error, Result};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::cell::RefCell;

/// Newtype name this crate's serializer recognizes as a hook call.
pub(crate) const HOOK_TOKEN: &str = "$header_lines::Hook";

/// A type that renders its own header lines.
pub trait EncodeHeader {
    /// Appends (or otherwise rewrites) header lines for the field `key`.
    ///
    /// `lines` holds everything encoded before this field; the returned vector
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Any error returned here aborts the whole encode and reaches the caller
    /// unchanged.
    fn encode_header(&self, key: &str, lines: Vec<String>) -> Result<Vec<String>>;
}

impl<T: EncodeHeader + ?Sized> EncodeHeader for &T {
    fn encode_header(&self, key: &str, lines: Vec<String>) -> Result<Vec<String>> {
        (**self).encode_header(key, lines)
    }
}

impl<T: EncodeHeader + ?Sized> EncodeHeader for Box<T> {
    fn encode_header(&self, key: &str, lines: Vec<String>) -> Result<Vec<String>> {
        (**self).encode_header(key, lines)
    }
}

impl<T: EncodeHeader> EncodeHeader for Option<T> {
    fn encode_header(&self, key: &str, lines: Vec<String>) -> Result<Vec<String>> {
        match self {
            Some(value) => value.encode_header(key, lines),
            None => Ok(lines),
        }
    }
}

enum HookState {
    Pending { key: String, lines: Vec<String> },
    Done(Result<Vec<String>>),
}

thread_local! {
    static HOOK_STATE: RefCell<Option<HookState>> = const { RefCell::new(None) };
}

/// Serializes `value` through its [`EncodeHeader`] impl.
///
/// Use it as `#[serde(serialize_with = "header_lines::hook")]` on a field, or
/// call it from a hand-written `Serialize` impl. An `Option` of a marshaler
/// needs the attribute on the `Option` field for `None` to add no lines. Under
/// any other serializer the value is written as the sequence of lines it
/// produces for an empty key.
///
/// # Errors
///
/// Propagates the hook's error.
pub fn hook<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: EncodeHeader + ?Sized,
    S: Serializer,
{
    serializer.serialize_newtype_struct(HOOK_TOKEN, &HookCall(value))
}

struct HookCall<'a, T: ?Sized>(&'a T);

impl<T: EncodeHeader + ?Sized> Serialize for HookCall<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let pending = HOOK_STATE.with(|state| state.borrow_mut().take());
        match pending {
            Some(HookState::Pending { key, lines }) => {
                let result = self.0.encode_header(&key, lines);
                let failed = result.is_err();
                HOOK_STATE.with(|state| *state.borrow_mut() = Some(HookState::Done(result)));
                if failed {
                    return Err(S::Error::custom("header hook failed"));
                }
                serializer.serialize_unit()
            }
            other => {
                HOOK_STATE.with(|state| *state.borrow_mut() = other);
                let lines = self.0.encode_header("", Vec::new()).map_err(S::Error::custom)?;
                serializer.collect_seq(lines)
            }
        }
    }
}

/// Runs the hook wrapped in `value` for `key`, handing it the accumulated lines.
///
/// The thread-local slot is restored afterwards, so hooks that encode other
/// values themselves see a clean slate.
pub(crate) fn dispatch<T>(value: &T, key: &str, lines: Vec<String>) -> Result<Vec<String>>
where
    T: Serialize + ?Sized,
{
    tracing::trace!(key, "dispatching header hook");
    let previous = HOOK_STATE.with(|state| {
        state.replace(Some(HookState::Pending {
            key: key.to_string(),
            lines,
        }))
    });
    let probe = value.serialize(TextSerializer);
    let state = HOOK_STATE.with(|state| state.replace(previous));

    match state {
        Some(HookState::Done(Ok(lines))) => Ok(lines),
        Some(HookState::Done(Err(err))) => {
            tracing::debug!(key, error = %err, "header hook failed");
            Err(err)
        }
        _ => Err(probe
            .err()
            .unwrap_or_else(|| Error::custom("header hook was not invoked"))),
    }
}
