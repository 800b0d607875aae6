//! Header-line serialization.
//!
//! This module provides the [`Serializer`] that walks a record and flattens it
//! into `Key: Value` lines.
//!
//! ## Overview
//!
//! Fields are visited in declaration order. For each one the serializer:
//!
//! 1. resolves its tag (key, `-` skip marker, options)
//! 2. hands the field to its [`EncodeHeader`](crate::EncodeHeader) hook, if
//!    it was routed through [`hook`](crate::hook)
//! 3. unwraps `Option` layers; `None` renders as an empty value
//! 4. applies `omitempty`
//! 5. renders the value: one line for a scalar, one line per element for a
//!    sequence, one line per entry for a map, and the lines of its own fields
//!    for a nested record
//!
//! `#[serde(flatten)]` fields are promoted into the parent by serde itself and
//! arrive here as ordinary map entries, so they keep their position.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use header_lines::{HeaderOptions, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Request {
//!     #[serde(rename = "Host")]
//!     host: &'static str,
//!     #[serde(rename = "Accept")]
//!     accept: Vec<&'static str>,
//! }
//!
//! let mut serializer = Serializer::new(HeaderOptions::new());
//! Request { host: "example.com", accept: vec!["text/html", "*/*"] }
//!     .serialize(&mut serializer)
//!     .unwrap();
//!
//! assert_eq!(
//!     serializer.into_lines(),
//!     vec!["Host: example.com", "Accept: text/html", "Accept: */*"]
//! );
//! ```

use crate::format;
use crate::hook::{self, HOOK_TOKEN};
use crate::tag::FieldTag;
use crate::time::{self, Timestamp, TIMESTAMP_TOKEN};
use crate::{Error, HeaderOptions, Result};
use serde::ser::{self, Impossible, Serialize};

/// Most `Option` layers unwrapped for a single field.
pub const MAX_INDIRECTION: usize = 8;

/// The header-line serializer.
///
/// Accepts a record, a map, or `None` at the top level. Created via
/// [`Serializer::new`]; the lines are taken out with [`Serializer::into_lines`].
pub struct Serializer {
    lines: Vec<String>,
    options: HeaderOptions,
    depth: usize,
    unwrapped: bool,
}

impl Serializer {
    pub fn new(options: HeaderOptions) -> Self {
        Serializer {
            lines: Vec::new(),
            options,
            depth: 0,
            unwrapped: false,
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn options(&self) -> &HeaderOptions {
        &self.options
    }

    #[inline]
    fn push_line(&mut self, key: &str, value: &str) {
        let mut line = String::with_capacity(key.len() + value.len() + 2);
        line.push_str(key);
        line.push_str(": ");
        line.push_str(value);
        self.lines.push(line);
    }

    fn encode_field<T>(&mut self, field: FieldTag, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if field.is_skipped() {
            tracing::trace!(key = field.key(), "skipping field tagged `-`");
            return Ok(());
        }

        value.serialize(FieldSerializer {
            ser: self,
            field: &field,
            slot: Slot::Field,
            indirection: 0,
        })
    }

    fn enter_record(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::DepthLimitExceeded(self.options.max_depth));
        }
        Ok(())
    }

    fn leave_record(&mut self) {
        self.depth -= 1;
    }
}

fn not_a_record(found: &str) -> Result<()> {
    Err(Error::invalid_input(found))
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = RecordSerializer<'a>;
    type SerializeStruct = RecordSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        not_a_record("bool")
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        not_a_record("i8")
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        not_a_record("i16")
    }

    fn serialize_i32(self, _v: i32) -> Result<()> {
        not_a_record("i32")
    }

    fn serialize_i64(self, _v: i64) -> Result<()> {
        not_a_record("i64")
    }

    fn serialize_u8(self, _v: u8) -> Result<()> {
        not_a_record("u8")
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        not_a_record("u16")
    }

    fn serialize_u32(self, _v: u32) -> Result<()> {
        not_a_record("u32")
    }

    fn serialize_u64(self, _v: u64) -> Result<()> {
        not_a_record("u64")
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        not_a_record("f32")
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        not_a_record("f64")
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        not_a_record("char")
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        not_a_record("string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        not_a_record("bytes")
    }

    fn serialize_none(self) -> Result<()> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // only one level of Option is looked through at the top
        if self.unwrapped {
            return not_a_record("nested Option");
        }
        self.unwrapped = true;
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        not_a_record("enum variant")
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match name {
            TIMESTAMP_TOKEN => not_a_record("timestamp"),
            HOOK_TOKEN => not_a_record("header hook"),
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        not_a_record("enum variant")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::invalid_input("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::invalid_input("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::invalid_input("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::invalid_input("enum variant"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        RecordSerializer::new(self, Entries::from_map_len(len))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        RecordSerializer::new(self, Entries::Fields)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::invalid_input("enum variant"))
    }
}

/// What the keys reaching a [`RecordSerializer`] are.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Entries {
    /// Field names, possibly carrying inline tags. Serde reports records with
    /// `#[serde(flatten)]` fields as maps without a length.
    Fields,
    /// Keys of a header container, written as they are.
    Container,
}

impl Entries {
    fn from_map_len(len: Option<usize>) -> Self {
        match len {
            Some(_) => Entries::Container,
            None => Entries::Fields,
        }
    }
}

/// Walks the fields of a record, or the entries of a map, in order.
pub struct RecordSerializer<'a> {
    ser: &'a mut Serializer,
    entries: Entries,
    key: Option<String>,
    // entries buffered for sorting, each with the lines it produced
    sorted: Option<Vec<(String, Vec<String>)>>,
}

impl<'a> RecordSerializer<'a> {
    fn new(ser: &'a mut Serializer, entries: Entries) -> Result<Self> {
        ser.enter_record()?;
        let sorted = entries == Entries::Container && ser.options.sort_maps;
        Ok(RecordSerializer {
            ser,
            entries,
            key: None,
            sorted: sorted.then(Vec::new),
        })
    }

    fn tag(&self, key: &str) -> Result<FieldTag> {
        match self.entries {
            Entries::Fields => self.ser.options.resolve(key),
            Entries::Container => Ok(FieldTag::resolve(key, None)),
        }
    }

    fn field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let field = self.tag(key)?;
        match &mut self.sorted {
            None => self.ser.encode_field(field, value),
            Some(entries) => {
                let start = self.ser.lines.len();
                self.ser.encode_field(field, value)?;
                // a hook may have rewritten earlier lines
                let start = start.min(self.ser.lines.len());
                entries.push((key.to_string(), self.ser.lines.split_off(start)));
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<()> {
        if let Some(mut entries) = self.sorted {
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            for (_, lines) in entries {
                self.ser.lines.extend(lines);
            }
        }
        self.ser.leave_record();
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for RecordSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeMap for RecordSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(key.serialize(TextSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.field(&key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// A record field or map entry: everything is allowed and omitempty applies.
    Field,
    /// An element of a sequence: scalars only, never omitted.
    Element,
}

/// Renders one value under the key of the field that holds it.
struct FieldSerializer<'a, 'f> {
    ser: &'a mut Serializer,
    field: &'f FieldTag,
    slot: Slot,
    indirection: usize,
}

impl<'a, 'f> FieldSerializer<'a, 'f> {
    /// Pointer presence decides emptiness: a value reached through `Some` is
    /// never omitted.
    fn omitted(&self, empty: bool) -> bool {
        empty && self.slot == Slot::Field && self.indirection == 0 && self.field.omit_empty()
    }

    fn scalar(self, empty: bool, value: &str) -> Result<()> {
        if self.omitted(empty) {
            tracing::trace!(key = self.field.key(), "omitting empty field");
            return Ok(());
        }
        self.ser.push_line(self.field.key(), value);
        Ok(())
    }

    fn only_in_field(&self, what: &str) -> Result<()> {
        match self.slot {
            Slot::Field => Ok(()),
            Slot::Element => Err(Error::unsupported_type(&format!(
                "{what} inside a sequence (field `{}`)",
                self.field.key()
            ))),
        }
    }

    fn variant(&self, variant: &str) -> Error {
        Error::unsupported_type(&format!(
            "enum variant `{variant}` with data (field `{}`)",
            self.field.key()
        ))
    }
}

impl<'a, 'f> ser::Serializer for FieldSerializer<'a, 'f> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ElementSerializer<'a, 'f>;
    type SerializeTuple = ElementSerializer<'a, 'f>;
    type SerializeTupleStruct = ElementSerializer<'a, 'f>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = RecordSerializer<'a>;
    type SerializeStruct = RecordSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        let text = format::format_bool(v, self.field.bool_as_int());
        self.scalar(!v, text)
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.scalar(v == 0, &format::format_int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.scalar(v == 0, &format::format_uint(v))
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.scalar(v == 0.0, &format::format_f32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.scalar(v == 0.0, &format::format_f64(v))
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.scalar(false, v.encode_utf8(&mut [0; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.scalar(v.is_empty(), v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.scalar(v.is_empty(), &String::from_utf8_lossy(v))
    }

    fn serialize_none(self) -> Result<()> {
        self.scalar(true, "")
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if self.indirection >= MAX_INDIRECTION {
            return Err(Error::unsupported_type(&format!(
                "more than {MAX_INDIRECTION} nested Options (field `{}`)",
                self.field.key()
            )));
        }
        value.serialize(FieldSerializer {
            indirection: self.indirection + 1,
            ..self
        })
    }

    fn serialize_unit(self) -> Result<()> {
        self.scalar(true, "")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.scalar(false, variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match name {
            TIMESTAMP_TOKEN => {
                let t = time::capture(value)?;
                let text = format::format_time(&t, self.field.unix_time());
                self.scalar(Timestamp(t).is_zero(), &text)
            }
            HOOK_TOKEN => {
                self.only_in_field("a header hook")?;
                let ser = self.ser;
                let lines = std::mem::take(&mut ser.lines);
                ser.lines = hook::dispatch(value, self.field.key(), lines)?;
                Ok(())
            }
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(self.variant(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.only_in_field("a sequence")?;
        Ok(ElementSerializer {
            ser: self.ser,
            field: self.field,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.variant(variant))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        self.only_in_field("a map")?;
        RecordSerializer::new(self.ser, Entries::from_map_len(len))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.only_in_field("a record")?;
        RecordSerializer::new(self.ser, Entries::Fields)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.variant(variant))
    }
}

/// Emits one line per element, all under the field's key.
pub struct ElementSerializer<'a, 'f> {
    ser: &'a mut Serializer,
    field: &'f FieldTag,
}

impl<'a, 'f> ElementSerializer<'a, 'f> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FieldSerializer {
            ser: &mut *self.ser,
            field: self.field,
            slot: Slot::Element,
            indirection: 0,
        })
    }
}

impl<'a, 'f> ser::SerializeSeq for ElementSerializer<'a, 'f> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'f> ser::SerializeTuple for ElementSerializer<'a, 'f> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a, 'f> ser::SerializeTupleStruct for ElementSerializer<'a, 'f> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Captures a value as plain text: map keys, hook probes and timestamp payloads.
pub(crate) struct TextSerializer;

fn not_text(what: &str) -> Error {
    Error::unsupported_type(&format!("{what} where text was expected"))
}

impl ser::Serializer for TextSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(format::format_bool(v, false).to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        self.serialize_i128(i128::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(format::format_int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        self.serialize_u128(u128::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(format::format_uint(v))
    }

    fn serialize_f32(self, v: f32) -> Result<String> {
        Ok(format::format_f32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<String> {
        Ok(format::format_f64(v))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(v).into_owned())
    }

    fn serialize_none(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Ok(String::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(not_text("an enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_text("a sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_text("a tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_text("a tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_text("an enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_text("a map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_text("a record"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_text("an enum variant with data"))
    }
}
