use chrono::{DateTime, TimeZone, Utc};
use header_lines::{
    headers, hook, to_lines, to_lines_with_options, EncodeHeader, Error, HeaderMap,
    HeaderOptions, Result, Timestamp,
};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2000, 1, 1, 12, 34, 56).unwrap()
}

#[test]
fn test_basic_primitives() {
    #[derive(Serialize, Default)]
    struct Primitives {
        #[serde(rename = "Z")]
        a: String,
        #[serde(rename = "B")]
        b: i32,
        #[serde(rename = "C")]
        c: u32,
        #[serde(rename = "D")]
        d: f32,
        #[serde(rename = "E")]
        e: bool,
    }

    let lines = to_lines(&Primitives::default()).unwrap();
    assert_eq!(lines, vec!["Z: ", "B: 0", "C: 0", "D: 0", "E: false"]);
}

#[test]
fn test_options_are_dereferenced() {
    #[derive(Serialize)]
    struct Pointers {
        #[serde(rename = "A")]
        a: Option<String>,
        #[serde(rename = "B")]
        b: Option<i32>,
        #[serde(rename = "C")]
        c: Option<Option<String>>,
        #[serde(rename = "D")]
        d: Option<Timestamp>,
    }

    let value = Pointers {
        a: Some("string".to_string()),
        b: None,
        c: Some(Some("string".to_string())),
        d: Some(sample_time().into()),
    };

    let lines = to_lines(&value).unwrap();
    assert_eq!(
        lines,
        vec![
            "A: string",
            "B: ",
            "C: string",
            "D: Sat, 01 Jan 2000 12:34:56 GMT",
        ]
    );
}

#[test]
fn test_sequences_and_arrays() {
    #[derive(Serialize)]
    struct Collections {
        #[serde(rename = "A")]
        a: Vec<String>,
        #[serde(rename = "B")]
        b: Vec<Option<&'static str>>,
        #[serde(rename = "C")]
        c: [&'static str; 2],
        #[serde(rename = "D,int")]
        d: Vec<bool>,
        #[serde(rename = "E")]
        e: (u8, &'static str),
    }

    let value = Collections {
        a: vec!["a".to_string(), "b".to_string()],
        b: vec![Some("string"), None],
        c: ["a", "b"],
        d: vec![true, false],
        e: (7, "x"),
    };

    let lines = to_lines(&value).unwrap();
    assert_eq!(
        lines,
        vec![
            "A: a", "A: b", "B: string", "B: ", "C: a", "C: b", "D: 1", "D: 0", "E: 7", "E: x",
        ]
    );
}

#[test]
fn test_empty_collection_emits_nothing() {
    #[derive(Serialize)]
    struct Empty {
        #[serde(rename = "A")]
        a: Vec<String>,
        #[serde(rename = "B")]
        b: HeaderMap,
    }

    let lines = to_lines(&Empty {
        a: Vec::new(),
        b: HeaderMap::new(),
    })
    .unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_other_types() {
    #[derive(Serialize)]
    struct Others {
        #[serde(rename = "A")]
        a: Timestamp,
        #[serde(rename = "B,unix")]
        b: Timestamp,
        #[serde(rename = "C,int")]
        c: bool,
        #[serde(rename = "D,int")]
        d: bool,
        #[serde(rename = "E")]
        e: HeaderMap,
    }

    let value = Others {
        a: sample_time().into(),
        b: sample_time().into(),
        c: true,
        d: false,
        e: headers! { "F" => "f1", "G" => "gg" },
    };

    let lines = to_lines(&value).unwrap();
    assert_eq!(
        lines,
        vec![
            "A: Sat, 01 Jan 2000 12:34:56 GMT",
            "B: 946730096",
            "C: 1",
            "D: 0",
            "F: f1",
            "G: gg",
        ]
    );
}

#[test]
fn test_chrono_fields_with_helpers() {
    #[derive(Serialize)]
    struct Dates {
        #[serde(rename = "Date", with = "header_lines::timestamp")]
        date: DateTime<Utc>,
        #[serde(rename = "Expires,unix", with = "header_lines::timestamp::option")]
        expires: Option<DateTime<Utc>>,
        #[serde(rename = "Retry-After,omitempty", with = "header_lines::timestamp::option")]
        retry_after: Option<DateTime<Utc>>,
    }

    let value = Dates {
        date: sample_time(),
        expires: Some(sample_time()),
        retry_after: None,
    };

    let lines = to_lines(&value).unwrap();
    assert_eq!(
        lines,
        vec!["Date: Sat, 01 Jan 2000 12:34:56 GMT", "Expires: 946730096"]
    );
}

#[test]
fn test_absent_input() {
    #[derive(Serialize)]
    struct A {
        a: String,
    }

    assert_eq!(to_lines(&None::<A>).unwrap(), Vec::<String>::new());
    assert_eq!(to_lines(&()).unwrap(), Vec::<String>::new());
}

#[test]
fn test_boxed_and_optional_record() {
    #[derive(Serialize)]
    struct A {
        #[serde(rename = "A")]
        a: String,
    }

    let value = Box::new(A {
        a: "test".to_string(),
    });
    assert_eq!(to_lines(&value).unwrap(), vec!["A: test"]);
    assert_eq!(to_lines(&Some(&*value)).unwrap(), vec!["A: test"]);
}

#[test]
fn test_omit_empty() {
    #[derive(Serialize)]
    struct Unit;

    #[derive(Serialize)]
    struct OmitEmpty {
        #[serde(skip)]
        #[allow(dead_code)]
        hidden: String,
        #[serde(rename = "A")]
        a: String,
        #[serde(rename = "B,omitempty")]
        b: String,
        #[serde(rename = "-")]
        c: String,
        // actually named omitempty, not an option
        #[serde(rename = "omitempty")]
        d: String,
        #[serde(rename = "E,omitempty")]
        e: Option<String>,
        #[serde(rename = "F,omitempty")]
        f: bool,
        #[serde(rename = "G,omitempty")]
        g: i32,
        #[serde(rename = "H,omitempty")]
        h: u32,
        #[serde(rename = "I,omitempty")]
        i: f32,
        #[serde(rename = "J,omitempty")]
        j: Timestamp,
        #[serde(rename = "K,omitempty")]
        k: Unit,
        #[serde(rename = "L,omitempty")]
        l: Option<String>,
    }

    let value = OmitEmpty {
        hidden: "x".to_string(),
        a: String::new(),
        b: String::new(),
        c: "never".to_string(),
        d: String::new(),
        e: Some(String::new()),
        f: false,
        g: 0,
        h: 0,
        i: 0.0,
        j: Timestamp::default(),
        k: Unit,
        l: None,
    };

    let lines = to_lines(&value).unwrap();
    // E is kept: the Option is Some even though the string inside is empty
    assert_eq!(lines, vec!["A: ", "omitempty: ", "E: "]);
}

#[test]
fn test_omit_empty_keeps_non_empty_values() {
    #[derive(Serialize)]
    struct Values {
        #[serde(rename = "A,omitempty")]
        a: String,
        #[serde(rename = "B,omitempty,int")]
        b: bool,
        #[serde(rename = "C,omitempty")]
        c: i64,
        #[serde(rename = "D,omitempty,unix")]
        d: Timestamp,
        #[serde(rename = "E,omitempty")]
        e: Option<Option<String>>,
    }

    let value = Values {
        a: "a".to_string(),
        b: true,
        c: -1,
        d: sample_time().into(),
        e: Some(None),
    };

    let lines = to_lines(&value).unwrap();
    assert_eq!(lines, vec!["A: a", "B: 1", "C: -1", "D: 946730096", "E: "]);
}

#[test]
fn test_skip_marker_never_appears() {
    #[derive(Serialize)]
    struct Secret {
        #[serde(rename = "-")]
        token: String,
        #[serde(rename = "User")]
        user: String,
    }

    let lines = to_lines(&Secret {
        token: "hunter2".to_string(),
        user: "alice".to_string(),
    })
    .unwrap();
    assert_eq!(lines, vec!["User: alice"]);
}

#[derive(Serialize)]
struct A {
    #[serde(flatten)]
    b: B,
}

#[derive(Serialize)]
struct B {
    #[serde(rename = "C")]
    c: String,
}

#[derive(Serialize)]
struct D {
    #[serde(flatten)]
    b: B,
    #[serde(rename = "C")]
    c: String,
}

#[derive(Serialize)]
struct E {
    #[serde(flatten)]
    b: B,
    #[serde(rename = "C")]
    c: String,
}

#[derive(Serialize)]
pub struct F {
    #[serde(flatten)]
    e: E,
}

#[test]
fn test_embedded_structs() {
    let lines = to_lines(&A {
        b: B {
            c: "foo".to_string(),
        },
    })
    .unwrap();
    assert_eq!(lines, vec!["C: foo"]);

    let lines = to_lines(&D {
        b: B {
            c: "bar".to_string(),
        },
        c: "foo".to_string(),
    })
    .unwrap();
    assert_eq!(lines, vec!["C: bar", "C: foo"]);

    // a private embedded type inside a public one
    let lines = to_lines(&F {
        e: E {
            b: B {
                c: "bar".to_string(),
            },
            c: "foo".to_string(),
        },
    })
    .unwrap();
    assert_eq!(lines, vec!["C: bar", "C: foo"]);
}

#[test]
fn test_embedded_struct_keeps_position_and_tags() {
    #[derive(Serialize)]
    struct Common {
        #[serde(rename = "X-Trace,omitempty")]
        trace: String,
        #[serde(rename = "X-Debug,int")]
        debug: bool,
    }

    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: String,
        #[serde(flatten)]
        common: Common,
        #[serde(rename = "Accept")]
        accept: String,
    }

    let lines = to_lines(&Request {
        host: "h".to_string(),
        common: Common {
            trace: String::new(),
            debug: true,
        },
        accept: "*/*".to_string(),
    })
    .unwrap();
    assert_eq!(lines, vec!["Host: h", "X-Debug: 1", "Accept: */*"]);
}

#[test]
fn test_nested_struct_is_spliced_in_place() {
    #[derive(Serialize)]
    struct Auth {
        #[serde(rename = "Authorization")]
        authorization: String,
    }

    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: String,
        auth: Auth,
        #[serde(rename = "Accept")]
        accept: String,
        proxy: Option<Auth>,
    }

    let lines = to_lines(&Request {
        host: "h".to_string(),
        auth: Auth {
            authorization: "Bearer t".to_string(),
        },
        accept: "*/*".to_string(),
        proxy: Some(Auth {
            authorization: "Basic p".to_string(),
        }),
    })
    .unwrap();
    assert_eq!(
        lines,
        vec![
            "Host: h",
            "Authorization: Bearer t",
            "Accept: */*",
            "Authorization: Basic p",
        ]
    );
}

#[test]
fn test_invalid_input() {
    let err = to_lines("").unwrap_err();
    assert!(err.is_invalid_input());

    assert!(to_lines(&42).unwrap_err().is_invalid_input());
    assert!(to_lines(&vec!["a"]).unwrap_err().is_invalid_input());
    assert!(to_lines(&Timestamp::default())
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_inline_tag_without_name_is_rejected() {
    #[derive(Serialize)]
    struct Bad {
        #[serde(rename = ",omitempty")]
        a: String,
    }

    let err = to_lines(&Bad { a: String::new() }).unwrap_err();
    assert_eq!(err, Error::invalid_tag(",omitempty"));
}

#[test]
fn test_registered_tags_keep_declared_names() {
    #[derive(Serialize)]
    struct Flags {
        compressed: bool,
        retries: u8,
        internal: String,
    }

    let options = HeaderOptions::new()
        .with_tag("compressed", ",int")
        .with_tag("retries", "X-Retries,omitempty")
        .with_tag("internal", "-");

    let value = Flags {
        compressed: true,
        retries: 0,
        internal: "x".to_string(),
    };
    let lines = to_lines_with_options(&value, options).unwrap();
    assert_eq!(lines, vec!["compressed: 1"]);
}

#[test]
fn test_maps_keep_visiting_order() {
    #[derive(Serialize)]
    struct Extra {
        extra: IndexMap<&'static str, Vec<&'static str>>,
    }

    let mut extra = IndexMap::new();
    extra.insert("Zeta", vec!["1", "2"]);
    extra.insert("Alpha", vec!["3"]);

    let lines = to_lines(&Extra { extra }).unwrap();
    assert_eq!(lines, vec!["Zeta: 1", "Zeta: 2", "Alpha: 3"]);
}

#[test]
fn test_sorted_maps() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: &'static str,
        extra: IndexMap<&'static str, Vec<&'static str>>,
        #[serde(rename = "Accept")]
        accept: &'static str,
    }

    let mut extra = IndexMap::new();
    extra.insert("Zeta", vec!["1", "2"]);
    extra.insert("Alpha", vec!["3"]);

    let options = HeaderOptions::new().with_sorted_maps(true);
    let lines = to_lines_with_options(
        &Request {
            host: "h",
            extra,
            accept: "a",
        },
        options,
    )
    .unwrap();
    // only the map is reordered, the record keeps its field order
    assert_eq!(
        lines,
        vec!["Host: h", "Alpha: 3", "Zeta: 1", "Zeta: 2", "Accept: a"]
    );
}

#[test]
fn test_flattened_map() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: &'static str,
        #[serde(flatten)]
        extra: BTreeMap<&'static str, &'static str>,
    }

    let mut extra = BTreeMap::new();
    extra.insert("X-B", "2");
    extra.insert("X-A", "1");

    let lines = to_lines(&Request { host: "h", extra }).unwrap();
    assert_eq!(lines, vec!["Host: h", "X-A: 1", "X-B: 2"]);
}

#[test]
fn test_newtypes_and_unit_variants() {
    #[derive(Serialize)]
    struct Host(&'static str);

    #[derive(Serialize)]
    enum Mode {
        #[serde(rename = "keep-alive")]
        KeepAlive,
    }

    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: Host,
        #[serde(rename = "Connection")]
        connection: Mode,
        #[serde(rename = "X-Big")]
        big: u128,
        #[serde(rename = "X-Ratio")]
        ratio: f64,
        #[serde(rename = "X-Initial")]
        initial: char,
    }

    let lines = to_lines(&Request {
        host: Host("example.com"),
        connection: Mode::KeepAlive,
        big: u128::MAX,
        ratio: 0.25,
        initial: 'q',
    })
    .unwrap();
    assert_eq!(
        lines,
        vec![
            "Host: example.com",
            "Connection: keep-alive",
            "X-Big: 340282366920938463463374607431768211455",
            "X-Ratio: 0.25",
            "X-Initial: q",
        ]
    );
}

struct EncodedArgs(Vec<String>);

impl EncodeHeader for EncodedArgs {
    fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
        for (i, arg) in self.0.iter().enumerate() {
            lines.push(format!("{key}.{i}: {arg}"));
        }
        Ok(lines)
    }
}

#[test]
fn test_marshaler() {
    #[derive(Serialize)]
    struct Call {
        #[serde(rename = "Arg", serialize_with = "hook")]
        args: EncodedArgs,
    }

    let value = Call {
        args: EncodedArgs(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
    };
    let lines = to_lines(&value).unwrap();
    assert_eq!(lines, vec!["Arg.0: a", "Arg.1: b", "Arg.2: c"]);
}

#[test]
fn test_marshaler_with_none() {
    #[derive(Serialize)]
    struct Call {
        #[serde(rename = "Arg", serialize_with = "hook")]
        args: Option<EncodedArgs>,
    }

    let lines = to_lines(&Call { args: None }).unwrap();
    assert_eq!(lines, Vec::<String>::new());
}

#[test]
fn test_marshaler_bypasses_omitempty() {
    #[derive(Serialize)]
    struct Call {
        #[serde(rename = "Arg,omitempty", serialize_with = "hook")]
        args: EncodedArgs,
    }

    struct Always;

    impl EncodeHeader for Always {
        fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
            lines.push(format!("{key}: "));
            Ok(lines)
        }
    }

    #[derive(Serialize)]
    struct Blank {
        #[serde(rename = "Blank,omitempty", serialize_with = "hook")]
        blank: Always,
    }

    let lines = to_lines(&Call {
        args: EncodedArgs(Vec::new()),
    })
    .unwrap();
    assert!(lines.is_empty());

    let lines = to_lines(&Blank { blank: Always }).unwrap();
    assert_eq!(lines, vec!["Blank: "]);
}

#[test]
fn test_marshaler_sees_and_replaces_accumulated_lines() {
    struct Reverse;

    impl EncodeHeader for Reverse {
        fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
            lines.reverse();
            lines.push(format!("{key}: reversed"));
            Ok(lines)
        }
    }

    #[derive(Serialize)]
    struct Record {
        #[serde(rename = "A")]
        a: u8,
        #[serde(rename = "B")]
        b: u8,
        #[serde(rename = "R", serialize_with = "hook")]
        r: Reverse,
        #[serde(rename = "C")]
        c: u8,
    }

    let lines = to_lines(&Record {
        a: 1,
        b: 2,
        r: Reverse,
        c: 3,
    })
    .unwrap();
    assert_eq!(lines, vec!["B: 2", "A: 1", "R: reversed", "C: 3"]);
}

#[test]
fn test_marshaler_error_aborts_encode() {
    struct TooLong;

    impl EncodeHeader for TooLong {
        fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
            lines.push(format!("{key}: partial"));
            Err(Error::marshal(format!("{key} is too long")))
        }
    }

    #[derive(Serialize)]
    struct Record {
        #[serde(rename = "A")]
        a: u8,
        #[serde(rename = "T", serialize_with = "hook")]
        t: TooLong,
        #[serde(rename = "C")]
        c: u8,
    }

    let err = to_lines(&Record {
        a: 1,
        t: TooLong,
        c: 3,
    })
    .unwrap_err();
    assert_eq!(err, Error::marshal("T is too long"));
}

#[test]
fn test_marshaler_inside_hook_can_encode_nested_values() {
    #[derive(Serialize)]
    struct Inner {
        #[serde(rename = "Inner")]
        inner: u8,
    }

    struct Nested;

    impl EncodeHeader for Nested {
        fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
            for line in to_lines(&Inner { inner: 9 })? {
                lines.push(format!("{key}-{line}"));
            }
            Ok(lines)
        }
    }

    #[derive(Serialize)]
    struct Outer {
        #[serde(rename = "X", serialize_with = "hook")]
        nested: Nested,
        #[serde(rename = "Y", serialize_with = "hook")]
        args: EncodedArgs,
    }

    let lines = to_lines(&Outer {
        nested: Nested,
        args: EncodedArgs(vec!["a".to_string()]),
    })
    .unwrap();
    assert_eq!(lines, vec!["X-Inner: 9", "Y.0: a"]);
}

#[test]
fn test_idempotent() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: String,
        extra: HeaderMap,
        #[serde(rename = "Date")]
        date: Timestamp,
    }

    let request = Request {
        host: "h".to_string(),
        extra: headers! { "A" => ["1", "2"], "B" => "3" },
        date: sample_time().into(),
    };

    assert_eq!(to_lines(&request).unwrap(), to_lines(&request).unwrap());
}

#[test]
fn test_container_keys_are_written_verbatim() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: &'static str,
        extra: HeaderMap,
    }

    let extra = headers! {
        "-" => "dash",
        "X-A,omitempty" => "v",
        ",weird" => "w",
        "Host" => "upstream",
        "X-Empty,omitempty" => "",
    };

    let lines = to_lines(&Request { host: "h", extra: extra.clone() }).unwrap();
    assert_eq!(
        lines,
        vec![
            "Host: h",
            "-: dash",
            "X-A,omitempty: v",
            ",weird: w",
            "Host: upstream",
            "X-Empty,omitempty: ",
        ]
    );

    // registered tags apply to record fields, not to container entries
    let options = HeaderOptions::new().with_tag("Host", "-").with_tag("-", "Dash");
    let lines = to_lines_with_options(&Request { host: "h", extra }, options).unwrap();
    assert_eq!(
        lines,
        vec![
            "-: dash",
            "X-A,omitempty: v",
            ",weird: w",
            "Host: upstream",
            "X-Empty,omitempty: ",
        ]
    );
}

#[test]
fn test_top_level_container_keys_are_written_verbatim() {
    let mut map = BTreeMap::new();
    map.insert("-", "dash");
    map.insert(",weird", "w");

    assert_eq!(to_lines(&map).unwrap(), vec![",weird: w", "-: dash"]);
}

struct Bearer(&'static str);

impl EncodeHeader for Bearer {
    fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
        lines.push(format!("{key}: Bearer {}", self.0));
        Ok(lines)
    }
}

impl Serialize for Bearer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        hook(self, serializer)
    }
}

#[test]
fn test_marshaler_through_serialize_impl() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Authorization")]
        auth: Bearer,
        #[serde(rename = "Proxy-Authorization")]
        proxy: Option<Bearer>,
    }

    let lines = to_lines(&Request {
        auth: Bearer("a"),
        proxy: Some(Bearer("p")),
    })
    .unwrap();
    assert_eq!(
        lines,
        vec!["Authorization: Bearer a", "Proxy-Authorization: Bearer p"]
    );
}

#[test]
fn test_none_marshaler_through_serialize_impl() {
    #[derive(Serialize)]
    struct Hooked {
        #[serde(rename = "Authorization", serialize_with = "hook")]
        auth: Option<Bearer>,
    }

    #[derive(Serialize)]
    struct Plain {
        #[serde(rename = "Authorization")]
        auth: Option<Bearer>,
    }

    // routed through `hook`, a missing marshaler adds nothing
    assert!(to_lines(&Hooked { auth: None }).unwrap().is_empty());
    assert_eq!(
        to_lines(&Hooked { auth: Some(Bearer("t")) }).unwrap(),
        vec!["Authorization: Bearer t"]
    );

    // otherwise None is an ordinary missing value
    assert_eq!(to_lines(&Plain { auth: None }).unwrap(), vec!["Authorization: "]);
}

#[test]
fn test_marshaler_with_sorted_maps() {
    #[derive(Serialize)]
    struct Request {
        #[serde(rename = "Host")]
        host: &'static str,
        #[serde(rename = "Authorization", serialize_with = "hook")]
        auth: Bearer,
        tokens: IndexMap<&'static str, Bearer>,
        #[serde(rename = "Accept")]
        accept: &'static str,
    }

    let mut tokens = IndexMap::new();
    tokens.insert("X-Zeta", Bearer("z"));
    tokens.insert("X-Alpha", Bearer("a"));

    let options = HeaderOptions::new().with_sorted_maps(true);
    let lines = to_lines_with_options(
        &Request {
            host: "h",
            auth: Bearer("t"),
            tokens,
            accept: "*/*",
        },
        options,
    )
    .unwrap();
    assert_eq!(
        lines,
        vec![
            "Host: h",
            "Authorization: Bearer t",
            "X-Alpha: Bearer a",
            "X-Zeta: Bearer z",
            "Accept: */*",
        ]
    );
}

#[test]
fn test_timestamps_outside_four_digit_years() {
    #[derive(Serialize)]
    struct Dates {
        #[serde(rename = "Date")]
        date: Timestamp,
        #[serde(rename = "Unix,unix")]
        unix: Timestamp,
    }

    let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
    let lines = to_lines(&Dates {
        date: far.into(),
        unix: far.into(),
    })
    .unwrap();
    assert_eq!(
        lines,
        vec!["Date: Sat, 01 Jan +10000 00:00:00 GMT", "Unix: 253402300800"]
    );

    let early = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();
    let lines = to_lines(&Dates {
        date: early.into(),
        unix: early.into(),
    })
    .unwrap();
    assert_eq!(
        lines,
        vec!["Date: Fri, 01 Jan -0001 00:00:00 GMT", "Unix: -62198755200"]
    );
}

#[test]
fn test_epoch_timestamp_is_zero_for_omitempty() {
    #[derive(Serialize)]
    struct Dates {
        #[serde(rename = "A,omitempty")]
        a: Timestamp,
        #[serde(rename = "B,omitempty,unix")]
        b: Option<Timestamp>,
    }

    let epoch = Timestamp::default();
    let lines = to_lines(&Dates { a: epoch, b: Some(epoch) }).unwrap();
    assert_eq!(lines, vec!["B: 0"]);
}
