//! Writing header lines by hand with `EncodeHeader`.
//!
//! Run with: cargo run --example custom_hook

use header_lines::{hook, to_lines, EncodeHeader, Error, Result};
use serde::Serialize;

/// Positional arguments, written as `Arg.0`, `Arg.1`, ...
struct Args(Vec<String>);

impl EncodeHeader for Args {
    fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
        for (i, arg) in self.0.iter().enumerate() {
            lines.push(format!("{key}.{i}: {arg}"));
        }
        Ok(lines)
    }
}

/// Cookies folded into one line; refuses more than a handful.
struct Cookies(Vec<(&'static str, &'static str)>);

impl EncodeHeader for Cookies {
    fn encode_header(&self, key: &str, mut lines: Vec<String>) -> Result<Vec<String>> {
        if self.0.len() > 4 {
            return Err(Error::marshal(format!("{key}: too many cookies")));
        }
        let folded: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}={v}")).collect();
        lines.push(format!("{key}: {}", folded.join("; ")));
        Ok(lines)
    }
}

#[derive(Serialize)]
struct Call {
    #[serde(rename = "Method")]
    method: &'static str,
    #[serde(rename = "Arg", serialize_with = "hook")]
    args: Args,
    #[serde(rename = "Cookie", serialize_with = "hook")]
    cookies: Option<Cookies>,
}

fn main() {
    let call = Call {
        method: "sum",
        args: Args(vec!["1".to_string(), "2".to_string(), "3".to_string()]),
        cookies: Some(Cookies(vec![("session", "abc"), ("theme", "dark")])),
    };

    match to_lines(&call) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => eprintln!("encode failed: {e}"),
    }

    let too_many = Call {
        method: "sum",
        args: Args(Vec::new()),
        cookies: Some(Cookies(vec![("a", "1"); 5])),
    };

    match to_lines(&too_many) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("\nencode failed as expected: {e}"),
    }
}
