//! Encoding a request struct as header lines.
//!
//! Run with: cargo run --example simple

use header_lines::{headers, to_lines, to_string, HeaderMap, Timestamp};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Auth {
    #[serde(rename = "Authorization,omitempty")]
    token: Option<String>,
}

#[derive(Serialize)]
struct Request {
    #[serde(rename = "Host")]
    host: String,
    #[serde(rename = "Accept")]
    accept: Vec<&'static str>,
    #[serde(flatten)]
    auth: Auth,
    #[serde(rename = "Content-Length,omitempty")]
    content_length: u64,
    #[serde(rename = "X-Cached,int")]
    cached: bool,
    #[serde(rename = "Date")]
    date: Timestamp,
    #[serde(rename = "X-Expires,unix")]
    expires: Timestamp,
    extra: HeaderMap,
}

fn main() -> Result<(), Box<dyn Error>> {
    let now = Timestamp::now();
    let request = Request {
        host: "example.com".to_string(),
        accept: vec!["text/html", "*/*"],
        auth: Auth {
            token: Some("Bearer abc".to_string()),
        },
        content_length: 0,
        cached: true,
        date: now,
        expires: now,
        extra: headers! {
            "X-Forwarded-For" => ["10.0.0.1", "10.0.0.2"],
        },
    };

    println!("Lines:");
    for line in to_lines(&request)? {
        println!("  {line}");
    }

    // Joined block, CRLF-terminated
    let block = to_string(&request)?;
    println!("\nBlock ({} bytes):\n{}", block.len(), block.replace("\r\n", "\n"));

    Ok(())
}
