//! Lenient `.properties` parsing
//!
//! Lines are matched against simple patterns; anything that does not look
//! like `key=value` is dropped rather than reported.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r]+").expect("valid line break pattern"));

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#").expect("valid comment pattern"));

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S.*?)\s*=\s*(.*?)\s*$").expect("valid entry pattern"));

/// Parse properties text into a key/value map
///
/// Later duplicates overwrite earlier ones.
pub fn parse(text: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();

    for line in LINE_BREAKS.split(text) {
        if COMMENT.is_match(line) {
            continue;
        }
        if let Some(caps) = ENTRY.captures(line) {
            props.insert(caps[1].to_string(), caps[2].to_string());
        }
    }

    props
}

/// Write a map back out, one `key=value` line per entry, sorted by key
pub fn to_properties<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut lines: Vec<_> = entries.into_iter().collect();
    lines.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (key, value) in lines {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
