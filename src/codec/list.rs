//! Comma-separated decimal lists, the string form of scalar vectors.

use std::fmt::Display;
use std::str::FromStr;

use tracing::debug;

use super::tagged;
use crate::errors::{bad_format, Result};

/// Joins `values` with commas, optionally wrapped as `tag[...]`.
pub fn encode_list<T, I>(values: I, tag: Option<&str>) -> String
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    let mut payload = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            payload.push(',');
        }
        payload.push_str(&value.to_string());
    }

    match tag {
        Some(tag) => tagged::wrap(tag, &payload),
        None => payload,
    }
}

/// Parses a list produced by [`encode_list`](fn.encode_list.html).
///
/// An optional `tag[` prefix and `]` suffix are stripped, the rest is
/// split on commas and each field is parsed after trimming whitespace. An
/// empty payload is the empty list. A field that fails to parse fails the
/// whole list.
pub fn decode_list<T: FromStr>(input: &str, tag: &str, who: &'static str) -> Result<Vec<T>> {
    let payload = tagged::strip(input, tag);
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    payload
        .split(',')
        .enumerate()
        .map(|(index, field)| match field.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                debug!(index, field, "bad list field");
                bad_format(who, format!("field {} ({:?}) is not a number", index, field))
            }
        })
        .collect()
}
