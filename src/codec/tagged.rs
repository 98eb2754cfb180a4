//! The self-describing `TypeName[payload]` wrapper.

/// Wraps `payload` as `tag[payload]`.
pub fn wrap(tag: &str, payload: &str) -> String {
    let mut result = String::with_capacity(tag.len() + payload.len() + 2);
    result.push_str(tag);
    result.push('[');
    result.push_str(payload);
    result.push(']');
    result
}

/// Removes an optional leading `tag[` and an optional trailing `]`.
///
/// Each is optional independently, so `tag[x]`, `tag[x`, `x]` and `x`
/// all strip to `x`.
pub fn strip<'a>(input: &'a str, tag: &str) -> &'a str {
    let body = input
        .strip_prefix(tag)
        .and_then(|rest| rest.strip_prefix('['))
        .unwrap_or(input);

    body.strip_suffix(']').unwrap_or(body)
}
