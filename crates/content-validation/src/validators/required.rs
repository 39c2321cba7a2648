//! Presence checks

use serde_json::Value;

/// Strip leading and trailing space and ASCII control characters.
///
/// Everything at or below U+0020 is stripped; non-ASCII spaces such as
/// NBSP are kept.
pub(crate) fn trim_controls(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// True if the string is missing or contains only space and control characters
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| trim_controls(s).is_empty())
}

/// True if a field value counts as empty: JSON null or a blank string.
///
/// Numbers, booleans, arrays and objects are always present, even when
/// zero, false or empty.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => trim_controls(s).is_empty(),
        _ => false,
    }
}
