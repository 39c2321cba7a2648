//! Phone number shape check

use crate::validators::required::is_blank;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is a valid regex"));

/// True if `phone` is present, not blank, and consists of ASCII digits only.
///
/// The blank check trims but the digit match does not, so surrounding
/// whitespace makes an otherwise valid number fail.
pub(crate) fn is_valid_phone(phone: Option<&str>) -> bool {
    match phone {
        Some(phone) => !is_blank(Some(phone)) && DIGITS_REGEX.is_match(phone),
        None => false,
    }
}
