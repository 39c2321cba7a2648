//! Email address shape check

use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::validators::required::is_blank;
use once_cell::sync::Lazy;
use regex::Regex;

/// Local part, `@`, domain, a dot, then a 2 to 6 letter top-level domain
pub(crate) const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check whether `email` is a well-formed address.
///
/// A missing or blank address is an error rather than `false`. The pattern
/// is matched against the untrimmed string.
pub(crate) fn is_valid_email(email: Option<&str>) -> ValidationResult<bool> {
    match email {
        Some(email) if !is_blank(Some(email)) => Ok(EMAIL_REGEX.is_match(email)),
        _ => Err(ValidationError::new(
            ErrorKind::EmptyOrNullField,
            "Email cannot be null or empty.",
        )),
    }
}
