//! Core validation traits

use crate::error::ValidationResult;
use crate::fields::FieldEntry;
use serde_json::Value;

/// Field and content sanity checks for request, content and user objects.
///
/// Every method either passes (optionally returning a value) or fails with
/// exactly one [`ValidationError`](crate::ValidationError). Checks fail fast:
/// the first violation found is the one reported.
///
/// String inputs accept `&str`, `Option<&str>` or `None`; `None` is treated
/// the same as a blank string.
pub trait EntityValidation {
    /// Fails with `NullOrEmptyContent` if either value is missing or blank.
    fn validate_title_and_description<'a>(
        &self,
        title: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
    ) -> ValidationResult<()>;

    /// Fails with `NullOrEmptyContent` if the id is missing or blank.
    fn validate_content_id<'a>(&self, content_id: impl Into<Option<&'a str>>) -> ValidationResult<()>;

    /// Unwraps `content`, failing with `NotFoundContent` when it is `None`.
    fn validate_optional_exists<T>(&self, content: Option<T>) -> ValidationResult<T>;

    /// Fails with `EmptyOrNullField` on the first field, in declaration
    /// order, that is null, a blank string, or unreadable.
    fn check_all_fields_non_empty<R>(&self, record: &R) -> ValidationResult<()>
    where
        R: InspectFields + ?Sized;

    /// Fails with `EmptyOrNullField` if the email is missing or blank, and
    /// with `InvalidMailFormat` if it is not a well-formed address.
    fn validate_email_format<'a>(&self, email: impl Into<Option<&'a str>>) -> ValidationResult<()>;

    /// Fails with `InvalidPhoneFormat` unless the number is made of digits only.
    fn validate_phone_format<'a>(&self, phone: impl Into<Option<&'a str>>) -> ValidationResult<()>;
}

/// Records that can list their named fields in declaration order
pub trait InspectFields {
    fn inspect_fields(&self) -> Vec<FieldEntry>;
}

impl<T: InspectFields + ?Sized> InspectFields for &T {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        (**self).inspect_fields()
    }
}

/// Values that can stand as a record field in a [`FieldEntry`]
pub trait ToValidationValue {
    fn to_validation_value(&self) -> Value;
}

impl<T: ToValidationValue + ?Sized> ToValidationValue for &T {
    fn to_validation_value(&self) -> Value {
        (**self).to_validation_value()
    }
}

impl ToValidationValue for str {
    fn to_validation_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValidationValue for String {
    fn to_validation_value(&self) -> Value {
        self.as_str().to_validation_value()
    }
}

impl ToValidationValue for i64 {
    fn to_validation_value(&self) -> Value {
        Value::from(*self)
    }
}

impl ToValidationValue for Value {
    fn to_validation_value(&self) -> Value {
        self.clone()
    }
}

/// `None` becomes JSON null, which the all-fields check treats as empty
impl<T: ToValidationValue> ToValidationValue for Option<T> {
    fn to_validation_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, T::to_validation_value)
    }
}
