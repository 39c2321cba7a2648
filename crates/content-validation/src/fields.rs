//! Named field access for records.
//!
//! Records expose their fields, in declaration order, through
//! [`InspectFields`]. Most structs get an impl from [`inspect_fields!`];
//! maps and JSON objects are supported out of the box.

use crate::traits::{InspectFields, ToValidationValue};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use thiserror::Error;

/// Name used for a non-object JSON value passed as a record
pub const ROOT_FIELD: &str = "<root>";

/// A field whose value could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FieldReadError {
    pub reason: String,
}

impl FieldReadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One named field of a record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEntry {
    pub name: Cow<'static, str>,
    pub value: Result<Value, FieldReadError>,
}

impl FieldEntry {
    /// Field with a value that was read successfully
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl ToValidationValue) -> Self {
        Self {
            name: name.into(),
            value: Ok(value.to_validation_value()),
        }
    }

    /// Field read through serde; a serialization failure marks the field unreadable
    pub fn from_serialize<T>(name: impl Into<Cow<'static, str>>, value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self {
            name: name.into(),
            value: serde_json::to_value(value).map_err(|e| FieldReadError::new(e.to_string())),
        }
    }

    /// Field that could not be read
    pub fn unreadable(name: impl Into<Cow<'static, str>>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Err(FieldReadError::new(reason)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Implement [`InspectFields`] for a struct by listing its fields in
/// declaration order.
///
/// Every listed field must implement `serde::Serialize`.
///
/// ```
/// use content_validation::{inspect_fields, InspectFields};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct CreateUserRequest {
///     username: String,
///     email: Option<String>,
/// }
///
/// inspect_fields!(CreateUserRequest { username, email });
///
/// let request = CreateUserRequest { username: "alice".into(), email: None };
/// let names: Vec<_> = request
///     .inspect_fields()
///     .iter()
///     .map(|entry| entry.name().to_string())
///     .collect();
/// assert_eq!(names, ["username", "email"]);
/// ```
#[macro_export]
macro_rules! inspect_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::InspectFields for $ty {
            fn inspect_fields(&self) -> ::std::vec::Vec<$crate::FieldEntry> {
                ::std::vec![
                    $($crate::FieldEntry::from_serialize(stringify!($field), &self.$field)),*
                ]
            }
        }
    };
}

impl InspectFields for Vec<FieldEntry> {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.clone()
    }
}

impl InspectFields for [FieldEntry] {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.to_vec()
    }
}

/// Insertion order is kept (`serde_json` is built with `preserve_order`)
impl InspectFields for Map<String, Value> {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.iter()
            .map(|(name, value)| FieldEntry::new(name.clone(), value))
            .collect()
    }
}

impl InspectFields for Value {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        match self {
            Value::Object(map) => map.inspect_fields(),
            other => vec![FieldEntry::unreadable(
                ROOT_FIELD,
                format!("expected a JSON object, found {}", json_type_name(other)),
            )],
        }
    }
}

impl<V: ToValidationValue> InspectFields for [(&str, V)] {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.iter()
            .map(|(name, value)| FieldEntry::new(name.to_string(), value))
            .collect()
    }
}

impl<V: ToValidationValue, const N: usize> InspectFields for [(&str, V); N] {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.as_slice().inspect_fields()
    }
}

impl<V: ToValidationValue> InspectFields for Vec<(String, V)> {
    fn inspect_fields(&self) -> Vec<FieldEntry> {
        self.iter()
            .map(|(name, value)| FieldEntry::new(name.clone(), value))
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
