//! # content-validation
//!
//! Field and content sanity checks for request, content and user objects.
//! Every check is a synchronous, fail-fast predicate: it passes, or returns
//! exactly one typed [`ValidationError`] that callers can match on.

pub mod config;
pub mod error;
pub mod fields;
pub mod traits;
pub mod validator;
mod validators;

// Re-exports for easy access
pub use config::{ConfigError, ValidatorConfig};
pub use error::{ErrorKind, ValidationError, ValidationResult};
pub use fields::{FieldEntry, FieldReadError};
pub use traits::{EntityValidation, InspectFields, ToValidationValue};
pub use validator::EntityValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<EntityValidator>();
        assert_send_sync::<ValidatorConfig>();
    }
}
