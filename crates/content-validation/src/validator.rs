//! The entity validator

use crate::config::ValidatorConfig;
use crate::error::{ErrorKind, ValidationError, ValidationResult};
use crate::fields::FieldReadError;
use crate::traits::{EntityValidation, InspectFields};
use crate::validators::{email::is_valid_email, phone::is_valid_phone, required};

const LOG_TARGET: &str = "content_validation";

/// Stateless validator for content, user and request objects.
///
/// Holds nothing but logging flags, so a single instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityValidator {
    config: ValidatorConfig,
}

impl EntityValidator {
    /// Create a validator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn fail(&self, error: ValidationError) -> ValidationError {
        if self.config.log_failures {
            tracing::debug!(target: LOG_TARGET, code = error.code(), "{}", error.message());
        }
        error
    }

    fn fail_field(&self, error: ValidationError, field: &str) -> ValidationError {
        if self.config.log_failures {
            tracing::debug!(target: LOG_TARGET, code = error.code(), field, "{}", error.message());
        }
        error
    }

    fn fail_unreadable(&self, field: &str, reason: &FieldReadError) -> ValidationError {
        let error = ValidationError::new(
            ErrorKind::EmptyOrNullField,
            format!("Error occurred while validating field: {}", field),
        );
        if self.config.log_failures {
            tracing::debug!(target: LOG_TARGET, code = error.code(), field, reason = %reason, "{}", error.message());
        }
        error
    }

    /// Failure whose message embeds a caller value (an email or phone number)
    fn fail_value(&self, kind: ErrorKind, prefix: &str, value: &str) -> ValidationError {
        let error = ValidationError::new(kind, format!("{}{}", prefix, value));
        if self.config.log_failures {
            if self.config.redact_values {
                tracing::debug!(target: LOG_TARGET, code = error.code(), "{}<redacted>", prefix);
            } else {
                tracing::debug!(target: LOG_TARGET, code = error.code(), value, "{}", error.message());
            }
        }
        error
    }
}

impl EntityValidation for EntityValidator {
    fn validate_title_and_description<'a>(
        &self,
        title: impl Into<Option<&'a str>>,
        description: impl Into<Option<&'a str>>,
    ) -> ValidationResult<()> {
        if required::is_blank(title.into()) || required::is_blank(description.into()) {
            return Err(self.fail(ValidationError::new(
                ErrorKind::NullOrEmptyContent,
                "Title or description cannot be null or empty.",
            )));
        }
        tracing::trace!(target: LOG_TARGET, "title and description present");
        Ok(())
    }

    fn validate_content_id<'a>(&self, content_id: impl Into<Option<&'a str>>) -> ValidationResult<()> {
        if required::is_blank(content_id.into()) {
            return Err(self.fail(ValidationError::new(
                ErrorKind::NullOrEmptyContent,
                "Content ID cannot be null or empty.",
            )));
        }
        tracing::trace!(target: LOG_TARGET, "content id present");
        Ok(())
    }

    fn validate_optional_exists<T>(&self, content: Option<T>) -> ValidationResult<T> {
        let content = content.ok_or_else(|| self.fail(ValidationError::not_found_content()))?;
        tracing::trace!(target: LOG_TARGET, "content exists");
        Ok(content)
    }

    fn check_all_fields_non_empty<R>(&self, record: &R) -> ValidationResult<()>
    where
        R: InspectFields + ?Sized,
    {
        let fields = record.inspect_fields();

        for field in &fields {
            match &field.value {
                Ok(value) if required::is_empty_value(value) => {
                    return Err(self.fail_field(
                        ValidationError::new(
                            ErrorKind::EmptyOrNullField,
                            format!("Field {} cannot be null or empty.", field.name),
                        ),
                        &field.name,
                    ));
                }
                Ok(_) => {}
                Err(read_error) => return Err(self.fail_unreadable(&field.name, read_error)),
            }
        }

        tracing::trace!(target: LOG_TARGET, count = fields.len(), "all fields present");
        Ok(())
    }

    fn validate_email_format<'a>(&self, email: impl Into<Option<&'a str>>) -> ValidationResult<()> {
        let email = email.into();
        match is_valid_email(email) {
            Ok(true) => {
                tracing::trace!(target: LOG_TARGET, "email format valid");
                Ok(())
            }
            Ok(false) => Err(self.fail_value(
                ErrorKind::InvalidMailFormat,
                "Invalid email format: ",
                email.unwrap_or_default(),
            )),
            Err(error) => Err(self.fail(error)),
        }
    }

    fn validate_phone_format<'a>(&self, phone: impl Into<Option<&'a str>>) -> ValidationResult<()> {
        let phone = phone.into();
        if is_valid_phone(phone) {
            tracing::trace!(target: LOG_TARGET, "phone format valid");
            return Ok(());
        }
        Err(self.fail_value(
            ErrorKind::InvalidPhoneFormat,
            "Phone number should contain only numeric characters: ",
            phone.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldEntry;
    use serde_json::json;

    fn validator() -> EntityValidator {
        EntityValidator::with_config(ValidatorConfig::quiet())
    }

    #[test]
    fn test_title_and_description_present() {
        assert!(validator()
            .validate_title_and_description("Title", "Description")
            .is_ok());
        assert!(validator()
            .validate_title_and_description(Some("  Title "), Some("x"))
            .is_ok());
    }

    #[test]
    fn test_title_or_description_blank() {
        let cases: Vec<(Option<&str>, Option<&str>)> = vec![
            (None, Some("Description")),
            (Some("Title"), None),
            (Some(""), Some("Description")),
            (Some("Title"), Some("   ")),
            (None, None),
        ];

        for (title, description) in cases {
            let error = validator()
                .validate_title_and_description(title, description)
                .unwrap_err();
            assert_eq!(
                error,
                ValidationError::NullOrEmptyContent(
                    "Title or description cannot be null or empty.".to_string()
                ),
                "title={:?} description={:?}",
                title,
                description
            );
        }
    }

    #[test]
    fn test_non_ascii_space_is_content() {
        assert!(validator()
            .validate_title_and_description("\u{a0}", "Description")
            .is_ok());
        assert!(validator().validate_content_id("\u{a0}").is_ok());
    }

    #[test]
    fn test_control_characters_are_blank_content() {
        let error = validator().validate_content_id("\u{1}").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullOrEmptyContent);

        let error = validator()
            .validate_title_and_description("Title", "\u{1}\u{1f}")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullOrEmptyContent);
    }

    #[test]
    fn test_control_character_email_is_empty_or_null_field() {
        let error = validator().validate_email_format("\u{1}").unwrap_err();
        assert_eq!(
            error,
            ValidationError::EmptyOrNullField("Email cannot be null or empty.".to_string())
        );

        let error = validator().validate_email_format("\u{a0}").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidMailFormat);
    }

    #[test]
    fn test_control_character_field_is_empty() {
        let record = json!({ "name": "Alice", "bio": "\u{1}", "nick": "\u{a0}" });
        let error = validator().check_all_fields_non_empty(&record).unwrap_err();
        assert_eq!(error.message(), "Field bio cannot be null or empty.");

        let record = json!({ "nick": "\u{a0}" });
        assert!(validator().check_all_fields_non_empty(&record).is_ok());
    }

    #[test]
    fn test_content_id() {
        assert!(validator().validate_content_id("abc-123").is_ok());

        for id in [None, Some(""), Some(" \t ")] {
            let error = validator().validate_content_id(id).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::NullOrEmptyContent);
            assert_eq!(error.message(), "Content ID cannot be null or empty.");
        }
    }

    #[test]
    fn test_optional_exists() {
        let content = vec![1, 2, 3];
        assert_eq!(
            validator().validate_optional_exists(Some(content.clone())),
            Ok(content)
        );

        let error = validator()
            .validate_optional_exists::<String>(None)
            .unwrap_err();
        assert_eq!(error, ValidationError::NotFoundContent("Content not found.".to_string()));
    }

    #[test]
    fn test_all_fields_first_offender_wins() {
        let record = json!({
            "name": "Alice",
            "email": "",
            "phone": null,
        });

        let error = validator().check_all_fields_non_empty(&record).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyOrNullField);
        assert_eq!(error.message(), "Field email cannot be null or empty.");
    }

    #[test]
    fn test_all_fields_present() {
        let record = json!({
            "name": "Alice",
            "email": "a@b.com",
            "age": 0,
            "tags": [],
        });

        assert!(validator().check_all_fields_non_empty(&record).is_ok());
    }

    #[test]
    fn test_all_fields_with_no_fields() {
        let record: Vec<FieldEntry> = Vec::new();
        assert!(validator().check_all_fields_non_empty(&record).is_ok());
    }

    #[test]
    fn test_unreadable_field_is_reported_as_empty_or_null() {
        let record = vec![
            FieldEntry::new("name", "Alice"),
            FieldEntry::unreadable("avatar", "lock poisoned"),
            FieldEntry::new("email", ""),
        ];

        let error = validator().check_all_fields_non_empty(&record).unwrap_err();
        assert_eq!(
            error,
            ValidationError::EmptyOrNullField(
                "Error occurred while validating field: avatar".to_string()
            )
        );
    }

    #[test]
    fn test_email_format() {
        assert!(validator().validate_email_format("user@example.com").is_ok());

        let error = validator().validate_email_format("user@example").unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidMailFormat("Invalid email format: user@example".to_string())
        );

        let error = validator().validate_email_format("user@@example.com").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidMailFormat);
    }

    #[test]
    fn test_blank_email_is_empty_or_null_field() {
        for email in [None, Some(""), Some("  ")] {
            let error = validator().validate_email_format(email).unwrap_err();
            assert_eq!(
                error,
                ValidationError::EmptyOrNullField("Email cannot be null or empty.".to_string())
            );
        }
    }

    #[test]
    fn test_phone_format() {
        assert!(validator().validate_phone_format("5551234567").is_ok());

        for phone in ["555-123", "", "12a34"] {
            let error = validator().validate_phone_format(phone).unwrap_err();
            assert_eq!(
                error.message(),
                format!("Phone number should contain only numeric characters: {}", phone)
            );
            assert_eq!(error.kind(), ErrorKind::InvalidPhoneFormat);
        }
    }

    #[test]
    fn test_missing_phone() {
        let error = validator().validate_phone_format(None).unwrap_err();
        assert_eq!(
            error,
            ValidationError::InvalidPhoneFormat(
                "Phone number should contain only numeric characters: ".to_string()
            )
        );
    }

    #[test]
    fn test_phone_with_leading_whitespace_fails_format() {
        let error = validator().validate_phone_format(" 12345").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidPhoneFormat);
        assert_eq!(
            error.message(),
            "Phone number should contain only numeric characters:  12345"
        );
    }

    #[test]
    fn test_logging_config_does_not_change_outcomes() {
        let loud = EntityValidator::with_config(
            ValidatorConfig::new()
                .with_log_failures(true)
                .with_redact_values(false),
        );

        assert_eq!(
            loud.validate_email_format("bad").unwrap_err(),
            validator().validate_email_format("bad").unwrap_err()
        );
        assert!(!loud.config().redact_values);
    }
}
