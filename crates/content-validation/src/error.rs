//! Validation failure signals

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Category of a validation failure, without its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ContentLimitExceeded,
    EmptyOrNullField,
    InvalidMailFormat,
    InvalidPhoneFormat,
    NotFoundContent,
    NotFoundUser,
    NullOrEmptyContent,
    UnUniqueUsername,
}

impl ErrorKind {
    /// Every kind, in a stable order
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::ContentLimitExceeded,
        ErrorKind::EmptyOrNullField,
        ErrorKind::InvalidMailFormat,
        ErrorKind::InvalidPhoneFormat,
        ErrorKind::NotFoundContent,
        ErrorKind::NotFoundUser,
        ErrorKind::NullOrEmptyContent,
        ErrorKind::UnUniqueUsername,
    ];

    /// Message used when no custom message is supplied
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::ContentLimitExceeded => "The content limit has been exceeded.",
            ErrorKind::EmptyOrNullField => "One or more required fields are empty or null.",
            ErrorKind::InvalidMailFormat => "The provided email address is in an invalid format.",
            ErrorKind::InvalidPhoneFormat => "The provided phone number is in an invalid format.",
            ErrorKind::NotFoundContent => "Content not found.",
            ErrorKind::NotFoundUser => "User not found.",
            ErrorKind::NullOrEmptyContent => "Content cannot be null or empty.",
            ErrorKind::UnUniqueUsername => "The username must be unique.",
        }
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::ContentLimitExceeded => "content_limit_exceeded",
            ErrorKind::EmptyOrNullField => "empty_or_null_field",
            ErrorKind::InvalidMailFormat => "invalid_mail_format",
            ErrorKind::InvalidPhoneFormat => "invalid_phone_format",
            ErrorKind::NotFoundContent => "not_found_content",
            ErrorKind::NotFoundUser => "not_found_user",
            ErrorKind::NullOrEmptyContent => "null_or_empty_content",
            ErrorKind::UnUniqueUsername => "un_unique_username",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single validation failure.
///
/// Each variant is one rule category and carries the human-readable message.
/// Callers are expected to match on the variant (or on [`ErrorKind`]) rather
/// than parse the message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{0}")]
    ContentLimitExceeded(String),

    #[error("{0}")]
    EmptyOrNullField(String),

    #[error("{0}")]
    InvalidMailFormat(String),

    #[error("{0}")]
    InvalidPhoneFormat(String),

    #[error("{0}")]
    NotFoundContent(String),

    #[error("{0}")]
    NotFoundUser(String),

    #[error("{0}")]
    NullOrEmptyContent(String),

    #[error("{0}")]
    UnUniqueUsername(String),
}

impl ValidationError {
    /// Create an error of the given kind with a custom message.
    ///
    /// A blank message is replaced by the kind's default so that messages
    /// are never empty.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            kind.default_message().to_string()
        } else {
            message
        };

        match kind {
            ErrorKind::ContentLimitExceeded => Self::ContentLimitExceeded(message),
            ErrorKind::EmptyOrNullField => Self::EmptyOrNullField(message),
            ErrorKind::InvalidMailFormat => Self::InvalidMailFormat(message),
            ErrorKind::InvalidPhoneFormat => Self::InvalidPhoneFormat(message),
            ErrorKind::NotFoundContent => Self::NotFoundContent(message),
            ErrorKind::NotFoundUser => Self::NotFoundUser(message),
            ErrorKind::NullOrEmptyContent => Self::NullOrEmptyContent(message),
            ErrorKind::UnUniqueUsername => Self::UnUniqueUsername(message),
        }
    }

    /// Create an error of the given kind with its default message
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    pub fn content_limit_exceeded() -> Self {
        Self::from_kind(ErrorKind::ContentLimitExceeded)
    }

    pub fn empty_or_null_field() -> Self {
        Self::from_kind(ErrorKind::EmptyOrNullField)
    }

    pub fn invalid_mail_format() -> Self {
        Self::from_kind(ErrorKind::InvalidMailFormat)
    }

    pub fn invalid_phone_format() -> Self {
        Self::from_kind(ErrorKind::InvalidPhoneFormat)
    }

    pub fn not_found_content() -> Self {
        Self::from_kind(ErrorKind::NotFoundContent)
    }

    pub fn not_found_user() -> Self {
        Self::from_kind(ErrorKind::NotFoundUser)
    }

    pub fn null_or_empty_content() -> Self {
        Self::from_kind(ErrorKind::NullOrEmptyContent)
    }

    pub fn un_unique_username() -> Self {
        Self::from_kind(ErrorKind::UnUniqueUsername)
    }

    /// The rule category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ContentLimitExceeded(_) => ErrorKind::ContentLimitExceeded,
            Self::EmptyOrNullField(_) => ErrorKind::EmptyOrNullField,
            Self::InvalidMailFormat(_) => ErrorKind::InvalidMailFormat,
            Self::InvalidPhoneFormat(_) => ErrorKind::InvalidPhoneFormat,
            Self::NotFoundContent(_) => ErrorKind::NotFoundContent,
            Self::NotFoundUser(_) => ErrorKind::NotFoundUser,
            Self::NullOrEmptyContent(_) => ErrorKind::NullOrEmptyContent,
            Self::UnUniqueUsername(_) => ErrorKind::UnUniqueUsername,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        match self {
            Self::ContentLimitExceeded(message)
            | Self::EmptyOrNullField(message)
            | Self::InvalidMailFormat(message)
            | Self::InvalidPhoneFormat(message)
            | Self::NotFoundContent(message)
            | Self::NotFoundUser(message)
            | Self::NullOrEmptyContent(message)
            | Self::UnUniqueUsername(message) => message,
        }
    }

    /// Error code for programmatic handling
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Convert to a JSON-serializable format for API responses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.message(),
            }
        })
    }
}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}
