//! Validator configuration.
//!
//! Configuration only affects how failures are logged. Rule outcomes and
//! messages are fixed.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

pub const LOG_FAILURES_ENV: &str = "CONTENT_VALIDATION_LOG_FAILURES";
pub const REDACT_VALUES_ENV: &str = "CONTENT_VALIDATION_REDACT_VALUES";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

/// Logging behaviour of [`EntityValidator`](crate::EntityValidator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Emit a `debug` event for every failed check
    pub log_failures: bool,
    /// Keep email addresses and phone numbers out of log events
    pub redact_values: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            log_failures: true,
            redact_values: true,
        }
    }
}

impl ValidatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silent configuration, for callers that log failures themselves
    pub fn quiet() -> Self {
        Self {
            log_failures: false,
            ..Self::default()
        }
    }

    pub fn with_log_failures(mut self, log_failures: bool) -> Self {
        self.log_failures = log_failures;
        self
    }

    pub fn with_redact_values(mut self, redact_values: bool) -> Self {
        self.redact_values = redact_values;
        self
    }

    /// Load configuration from environment variables, keeping defaults for
    /// unset ones
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LOG_FAILURES_ENV) {
            config.log_failures = parse_bool(LOG_FAILURES_ENV, &value)?;
        }
        if let Some(value) = lookup(REDACT_VALUES_ENV) {
            config.redact_values = parse_bool(REDACT_VALUES_ENV, &value)?;
        }

        Ok(config)
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_value(
            field,
            value,
            "a boolean (true/false, 1/0, yes/no, on/off)",
        )),
    }
}
