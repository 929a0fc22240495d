//! Configuration system error types.
//!
//! Domain-specific errors for validating settings, staging changes and
//! rewriting Workflows property files.

use thiserror::Error;

use crate::setting::SettingType;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Configuration system errors.
///
/// Every error is surfaced to the caller immediately. Nothing is retried
/// except acquiring a file lock, which never produces an error of its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A value's type disagrees with the declared type of the setting.
    #[error("Type mismatch: expected {expected} but received {received}")]
    TypeMismatch {
        expected: SettingType,
        received: SettingType,
    },

    /// A value is not a member of the setting's declared valid values.
    #[error("Invalid value '{value}'. Valid values are: {valid}")]
    InvalidValue { value: String, valid: String },

    /// A setting was looked up, renamed or removed but was never registered.
    #[error("Setting with key '{key}' not found")]
    KeyNotFound { key: String },

    /// Margins were supplied with a count other than 1 or 4.
    #[error("Expected 1 or 4 margin values but received {count}")]
    ValueCount { count: usize },

    /// The configurator does not support the requested operation.
    #[error("Operation '{operation}' is not supported by the {configurator} configurator")]
    UnsupportedOperation {
        operation: String,
        configurator: String,
    },

    /// A lock release was attempted by a party that does not hold the lock.
    #[error("Foreign lock: lock on {path} is not held by this process")]
    ForeignLock { path: String },

    /// A property file line is missing the expected separator.
    #[error("Malformed line in {path}: '{line}'")]
    MalformedLine { path: String, line: String },

    /// A target path does not refer to a regular file.
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("Failed to access file: {path} - {reason}")]
    FileAccess { path: String, reason: String },
}

impl ConfigurationError {
    /// Builds a [`ConfigurationError::FileAccess`] from an I/O error.
    pub(crate) fn file_access(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
