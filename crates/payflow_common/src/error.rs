// --- File: crates/payflow_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all payflow errors.
///
/// Each crate keeps its own error enum and implements `From<SpecificError> for PayflowError`
/// so binaries can surface one type.
#[derive(Error, Debug)]
pub enum PayflowError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Caller-supplied data failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, PayflowError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, PayflowError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PayflowError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| internal_error(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, PayflowError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| internal_error(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for PayflowError {
    fn from(err: reqwest::Error) -> Self {
        PayflowError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for PayflowError {
    fn from(err: serde_json::Error) -> Self {
        PayflowError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PayflowError {
    fn from(err: std::io::Error) -> Self {
        PayflowError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> PayflowError {
    PayflowError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> PayflowError {
    PayflowError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> PayflowError {
    PayflowError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> PayflowError {
    PayflowError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_as_internal_error() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        let err = result.context("reading demo input").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Internal error: reading demo input: no such file"
        );
    }

    #[test]
    fn test_external_service_error_display() {
        let err = external_service_error("Finix API", "Status: 422, Message: bad tax id");
        assert_eq!(
            err.to_string(),
            "External service error: Finix API - Status: 422, Message: bad tax id"
        );
    }
}
