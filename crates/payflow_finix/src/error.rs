// --- File: crates/payflow_finix/src/error.rs ---
use payflow_common::{external_service_error, PayflowError};
use thiserror::Error;

/// Finix-specific error types.
#[derive(Error, Debug)]
pub enum FinixError {
    /// Error occurred during a Finix API request
    #[error("Finix API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Finix API. `body` keeps the parsed JSON error payload.
    #[error("Finix API returned an error: {message} (Status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// Error parsing Finix API response
    #[error("Failed to parse Finix API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Finix configuration
    #[error("Finix configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl FinixError {
    /// The JSON error payload returned by the API, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            FinixError::ApiError { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Convert FinixError to PayflowError
impl From<FinixError> for PayflowError {
    fn from(err: FinixError) -> Self {
        match err {
            FinixError::RequestError(e) => {
                PayflowError::HttpError(format!("Finix request error: {}", e))
            }
            FinixError::ApiError {
                status_code,
                message,
                ..
            } => external_service_error(
                "Finix API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            FinixError::ParseError(e) => {
                PayflowError::ParseError(format!("Finix response parse error: {}", e))
            }
            FinixError::ConfigError(msg) => PayflowError::ConfigError(msg),
        }
    }
}
