// --- File: crates/payflow_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Payments API request/response shapes
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, Context,
    PayflowError,
};

pub use http::client::{create_client, default_client, DEFAULT_TIMEOUT_SECS};

pub use logging::{init, init_with_level, log_result, parse_level, with_scoped_logging};

pub use services::{BoxFuture, BoxedError, PaymentsApi};
