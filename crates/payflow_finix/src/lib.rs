// --- File: crates/payflow_finix/src/lib.rs ---

pub mod client;
pub mod error;

pub use client::{FinixClient, DEFAULT_API_VERSION, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use error::FinixError; // Re-export the error type
