// --- File: crates/payflow_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Processor used for merchant underwriting when nothing else is configured.
pub const DEFAULT_PROCESSOR: &str = "DUMMY_V1";

// --- Finix Environment ---
/// Which Finix deployment the client talks to.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FinixEnvironment {
    #[default]
    Sandbox,
    Production,
}

// --- Finix Config ---
// Credentials are usually "secret_from_env" markers in the config file and
// get replaced from PAYFLOW_SECRET_FINIX_USERNAME / PAYFLOW_SECRET_FINIX_PASSWORD
// (or the legacy FINIX_USERNAME / FINIX_PASSWORD).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FinixConfig {
    #[serde(default)]
    pub environment: FinixEnvironment,
    pub username: String, // Mandatory
    pub password: String, // Mandatory
    /// Overrides the environment's default API host (useful for mocks).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Value sent as the `Finix-Version` header.
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

// --- Onboarding Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OnboardingConfig {
    /// Underwriting processor, falls back to DEFAULT_PROCESSOR.
    #[serde(default)]
    pub processor: Option<String>,
}

impl OnboardingConfig {
    pub fn processor(&self) -> &str {
        self.processor.as_deref().unwrap_or(DEFAULT_PROCESSOR)
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error. Defaults to info.
    #[serde(default)]
    pub level: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub finix: Option<FinixConfig>,
    #[serde(default)]
    pub onboarding: OnboardingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
