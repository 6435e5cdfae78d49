// --- File: crates/payflow_finix/src/client.rs ---
use payflow_common::models::{
    CreateIdentityRequest, CreateMerchantUnderwritingRequest, CreatePaymentInstrumentRequest,
    CreateTransferRequest, CreatedResource,
};
use payflow_common::{create_client, BoxFuture, PaymentsApi, DEFAULT_TIMEOUT_SECS};
use payflow_config::env_vars::SECRET_MARKER;
use payflow_config::{FinixConfig, FinixEnvironment};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::error::FinixError;

pub const SANDBOX_BASE_URL: &str = "https://finix.sandbox-payments-api.com";
pub const PRODUCTION_BASE_URL: &str = "https://finix.live-payments-api.com";
pub const DEFAULT_API_VERSION: &str = "2022-02-01";

/// API host for an environment.
pub fn base_url_for(environment: FinixEnvironment) -> &'static str {
    match environment {
        FinixEnvironment::Sandbox => SANDBOX_BASE_URL,
        FinixEnvironment::Production => PRODUCTION_BASE_URL,
    }
}

/// Client for the Finix REST API, authenticated with HTTP basic auth.
#[derive(Debug, Clone)]
pub struct FinixClient {
    http: Client,
    base_url: String,
    username: String,
    password: String,
    api_version: String,
}

impl FinixClient {
    /// Create a client for `environment` with the default timeout and API version.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        environment: FinixEnvironment,
    ) -> Result<Self, FinixError> {
        let username = username.into();
        let password = password.into();
        check_credential("username", &username)?;
        check_credential("password", &password)?;

        Ok(Self {
            http: create_client(DEFAULT_TIMEOUT_SECS, false)?,
            base_url: base_url_for(environment).to_string(),
            username,
            password,
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Create a client from the `[finix]` config section.
    pub fn from_config(config: &FinixConfig) -> Result<Self, FinixError> {
        let mut client = Self::new(
            config.username.clone(),
            config.password.clone(),
            config.environment,
        )?;
        if let Some(timeout_secs) = config.timeout_secs {
            client.http = create_client(timeout_secs, false)?;
        }
        if let Some(base_url) = &config.base_url {
            client = client.with_base_url(base_url.clone());
        }
        if let Some(api_version) = &config.api_version {
            client.api_version = api_version.clone();
        }
        Ok(client)
    }

    /// Point the client at another host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON to `path` and reads the created resource's id.
    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<CreatedResource, FinixError> {
        let api_url = format!("{}{}", self.base_url, path);
        info!("[Finix] Sending POST request to {}", api_url);

        let response = self
            .http
            .post(&api_url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Finix-Version", &self.api_version)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        info!("[Finix] API response status: {}", status);

        if status.is_success() {
            let resource: CreatedResource = serde_json::from_str(&body_text)?;
            info!("[Finix] Created resource {}", resource.id);
            Ok(resource)
        } else {
            let body = serde_json::from_str::<serde_json::Value>(&body_text).ok();
            let message = body
                .as_ref()
                .and_then(error_message)
                .unwrap_or_else(|| body_text.clone());
            error!(
                "[Finix] API request to {} failed with HTTP status: {}. Message: {}",
                path, status, message
            );
            Err(FinixError::ApiError {
                status_code: status.as_u16(),
                message,
                body,
            })
        }
    }
}

/// First message of a Finix error envelope:
/// `{"_embedded": {"errors": [{"code": "...", "message": "..."}]}}`
fn error_message(body: &serde_json::Value) -> Option<String> {
    body.get("_embedded")
        .and_then(|e| e.get("errors"))
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(|m| m.as_str())
        .map(String::from)
}

fn check_credential(name: &str, value: &str) -> Result<(), FinixError> {
    if value.is_empty() || value == SECRET_MARKER {
        return Err(FinixError::ConfigError(format!(
            "Finix {} is not set",
            name
        )));
    }
    Ok(())
}

impl PaymentsApi for FinixClient {
    type Error = FinixError;

    fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move { self.post("/identities", &request).await })
    }

    fn create_payment_instrument(
        &self,
        request: CreatePaymentInstrumentRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move { self.post("/payment_instruments", &request).await })
    }

    fn create_merchant(
        &self,
        identity_id: &str,
        request: CreateMerchantUnderwritingRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        let path = format!("/identities/{}/merchants", identity_id);
        Box::pin(async move { self.post(&path, &request).await })
    }

    fn create_transfer(
        &self,
        request: CreateTransferRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move { self.post("/transfers", &request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_for_environment() {
        assert_eq!(base_url_for(FinixEnvironment::Sandbox), SANDBOX_BASE_URL);
        assert_eq!(base_url_for(FinixEnvironment::Production), PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_new_rejects_unresolved_credentials() {
        let err = FinixClient::new("USxyz", "secret_from_env", FinixEnvironment::Sandbox)
            .unwrap_err();
        assert!(matches!(err, FinixError::ConfigError(_)));

        let err = FinixClient::new("", "pw", FinixEnvironment::Sandbox).unwrap_err();
        assert!(matches!(err, FinixError::ConfigError(_)));
    }

    #[test]
    fn test_from_config_overrides() {
        let config = FinixConfig {
            environment: FinixEnvironment::Production,
            username: "USxyz".to_string(),
            password: "pw".to_string(),
            base_url: Some("http://127.0.0.1:9999/".to_string()),
            api_version: Some("2018-01-01".to_string()),
            timeout_secs: Some(5),
        };
        let client = FinixClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(client.api_version, "2018-01-01");
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body = json!({
            "total": 1,
            "_embedded": { "errors": [
                { "code": "INVALID_FIELD", "message": "tax_id must be 9 digits" }
            ]}
        });
        assert_eq!(error_message(&body).as_deref(), Some("tax_id must be 9 digits"));
        assert_eq!(error_message(&json!({ "message": "nope" })), None);
    }
}
