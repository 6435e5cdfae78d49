// --- File: crates/payflow_merchant/src/error.rs ---
use payflow_common::{config_error, external_service_error, validation_error, BoxedError, PayflowError};
use thiserror::Error;

use crate::charge::ChargeStep;
use crate::onboarding::OnboardingStep;

/// Errors raised by the onboarding and charge workflows.
#[derive(Error, Debug)]
pub enum MerchantError {
    /// The payments client was requested before it was configured.
    #[error("payments client has not been initialized")]
    NotInitialized,

    /// The payments client was configured twice.
    #[error("payments client has already been initialized")]
    AlreadyInitialized,

    #[error("Missing parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    #[error("Invalid parameters: {}", .0.join(", "))]
    InvalidParameters(Vec<String>),

    #[error("unable to create identity: {0}")]
    CreateIdentity(#[source] BoxedError),

    #[error("unable to create payment instrument: {0}")]
    CreatePaymentInstrument(#[source] BoxedError),

    #[error("unable to verify merchant: {0}")]
    CreateMerchant(#[source] BoxedError),

    #[error("unable to create payment charge: {0}")]
    CreateCharge(#[source] BoxedError),

    /// A step of the full onboarding sequence failed.
    #[error("unable to fully onboard merchant: {step} failed")]
    FullyOnboardMerchant {
        step: OnboardingStep,
        #[source]
        source: Box<MerchantError>,
    },

    /// A step of the full charge sequence failed.
    #[error("unable to complete payment: {step} failed")]
    FullyCreateCharge {
        step: ChargeStep,
        #[source]
        source: Box<MerchantError>,
    },
}

impl MerchantError {
    /// Stable name of the failure kind, independent of the message.
    pub fn kind(&self) -> &'static str {
        match self {
            MerchantError::NotInitialized | MerchantError::AlreadyInitialized => {
                "InitializationError"
            }
            MerchantError::MissingParameters(_) => "MissingParametersError",
            MerchantError::InvalidParameters(_) => "InvalidParametersError",
            MerchantError::CreateIdentity(_) => "CreateIdentityError",
            MerchantError::CreatePaymentInstrument(_) => "CreatePaymentInstrumentError",
            MerchantError::CreateMerchant(_) => "CreateMerchantError",
            MerchantError::CreateCharge(_) => "CreateChargeError",
            MerchantError::FullyOnboardMerchant { .. } => "FullyOnboardMerchantError",
            MerchantError::FullyCreateCharge { .. } => "FullyCreateChargeError",
        }
    }

    /// Offending field names of a parameter error.
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            MerchantError::MissingParameters(fields) | MerchantError::InvalidParameters(fields) => {
                Some(fields)
            }
            _ => None,
        }
    }

    /// The error returned by the payments API, looking through aggregate errors.
    pub fn api_error(&self) -> Option<&BoxedError> {
        match self {
            MerchantError::CreateIdentity(e)
            | MerchantError::CreatePaymentInstrument(e)
            | MerchantError::CreateMerchant(e)
            | MerchantError::CreateCharge(e) => Some(e),
            MerchantError::FullyOnboardMerchant { source, .. }
            | MerchantError::FullyCreateCharge { source, .. } => source.api_error(),
            _ => None,
        }
    }

    pub(crate) fn missing(field: &str) -> Self {
        MerchantError::MissingParameters(vec![field.to_string()])
    }

    pub(crate) fn invalid(field: &str) -> Self {
        MerchantError::InvalidParameters(vec![field.to_string()])
    }
}

/// Convert MerchantError to PayflowError
impl From<MerchantError> for PayflowError {
    fn from(err: MerchantError) -> Self {
        match err {
            MerchantError::NotInitialized | MerchantError::AlreadyInitialized => config_error(err),
            MerchantError::MissingParameters(_) | MerchantError::InvalidParameters(_) => {
                validation_error(err)
            }
            MerchantError::CreateIdentity(_)
            | MerchantError::CreatePaymentInstrument(_)
            | MerchantError::CreateMerchant(_)
            | MerchantError::CreateCharge(_) => external_service_error("Finix API", err),
            MerchantError::FullyOnboardMerchant { ref source, .. }
            | MerchantError::FullyCreateCharge { ref source, .. } => {
                let message = format!("{}: {}", err, source);
                match source.as_ref() {
                    MerchantError::MissingParameters(_) | MerchantError::InvalidParameters(_) => {
                        validation_error(message)
                    }
                    _ => external_service_error("Finix API", message),
                }
            }
        }
    }
}
