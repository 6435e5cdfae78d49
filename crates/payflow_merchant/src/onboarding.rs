// --- File: crates/payflow_merchant/src/onboarding.rs ---
//! Seller onboarding: identity, then payout bank account, then merchant
//! underwriting on a processor.

use payflow_common::{BoxedError, PaymentsApi};
use payflow_config::DEFAULT_PROCESSOR;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::MerchantError;
use crate::handle::ClientHandle;
use crate::mapper::{to_identity_request, to_merchant_request, to_payment_instrument_request};
use crate::schema::{BANK_ACCOUNT_FIELDS, ENTITY_FIELDS, UNDERWRITING_FIELDS};
use crate::validate::{filter, validate, FieldBag};

/// A single onboarding transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    CreateIdentity,
    CreatePaymentInstrument,
    CreateMerchant,
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnboardingStep::CreateIdentity => write!(f, "createIdentity"),
            OnboardingStep::CreatePaymentInstrument => write!(f, "createPaymentInstrument"),
            OnboardingStep::CreateMerchant => write!(f, "createMerchant"),
        }
    }
}

/// How far a seller has progressed, derived from which ids are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStage {
    NoIdentity,
    HasIdentity,
    HasInstrument,
    Complete,
}

/// Ids created so far. An id is only ever set from a successful API response
/// or from the caller's data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub identity_id: Option<String>,
    pub payment_instrument_id: Option<String>,
    pub merchant_id: Option<String>,
}

impl OnboardingState {
    /// Reads previously created ids from caller data. Empty strings count as absent.
    pub fn from_data(data: &FieldBag) -> Self {
        Self {
            identity_id: id_field(data, "identityId"),
            payment_instrument_id: id_field(data, "paymentInstrumentId"),
            merchant_id: id_field(data, "merchantId"),
        }
    }

    pub fn stage(&self) -> OnboardingStage {
        match (
            &self.identity_id,
            &self.payment_instrument_id,
            &self.merchant_id,
        ) {
            (None, _, _) => OnboardingStage::NoIdentity,
            (Some(_), None, _) => OnboardingStage::HasIdentity,
            (Some(_), Some(_), None) => OnboardingStage::HasInstrument,
            (Some(_), Some(_), Some(_)) => OnboardingStage::Complete,
        }
    }

    /// The transition that moves this state forward, if any.
    pub fn next_step(&self) -> Option<OnboardingStep> {
        match self.stage() {
            OnboardingStage::NoIdentity => Some(OnboardingStep::CreateIdentity),
            OnboardingStage::HasIdentity => Some(OnboardingStep::CreatePaymentInstrument),
            OnboardingStage::HasInstrument => Some(OnboardingStep::CreateMerchant),
            OnboardingStage::Complete => None,
        }
    }
}

pub(crate) fn id_field(data: &FieldBag, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(String::from)
}

/// Ids of a fully onboarded seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResult {
    pub identity_id: String,
    pub bank_account_id: String,
    pub merchant_id: String,
}

/// Drives one seller through onboarding.
pub struct OnboardingMerchant<C: PaymentsApi> {
    client: Arc<C>,
    processor: String,
    state: OnboardingState,
    underwriting_data: FieldBag,
    entity_data: FieldBag,
    payment_instrument_data: FieldBag,
}

impl<C: PaymentsApi> OnboardingMerchant<C> {
    /// Splits `data` into its field groups and picks up any ids it already carries.
    ///
    /// The processor is taken from `data["processor"]`, defaulting to the
    /// sandbox dummy processor.
    pub fn new(client: Arc<C>, data: &FieldBag) -> Self {
        let processor = id_field(data, "processor").unwrap_or_else(|| DEFAULT_PROCESSOR.to_string());

        Self {
            client,
            processor,
            state: OnboardingState::from_data(data),
            underwriting_data: filter(data, &UNDERWRITING_FIELDS).data,
            entity_data: filter(data, &ENTITY_FIELDS).data,
            payment_instrument_data: filter(data, &BANK_ACCOUNT_FIELDS).data,
        }
    }

    /// Like [`OnboardingMerchant::new`], with the client taken from `handle`.
    pub fn from_handle(handle: &ClientHandle<C>, data: &FieldBag) -> Result<Self, MerchantError> {
        Ok(Self::new(handle.get()?, data))
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn stage(&self) -> OnboardingStage {
        self.state.stage()
    }

    pub fn identity_id(&self) -> Option<&str> {
        self.state.identity_id.as_deref()
    }

    pub fn payment_instrument_id(&self) -> Option<&str> {
        self.state.payment_instrument_id.as_deref()
    }

    pub fn merchant_id(&self) -> Option<&str> {
        self.state.merchant_id.as_deref()
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    /// Creates the seller identity from the entity and underwriting data.
    pub async fn create_identity(&mut self) -> Result<&str, MerchantError> {
        validate(&self.underwriting_data, &UNDERWRITING_FIELDS)?;
        validate(&self.entity_data, &ENTITY_FIELDS)?;
        let request = to_identity_request(&self.entity_data, Some(&self.underwriting_data))?;

        let created = self
            .client
            .create_identity(request)
            .await
            .map_err(|e| MerchantError::CreateIdentity(BoxedError::new(e)))?;

        info!("[Onboarding] Created identity {}", created.id);
        Ok(self.state.identity_id.insert(created.id).as_str())
    }

    /// Attaches the payout bank account to the seller identity.
    pub async fn create_payment_instrument(&mut self) -> Result<&str, MerchantError> {
        let identity_id = self
            .state
            .identity_id
            .clone()
            .ok_or_else(|| MerchantError::missing("identityId"))?;
        validate(&self.payment_instrument_data, &BANK_ACCOUNT_FIELDS)?;
        let request = to_payment_instrument_request(&self.payment_instrument_data, &identity_id)?;

        let created = self
            .client
            .create_payment_instrument(request)
            .await
            .map_err(|e| MerchantError::CreatePaymentInstrument(BoxedError::new(e)))?;

        info!(
            "[Onboarding] Created bank account {} for identity {}",
            created.id, identity_id
        );
        Ok(self.state.payment_instrument_id.insert(created.id).as_str())
    }

    /// Underwrites the seller identity as a merchant on the configured processor.
    pub async fn create_merchant(&mut self) -> Result<&str, MerchantError> {
        let identity_id = self
            .state
            .identity_id
            .clone()
            .ok_or_else(|| MerchantError::missing("identityId"))?;
        let request = to_merchant_request(&self.processor);

        let created = self
            .client
            .create_merchant(&identity_id, request)
            .await
            .map_err(|e| MerchantError::CreateMerchant(BoxedError::new(e)))?;

        info!(
            "[Onboarding] Created merchant {} on {}",
            created.id, self.processor
        );
        Ok(self.state.merchant_id.insert(created.id).as_str())
    }

    /// Runs every step still outstanding, in order.
    ///
    /// Steps whose id is already known are skipped. Without an identity any
    /// instrument or merchant id is stale and is discarded first. Ids created
    /// before a failure are kept, so calling again resumes at the failed step.
    pub async fn fully_onboard_merchant(&mut self) -> Result<OnboardingResult, MerchantError> {
        if self.state.identity_id.is_none() {
            self.state.payment_instrument_id = None;
            self.state.merchant_id = None;
        }

        while let Some(step) = self.state.next_step() {
            info!("[Onboarding] Running step {}", step);
            let outcome = match step {
                OnboardingStep::CreateIdentity => self.create_identity().await.map(|_| ()),
                OnboardingStep::CreatePaymentInstrument => {
                    self.create_payment_instrument().await.map(|_| ())
                }
                OnboardingStep::CreateMerchant => self.create_merchant().await.map(|_| ()),
            };

            if let Err(source) = outcome {
                error!("[Onboarding] Step {} failed: {}", step, source);
                return Err(MerchantError::FullyOnboardMerchant {
                    step,
                    source: Box::new(source),
                });
            }
        }

        info!("[Onboarding] Merchant fully onboarded");
        Ok(OnboardingResult {
            identity_id: self.state.identity_id.clone().unwrap_or_default(),
            bank_account_id: self.state.payment_instrument_id.clone().unwrap_or_default(),
            merchant_id: self.state.merchant_id.clone().unwrap_or_default(),
        })
    }
}
