// --- File: crates/payflow_merchant/src/charge.rs ---
//! Buyer charges: buyer identity, card, then a transfer to an onboarded merchant.

use payflow_common::{BoxedError, PaymentsApi};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::MerchantError;
use crate::handle::ClientHandle;
use crate::mapper::{to_charge_request, to_identity_request, to_payment_instrument_request};
use crate::onboarding::id_field;
use crate::schema::{BUYER_FIELDS, CARD_FIELDS, CHARGE_FIELDS};
use crate::validate::{filter, validate, FieldBag};

/// A single step of a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStep {
    CreateBuyerIdentity,
    CreatePaymentInstrument,
    CreateCharge,
}

impl fmt::Display for ChargeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeStep::CreateBuyerIdentity => write!(f, "createBuyerIdentity"),
            ChargeStep::CreatePaymentInstrument => write!(f, "createPaymentInstrument"),
            ChargeStep::CreateCharge => write!(f, "createCharge"),
        }
    }
}

/// Buyer identity, buyer card and receiving merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantChargeState {
    pub identity_id: Option<String>,
    pub payment_id: Option<String>,
    pub merchant_id: Option<String>,
}

impl MerchantChargeState {
    pub fn from_data(data: &FieldBag) -> Self {
        Self {
            identity_id: id_field(data, "identityId"),
            payment_id: id_field(data, "paymentId"),
            merchant_id: id_field(data, "merchantId"),
        }
    }
}

/// Ids produced by a completed charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeReceipt {
    pub identity_id: String,
    pub payment_instrument_id: String,
    pub transfer_id: String,
}

/// Charges one buyer on behalf of one merchant.
pub struct MerchantCharge<C: PaymentsApi> {
    client: Arc<C>,
    state: MerchantChargeState,
    entity_data: FieldBag,
    payment_instrument_data: FieldBag,
}

impl<C: PaymentsApi> MerchantCharge<C> {
    pub fn new(client: Arc<C>, data: &FieldBag) -> Self {
        Self {
            client,
            state: MerchantChargeState::from_data(data),
            entity_data: filter(data, &BUYER_FIELDS).data,
            payment_instrument_data: filter(data, &CARD_FIELDS).data,
        }
    }

    pub fn from_handle(handle: &ClientHandle<C>, data: &FieldBag) -> Result<Self, MerchantError> {
        Ok(Self::new(handle.get()?, data))
    }

    pub fn state(&self) -> &MerchantChargeState {
        &self.state
    }

    pub fn set_merchant(&mut self, merchant_id: impl Into<String>) {
        self.state.merchant_id = Some(merchant_id.into());
    }

    /// Merges buyer fields into the stored buyer data. Unknown keys are dropped.
    pub fn set_buyer_identity(&mut self, data: &FieldBag) {
        self.entity_data.extend(filter(data, &BUYER_FIELDS).data);
    }

    /// Merges card fields into the stored card data. Unknown keys are dropped.
    pub fn set_payment_instrument(&mut self, data: &FieldBag) {
        self.payment_instrument_data
            .extend(filter(data, &CARD_FIELDS).data);
    }

    pub async fn create_buyer_identity(&mut self) -> Result<&str, MerchantError> {
        validate(&self.entity_data, &BUYER_FIELDS)?;
        let request = to_identity_request(&self.entity_data, None)?;

        let created = self
            .client
            .create_identity(request)
            .await
            .map_err(|e| MerchantError::CreateIdentity(BoxedError::new(e)))?;

        info!("[Charge] Created buyer identity {}", created.id);
        Ok(self.state.identity_id.insert(created.id).as_str())
    }

    /// Attaches the buyer's card to the buyer identity.
    pub async fn create_payment_instrument(&mut self) -> Result<&str, MerchantError> {
        let identity_id = self
            .state
            .identity_id
            .clone()
            .ok_or_else(|| MerchantError::missing("identityId"))?;
        validate(&self.payment_instrument_data, &CARD_FIELDS)?;
        let request = to_payment_instrument_request(&self.payment_instrument_data, &identity_id)?;

        let created = self
            .client
            .create_payment_instrument(request)
            .await
            .map_err(|e| MerchantError::CreatePaymentInstrument(BoxedError::new(e)))?;

        info!("[Charge] Created card {} for buyer {}", created.id, identity_id);
        Ok(self.state.payment_id.insert(created.id).as_str())
    }

    /// Moves `amount` in `currency` from the stored card to the stored merchant.
    ///
    /// `source` and `merchant` are always the stored ids: values for them in
    /// `data` are ignored. Each call sends a fresh idempotency id.
    pub async fn create_charge(&mut self, data: &FieldBag) -> Result<String, MerchantError> {
        let mut charge = filter(data, &CHARGE_FIELDS).data;
        charge.remove("source");
        charge.remove("merchant");
        if let Some(payment_id) = &self.state.payment_id {
            charge.insert("source".to_string(), Value::String(payment_id.clone()));
        }
        if let Some(merchant_id) = &self.state.merchant_id {
            charge.insert("merchant".to_string(), Value::String(merchant_id.clone()));
        }
        validate(&charge, &CHARGE_FIELDS)?;

        let merchant_id = self.state.merchant_id.as_deref().unwrap_or_default();
        let payment_id = self.state.payment_id.as_deref().unwrap_or_default();
        let mut request = to_charge_request(&charge, merchant_id, payment_id)?;
        request.idempotency_id = Some(Uuid::new_v4().to_string());

        info!(
            "[Charge] Charging {} {} from {} to merchant {}",
            request.amount, request.currency, request.source, request.merchant
        );
        let created = self
            .client
            .create_transfer(request)
            .await
            .map_err(|e| MerchantError::CreateCharge(BoxedError::new(e)))?;

        info!("[Charge] Created transfer {}", created.id);
        Ok(created.id)
    }

    /// Creates a buyer identity and card, then charges it.
    ///
    /// The identity and card are created anew on every call, even if the
    /// state already has ids.
    pub async fn fully_create_charge(
        &mut self,
        data: &FieldBag,
    ) -> Result<ChargeReceipt, MerchantError> {
        let identity_id = self
            .create_buyer_identity()
            .await
            .map(String::from)
            .map_err(|e| Self::step_failed(ChargeStep::CreateBuyerIdentity, e))?;
        let payment_instrument_id = self
            .create_payment_instrument()
            .await
            .map(String::from)
            .map_err(|e| Self::step_failed(ChargeStep::CreatePaymentInstrument, e))?;
        let transfer_id = self
            .create_charge(data)
            .await
            .map_err(|e| Self::step_failed(ChargeStep::CreateCharge, e))?;

        Ok(ChargeReceipt {
            identity_id,
            payment_instrument_id,
            transfer_id,
        })
    }

    fn step_failed(step: ChargeStep, source: MerchantError) -> MerchantError {
        error!("[Charge] Step {} failed: {}", step, source);
        MerchantError::FullyCreateCharge {
            step,
            source: Box::new(source),
        }
    }
}
