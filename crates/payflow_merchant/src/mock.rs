// --- File: crates/payflow_merchant/src/mock.rs ---
//! Recording stand-in for the payments API.

use payflow_common::models::{
    CreateIdentityRequest, CreateMerchantUnderwritingRequest, CreatePaymentInstrumentRequest,
    CreateTransferRequest, CreatedResource,
};
use payflow_common::{BoxFuture, PaymentsApi};
use serde_json::Value;
use std::sync::Mutex;
use thiserror::Error;

/// One recorded call, with the request it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateIdentity(CreateIdentityRequest),
    CreatePaymentInstrument(CreatePaymentInstrumentRequest),
    CreateMerchant(String, CreateMerchantUnderwritingRequest),
    CreateTransfer(CreateTransferRequest),
}

impl Call {
    pub fn operation(&self) -> &'static str {
        match self {
            Call::CreateIdentity(_) => "create_identity",
            Call::CreatePaymentInstrument(_) => "create_payment_instrument",
            Call::CreateMerchant(..) => "create_merchant",
            Call::CreateTransfer(_) => "create_transfer",
        }
    }
}

/// Error returned by a mocked operation, carrying the API error payload.
#[derive(Debug, Clone, Error)]
#[error("mock payments API error: {body}")]
pub struct MockApiError {
    pub body: Value,
}

type Outcome = Result<String, Value>;

/// Succeeds with fixed ids unless an operation is configured to fail.
pub struct MockPaymentsApi {
    identity: Outcome,
    payment_instrument: Outcome,
    merchant: Outcome,
    transfer: Outcome,
    calls: Mutex<Vec<Call>>,
}

impl MockPaymentsApi {
    pub fn new() -> Self {
        Self {
            identity: Ok("idn_1".to_string()),
            payment_instrument: Ok("pi_1".to_string()),
            merchant: Ok("mu_1".to_string()),
            transfer: Ok("tr_1".to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_identity_error(mut self, body: Value) -> Self {
        self.identity = Err(body);
        self
    }

    pub fn with_payment_instrument_error(mut self, body: Value) -> Self {
        self.payment_instrument = Err(body);
        self
    }

    pub fn with_merchant_error(mut self, body: Value) -> Self {
        self.merchant = Err(body);
        self
    }

    pub fn with_transfer_error(mut self, body: Value) -> Self {
        self.transfer = Err(body);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Names of the recorded operations, in call order.
    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::operation).collect()
    }

    fn respond(&self, call: Call, outcome: &Outcome) -> Result<CreatedResource, MockApiError> {
        self.calls.lock().unwrap().push(call);
        match outcome {
            Ok(id) => Ok(CreatedResource { id: id.clone() }),
            Err(body) => Err(MockApiError { body: body.clone() }),
        }
    }
}

impl PaymentsApi for MockPaymentsApi {
    type Error = MockApiError;

    fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move { self.respond(Call::CreateIdentity(request), &self.identity) })
    }

    fn create_payment_instrument(
        &self,
        request: CreatePaymentInstrumentRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move {
            self.respond(
                Call::CreatePaymentInstrument(request),
                &self.payment_instrument,
            )
        })
    }

    fn create_merchant(
        &self,
        identity_id: &str,
        request: CreateMerchantUnderwritingRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        let call = Call::CreateMerchant(identity_id.to_string(), request);
        Box::pin(async move { self.respond(call, &self.merchant) })
    }

    fn create_transfer(
        &self,
        request: CreateTransferRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error> {
        Box::pin(async move { self.respond(Call::CreateTransfer(request), &self.transfer) })
    }
}
