// --- File: crates/payflow_common/src/services.rs ---
//! Service abstractions for the external payments API.
//!
//! The orchestrators depend on [`PaymentsApi`] only, so the HTTP client can be
//! swapped for a recording mock in tests.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::{
    CreateIdentityRequest, CreateMerchantUnderwritingRequest, CreatePaymentInstrumentRequest,
    CreateTransferRequest, CreatedResource,
};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    /// Boxes any error.
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// The four operations of the external payments API used by the onboarding
/// and charge workflows. Every call resolves to the created resource's id.
pub trait PaymentsApi: Send + Sync {
    /// Error type returned by payments API operations.
    type Error: StdError + Send + Sync + 'static;

    /// Create an identity (seller or buyer).
    fn create_identity(
        &self,
        request: CreateIdentityRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error>;

    /// Create a payment instrument attached to an identity.
    fn create_payment_instrument(
        &self,
        request: CreatePaymentInstrumentRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error>;

    /// Underwrite an identity as a merchant on a processor.
    fn create_merchant(
        &self,
        identity_id: &str,
        request: CreateMerchantUnderwritingRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error>;

    /// Move funds from a payment instrument to a merchant.
    fn create_transfer(
        &self,
        request: CreateTransferRequest,
    ) -> BoxFuture<'_, CreatedResource, Self::Error>;
}
