// --- File: crates/payflow_merchant/src/lib.rs ---
// Declare modules within this crate
pub mod charge;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod handle;
pub mod mapper;
#[cfg(test)]
mod mock;
pub mod onboarding;
pub mod schema;
pub mod validate;
#[cfg(test)]
mod validate_proptest;

pub use charge::{ChargeReceipt, ChargeStep, MerchantCharge, MerchantChargeState};
pub use error::MerchantError;
pub use handle::ClientHandle;
pub use onboarding::{
    OnboardingMerchant, OnboardingResult, OnboardingStage, OnboardingState, OnboardingStep,
};
pub use schema::{FieldSchema, FieldType};
pub use validate::{filter, validate, FieldBag, Filtered};
