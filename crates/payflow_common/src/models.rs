// --- File: crates/payflow_common/src/models.rs ---
//! Request and response shapes of the external payments API.
//!
//! These mirror the Finix REST resources: field names serialize in
//! snake_case, absent optional fields are omitted from the JSON body.

use serde::{Deserialize, Serialize};

/// Street address, used for business and personal addresses and instrument billing address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Calendar date split into parts (date of birth, incorporation date).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

/// Merchant agreement details sent alongside a seller identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalUnderwritingData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_agreement_accepted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_agreement_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_agreement_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_agreement_user_agent: Option<String>,
}

/// The person or business behind an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_card_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doing_business_as: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorporation_date: Option<DateParts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_transaction_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_percentage_ownership: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `POST /identities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIdentityRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_underwriting_data: Option<AdditionalUnderwritingData>,
    pub entity: IdentityEntity,
}

/// Bank account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
    PersonalChecking,
    PersonalSavings,
    BusinessChecking,
    BusinessSavings,
}

impl AccountType {
    /// Looks up the caller-facing tag (`"Checking"`, `"BusinessSavings"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Checking" => Some(Self::Checking),
            "Savings" => Some(Self::Savings),
            "PersonalChecking" => Some(Self::PersonalChecking),
            "PersonalSavings" => Some(Self::PersonalSavings),
            "BusinessChecking" => Some(Self::BusinessChecking),
            "BusinessSavings" => Some(Self::BusinessSavings),
            _ => None,
        }
    }
}

/// Kind of payment instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentInstrumentType {
    BankAccount,
    PaymentCard,
    Token,
    ApplePay,
    GooglePay,
}

impl PaymentInstrumentType {
    /// Looks up the caller-facing tag (`"BankAccount"`, `"PaymentCard"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BankAccount" => Some(Self::BankAccount),
            "PaymentCard" => Some(Self::PaymentCard),
            "Token" => Some(Self::Token),
            "ApplePay" => Some(Self::ApplePay),
            "GooglePay" => Some(Self::GooglePay),
            _ => None,
        }
    }
}

/// Body of `POST /payment_instruments`. Bank accounts use the account
/// fields, cards use the card fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentInstrumentRequest {
    pub identity: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<PaymentInstrumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    // bank account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    // card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Body of `POST /identities/{identity_id}/merchants`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMerchantUnderwritingRequest {
    pub processor: String,
}

/// Body of `POST /transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub amount: i64,
    pub currency: String,
    pub merchant: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_id: Option<String>,
}

/// The only part of a created resource this workspace reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResource {
    pub id: String,
}
