// --- File: crates/payflow_merchant/src/mapper.rs ---
//! Translates validated caller data into payments API requests.
//!
//! Caller data uses camelCase names, the API uses snake_case. Nested address
//! and date objects are copied field by field so unknown inner keys never
//! reach the wire. Every function here is pure.

use payflow_common::models::{
    AccountType, AdditionalUnderwritingData, Address, CreateIdentityRequest,
    CreateMerchantUnderwritingRequest, CreatePaymentInstrumentRequest, CreateTransferRequest,
    DateParts, IdentityEntity, PaymentInstrumentType,
};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::MerchantError;
use crate::validate::FieldBag;

/// Builds an identity request from entity data and, for sellers, the
/// merchant agreement data.
pub fn to_identity_request(
    entity: &FieldBag,
    underwriting: Option<&FieldBag>,
) -> Result<CreateIdentityRequest, MerchantError> {
    Ok(CreateIdentityRequest {
        additional_underwriting_data: underwriting.map(to_underwriting_data),
        entity: to_identity_entity(entity)?,
    })
}

pub fn to_underwriting_data(underwriting: &FieldBag) -> AdditionalUnderwritingData {
    AdditionalUnderwritingData {
        merchant_agreement_accepted: bool_field(underwriting, "merchantAgreementAccepted"),
        merchant_agreement_ip_address: string_field(underwriting, "merchantAgreementIpAddress"),
        merchant_agreement_timestamp: string_field(underwriting, "merchantAgreementTimestamp"),
        merchant_agreement_user_agent: string_field(underwriting, "merchantAgreementUserAgent"),
    }
}

fn to_identity_entity(entity: &FieldBag) -> Result<IdentityEntity, MerchantError> {
    Ok(IdentityEntity {
        annual_card_volume: integer_field(entity, "annualCardVolume")?,
        business_address: address_field(entity, "businessAddress")?,
        business_name: string_field(entity, "businessName"),
        business_phone: string_field(entity, "businessPhone"),
        business_tax_id: string_field(entity, "businessTaxId"),
        business_type: string_field(entity, "businessType"),
        default_statement_descriptor: string_field(entity, "defaultStatementDescriptor"),
        dob: date_field(entity, "dob")?,
        doing_business_as: string_field(entity, "doingBusinessAs"),
        email: string_field(entity, "email"),
        first_name: string_field(entity, "firstName"),
        incorporation_date: date_field(entity, "incorporationDate")?,
        last_name: string_field(entity, "lastName"),
        max_transaction_amount: integer_field(entity, "maxTransactionAmount")?,
        mcc: string_field(entity, "mcc"),
        ownership_type: string_field(entity, "ownershipType"),
        personal_address: address_field(entity, "personalAddress")?,
        phone: string_field(entity, "phone"),
        principal_percentage_ownership: integer_field(entity, "principalPercentageOwnership")?,
        tax_id: string_field(entity, "taxId"),
        title: string_field(entity, "title"),
        url: string_field(entity, "url"),
    })
}

/// Builds a payment instrument request for `identity_id`.
///
/// Handles both bank accounts and cards: absent fields are left out of the
/// request. A card's `personalAddress` becomes the instrument's billing address.
pub fn to_payment_instrument_request(
    instrument: &FieldBag,
    identity_id: &str,
) -> Result<CreatePaymentInstrumentRequest, MerchantError> {
    Ok(CreatePaymentInstrumentRequest {
        identity: identity_id.to_string(),
        instrument_type: enum_field(
            instrument,
            "paymentInstrumentType",
            PaymentInstrumentType::from_tag,
        )?,
        name: string_field(instrument, "name"),
        account_number: string_field(instrument, "accountNumber"),
        account_type: enum_field(instrument, "accountType", AccountType::from_tag)?,
        bank_code: string_field(instrument, "bankCode"),
        country: string_field(instrument, "country"),
        currency: string_field(instrument, "currency"),
        expiration_month: integer_field(instrument, "expirationMonth")?,
        expiration_year: integer_field(instrument, "expirationYear")?,
        number: string_field(instrument, "number"),
        security_code: string_field(instrument, "securityCode"),
        address: address_field(instrument, "personalAddress")?,
    })
}

pub fn to_merchant_request(processor: &str) -> CreateMerchantUnderwritingRequest {
    CreateMerchantUnderwritingRequest {
        processor: processor.to_string(),
    }
}

/// Builds a transfer from `payment_instrument_id` to `merchant_id`.
///
/// Any `source` or `merchant` in `charge` is ignored: the ids come from
/// workflow state only. The idempotency id is left for the caller to set.
pub fn to_charge_request(
    charge: &FieldBag,
    merchant_id: &str,
    payment_instrument_id: &str,
) -> Result<CreateTransferRequest, MerchantError> {
    let amount =
        integer_field(charge, "amount")?.ok_or_else(|| MerchantError::missing("amount"))?;
    let currency =
        string_field(charge, "currency").ok_or_else(|| MerchantError::missing("currency"))?;

    Ok(CreateTransferRequest {
        amount,
        currency,
        merchant: merchant_id.to_string(),
        source: payment_instrument_id.to_string(),
        idempotency_id: None,
    })
}

fn string_field(bag: &FieldBag, key: &str) -> Option<String> {
    bag.get(key).and_then(Value::as_str).map(String::from)
}

fn bool_field(bag: &FieldBag, key: &str) -> Option<bool> {
    bag.get(key).and_then(Value::as_bool)
}

/// Whole numbers only. Amounts are in minor units.
fn integer_field(bag: &FieldBag, key: &str) -> Result<Option<i64>, MerchantError> {
    match bag.get(key) {
        None => Ok(None),
        Some(value) => match value.as_i64() {
            Some(n) => Ok(Some(n)),
            None => {
                warn!("Field '{}' is not an integer: {}", key, value);
                Err(MerchantError::invalid(key))
            }
        },
    }
}

fn enum_field<T>(
    bag: &FieldBag,
    key: &str,
    lookup: fn(&str) -> Option<T>,
) -> Result<Option<T>, MerchantError> {
    match bag.get(key) {
        None => Ok(None),
        Some(value) => match value.as_str().and_then(lookup) {
            Some(tag) => Ok(Some(tag)),
            None => {
                warn!("Field '{}' has an unrecognised value: {}", key, value);
                Err(MerchantError::invalid(key))
            }
        },
    }
}

/// Inner fields of a nested object are reported as `parent.key`.
fn nested_invalid(parent: &str, key: &str, value: &Value) -> MerchantError {
    let field = format!("{}.{}", parent, key);
    warn!("Field '{}' has the wrong type: {}", field, value);
    MerchantError::invalid(&field)
}

fn nested_string(
    nested: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<Option<String>, MerchantError> {
    match nested.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value) => Err(nested_invalid(parent, key, value)),
    }
}

fn nested_integer(
    nested: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<Option<i64>, MerchantError> {
    match nested.get(key) {
        None => Ok(None),
        Some(value) => match value.as_i64() {
            Some(n) => Ok(Some(n)),
            None => Err(nested_invalid(parent, key, value)),
        },
    }
}

fn address_field(bag: &FieldBag, key: &str) -> Result<Option<Address>, MerchantError> {
    bag.get(key)
        .and_then(Value::as_object)
        .map(|address| to_address(address, key))
        .transpose()
}

fn to_address(address: &Map<String, Value>, parent: &str) -> Result<Address, MerchantError> {
    Ok(Address {
        line1: nested_string(address, parent, "line1")?,
        line2: nested_string(address, parent, "line2")?,
        city: nested_string(address, parent, "city")?,
        region: nested_string(address, parent, "region")?,
        postal_code: nested_string(address, parent, "postalCode")?,
        country: nested_string(address, parent, "country")?,
    })
}

fn date_field(bag: &FieldBag, key: &str) -> Result<Option<DateParts>, MerchantError> {
    match bag.get(key).and_then(Value::as_object) {
        None => Ok(None),
        Some(date) => Ok(Some(DateParts {
            day: nested_integer(date, key, "day")?,
            month: nested_integer(date, key, "month")?,
            year: nested_integer(date, key, "year")?,
        })),
    }
}
