// --- File: crates/payflow_merchant/src/schema.rs ---
//! Static field schemas, one per logical group of caller data.
//!
//! A schema maps a caller-facing field name to the primitive type it must
//! have. The same table drives both filtering and validation.

use serde_json::Value;
use std::fmt;

/// Primitive type tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
}

impl FieldType {
    /// Type tag of a JSON value. `null` and arrays have none.
    pub fn of(value: &Value) -> Option<FieldType> {
        match value {
            Value::String(_) => Some(FieldType::String),
            Value::Number(_) => Some(FieldType::Number),
            Value::Bool(_) => Some(FieldType::Boolean),
            Value::Object(_) => Some(FieldType::Object),
            Value::Null | Value::Array(_) => None,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        FieldType::of(value) == Some(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human readable kind of any JSON value, for diagnostics.
pub fn describe(value: &Value) -> &'static str {
    match FieldType::of(value) {
        Some(field_type) => field_type.name(),
        None if value.is_null() => "null",
        None => "array",
    }
}

/// Named, ordered table of field name to expected type.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema<'a> {
    name: &'a str,
    fields: &'a [(&'a str, FieldType)],
}

impl<'a> FieldSchema<'a> {
    pub const fn new(name: &'a str, fields: &'a [(&'a str, FieldType)]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, FieldType)> + 'a {
        self.fields.iter().copied()
    }

    pub fn get(&self, key: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, field_type)| *field_type)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Merchant agreement acceptance, sent as additional underwriting data.
pub const UNDERWRITING_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "underwriting",
    &[
        ("merchantAgreementAccepted", FieldType::Boolean),
        ("merchantAgreementIpAddress", FieldType::String),
        ("merchantAgreementTimestamp", FieldType::String),
        ("merchantAgreementUserAgent", FieldType::String),
    ],
);

/// The seller's business and principal.
pub const ENTITY_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "entity",
    &[
        ("annualCardVolume", FieldType::Number),
        ("businessAddress", FieldType::Object),
        ("dob", FieldType::Object),
        ("incorporationDate", FieldType::Object),
        ("personalAddress", FieldType::Object),
        ("businessName", FieldType::String),
        ("businessPhone", FieldType::String),
        ("businessTaxId", FieldType::String),
        ("businessType", FieldType::String),
        ("defaultStatementDescriptor", FieldType::String),
        ("doingBusinessAs", FieldType::String),
        ("email", FieldType::String),
        ("firstName", FieldType::String),
        ("lastName", FieldType::String),
        ("maxTransactionAmount", FieldType::Number),
        ("ownershipType", FieldType::String),
        ("phone", FieldType::String),
        ("mcc", FieldType::String),
        ("principalPercentageOwnership", FieldType::Number),
        ("taxId", FieldType::String),
        ("title", FieldType::String),
        ("url", FieldType::String),
    ],
);

/// The seller's payout bank account.
pub const BANK_ACCOUNT_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "bank account",
    &[
        ("accountNumber", FieldType::String),
        ("accountType", FieldType::String),
        ("bankCode", FieldType::String),
        ("country", FieldType::String),
        ("currency", FieldType::String),
        ("name", FieldType::String),
        ("paymentInstrumentType", FieldType::String),
    ],
);

/// A paying buyer.
pub const BUYER_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "buyer",
    &[
        ("firstName", FieldType::String),
        ("lastName", FieldType::String),
        ("email", FieldType::String),
        ("personalAddress", FieldType::Object),
    ],
);

/// The buyer's card.
pub const CARD_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "card",
    &[
        ("personalAddress", FieldType::Object),
        ("expirationMonth", FieldType::Number),
        ("expirationYear", FieldType::Number),
        ("name", FieldType::String),
        ("number", FieldType::String),
        ("securityCode", FieldType::String),
        ("paymentInstrumentType", FieldType::String),
    ],
);

/// A transfer from the buyer's instrument to the merchant.
pub const CHARGE_FIELDS: FieldSchema<'static> = FieldSchema::new(
    "charge",
    &[
        ("amount", FieldType::Number),
        ("currency", FieldType::String),
        ("source", FieldType::String),
        ("merchant", FieldType::String),
    ],
);
