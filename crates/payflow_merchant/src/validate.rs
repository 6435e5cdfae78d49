// --- File: crates/payflow_merchant/src/validate.rs ---
//! Schema-driven filtering and validation of caller data.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::MerchantError;
use crate::schema::{describe, FieldSchema};

/// Loosely typed caller data, keyed by caller-facing field name.
pub type FieldBag = Map<String, Value>;

/// Result of [`filter`]: the recognised fields and the names of the dropped ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered {
    pub data: FieldBag,
    pub dropped: Vec<String>,
}

/// Keeps only the keys of `raw` that `schema` declares. Values are copied
/// unchanged and type checking is left to [`validate`].
pub fn filter(raw: &FieldBag, schema: &FieldSchema<'_>) -> Filtered {
    let mut filtered = Filtered::default();
    for (key, value) in raw {
        if schema.contains(key) {
            filtered.data.insert(key.clone(), value.clone());
        } else {
            filtered.dropped.push(key.clone());
        }
    }
    if !filtered.dropped.is_empty() {
        debug!(
            "Dropped {} unknown {} field(s): {}",
            filtered.dropped.len(),
            schema.name(),
            filtered.dropped.join(", ")
        );
    }
    filtered
}

/// Checks that every field of `schema` is present in `data` with its declared type.
///
/// A wrong type takes priority: when any field is mistyped the error is
/// `InvalidParameters` listing the mistyped fields, even if others are absent.
/// Otherwise absent fields are reported as `MissingParameters`. Field lists
/// follow schema order.
pub fn validate(data: &FieldBag, schema: &FieldSchema<'_>) -> Result<(), MerchantError> {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    for (key, field_type) in schema.fields() {
        match data.get(key) {
            None => missing.push(key.to_string()),
            Some(value) if !field_type.matches(value) => {
                warn!(
                    "Field '{}' of {} data should be {}, got {}",
                    key,
                    schema.name(),
                    field_type,
                    describe(value)
                );
                invalid.push(key.to_string());
            }
            Some(_) => {}
        }
    }

    if !invalid.is_empty() {
        return Err(MerchantError::InvalidParameters(invalid));
    }
    if !missing.is_empty() {
        return Err(MerchantError::MissingParameters(missing));
    }
    Ok(())
}
