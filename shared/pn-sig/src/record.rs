//! Input Adapters
//!
//! Conversions from structured inputs (serde records, raw JSON objects)
//! into [`ParameterSet`]s. Signing itself has a single entry point; each
//! external shape gets its own adapter instead of an overloaded signer.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SigError};
use crate::params::ParameterSet;
use crate::sign;

/// Flatten a JSON object into a parameter set.
///
/// Null values become present keys with absent values, string values are
/// taken verbatim, and any other value keeps its compact JSON text form.
/// Fails unless the input is an object with at least one field.
pub fn params_from_json(record: &Value) -> Result<ParameterSet> {
    params_from_stamped_json(record, &[])
}

/// Flatten a JSON object, dropping the named stamped fields first.
///
/// `excluded` lists field names added by an intermediary (for gateway
/// packets, [`pn_common::Packet::STAMPED_FIELDS`]); those were never part
/// of the client-signed payload. The exclusion list is supplied by the
/// caller so it lives next to whatever component stamps the fields.
pub fn params_from_stamped_json(record: &Value, excluded: &[&str]) -> Result<ParameterSet> {
    let object = record.as_object().ok_or(SigError::InvalidRecord)?;

    let mut params = ParameterSet::new();
    for (key, value) in object {
        if excluded.contains(&key.as_str()) {
            continue;
        }
        params.insert_nullable(Some(key.clone()), value_text(value));
    }
    if params.is_empty() {
        return Err(SigError::InvalidRecord);
    }
    Ok(params)
}

/// Flatten any serializable record into a parameter set.
pub fn params_from_record<T: Serialize>(record: &T) -> Result<ParameterSet> {
    params_from_stamped_record(record, &[])
}

/// Flatten any serializable record, dropping the named stamped fields.
pub fn params_from_stamped_record<T: Serialize>(
    record: &T,
    excluded: &[&str],
) -> Result<ParameterSet> {
    let value = serde_json::to_value(record)?;
    params_from_stamped_json(&value, excluded)
}

/// Sign a JSON object with the shared secret.
pub fn sign_json(record: &Value, secret: &str) -> Result<String> {
    sign::sign(&params_from_json(record)?, secret)
}

/// Check the signature carried in a JSON object under the `sig` field.
pub fn verify_json(record: &Value, secret: &str) -> Result<bool> {
    sign::verify(&params_from_json(record)?, secret)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
