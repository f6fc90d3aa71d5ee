//! Signature Error Types

use thiserror::Error;

/// Errors raised while computing or checking parameter signatures.
///
/// A signature mismatch is never an error; `verify` reports it as a plain
/// `false`. Every variant here is an input problem the caller must fix.
#[derive(Debug, Error)]
pub enum SigError {
    /// The parameter set holds no entries.
    #[error("Parameter set is empty")]
    EmptyParams,

    /// The shared secret is blank.
    #[error("Secret is blank")]
    BlankSecret,

    /// The signature field name is blank.
    #[error("Signature field name is blank")]
    BlankSigField,

    /// No usable signature value under the given field name.
    #[error("Signature field `{0}` is missing or blank")]
    MissingSignature(String),

    /// Input record is not a JSON object, or has no signable fields.
    #[error("Record is not a JSON object with at least one field")]
    InvalidRecord,

    /// A structured record could not be flattened to parameters.
    #[error("Record could not be flattened: {0}")]
    Record(#[from] serde_json::Error),
}

/// Result type for signing operations.
pub type Result<T> = std::result::Result<T, SigError>;
