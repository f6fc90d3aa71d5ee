//! Parameter Signing
//!
//! Keyed MD5 signature over a canonicalized parameter set. The algorithm is
//! a frozen wire constant shared with every deployed client SDK: sorted
//! `key=value` concatenation, secret suffix, form-encoding, MD5, lowercase
//! hex. Changing any step breaks compatibility with clients in the field.

use md5::{Digest, Md5};
use tracing::debug;
use url::form_urlencoded;

use crate::error::{Result, SigError};
use crate::params::ParameterSet;

/// Conventional name of the signature field inside a received parameter set.
pub const DEFAULT_SIG_FIELD: &str = "sig";

/// Compute the keyed signature over a parameter set.
///
/// Keys are taken in ascending byte-wise order; keys with absent values
/// contribute nothing, not even the key name. The secret is appended to the
/// `key=value` concatenation with no delimiter, the whole string is
/// form-encoded (space to `+`, UTF-8 bytes to `%XX`), and the MD5 digest of
/// the encoded string is returned as 32 lowercase hex characters.
///
/// A blank secret is not rejected here; it produces a deterministic,
/// valid-looking signature. Callers relying on secrecy must ensure the
/// secret is non-blank (`verify` enforces this on the checking side).
pub fn sign(params: &ParameterSet, secret: &str) -> Result<String> {
    if params.is_empty() {
        return Err(SigError::EmptyParams);
    }

    let mut canonical = String::new();
    for (key, value) in params.iter() {
        if let Some(value) = value {
            canonical.push_str(key);
            canonical.push('=');
            canonical.push_str(value);
        }
    }

    let mut keyed = String::with_capacity(canonical.len() + secret.len());
    keyed.push_str(&canonical);
    keyed.push_str(secret);

    // Same rule set as Java's URLEncoder, which the deployed client SDKs
    // use: both sides must encode identically or signatures diverge.
    let encoded: String = form_urlencoded::byte_serialize(keyed.as_bytes()).collect();

    let sig = hex::encode(Md5::digest(encoded.as_bytes()));
    debug!(%sig, params = %canonical, "computed parameter signature");
    Ok(sig)
}

/// Check the claimed signature carried under the conventional `sig` field.
pub fn verify(params: &ParameterSet, secret: &str) -> Result<bool> {
    verify_with_field(params, secret, DEFAULT_SIG_FIELD)
}

/// Check the claimed signature carried under `sig_field`.
///
/// The signature field is removed from a working copy before recomputation;
/// it is never part of the signed payload. The claimed value is
/// whitespace-trimmed, then compared case-sensitively. A mismatch is
/// reported as `Ok(false)`, never as an error.
pub fn verify_with_field(params: &ParameterSet, secret: &str, sig_field: &str) -> Result<bool> {
    if params.is_empty() {
        return Err(SigError::EmptyParams);
    }
    if sig_field.trim().is_empty() {
        return Err(SigError::BlankSigField);
    }
    if secret.trim().is_empty() {
        return Err(SigError::BlankSecret);
    }

    let claimed = params
        .get(sig_field)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SigError::MissingSignature(sig_field.to_string()))?
        .to_string();

    let mut payload = params.clone();
    payload.remove(sig_field);

    let computed = sign(&payload, secret)?;
    Ok(claimed == computed)
}
