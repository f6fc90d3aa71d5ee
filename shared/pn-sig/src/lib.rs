//! `PushNest` Parameter Signing
//!
//! Keyed signature computation and verification for gateway messages. A
//! flat parameter set is canonicalized (sorted, filtered, concatenated),
//! suffixed with the shared secret, form-encoded, and digested; the
//! lowercase hex digest travels alongside the parameters under the `sig`
//! field.
//!
//! Every call builds a fresh digest context, so signing is a pure function
//! of its inputs and safe to run from any number of threads.

pub mod error;
pub mod packet;
pub mod params;
pub mod record;
pub mod sign;

pub use error::{Result, SigError};
pub use params::ParameterSet;
pub use sign::{sign, verify, verify_with_field, DEFAULT_SIG_FIELD};
