//! Envelope Signing
//!
//! Signature checks for packets relayed through the gateway. The accepting
//! node stamps envelope metadata onto every packet, so a processor strips
//! those fields before recomputing what the client actually signed.

use pn_common::Packet;

use crate::error::Result;
use crate::record::params_from_stamped_record;
use crate::sign;

/// Compute the payload signature for a packet, ignoring the `excluded`
/// envelope fields.
pub fn sign_packet(packet: &Packet, secret: &str, excluded: &[&str]) -> Result<String> {
    sign::sign(&params_from_stamped_record(packet, excluded)?, secret)
}

/// Check the payload signature carried in a packet under the `sig` field.
///
/// Pass [`Packet::STAMPED_FIELDS`] as `excluded` unless the deployment
/// stamps a different set.
pub fn verify_packet(packet: &Packet, secret: &str, excluded: &[&str]) -> Result<bool> {
    sign::verify(&params_from_stamped_record(packet, excluded)?, secret)
}
