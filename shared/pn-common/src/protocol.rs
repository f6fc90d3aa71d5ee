//! Wire Envelope
//!
//! JSON packet format relayed between gateway nodes and message processors.
//! A packet carries the client-supplied payload fields plus metadata stamped
//! by the accepting gateway node. Processors must strip the stamped fields
//! before recomputing the payload signature, since clients sign only what
//! they sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A message envelope as relayed through the gateway.
///
/// The five metadata fields are stamped by the gateway node that accepted
/// the packet; everything the client sent lives in the flattened `fields`
/// map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packet {
    /// Message type discriminator (e.g. "msg", "ack").
    #[serde(rename = "type")]
    pub packet_type: String,

    /// Identifier of the gateway node that accepted the packet.
    pub node: String,

    /// Receipt timestamp in epoch milliseconds.
    pub at: i64,

    /// Connection identifier assigned by the accepting node.
    pub connid: String,

    /// Client identifier resolved during connection handshake.
    pub clientid: String,

    /// Client-supplied payload fields, kept in key order.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Packet {
    /// Envelope field names stamped by the gateway, in wire spelling.
    ///
    /// Must stay in sync with the stamping code in the gateway node.
    /// Signing callers pass this list to strip the stamped metadata before
    /// recomputing a payload signature.
    pub const STAMPED_FIELDS: [&'static str; 5] = ["type", "node", "at", "connid", "clientid"];

    /// Parse a packet from its wire JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize the packet to its wire JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
