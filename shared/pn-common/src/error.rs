//! Protocol Error Types

use thiserror::Error;

/// Errors raised while decoding or encoding wire envelopes.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Packet JSON could not be parsed or serialized.
    #[error("Malformed packet: {0}")]
    MalformedPacket(#[from] serde_json::Error),
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
