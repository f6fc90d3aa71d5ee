//! `PushNest` Common Library
//!
//! Shared protocol types used by the gateway nodes, the message processors,
//! and the client SDKs.

pub mod error;
pub mod protocol;

pub use error::{ProtocolError, Result};
pub use protocol::Packet;
