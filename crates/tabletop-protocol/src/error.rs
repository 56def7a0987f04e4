//! Error types for the protocol layer.
//!
//! Each crate in Tabletop defines its own error enum. A `ProtocolError`
//! always means a frame could not be turned into an event (or back),
//! never that a room or connection misbehaved.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning an event into text).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning text into an event).
    ///
    /// Common causes: malformed JSON, an unknown `event` name, or a
    /// payload of the wrong shape for the named event.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The frame parsed but breaks a protocol rule.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
