//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire types.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a value into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (malformed input, missing fields, wrong
    /// types).
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
