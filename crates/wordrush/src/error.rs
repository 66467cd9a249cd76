//! Unified error type for the Wordrush engine.

use wordrush_protocol::{Failure, ProtocolError};
use wordrush_room::RoomError;

/// Top-level error that wraps the crate-specific errors.
///
/// Callers of [`GameHub`](crate::GameHub) deal with this single type;
/// the `#[from]` attributes let `?` convert sub-crate errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordrushError {
    /// A room-layer rejection or fault.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// An encode/decode error from the wire layer.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl WordrushError {
    /// Converts into the structured failure result sent back to the
    /// caller.
    ///
    /// Expected rejections keep their taxonomy code and message.
    /// Internal faults (a dead room actor, a codec failure) are logged
    /// here — the boundary — and collapse to a generic `Internal`
    /// failure so nothing leaks and nothing crashes.
    pub fn to_failure(&self) -> Failure {
        match self {
            Self::Room(err @ RoomError::Unavailable(_)) => {
                tracing::error!(error = %err, "internal fault surfaced at boundary");
                Failure::new("Internal", "something went wrong, please try again")
            }
            Self::Room(err) => Failure::new(err.code(), err.to_string()),
            Self::Protocol(err) => {
                tracing::error!(error = %err, "codec fault surfaced at boundary");
                Failure::new("Internal", "something went wrong, please try again")
            }
        }
    }
}
