//! Error types for the room layer.

use wordrush_protocol::{RoomCode, SessionId};

/// Errors that can occur during room operations.
///
/// Everything except [`Unavailable`](Self::Unavailable) is an expected,
/// recoverable, caller-facing outcome. `Unavailable` means a room's
/// command channel is gone — an internal fault that callers see only as
/// a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No live room has the given code, or the caller is in no room.
    #[error("room not found")]
    RoomNotFound,

    /// The room has already started (or finished) a round and is not
    /// accepting this operation.
    #[error("a game is already in progress")]
    GameInProgress,

    /// No player slots left.
    #[error("room is full ({max} players max)")]
    RoomFull { max: usize },

    /// Another member already uses this display name (compared
    /// case-insensitively).
    #[error("display name {0:?} is already taken")]
    NameTaken(String),

    /// The operation is restricted to the room's host.
    #[error("only the host may do that")]
    NotHost,

    /// The session is not a member of any room.
    #[error("session {0} is not in a room")]
    NotInRoom(SessionId),

    /// Too few players to start a round.
    #[error("not enough players to start ({have} of {need})")]
    InsufficientPlayers { have: usize, need: usize },

    /// Word submissions are only accepted while a round is running.
    #[error("no round is in progress")]
    GameNotInProgress,

    /// The room's command channel is closed or full — the actor task is
    /// gone or wedged.
    #[error("room {0} is unavailable")]
    Unavailable(RoomCode),
}

impl RoomError {
    /// The stable taxonomy name for the structured failure result.
    /// Internal faults all collapse to `"Internal"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "RoomNotFound",
            Self::GameInProgress => "GameInProgress",
            Self::RoomFull { .. } => "RoomFull",
            Self::NameTaken(_) => "NameTaken",
            Self::NotHost => "NotHost",
            Self::NotInRoom(_) => "NotInRoom",
            Self::InsufficientPlayers { .. } => "InsufficientPlayers",
            Self::GameNotInProgress => "GameNotInProgress",
            Self::Unavailable(_) => "Internal",
        }
    }
}
