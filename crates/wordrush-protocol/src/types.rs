//! Identifier, snapshot, and event types.
//!
//! Field names serialize in camelCase and enums are internally tagged
//! (`"type"`), matching what a browser client consumes directly.

use std::fmt;

use serde::{Deserialize, Serialize};
use wordrush_board::Board;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The identifier of a connected session (the owning connection).
///
/// Issued by the external transport layer; opaque to the engine. A session
/// is in at most one room at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short human-shareable room identifier.
///
/// Six characters from a 32-symbol alphabet with the visually confusable
/// `0/O/1/I` removed. Uppercased on construction so codes typed in any
/// case resolve to the same room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomState
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// ```text
///            startGame            timer fires
/// Waiting ─────────────→ InProgress ─────────→ Finished
///    ↑                                            │
///    └──────────────── resetGame ─────────────────┘
/// ```
///
/// - **Waiting**: lobby. No board, no timer, accepting joins.
/// - **InProgress**: a round is running. Board present, clock running,
///   submissions accepted.
/// - **Finished**: round over. Board retained for review, scores frozen.
///
/// A room is destroyed from any state the instant its roster empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomState {
    Waiting,
    InProgress,
    Finished,
}

impl RoomState {
    /// Whether new players may join.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Whether word submissions are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl fmt::Display for RoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "Waiting"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// One player's entry in a room snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub display_name: String,
    pub score: u32,
    pub is_host: bool,
    pub is_ready: bool,
}

/// A consistent view of a room at a single point in time.
///
/// `board` and `remaining_seconds` are omitted from the wire entirely when
/// absent (Waiting rooms have no board; only InProgress rooms have a
/// countdown). `remaining_seconds` is derived from the clock at snapshot
/// time, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub room_code: RoomCode,
    pub room_name: String,
    pub state: RoomState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u64>,
    pub players: Vec<PlayerSnapshot>,
}

/// A room's entry in the joinable-room listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub room_code: RoomCode,
    pub room_name: String,
    pub player_count: usize,
    pub state: RoomState,
    pub host_name: String,
}

/// Result of a word submission: the player's running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScore {
    pub score: u32,
    pub word_count: usize,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Notifications fanned out to every current member of a room.
///
/// Each carries a full [`RoomSnapshot`] computed after the mutation
/// committed, so receivers never have to merge partial updates. For a
/// host departure the room's host field is already updated in the
/// snapshot that `PlayerLeft` carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A player entered the room.
    #[serde(rename_all = "camelCase")]
    PlayerJoined {
        joiner: String,
        snapshot: RoomSnapshot,
    },

    /// A player left (or disconnected, which is treated identically).
    /// `new_host_id` is set when the departure triggered host migration.
    #[serde(rename_all = "camelCase")]
    PlayerLeft {
        leaver_id: SessionId,
        new_host_id: Option<SessionId>,
        snapshot: RoomSnapshot,
    },

    /// A player toggled their ready flag in the lobby.
    #[serde(rename_all = "camelCase")]
    PlayerReady {
        player_name: String,
        ready: bool,
        snapshot: RoomSnapshot,
    },

    /// The host started a round.
    #[serde(rename_all = "camelCase")]
    GameStarted { snapshot: RoomSnapshot },

    /// The round timer expired.
    #[serde(rename_all = "camelCase")]
    GameEnded { snapshot: RoomSnapshot },

    /// The host reset the room back to the lobby.
    #[serde(rename_all = "camelCase")]
    GameReset { snapshot: RoomSnapshot },

    /// A player was credited for a new word.
    #[serde(rename_all = "camelCase")]
    ScoreUpdated {
        player_name: String,
        score: u32,
        word_count: usize,
    },
}

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

/// The structured failure result returned to a caller when an operation
/// is rejected.
///
/// Every rejection is an expected, recoverable outcome — `code` is one of
/// the fixed taxonomy names (`RoomNotFound`, `NameTaken`, ...) plus
/// `Internal` for faults caught at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub code: String,
    pub message: String,
}

impl Failure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
