//! Wire types for Wordrush.
//!
//! This crate defines everything that crosses the boundary between the
//! room engine and the external transport layer:
//!
//! - **Identifiers** ([`SessionId`], [`RoomCode`]) — who is calling and
//!   which room they mean.
//! - **Snapshots** ([`RoomSnapshot`], [`PlayerSnapshot`], [`RoomSummary`])
//!   — consistent read-only views of a room, computed fresh per request.
//! - **Events** ([`GameEvent`]) — the notifications fanned out to every
//!   member of a room.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those types become
//!   bytes.
//!
//! The protocol layer knows nothing about connections, rooms, or timing —
//! it only describes shapes. The transport delivering these messages is an
//! external collaborator.

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{
    Failure, GameEvent, PlayerSnapshot, RoomCode, RoomSnapshot, RoomState,
    RoomSummary, SessionId, WordScore,
};
// The board type travels inside snapshots; re-exported so consumers of
// the wire types don't need a separate dependency for it.
pub use wordrush_board::{Board, BoardMode};
