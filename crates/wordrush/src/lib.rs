//! # Wordrush
//!
//! Engine for ephemeral multiplayer word-game sessions: players create
//! or join a shared room, a timed round runs against a generated 4×4
//! letter board, scores accrue per submitted word, and the room resets
//! for another round.
//!
//! This crate ties the layers together behind [`GameHub`] — the
//! operation surface a real-time transport calls into, keyed by the
//! caller's session. The transport itself (delivering calls, fanning
//! broadcasts out to a room's members) is an external collaborator; it
//! plugs in through the [`Broadcaster`] trait.
//!
//! ```rust,no_run
//! use tokio::sync::mpsc;
//! use wordrush::{GameHub, RoomBroadcast, RoomConfig, SessionId};
//!
//! # async fn demo() {
//! let (events, _rx) = mpsc::unbounded_channel::<RoomBroadcast>();
//! let hub = GameHub::new(RoomConfig::default(), events);
//!
//! let alice = SessionId::new("conn-1");
//! let room = hub.create_room(alice.clone(), "Word Warriors", "alice")
//!     .await
//!     .unwrap();
//! hub.start_game(alice).await.unwrap();
//! # let _ = room;
//! # }
//! ```

mod error;
mod hub;

pub use error::WordrushError;
pub use hub::GameHub;

pub use wordrush_protocol::{
    Board, BoardMode, Codec, Failure, GameEvent, JsonCodec, PlayerSnapshot,
    ProtocolError, RoomCode, RoomSnapshot, RoomState, RoomSummary, SessionId,
    WordScore,
};
pub use wordrush_room::{
    Broadcaster, NullBroadcaster, RoomBroadcast, RoomConfig, RoomError,
};
