//! Room lifecycle engine for Wordrush.
//!
//! Rooms are ephemeral: created with their first player, destroyed the
//! instant their roster empties. Each room runs as an isolated Tokio
//! task (actor model) owning its roster, board, and round clock;
//! [`RoomRegistry`] is the one store that maps room codes and sessions
//! to those actors.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — creates/destroys rooms, keeps the session index
//! - [`RoomHandle`] — send operations to a running room actor
//! - [`GameRoom`] — the entity and its state machine
//! - [`Broadcaster`] — the fan-out seam the transport implements
//! - [`RoomError`] — the caller-facing failure taxonomy

mod actor;
mod broadcast;
pub mod codes;
mod config;
mod error;
mod registry;
mod room;

pub use actor::{LeaveReply, RoomHandle};
pub use broadcast::{Broadcaster, NullBroadcaster, RoomBroadcast};
pub use config::RoomConfig;
pub use error::RoomError;
pub use registry::RoomRegistry;
pub use room::{GameRoom, LeaveOutcome, Player, SubmitOutcome, word_points};
