//! The fan-out seam between the room engine and the transport.
//!
//! The engine never talks to connections. When a mutation commits, the
//! room actor hands the resulting [`GameEvent`] to a [`Broadcaster`];
//! delivering it to every member of the room is the transport's job.
//! Implement the trait over whatever group-send primitive the transport
//! has. Broadcasting is fire-and-forget from the engine's point of view.

use tokio::sync::mpsc;
use wordrush_protocol::{GameEvent, RoomCode};

/// A broadcast addressed to every current member of one room.
#[derive(Debug, Clone)]
pub struct RoomBroadcast {
    pub room: RoomCode,
    pub event: GameEvent,
}

/// Delivers room events to the outside world.
pub trait Broadcaster: Send + Sync + 'static {
    /// Fans `event` out to every member of `room`. Must not block the
    /// caller; implementations queue or spawn as needed.
    fn broadcast(&self, room: &RoomCode, event: GameEvent);
}

/// Queues broadcasts on an unbounded channel for a transport (or a test)
/// to drain.
impl Broadcaster for mpsc::UnboundedSender<RoomBroadcast> {
    fn broadcast(&self, room: &RoomCode, event: GameEvent) {
        // A closed receiver means the transport is gone; nothing to do.
        let _ = self.send(RoomBroadcast {
            room: room.clone(),
            event,
        });
    }
}

/// Discards every broadcast. For tools and tests with no one listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBroadcaster;

impl Broadcaster for NullBroadcaster {
    fn broadcast(&self, _room: &RoomCode, _event: GameEvent) {}
}
