//! The room registry: creates, finds, and destroys rooms, and keeps the
//! session→room index in lock-step with every roster change.
//!
//! The registry is an explicitly owned store — the facade holds the one
//! instance behind a mutex and passes handles down; there is no global.
//! It is deliberately not thread-safe by itself (plain `HashMap`s): the
//! operations that must keep the room table and the session index
//! consistent (`create_room`, `join_room`, `leave_room`) run under the
//! owner's lock, while per-round operations go through cloned
//! [`RoomHandle`]s and never touch the index at all.
//!
//! Invariant: a session appears in the index iff it is in exactly one
//! room's roster. Creating or joining while already in a room therefore
//! leaves the old room first, with full departure semantics.

use std::collections::HashMap;
use std::sync::Arc;

use wordrush_protocol::{RoomCode, RoomSnapshot, RoomSummary, SessionId};

use crate::actor::{LeaveReply, RoomHandle, spawn_room};
use crate::{Broadcaster, RoomConfig, RoomError, codes};

/// Command channel size for room actors. Fills only if a room's single
/// writer falls behind its callers.
const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Owns every live room and the session→room index.
pub struct RoomRegistry<B: Broadcaster> {
    /// Live rooms, keyed by code.
    rooms: HashMap<RoomCode, RoomHandle>,

    /// Reverse lookup: which room is a session in. A session is in at
    /// most one room at a time.
    sessions: HashMap<SessionId, RoomCode>,

    config: RoomConfig,
    broadcaster: Arc<B>,
}

impl<B: Broadcaster> RoomRegistry<B> {
    /// Creates an empty registry. Every room it spawns fans events out
    /// through `broadcaster`.
    pub fn new(config: RoomConfig, broadcaster: B) -> Self {
        Self {
            rooms: HashMap::new(),
            sessions: HashMap::new(),
            config,
            broadcaster: Arc::new(broadcaster),
        }
    }

    /// Creates a room with the creator as sole member and host, and
    /// returns its first snapshot.
    ///
    /// Never fails for caller reasons: the code is regenerated until it
    /// is unused, and a creator who was still in another room leaves it
    /// first (with PlayerLeft semantics there).
    pub async fn create_room(
        &mut self,
        name: impl Into<String>,
        creator: SessionId,
        creator_name: impl Into<String>,
    ) -> Result<RoomSnapshot, RoomError> {
        self.evict(&creator).await;

        let code = self.unused_code();
        let handle = spawn_room(
            code.clone(),
            name.into(),
            self.config.clone(),
            creator.clone(),
            creator_name.into(),
            Arc::clone(&self.broadcaster),
            DEFAULT_CHANNEL_SIZE,
        );

        let snapshot = handle.snapshot().await?;
        self.rooms.insert(code.clone(), handle);
        self.sessions.insert(creator, code.clone());
        tracing::info!(room = %code, "room created");
        Ok(snapshot)
    }

    /// Adds a session to an existing room.
    ///
    /// # Errors
    /// - [`RoomError::RoomNotFound`] — no live room has this code
    /// - [`RoomError::GameInProgress`] — room is not Waiting
    /// - [`RoomError::RoomFull`] — roster at capacity
    /// - [`RoomError::NameTaken`] — display name collides
    pub async fn join_room(
        &mut self,
        code: &RoomCode,
        session: SessionId,
        display_name: impl Into<String>,
    ) -> Result<RoomSnapshot, RoomError> {
        self.evict(&session).await;

        let handle = self
            .rooms
            .get(code)
            .cloned()
            .ok_or(RoomError::RoomNotFound)?;

        let snapshot = handle.join(session.clone(), display_name.into()).await?;
        self.sessions.insert(session, code.clone());
        Ok(snapshot)
    }

    /// Removes a session from its room. Destroys the room when the
    /// roster empties (there is then no broadcast target left).
    ///
    /// # Errors
    /// [`RoomError::NotInRoom`] — the session is in no room.
    pub async fn leave_room(
        &mut self,
        session: &SessionId,
    ) -> Result<LeaveReply, RoomError> {
        let code = self
            .sessions
            .get(session)
            .cloned()
            .ok_or_else(|| RoomError::NotInRoom(session.clone()))?;

        let Some(handle) = self.rooms.get(&code).cloned() else {
            // Index pointed at a dead room; heal the entry and report
            // the session as roomless.
            self.sessions.remove(session);
            return Err(RoomError::NotInRoom(session.clone()));
        };

        let reply = match handle.leave(session.clone()).await {
            Ok(reply) => reply,
            Err(err) => {
                // The actor is gone mid-operation. Drop the whole room
                // so the table and index stay consistent.
                self.purge_room(&code);
                return Err(err);
            }
        };

        self.sessions.remove(session);
        if reply.now_empty {
            self.rooms.remove(&code);
            let _ = handle.shutdown().await;
            tracing::info!(room = %code, "room destroyed, roster empty");
        }
        Ok(reply)
    }

    // -- Lookups ----------------------------------------------------------

    /// Handle for a room by code.
    pub fn handle(&self, code: &RoomCode) -> Option<RoomHandle> {
        self.rooms.get(code).cloned()
    }

    /// Handle for the room a session is in.
    pub fn handle_for_session(&self, session: &SessionId) -> Option<RoomHandle> {
        self.sessions
            .get(session)
            .and_then(|code| self.rooms.get(code))
            .cloned()
    }

    /// Snapshot of a room by code; `None` if the code is unknown (or the
    /// room died underneath us).
    pub async fn room_snapshot(&self, code: &RoomCode) -> Option<RoomSnapshot> {
        match self.rooms.get(code) {
            Some(handle) => handle.snapshot().await.ok(),
            None => None,
        }
    }

    /// Snapshot of the room a session is in, if any.
    pub async fn snapshot_by_session(
        &self,
        session: &SessionId,
    ) -> Option<RoomSnapshot> {
        match self.handle_for_session(session) {
            Some(handle) => handle.snapshot().await.ok(),
            None => None,
        }
    }

    /// Summaries of every room still accepting players. Rooms that fail
    /// to respond (shutting down) are skipped.
    pub async fn joinable_rooms(&self) -> Vec<RoomSummary> {
        let mut out = Vec::with_capacity(self.rooms.len());
        for handle in self.rooms.values() {
            if let Ok(summary) = handle.summary().await {
                if summary.state.is_joinable() {
                    out.push(summary);
                }
            }
        }
        out
    }

    /// Cloned handles to every live room. Lets callers run queries
    /// against the actors without holding whatever lock owns the
    /// registry.
    pub fn handles(&self) -> Vec<RoomHandle> {
        self.rooms.values().cloned().collect()
    }

    /// Number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of indexed sessions across all rooms.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    // -- Internals --------------------------------------------------------

    /// Leaves the session's current room, if it has one. Used before
    /// create/join so a session is never in two rosters.
    async fn evict(&mut self, session: &SessionId) {
        if self.sessions.contains_key(session) {
            if let Err(err) = self.leave_room(session).await {
                tracing::warn!(%session, error = %err, "implicit leave failed");
            }
        }
    }

    /// Draws codes until one is unused among live rooms. With a 32^6
    /// space a retry is already rare; looping until unique is the
    /// uniqueness guarantee the generator itself doesn't give.
    fn unused_code(&self) -> RoomCode {
        let mut rng = rand::rng();
        loop {
            let code = codes::generate_code(&mut rng);
            if !self.rooms.contains_key(&code) {
                return code;
            }
            tracing::debug!(room = %code, "room code collision, retrying");
        }
    }

    /// Removes a room and every index entry pointing at it.
    fn purge_room(&mut self, code: &RoomCode) {
        self.rooms.remove(code);
        self.sessions.retain(|_, c| c != code);
        tracing::warn!(room = %code, "purged unavailable room");
    }
}
