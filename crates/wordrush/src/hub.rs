//! The hub: the operation surface a transport calls into.
//!
//! Every operation is keyed by the caller's [`SessionId`] — the hub
//! resolves it to a room through the registry and forwards to that
//! room's actor. The hub owns the registry root explicitly (an `Arc`
//! handle cloned into each connection handler); there is no global.
//!
//! Lock discipline: the registry mutex is held across the operations
//! that must keep the room table and session index in lock-step
//! (create/join/leave). Per-round operations only take it long enough
//! to resolve a room handle, then run against the room's own actor —
//! so play in one room never waits on play in another.

use std::sync::Arc;

use tokio::sync::Mutex;
use wordrush_protocol::{
    RoomCode, RoomSnapshot, RoomSummary, SessionId, WordScore,
};
use wordrush_room::{Broadcaster, RoomConfig, RoomError, RoomHandle, RoomRegistry};

use crate::WordrushError;

/// The engine's front door. Cheap to clone — clones share one registry.
pub struct GameHub<B: Broadcaster> {
    registry: Arc<Mutex<RoomRegistry<B>>>,
}

impl<B: Broadcaster> Clone for GameHub<B> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<B: Broadcaster> GameHub<B> {
    /// Creates a hub with its own registry. Room events fan out through
    /// `broadcaster`.
    pub fn new(config: RoomConfig, broadcaster: B) -> Self {
        Self {
            registry: Arc::new(Mutex::new(RoomRegistry::new(config, broadcaster))),
        }
    }

    /// CreateRoom: a fresh Waiting room with the caller as host.
    /// Always succeeds for caller reasons; a caller still in another
    /// room leaves it first.
    pub async fn create_room(
        &self,
        session: SessionId,
        room_name: &str,
        display_name: &str,
    ) -> Result<RoomSnapshot, WordrushError> {
        let mut registry = self.registry.lock().await;
        let snapshot = registry
            .create_room(room_name.trim(), session, display_name.trim())
            .await?;
        Ok(snapshot)
    }

    /// JoinRoom: joins the room with the given code (any letter case).
    pub async fn join_room(
        &self,
        session: SessionId,
        room_code: &str,
        display_name: &str,
    ) -> Result<RoomSnapshot, WordrushError> {
        let code = RoomCode::new(room_code);
        let mut registry = self.registry.lock().await;
        let snapshot = registry
            .join_room(&code, session, display_name.trim())
            .await?;
        Ok(snapshot)
    }

    /// LeaveRoom: removes the caller from their room. Emits PlayerLeft
    /// to the remaining members; deletes the room if none remain.
    pub async fn leave_room(&self, session: SessionId) -> Result<(), WordrushError> {
        let mut registry = self.registry.lock().await;
        registry.leave_room(&session).await?;
        Ok(())
    }

    /// A transport-level disconnect. Identical to [`leave_room`]
    /// (PlayerLeft included) for state purposes, but tolerates sessions
    /// that never joined anything.
    pub async fn disconnect(&self, session: SessionId) {
        let mut registry = self.registry.lock().await;
        match registry.leave_room(&session).await {
            Ok(_) => {}
            Err(RoomError::NotInRoom(_)) => {
                tracing::trace!(%session, "disconnect with no room, nothing to do");
            }
            Err(err) => {
                tracing::warn!(%session, error = %err, "disconnect cleanup failed");
            }
        }
    }

    /// StartGame: host-only, Waiting-only. Generates a board, zeroes
    /// scores, starts the round clock and schedules its termination.
    pub async fn start_game(
        &self,
        session: SessionId,
    ) -> Result<RoomSnapshot, WordrushError> {
        let handle = self
            .handle_for(&session)
            .await
            .ok_or(RoomError::RoomNotFound)?;
        Ok(handle.start(session).await?)
    }

    /// ResetGame: host-only. Back to the lobby from any state; a round
    /// still pending its timer is abandoned harmlessly.
    pub async fn reset_game(
        &self,
        session: SessionId,
    ) -> Result<RoomSnapshot, WordrushError> {
        let handle = self
            .handle_for(&session)
            .await
            .ok_or_else(|| RoomError::NotInRoom(session.clone()))?;
        Ok(handle.reset(session).await?)
    }

    /// SetReady: toggles the caller's lobby ready flag.
    pub async fn set_ready(
        &self,
        session: SessionId,
        ready: bool,
    ) -> Result<RoomSnapshot, WordrushError> {
        let handle = self
            .handle_for(&session)
            .await
            .ok_or_else(|| RoomError::NotInRoom(session.clone()))?;
        Ok(handle.set_ready(session, ready).await?)
    }

    /// SubmitWord: credits a word to the caller and returns their
    /// running totals. Resubmitting a credited word is a no-op with the
    /// unchanged totals. Rejected whenever the caller's room is not
    /// mid-round — including when there is no room at all.
    pub async fn submit_word(
        &self,
        session: SessionId,
        word: &str,
    ) -> Result<WordScore, WordrushError> {
        let handle = self
            .handle_for(&session)
            .await
            .ok_or(RoomError::GameNotInProgress)?;
        Ok(handle.submit_word(session, word.to_string()).await?)
    }

    /// GetRooms: summaries of every room still accepting players.
    pub async fn get_rooms(&self) -> Vec<RoomSummary> {
        // Clone the handles under the lock, query the actors without it.
        let handles = self.registry.lock().await.handles();

        let mut rooms = Vec::with_capacity(handles.len());
        for handle in handles {
            if let Ok(summary) = handle.summary().await {
                if summary.state.is_joinable() {
                    rooms.push(summary);
                }
            }
        }
        rooms
    }

    /// GetGameState: the caller's current room snapshot, or `None` when
    /// they are in no room.
    pub async fn get_game_state(&self, session: &SessionId) -> Option<RoomSnapshot> {
        let handle = self.handle_for(session).await?;
        handle.snapshot().await.ok()
    }

    async fn handle_for(&self, session: &SessionId) -> Option<RoomHandle> {
        self.registry.lock().await.handle_for_session(session)
    }
}
