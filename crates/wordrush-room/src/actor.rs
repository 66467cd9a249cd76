//! Room actor: an isolated Tokio task that owns one `GameRoom`.
//!
//! Each room runs in its own task and is mutated only by that task, so
//! every operation on a room is serialized with respect to every other —
//! two joins racing the last slot, a leave racing a submission, a reset
//! racing the round-end action — while different rooms proceed fully
//! independently. The outside world talks to the actor through an mpsc
//! command channel; commands that need an answer carry a oneshot reply
//! sender.
//!
//! Broadcasts are emitted by the actor *after* a mutation commits and
//! *before* the reply is sent, so by the time a caller sees a result the
//! corresponding event (with a post-mutation snapshot) is already on its
//! way to the room's members.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use wordrush_clock::notify_after;
use wordrush_protocol::{
    GameEvent, RoomCode, RoomSnapshot, RoomSummary, SessionId, WordScore,
};

use crate::{Broadcaster, GameRoom, RoomConfig, RoomError};

/// Commands sent to a room actor through its channel.
pub(crate) enum RoomCommand {
    Join {
        session: SessionId,
        display_name: String,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
    Leave {
        session: SessionId,
        reply: oneshot::Sender<Result<LeaveReply, RoomError>>,
    },
    SetReady {
        session: SessionId,
        ready: bool,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
    Start {
        session: SessionId,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
    Reset {
        session: SessionId,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
    Submit {
        session: SessionId,
        word: String,
        reply: oneshot::Sender<Result<WordScore, RoomError>>,
    },
    Snapshot {
        reply: oneshot::Sender<RoomSnapshot>,
    },
    Summary {
        reply: oneshot::Sender<RoomSummary>,
    },
    /// The scheduled end-of-round action landed. Stale epochs are
    /// ignored inside the actor.
    RoundExpired { epoch: u64 },
    /// Stop the actor. Sent by the registry when the roster empties.
    Shutdown,
}

/// What a leave did, as the registry needs to see it: whether the room
/// should now be destroyed and who (if anyone) inherited the host role.
#[derive(Debug, Clone)]
pub struct LeaveReply {
    pub new_host: Option<SessionId>,
    pub now_empty: bool,
}

/// Handle to a running room actor. Cheap to clone; the registry holds
/// one per room and hands out clones so hot-path operations (snapshots,
/// submissions) don't serialize through the registry.
#[derive(Clone)]
pub struct RoomHandle {
    code: RoomCode,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The room this handle commands.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> RoomCommand,
    ) -> Result<T, RoomError> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(make(tx))
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))?;
        rx.await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))
    }

    pub async fn join(
        &self,
        session: SessionId,
        display_name: String,
    ) -> Result<RoomSnapshot, RoomError> {
        self.request(|reply| RoomCommand::Join {
            session,
            display_name,
            reply,
        })
        .await?
    }

    pub async fn leave(&self, session: SessionId) -> Result<LeaveReply, RoomError> {
        self.request(|reply| RoomCommand::Leave { session, reply })
            .await?
    }

    pub async fn set_ready(
        &self,
        session: SessionId,
        ready: bool,
    ) -> Result<RoomSnapshot, RoomError> {
        self.request(|reply| RoomCommand::SetReady {
            session,
            ready,
            reply,
        })
        .await?
    }

    pub async fn start(&self, session: SessionId) -> Result<RoomSnapshot, RoomError> {
        self.request(|reply| RoomCommand::Start { session, reply })
            .await?
    }

    pub async fn reset(&self, session: SessionId) -> Result<RoomSnapshot, RoomError> {
        self.request(|reply| RoomCommand::Reset { session, reply })
            .await?
    }

    pub async fn submit_word(
        &self,
        session: SessionId,
        word: String,
    ) -> Result<WordScore, RoomError> {
        self.request(|reply| RoomCommand::Submit {
            session,
            word,
            reply,
        })
        .await?
    }

    pub async fn snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        self.request(|reply| RoomCommand::Snapshot { reply }).await
    }

    pub async fn summary(&self) -> Result<RoomSummary, RoomError> {
        self.request(|reply| RoomCommand::Summary { reply }).await
    }

    /// Tells the actor to stop. Pending scheduled actions become no-ops
    /// once the channel closes.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.sender
            .send(RoomCommand::Shutdown)
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))
    }
}

/// The room actor. Runs inside a Tokio task until Shutdown (or until
/// every handle and pending timer is gone).
struct RoomActor<B: Broadcaster> {
    room: GameRoom,
    receiver: mpsc::Receiver<RoomCommand>,
    /// Weak self-reference handed to scheduled round-end actions. Weak,
    /// so an abandoned actor with no outside handles can still drain and
    /// stop instead of keeping itself alive through its own channel.
    self_sender: mpsc::WeakSender<RoomCommand>,
    broadcaster: Arc<B>,
}

impl<B: Broadcaster> RoomActor<B> {
    async fn run(mut self) {
        tracing::info!(room = %self.room.code(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join {
                    session,
                    display_name,
                    reply,
                } => {
                    let result = self.handle_join(session, display_name);
                    let _ = reply.send(result);
                }
                RoomCommand::Leave { session, reply } => {
                    let result = self.handle_leave(session);
                    let _ = reply.send(result);
                }
                RoomCommand::SetReady {
                    session,
                    ready,
                    reply,
                } => {
                    let result = self.handle_set_ready(session, ready);
                    let _ = reply.send(result);
                }
                RoomCommand::Start { session, reply } => {
                    let result = self.handle_start(session);
                    let _ = reply.send(result);
                }
                RoomCommand::Reset { session, reply } => {
                    let result = self.handle_reset(session);
                    let _ = reply.send(result);
                }
                RoomCommand::Submit {
                    session,
                    word,
                    reply,
                } => {
                    let result = self.handle_submit(session, word);
                    let _ = reply.send(result);
                }
                RoomCommand::Snapshot { reply } => {
                    let _ = reply.send(self.room.snapshot());
                }
                RoomCommand::Summary { reply } => {
                    let _ = reply.send(self.room.summary());
                }
                RoomCommand::RoundExpired { epoch } => {
                    self.handle_round_expired(epoch);
                }
                RoomCommand::Shutdown => {
                    tracing::info!(room = %self.room.code(), "room shutting down");
                    break;
                }
            }
        }

        tracing::info!(room = %self.room.code(), "room actor stopped");
    }

    fn handle_join(
        &mut self,
        session: SessionId,
        display_name: String,
    ) -> Result<RoomSnapshot, RoomError> {
        self.room.join(session.clone(), display_name.clone())?;
        let snapshot = self.room.snapshot();
        tracing::info!(
            room = %self.room.code(),
            %session,
            players = self.room.player_count(),
            "player joined"
        );
        self.broadcast(GameEvent::PlayerJoined {
            joiner: display_name,
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }

    fn handle_leave(&mut self, session: SessionId) -> Result<LeaveReply, RoomError> {
        let outcome = self.room.leave(&session)?;
        tracing::info!(
            room = %self.room.code(),
            %session,
            players = self.room.player_count(),
            "player left"
        );

        // An emptied room has no broadcast target; the registry destroys
        // it on seeing `now_empty`.
        if !outcome.now_empty {
            self.broadcast(GameEvent::PlayerLeft {
                leaver_id: session,
                new_host_id: outcome.new_host.clone(),
                snapshot: self.room.snapshot(),
            });
        }

        Ok(LeaveReply {
            new_host: outcome.new_host,
            now_empty: outcome.now_empty,
        })
    }

    fn handle_set_ready(
        &mut self,
        session: SessionId,
        ready: bool,
    ) -> Result<RoomSnapshot, RoomError> {
        let player_name = self.room.set_ready(&session, ready)?;
        let snapshot = self.room.snapshot();
        self.broadcast(GameEvent::PlayerReady {
            player_name,
            ready,
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }

    fn handle_start(&mut self, session: SessionId) -> Result<RoomSnapshot, RoomError> {
        let epoch = self.room.start_round(&session)?;

        // Schedule the round's termination through our own channel. The
        // epoch tag makes a late fire harmless after a reset or restart.
        if let Some(tx) = self.self_sender.upgrade() {
            let _ = notify_after(
                self.room.round_duration(),
                tx,
                RoomCommand::RoundExpired { epoch },
            );
        }

        let snapshot = self.room.snapshot();
        tracing::info!(
            room = %self.room.code(),
            players = self.room.player_count(),
            round_secs = self.room.round_duration().as_secs(),
            "round started"
        );
        self.broadcast(GameEvent::GameStarted {
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }

    fn handle_reset(&mut self, session: SessionId) -> Result<RoomSnapshot, RoomError> {
        self.room.reset(&session)?;
        let snapshot = self.room.snapshot();
        tracing::info!(room = %self.room.code(), "room reset to lobby");
        self.broadcast(GameEvent::GameReset {
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }

    fn handle_submit(
        &mut self,
        session: SessionId,
        word: String,
    ) -> Result<WordScore, RoomError> {
        let outcome = self.room.submit_word(&session, &word)?;
        if outcome.newly_credited {
            self.broadcast(GameEvent::ScoreUpdated {
                player_name: outcome.player_name,
                score: outcome.totals.score,
                word_count: outcome.totals.word_count,
            });
        }
        Ok(outcome.totals)
    }

    fn handle_round_expired(&mut self, epoch: u64) {
        if self.room.round_expired(epoch) {
            tracing::info!(room = %self.room.code(), "round ended");
            self.broadcast(GameEvent::GameEnded {
                snapshot: self.room.snapshot(),
            });
        } else {
            tracing::trace!(
                room = %self.room.code(),
                epoch,
                "stale round-end action ignored"
            );
        }
    }

    fn broadcast(&self, event: GameEvent) {
        self.broadcaster.broadcast(self.room.code(), event);
    }
}

/// Spawns a new room actor with the creator as sole member and host, and
/// returns a handle to it.
pub(crate) fn spawn_room<B: Broadcaster>(
    code: RoomCode,
    name: String,
    config: RoomConfig,
    creator: SessionId,
    creator_name: String,
    broadcaster: Arc<B>,
    channel_size: usize,
) -> RoomHandle {
    let (tx, rx) = mpsc::channel(channel_size);

    let actor = RoomActor {
        room: GameRoom::new(code.clone(), name, config, creator, creator_name),
        receiver: rx,
        self_sender: tx.downgrade(),
        broadcaster,
    };

    tokio::spawn(actor.run());

    RoomHandle { code, sender: tx }
}
