//! The room entity and its state machine.
//!
//! `GameRoom` is plain synchronous state — roster, host, board, clock.
//! All concurrency lives one layer up: the actor task in `actor.rs` is
//! the single writer that owns a `GameRoom` and serializes every
//! mutation, so nothing here needs a lock.
//!
//! ```text
//!            start_round          round_expired
//! Waiting ──────────────→ InProgress ─────────→ Finished
//!    ↑                        │                     │
//!    └──────── reset ─────────┴─────────────────────┘
//! ```
//!
//! Invariants maintained here:
//! - `host` always names a roster member while the roster is non-empty.
//! - `board` is `Some` iff state ≠ Waiting.
//! - The roster never exceeds `config.max_players`.
//! - Display names are case-insensitively unique within the room.

use std::collections::{HashMap, HashSet};

use wordrush_clock::RoundClock;
use wordrush_protocol::{
    PlayerSnapshot, RoomCode, RoomSnapshot, RoomState, RoomSummary,
    SessionId, WordScore,
};

use crate::{RoomConfig, RoomError};

/// Points for a credited word: one per letter beyond the second, floor
/// of one. `CAT` scores 1, `QUEEN` scores 3.
pub fn word_points(normalized: &str) -> u32 {
    (normalized.chars().count() as u32).saturating_sub(2).max(1)
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One member of a room.
///
/// The host flag is not stored here — it is derived from
/// [`GameRoom::host`] so migration can never leave two hosts behind.
#[derive(Debug, Clone)]
pub struct Player {
    session_id: SessionId,
    display_name: String,
    score: u32,
    ready: bool,
    /// Words already credited this round, case-normalized to uppercase.
    found_words: HashSet<String>,
}

impl Player {
    fn new(session_id: SessionId, display_name: String) -> Self {
        Self {
            session_id,
            display_name,
            score: 0,
            ready: false,
            found_words: HashSet::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn word_count(&self) -> usize {
        self.found_words.len()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Back to a fresh round: no score, no words, not ready.
    fn clear_round_state(&mut self) {
        self.score = 0;
        self.ready = false;
        self.found_words.clear();
    }
}

// ---------------------------------------------------------------------------
// Operation outcomes
// ---------------------------------------------------------------------------

/// What a successful leave did to the room.
#[derive(Debug, Clone)]
pub struct LeaveOutcome {
    /// Set when the departing player was host and someone remained to
    /// inherit the role.
    pub new_host: Option<SessionId>,
    /// The roster emptied; the room should be destroyed and there is no
    /// one left to broadcast to.
    pub now_empty: bool,
}

/// What a word submission did.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub player_name: String,
    /// The player's running totals after the submission.
    pub totals: WordScore,
    /// False when the word had already been credited — the submission
    /// was a no-op.
    pub newly_credited: bool,
}

// ---------------------------------------------------------------------------
// GameRoom
// ---------------------------------------------------------------------------

/// A room: roster, host, lifecycle state, board, and round clock.
#[derive(Debug)]
pub struct GameRoom {
    code: RoomCode,
    name: String,
    players: HashMap<SessionId, Player>,
    /// Join order, for deterministic host migration (earliest-joined
    /// remaining member inherits).
    join_order: Vec<SessionId>,
    host: SessionId,
    state: RoomState,
    board: Option<wordrush_board::Board>,
    clock: RoundClock,
    config: RoomConfig,
}

impl GameRoom {
    /// Creates a Waiting room with the creator as sole member and host.
    pub fn new(
        code: RoomCode,
        name: impl Into<String>,
        config: RoomConfig,
        creator: SessionId,
        creator_name: impl Into<String>,
    ) -> Self {
        let mut players = HashMap::new();
        players.insert(
            creator.clone(),
            Player::new(creator.clone(), creator_name.into()),
        );
        Self {
            clock: RoundClock::new(config.round_duration),
            code,
            name: name.into(),
            players,
            join_order: vec![creator.clone()],
            host: creator,
            state: RoomState::Waiting,
            board: None,
            config,
        }
    }

    // -- Accessors --------------------------------------------------------

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn host(&self) -> &SessionId {
        &self.host
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn contains(&self, session: &SessionId) -> bool {
        self.players.contains_key(session)
    }

    pub fn player(&self, session: &SessionId) -> Option<&Player> {
        self.players.get(session)
    }

    /// The configured round length.
    pub fn round_duration(&self) -> std::time::Duration {
        self.config.round_duration
    }

    /// Epoch of the current round's clock. A scheduled round-end action
    /// carrying a different epoch is stale.
    pub fn round_epoch(&self) -> u64 {
        self.clock.epoch()
    }

    // -- Roster -----------------------------------------------------------

    /// Adds a player.
    ///
    /// # Errors
    /// - [`RoomError::GameInProgress`] — room is not Waiting
    /// - [`RoomError::RoomFull`] — roster at capacity
    /// - [`RoomError::NameTaken`] — display name collides
    ///   case-insensitively with a member
    pub fn join(
        &mut self,
        session: SessionId,
        display_name: impl Into<String>,
    ) -> Result<(), RoomError> {
        let display_name = display_name.into();
        if !self.state.is_joinable() {
            return Err(RoomError::GameInProgress);
        }
        if self.players.len() >= self.config.max_players {
            return Err(RoomError::RoomFull {
                max: self.config.max_players,
            });
        }
        let key = display_name.to_lowercase();
        if self
            .players
            .values()
            .any(|p| p.display_name.to_lowercase() == key)
        {
            return Err(RoomError::NameTaken(display_name));
        }

        self.join_order.push(session.clone());
        self.players
            .insert(session.clone(), Player::new(session, display_name));
        Ok(())
    }

    /// Removes a player, migrating the host role if needed.
    ///
    /// The host field is updated before this returns, so any snapshot
    /// taken afterwards (including the one broadcast with PlayerLeft)
    /// already shows the new host.
    ///
    /// # Errors
    /// [`RoomError::NotInRoom`] — the session is not a member.
    pub fn leave(&mut self, session: &SessionId) -> Result<LeaveOutcome, RoomError> {
        if self.players.remove(session).is_none() {
            return Err(RoomError::NotInRoom(session.clone()));
        }
        self.join_order.retain(|s| s != session);

        if self.players.is_empty() {
            return Ok(LeaveOutcome {
                new_host: None,
                now_empty: true,
            });
        }

        let mut new_host = None;
        if self.host == *session {
            let promoted = self
                .join_order
                .first()
                .expect("roster is non-empty")
                .clone();
            self.host = promoted.clone();
            new_host = Some(promoted);
        }

        Ok(LeaveOutcome {
            new_host,
            now_empty: false,
        })
    }

    /// Sets a member's ready flag. Flags are advisory lobby state and are
    /// cleared by every round start and reset.
    ///
    /// # Errors
    /// [`RoomError::NotInRoom`] — the session is not a member.
    pub fn set_ready(
        &mut self,
        session: &SessionId,
        ready: bool,
    ) -> Result<String, RoomError> {
        let player = self
            .players
            .get_mut(session)
            .ok_or_else(|| RoomError::NotInRoom(session.clone()))?;
        player.ready = ready;
        Ok(player.display_name.clone())
    }

    // -- Round lifecycle --------------------------------------------------

    /// Waiting → InProgress: generates a fresh board, zeroes every
    /// player's round state, starts the clock. Returns the new round
    /// epoch for the caller to tag the scheduled round-end action with.
    ///
    /// # Errors
    /// - [`RoomError::NotHost`] — caller is not the host
    /// - [`RoomError::GameInProgress`] — state is not Waiting
    /// - [`RoomError::InsufficientPlayers`] — roster below the minimum
    pub fn start_round(&mut self, caller: &SessionId) -> Result<u64, RoomError> {
        if *caller != self.host {
            return Err(RoomError::NotHost);
        }
        if self.state != RoomState::Waiting {
            return Err(RoomError::GameInProgress);
        }
        let have = self.players.len();
        if have < self.config.min_players {
            return Err(RoomError::InsufficientPlayers {
                have,
                need: self.config.min_players,
            });
        }

        for player in self.players.values_mut() {
            player.clear_round_state();
        }
        self.board = Some(wordrush_board::generate(
            self.config.board_mode,
            &mut rand::rng(),
        ));
        self.state = RoomState::InProgress;
        Ok(self.clock.start())
    }

    /// InProgress → Finished, triggered by the round-end action.
    ///
    /// Returns `false` (and changes nothing) when the fire is stale: the
    /// room already left InProgress, or the epoch belongs to an earlier
    /// round. The board is retained for review; scores freeze.
    pub fn round_expired(&mut self, epoch: u64) -> bool {
        if self.state != RoomState::InProgress || self.clock.epoch() != epoch {
            return false;
        }
        self.state = RoomState::Finished;
        self.clock.clear();
        true
    }

    /// Back to Waiting from any state: clears the board and clock,
    /// zeroes every player's round state. Roster and host are untouched.
    /// Bumps the clock epoch, so a round-end action still pending from
    /// an interrupted round becomes a no-op.
    ///
    /// # Errors
    /// [`RoomError::NotHost`] — caller is not the host.
    pub fn reset(&mut self, caller: &SessionId) -> Result<(), RoomError> {
        if *caller != self.host {
            return Err(RoomError::NotHost);
        }
        self.board = None;
        self.clock.clear();
        self.state = RoomState::Waiting;
        for player in self.players.values_mut() {
            player.clear_round_state();
        }
        Ok(())
    }

    // -- Scoring ----------------------------------------------------------

    /// Credits a word to a member.
    ///
    /// The word is case-folded to uppercase. A word the player already
    /// found is a no-op that reports the unchanged totals — resubmission
    /// never double-scores. No dictionary or board-path check is made
    /// here; legality is a layer above.
    ///
    /// # Errors
    /// - [`RoomError::GameNotInProgress`] — no round is running
    /// - [`RoomError::NotInRoom`] — the session is not a member
    pub fn submit_word(
        &mut self,
        session: &SessionId,
        word: &str,
    ) -> Result<SubmitOutcome, RoomError> {
        if self.state != RoomState::InProgress {
            return Err(RoomError::GameNotInProgress);
        }
        let player = self
            .players
            .get_mut(session)
            .ok_or_else(|| RoomError::NotInRoom(session.clone()))?;

        let normalized = word.trim().to_uppercase();
        let newly_credited =
            !normalized.is_empty() && player.found_words.insert(normalized.clone());
        if newly_credited {
            player.score += word_points(&normalized);
        }

        Ok(SubmitOutcome {
            player_name: player.display_name.clone(),
            totals: WordScore {
                score: player.score,
                word_count: player.found_words.len(),
            },
            newly_credited,
        })
    }

    // -- Views ------------------------------------------------------------

    /// A consistent view of the room right now. Remaining time is
    /// derived from the clock at this instant and only present while a
    /// round is running.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            room_code: self.code.clone(),
            room_name: self.name.clone(),
            state: self.state,
            board: self.board,
            remaining_seconds: if self.state == RoomState::InProgress {
                self.clock.remaining_secs()
            } else {
                None
            },
            players: self
                .join_order
                .iter()
                .filter_map(|s| self.players.get(s))
                .map(|p| PlayerSnapshot {
                    display_name: p.display_name.clone(),
                    score: p.score,
                    is_host: p.session_id == self.host,
                    is_ready: p.ready,
                })
                .collect(),
        }
    }

    /// The room's entry for the joinable listing.
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            room_code: self.code.clone(),
            room_name: self.name.clone(),
            player_count: self.players.len(),
            state: self.state,
            host_name: self
                .players
                .get(&self.host)
                .map(|p| p.display_name.clone())
                .unwrap_or_default(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(id: &str) -> SessionId {
        SessionId::new(id)
    }

    fn room() -> GameRoom {
        GameRoom::new(
            RoomCode::new("ABC234"),
            "Word Warriors",
            RoomConfig::default(),
            sid("alice"),
            "alice",
        )
    }

    /// Room with `n` members named p0..p(n-1); p0 is the creator/host.
    fn room_with(n: usize) -> GameRoom {
        let mut r = GameRoom::new(
            RoomCode::new("ABC234"),
            "test",
            RoomConfig::default(),
            sid("p0"),
            "p0",
        );
        for i in 1..n {
            r.join(sid(&format!("p{i}")), format!("p{i}")).unwrap();
        }
        r
    }

    // -- Creation ---------------------------------------------------------

    #[test]
    fn test_new_room_is_waiting_with_creator_as_host() {
        let r = room();
        assert_eq!(r.state(), RoomState::Waiting);
        assert_eq!(r.player_count(), 1);
        assert_eq!(r.host(), &sid("alice"));
        assert!(r.snapshot().board.is_none());
        assert!(r.snapshot().remaining_seconds.is_none());
    }

    // -- Join -------------------------------------------------------------

    #[test]
    fn test_join_adds_player() {
        let mut r = room();
        r.join(sid("bob"), "bob").unwrap();
        assert_eq!(r.player_count(), 2);
        assert!(r.contains(&sid("bob")));
        // Joining does not move the host.
        assert_eq!(r.host(), &sid("alice"));
    }

    #[test]
    fn test_join_rejects_case_insensitive_name_collision() {
        let mut r = room();
        let err = r.join(sid("bob"), "ALICE").unwrap_err();
        assert!(matches!(err, RoomError::NameTaken(name) if name == "ALICE"));
        assert_eq!(r.player_count(), 1);
    }

    #[test]
    fn test_join_rejects_ninth_player() {
        let mut r = room_with(8);
        let err = r.join(sid("late"), "late").unwrap_err();
        assert!(matches!(err, RoomError::RoomFull { max: 8 }));
        assert_eq!(r.player_count(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_rejects_when_round_running() {
        let mut r = room();
        r.start_round(&sid("alice")).unwrap();
        let err = r.join(sid("bob"), "bob").unwrap_err();
        assert!(matches!(err, RoomError::GameInProgress));
    }

    #[tokio::test(start_paused = true)]
    async fn test_join_rejects_when_finished() {
        let mut r = room();
        let epoch = r.start_round(&sid("alice")).unwrap();
        assert!(r.round_expired(epoch));
        let err = r.join(sid("bob"), "bob").unwrap_err();
        assert!(matches!(err, RoomError::GameInProgress));
    }

    // -- Leave ------------------------------------------------------------

    #[test]
    fn test_leave_unknown_session_fails() {
        let mut r = room();
        let err = r.leave(&sid("ghost")).unwrap_err();
        assert!(matches!(err, RoomError::NotInRoom(_)));
    }

    #[test]
    fn test_last_leave_reports_empty() {
        let mut r = room();
        let outcome = r.leave(&sid("alice")).unwrap();
        assert!(outcome.now_empty);
        assert!(outcome.new_host.is_none());
        assert_eq!(r.player_count(), 0);
    }

    #[test]
    fn test_host_leave_promotes_earliest_joined() {
        let mut r = room_with(3); // p0 (host), p1, p2
        let outcome = r.leave(&sid("p0")).unwrap();
        assert_eq!(outcome.new_host, Some(sid("p1")));
        assert_eq!(r.host(), &sid("p1"));
        assert!(!outcome.now_empty);

        // Snapshot taken after leave already shows the new host.
        let snap = r.snapshot();
        let p1 = snap
            .players
            .iter()
            .find(|p| p.display_name == "p1")
            .unwrap();
        assert!(p1.is_host);
    }

    #[test]
    fn test_non_host_leave_keeps_host() {
        let mut r = room_with(3);
        let outcome = r.leave(&sid("p2")).unwrap();
        assert!(outcome.new_host.is_none());
        assert_eq!(r.host(), &sid("p0"));
    }

    #[test]
    fn test_host_can_migrate_twice() {
        let mut r = room_with(3);
        r.leave(&sid("p0")).unwrap();
        let outcome = r.leave(&sid("p1")).unwrap();
        assert_eq!(outcome.new_host, Some(sid("p2")));
        assert_eq!(r.host(), &sid("p2"));
    }

    // -- Start ------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_start_round_sets_board_and_clock() {
        let mut r = room_with(2);
        r.submit_word(&sid("p0"), "dummy").unwrap_err(); // not started yet

        r.start_round(&sid("p0")).unwrap();
        assert_eq!(r.state(), RoomState::InProgress);

        let snap = r.snapshot();
        assert!(snap.board.is_some());
        assert_eq!(snap.remaining_seconds, Some(180));
        assert!(snap.players.iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_start_round_rejects_non_host() {
        let mut r = room_with(2);
        let err = r.start_round(&sid("p1")).unwrap_err();
        assert!(matches!(err, RoomError::NotHost));
        assert_eq!(r.state(), RoomState::Waiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_round_rejects_while_in_progress() {
        let mut r = room();
        r.start_round(&sid("alice")).unwrap();
        let err = r.start_round(&sid("alice")).unwrap_err();
        assert!(matches!(err, RoomError::GameInProgress));
    }

    #[test]
    fn test_start_round_rejects_below_minimum() {
        let mut r = GameRoom::new(
            RoomCode::new("ABC234"),
            "test",
            RoomConfig {
                min_players: 2,
                ..RoomConfig::default()
            },
            sid("alice"),
            "alice",
        );
        let err = r.start_round(&sid("alice")).unwrap_err();
        assert!(matches!(
            err,
            RoomError::InsufficientPlayers { have: 1, need: 2 }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_round_clears_previous_round_state() {
        let mut r = room_with(2);
        let epoch = r.start_round(&sid("p0")).unwrap();
        r.submit_word(&sid("p1"), "horse").unwrap();
        assert!(r.round_expired(epoch));

        r.reset(&sid("p0")).unwrap();
        r.set_ready(&sid("p1"), true).unwrap();
        r.start_round(&sid("p0")).unwrap();

        let p1 = r.player(&sid("p1")).unwrap();
        assert_eq!(p1.score(), 0);
        assert_eq!(p1.word_count(), 0);
        assert!(!p1.is_ready());
    }

    // -- Round expiry -----------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_round_expired_freezes_room() {
        let mut r = room();
        let epoch = r.start_round(&sid("alice")).unwrap();
        assert!(r.round_expired(epoch));
        assert_eq!(r.state(), RoomState::Finished);

        // Board is retained for review; the countdown is gone.
        let snap = r.snapshot();
        assert!(snap.board.is_some());
        assert!(snap.remaining_seconds.is_none());

        // Submissions are frozen.
        let err = r.submit_word(&sid("alice"), "cat").unwrap_err();
        assert!(matches!(err, RoomError::GameNotInProgress));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_epoch_fire_is_a_no_op() {
        let mut r = room();
        let first = r.start_round(&sid("alice")).unwrap();
        r.reset(&sid("alice")).unwrap();

        assert!(!r.round_expired(first));
        assert_eq!(r.state(), RoomState::Waiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fire_against_new_round_is_a_no_op() {
        let mut r = room();
        let first = r.start_round(&sid("alice")).unwrap();
        r.reset(&sid("alice")).unwrap();
        let second = r.start_round(&sid("alice")).unwrap();
        assert_ne!(first, second);

        // The old round's action lands on the new round: nothing happens.
        assert!(!r.round_expired(first));
        assert_eq!(r.state(), RoomState::InProgress);

        // The new round's own action still works.
        assert!(r.round_expired(second));
        assert_eq!(r.state(), RoomState::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_fire_is_a_no_op() {
        let mut r = room();
        let epoch = r.start_round(&sid("alice")).unwrap();
        assert!(r.round_expired(epoch));
        assert!(!r.round_expired(epoch));
        assert_eq!(r.state(), RoomState::Finished);
    }

    // -- Reset ------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_reset_returns_to_waiting() {
        let mut r = room_with(2);
        let epoch = r.start_round(&sid("p0")).unwrap();
        r.submit_word(&sid("p1"), "queen").unwrap();
        assert!(r.round_expired(epoch));

        r.reset(&sid("p0")).unwrap();
        assert_eq!(r.state(), RoomState::Waiting);

        let snap = r.snapshot();
        assert!(snap.board.is_none());
        assert!(snap.remaining_seconds.is_none());
        assert!(snap.players.iter().all(|p| p.score == 0));
        // Roster and host survive the reset.
        assert_eq!(r.player_count(), 2);
        assert_eq!(r.host(), &sid("p0"));
    }

    #[test]
    fn test_reset_rejects_non_host() {
        let mut r = room_with(2);
        let err = r.reset(&sid("p1")).unwrap_err();
        assert!(matches!(err, RoomError::NotHost));
    }

    #[test]
    fn test_reset_from_waiting_is_benign() {
        let mut r = room();
        r.set_ready(&sid("alice"), true).unwrap();
        r.reset(&sid("alice")).unwrap();
        assert_eq!(r.state(), RoomState::Waiting);
        assert!(!r.player(&sid("alice")).unwrap().is_ready());
    }

    // -- Submissions ------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn test_word_scores_length_minus_two_floor_one() {
        let mut r = room_with(2);
        r.start_round(&sid("p0")).unwrap();

        let cat = r.submit_word(&sid("p1"), "cat").unwrap();
        assert!(cat.newly_credited);
        assert_eq!(cat.totals, WordScore { score: 1, word_count: 1 });

        let queen = r.submit_word(&sid("p1"), "queen").unwrap();
        assert_eq!(queen.totals, WordScore { score: 4, word_count: 2 });

        let at = r.submit_word(&sid("p1"), "at").unwrap();
        assert_eq!(at.totals.score, 5, "two letters still floor at 1 point");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmission_is_idempotent() {
        let mut r = room();
        r.start_round(&sid("alice")).unwrap();

        r.submit_word(&sid("alice"), "horse").unwrap();
        let again = r.submit_word(&sid("alice"), "  HoRsE ").unwrap();
        assert!(!again.newly_credited);
        assert_eq!(again.totals, WordScore { score: 3, word_count: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_players_score_independently() {
        let mut r = room_with(2);
        r.start_round(&sid("p0")).unwrap();

        r.submit_word(&sid("p0"), "stone").unwrap();
        let other = r.submit_word(&sid("p1"), "stone").unwrap();
        assert!(other.newly_credited, "found-word sets are per player");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submission_credits_nothing() {
        let mut r = room();
        r.start_round(&sid("alice")).unwrap();
        let outcome = r.submit_word(&sid("alice"), "   ").unwrap();
        assert!(!outcome.newly_credited);
        assert_eq!(outcome.totals.score, 0);
    }

    #[test]
    fn test_submission_rejected_while_waiting() {
        let mut r = room();
        let err = r.submit_word(&sid("alice"), "cat").unwrap_err();
        assert!(matches!(err, RoomError::GameNotInProgress));
    }

    #[test]
    fn test_word_points_table() {
        assert_eq!(word_points("A"), 1);
        assert_eq!(word_points("AT"), 1);
        assert_eq!(word_points("CAT"), 1);
        assert_eq!(word_points("CATS"), 2);
        assert_eq!(word_points("QUEEN"), 3);
        assert_eq!(word_points("STRENGTHS"), 7);
    }

    // -- Ready flags ------------------------------------------------------

    #[test]
    fn test_set_ready_reflects_in_snapshot() {
        let mut r = room_with(2);
        let name = r.set_ready(&sid("p1"), true).unwrap();
        assert_eq!(name, "p1");

        let snap = r.snapshot();
        let p1 = snap
            .players
            .iter()
            .find(|p| p.display_name == "p1")
            .unwrap();
        assert!(p1.is_ready);
    }

    // -- Snapshot ---------------------------------------------------------

    #[test]
    fn test_snapshot_lists_players_in_join_order() {
        let r = room_with(3);
        let names: Vec<_> = r
            .snapshot()
            .players
            .iter()
            .map(|p| p.display_name.clone())
            .collect();
        assert_eq!(names, ["p0", "p1", "p2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_seconds_tracks_the_clock() {
        let mut r = room();
        r.start_round(&sid("alice")).unwrap();
        assert_eq!(r.snapshot().remaining_seconds, Some(180));

        tokio::time::advance(std::time::Duration::from_secs(50)).await;
        assert_eq!(r.snapshot().remaining_seconds, Some(130));

        tokio::time::advance(std::time::Duration::from_secs(200)).await;
        // Clock floors at zero even if the expiry action hasn't landed.
        assert_eq!(r.snapshot().remaining_seconds, Some(0));
    }

    #[test]
    fn test_summary_carries_host_name() {
        let r = room_with(2);
        let summary = r.summary();
        assert_eq!(summary.host_name, "p0");
        assert_eq!(summary.player_count, 2);
        assert_eq!(summary.state, RoomState::Waiting);
    }
}
