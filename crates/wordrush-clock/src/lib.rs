//! Round timing for Wordrush.
//!
//! Two pieces:
//!
//! - [`RoundClock`] — deadline tracking for the current round. Remaining
//!   time is derived from a monotonic clock on every read, never stored
//!   and decremented, so repeated reads are idempotent and consistent
//!   with wall-clock time.
//! - [`notify_after`] — a one-shot scheduled delivery, used to push an
//!   end-of-round command into a room's own channel when the round
//!   duration elapses.
//!
//! # Epochs
//!
//! Every round start and every reset bumps the clock's epoch. A scheduled
//! end-of-round notification carries the epoch it was created under; the
//! receiver compares it against the current epoch and ignores stale
//! fires. This is what makes the pending timer harmless when a host
//! resets mid-round: the old notification still arrives, but its epoch
//! no longer matches.
//!
//! Uses `tokio::time::Instant`, so tests drive it deterministically with
//! a paused runtime clock.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

// ---------------------------------------------------------------------------
// RoundClock
// ---------------------------------------------------------------------------

/// Tracks the deadline of the current round.
///
/// Not running until [`start`](Self::start) is called; [`clear`](Self::clear)
/// stops it. Both bump the epoch.
#[derive(Debug)]
pub struct RoundClock {
    duration: Duration,
    started: Option<Instant>,
    epoch: u64,
}

impl RoundClock {
    /// Creates a stopped clock for rounds of the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
            epoch: 0,
        }
    }

    /// Starts a new round now. Returns the new epoch, which tags the
    /// round's scheduled end-of-round notification.
    pub fn start(&mut self) -> u64 {
        self.started = Some(Instant::now());
        self.epoch += 1;
        self.epoch
    }

    /// Stops the clock and invalidates any notification scheduled under
    /// the previous epoch.
    pub fn clear(&mut self) {
        self.started = None;
        self.epoch += 1;
    }

    /// Whether a round is currently being timed.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// The current epoch. A notification whose epoch differs is stale.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The configured round duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left in the current round: `max(0, duration - elapsed)`.
    /// `None` when no round is running.
    pub fn remaining(&self) -> Option<Duration> {
        self.started
            .map(|s| self.duration.saturating_sub(s.elapsed()))
    }

    /// [`remaining`](Self::remaining) in whole seconds, rounded up so a
    /// round that just started reports its full duration.
    pub fn remaining_secs(&self) -> Option<u64> {
        self.remaining()
            .map(|d| d.as_millis().div_ceil(1000) as u64)
    }

    /// Whether the running round's deadline has passed.
    pub fn expired(&self) -> bool {
        self.remaining() == Some(Duration::ZERO)
    }
}

// ---------------------------------------------------------------------------
// One-shot notification
// ---------------------------------------------------------------------------

/// Spawns a task that delivers `msg` to `tx` after `delay`.
///
/// Delivery failure means the receiver is gone (the room was destroyed
/// while the timer slept); that is a normal shutdown order and is
/// silently dropped.
pub fn notify_after<M: Send + 'static>(
    delay: Duration,
    tx: mpsc::Sender<M>,
    msg: M,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(msg).await.is_err() {
            trace!("scheduled notification dropped, receiver closed");
        }
    })
}

// =========================================================================
// Tests
// =========================================================================
