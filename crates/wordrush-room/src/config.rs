//! Room configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordrush_board::BoardMode;

/// Settings applied to every room a registry creates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Minimum players required for the host to start a round.
    pub min_players: usize,

    /// Maximum players allowed in a room.
    pub max_players: usize,

    /// Length of a round. The round-end action fires this long after
    /// the host starts.
    pub round_duration: Duration,

    /// Which generator produces the board on round start.
    pub board_mode: BoardMode,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            min_players: 1,
            max_players: 8,
            round_duration: Duration::from_secs(180),
            board_mode: BoardMode::Dice,
        }
    }
}
