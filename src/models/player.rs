//! Player and StandingRecord data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store.
pub type PlayerId = i64;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A player's running win/loss tally. One per registered player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub player_id: PlayerId,
    pub wins: u32,
    pub losses: u32,
}

impl StandingRecord {
    /// Fresh tally created at registration time.
    pub fn zeroed(player_id: PlayerId) -> Self {
        Self {
            player_id,
            wins: 0,
            losses: 0,
        }
    }

    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a loss for this player.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }

    /// Matches this tally accounts for.
    pub fn played(&self) -> u32 {
        self.wins + self.losses
    }
}
