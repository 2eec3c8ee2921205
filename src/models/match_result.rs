//! MatchResult: the outcome of a single reported match.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One reported match. Append-only; never edited after it is recorded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchResult {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
        }
    }

    /// True if the player took part in this match on either side.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }
}
