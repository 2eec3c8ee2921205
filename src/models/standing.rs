//! Standing rows and next-round pairings (views for API / display).

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One row of the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches played, counted from match history (as winner or loser).
    pub matches: u32,
}

/// A next-round matchup. Not persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}
