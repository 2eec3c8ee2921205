//! Swiss pairings: next-round matchups from the win-ordered tallies.

use std::fmt;

use crate::models::{Pairing, TournamentError};
use crate::store::TournamentStore;

/// Why a pairing request produced no pairs. Not an error: the round simply cannot be paired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PairingWarning {
    /// Fewer than two players registered.
    NotEnoughPlayers(usize),
    /// Someone would be left without an opponent.
    OddPlayerCount(usize),
}

impl PairingWarning {
    /// `None` when `player_count` players can all be paired.
    pub fn check(player_count: usize) -> Option<Self> {
        if player_count < 2 {
            Some(PairingWarning::NotEnoughPlayers(player_count))
        } else if player_count % 2 != 0 {
            Some(PairingWarning::OddPlayerCount(player_count))
        } else {
            None
        }
    }
}

impl fmt::Display for PairingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingWarning::NotEnoughPlayers(n) => {
                write!(f, "Need at least 2 players to pair a round (have {})", n)
            }
            PairingWarning::OddPlayerCount(n) => {
                write!(f, "Cannot pair an odd number of players ({})", n)
            }
        }
    }
}

/// Pair each player with the one next to them in the standings.
///
/// Walks the tallies ordered by wins in non-overlapping steps of two: (0,1), (2,3), ...
/// so every player appears exactly once and meets someone on an equal or nearly equal record.
/// If the field is odd or smaller than two, logs a warning and returns no pairs.
pub fn swiss_pairings<S>(store: &S) -> Result<Vec<Pairing>, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let ranked = store.fetch_standings_ordered_by_wins_desc()?;

    if let Some(warning) = PairingWarning::check(ranked.len()) {
        log::warn!("{}", warning);
        return Ok(Vec::new());
    }

    ranked
        .chunks_exact(2)
        .map(|pair| -> Result<Pairing, TournamentError> {
            let (id1, id2) = (pair[0].player_id, pair[1].player_id);
            Ok(Pairing {
                id1,
                name1: store.fetch_player_name(id1)?,
                id2,
                name2: store.fetch_player_name(id2)?,
            })
        })
        .collect()
}
