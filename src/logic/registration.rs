//! Registration, match reporting and bulk reset.

use crate::models::{PlayerId, TournamentError};
use crate::store::TournamentStore;

/// Register a player and return the id the store assigned. Names need not be unique.
pub fn register_player<S>(store: &mut S, name: &str) -> Result<PlayerId, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyPlayerName);
    }
    store.insert_player(name)
}

/// Record that `winner` beat `loser`.
pub fn report_match<S>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError>
where
    S: TournamentStore + ?Sized,
{
    if winner == loser {
        return Err(TournamentError::SelfMatch(winner));
    }
    store.record_match(winner, loser)
}

/// Remove all match records.
pub fn delete_matches<S>(store: &mut S) -> Result<(), TournamentError>
where
    S: TournamentStore + ?Sized,
{
    store.delete_all_matches()
}

/// Remove all players and their tallies. Matches must be deleted first.
pub fn delete_players<S>(store: &mut S) -> Result<(), TournamentError>
where
    S: TournamentStore + ?Sized,
{
    store.delete_all_players_and_standings()
}

pub fn count_players<S>(store: &S) -> Result<usize, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    store.count_players()
}
