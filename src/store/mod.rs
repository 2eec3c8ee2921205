//! Persistence collaborator: the record sets the standings and pairing logic read and write.
//!
//! The logic never holds a connection of its own; every operation receives a store handle.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::{PlayerId, Standing, StandingRecord, TournamentError};

/// Operations a backing store must provide.
///
/// Multi-record writes (`insert_player`, `record_match`, `delete_all_players_and_standings`)
/// must be all-or-nothing: on error the store is left as it was.
pub trait TournamentStore {
    /// Create a player and its zeroed tally. Returns the new id.
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, TournamentError>;

    /// Clear all match records.
    fn delete_all_matches(&mut self) -> Result<(), TournamentError>;

    /// Clear all tallies, then all players.
    /// Fails with `MatchesStillRecorded` if match records still reference players.
    fn delete_all_players_and_standings(&mut self) -> Result<(), TournamentError>;

    fn count_players(&self) -> Result<usize, TournamentError>;

    /// Append a match and bump the winner's wins and the loser's losses by exactly one.
    /// Fails with `SelfMatch` when both ids are the same player.
    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError>;

    /// Tallies ordered by wins, highest first.
    fn fetch_standings_ordered_by_wins_desc(&self) -> Result<Vec<StandingRecord>, TournamentError>;

    fn fetch_player_name(&self, id: PlayerId) -> Result<String, TournamentError>;

    /// Every player joined with its wins and the number of matches it appears in,
    /// in storage order.
    fn fetch_all_players_and_match_counts(&self) -> Result<Vec<Standing>, TournamentError>;
}
