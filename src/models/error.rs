//! Errors that can occur during tournament operations.

use crate::models::player::PlayerId;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// The store could not be reached, or its schema is missing.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    /// A referenced player id does not exist.
    #[error("Player {0} not found")]
    NotFound(PlayerId),
    /// Registration with a blank name.
    #[error("Player name must not be empty")]
    EmptyPlayerName,
    /// A match reported with the same player on both sides.
    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),
    /// Players cannot be removed while match records still reference them.
    #[error("Delete matches before deleting players")]
    MatchesStillRecorded,
    /// Standings could not be written out as CSV.
    #[error("Export failed: {0}")]
    Export(String),
}
