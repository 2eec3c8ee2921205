//! Data structures for the Swiss tournament: players, match results, tallies, standings.

mod error;
mod match_result;
mod player;
mod standing;

pub use error::TournamentError;
pub use match_result::MatchResult;
pub use player::{Player, PlayerId, StandingRecord};
pub use standing::{Pairing, Standing};
