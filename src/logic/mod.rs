//! Tournament operations over a store: registration, reporting, standings, pairings.

mod pairing;
mod registration;
mod standings;

pub use pairing::{swiss_pairings, PairingWarning};
pub use registration::{
    count_players, delete_matches, delete_players, register_player, report_match,
};
pub use standings::{player_standings, standings_csv};
