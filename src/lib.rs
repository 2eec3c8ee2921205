//! Swiss-system tournament tracker: player registration, match reporting,
//! standings and next-round pairings over a pluggable store.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    count_players, delete_matches, delete_players, player_standings, register_player,
    report_match, standings_csv, swiss_pairings, PairingWarning,
};
pub use models::{
    MatchResult, Pairing, Player, PlayerId, Standing, StandingRecord, TournamentError,
};
pub use store::{MemoryStore, SqliteStore, TournamentStore};
