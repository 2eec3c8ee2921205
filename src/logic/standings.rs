//! Standings: players ranked by wins.

use crate::models::{Standing, TournamentError};
use crate::store::TournamentStore;

/// Players ranked by wins, highest first, with the number of matches each has played.
///
/// Players on equal wins keep the order the store returned them in; no secondary key is applied.
pub fn player_standings<S>(store: &S) -> Result<Vec<Standing>, TournamentError>
where
    S: TournamentStore + ?Sized,
{
    let mut standings = store.fetch_all_players_and_match_counts()?;
    // sort_by is stable
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    Ok(standings)
}

/// Render a standings table as CSV with an `id,name,wins,matches` header.
pub fn standings_csv(standings: &[Standing]) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if standings.is_empty() {
        writer
            .write_record(["id", "name", "wins", "matches"])
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    for row in standings {
        writer
            .serialize(row)
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
