//! In-process store backed by plain vectors.

use crate::models::{MatchResult, Player, PlayerId, Standing, StandingRecord, TournamentError};
use crate::store::TournamentStore;

/// Keeps players, tallies and matches in registration order.
/// Ids start at 1 and are never reused, even after a reset.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: Vec<Player>,
    standings: Vec<StandingRecord>,
    matches: Vec<MatchResult>,
    last_id: PlayerId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded matches, oldest first.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    fn standing_mut(&mut self, id: PlayerId) -> Option<&mut StandingRecord> {
        self.standings.iter_mut().find(|s| s.player_id == id)
    }

    fn standing(&self, id: PlayerId) -> Option<&StandingRecord> {
        self.standings.iter().find(|s| s.player_id == id)
    }
}

impl TournamentStore for MemoryStore {
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        self.last_id += 1;
        let id = self.last_id;
        self.players.push(Player::new(id, name));
        self.standings.push(StandingRecord::zeroed(id));
        log::debug!("Registered player {} ({})", id, name);
        Ok(id)
    }

    fn delete_all_matches(&mut self) -> Result<(), TournamentError> {
        self.matches.clear();
        Ok(())
    }

    fn delete_all_players_and_standings(&mut self) -> Result<(), TournamentError> {
        if !self.matches.is_empty() {
            return Err(TournamentError::MatchesStillRecorded);
        }
        self.standings.clear();
        self.players.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        Ok(self.players.len())
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        // Validate both sides before touching anything so a bad id leaves no partial write.
        for id in [winner, loser] {
            if self.standing(id).is_none() {
                return Err(TournamentError::NotFound(id));
            }
        }
        self.matches.push(MatchResult::new(winner, loser));
        if let Some(s) = self.standing_mut(winner) {
            s.add_win();
        }
        if let Some(s) = self.standing_mut(loser) {
            s.add_loss();
        }
        log::debug!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    fn fetch_standings_ordered_by_wins_desc(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let mut rows = self.standings.clone();
        rows.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(rows)
    }

    fn fetch_player_name(&self, id: PlayerId) -> Result<String, TournamentError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .ok_or(TournamentError::NotFound(id))
    }

    fn fetch_all_players_and_match_counts(&self) -> Result<Vec<Standing>, TournamentError> {
        self.players
            .iter()
            .map(|p| -> Result<Standing, TournamentError> {
                let tally = self.standing(p.id).ok_or(TournamentError::NotFound(p.id))?;
                let matches = self.matches.iter().filter(|m| m.involves(p.id)).count() as u32;
                Ok(Standing {
                    id: p.id,
                    name: p.name.clone(),
                    wins: tally.wins,
                    matches,
                })
            })
            .collect()
    }
}
