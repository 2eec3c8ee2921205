//! SQLite-backed store. All statements are parameterized.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{PlayerId, Standing, StandingRecord, TournamentError};
use crate::store::TournamentStore;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS players (
        player_id  INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name  TEXT    NOT NULL
    );

    CREATE TABLE IF NOT EXISTS standings (
        player_id  INTEGER PRIMARY KEY REFERENCES players (player_id),
        wins       INTEGER NOT NULL DEFAULT 0 CHECK (wins >= 0),
        losses     INTEGER NOT NULL DEFAULT 0 CHECK (losses >= 0)
    );

    CREATE TABLE IF NOT EXISTS matches (
        match_id   INTEGER PRIMARY KEY AUTOINCREMENT,
        winner_id  INTEGER NOT NULL REFERENCES players (player_id),
        loser_id   INTEGER NOT NULL REFERENCES players (player_id)
    );
";

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        TournamentError::StoreUnavailable(err.to_string())
    }
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file. The tables are expected to exist already;
    /// call [`SqliteStore::create_schema`] for a fresh file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TournamentError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, TournamentError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, TournamentError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }

    /// Create the players, standings and matches tables if they are missing.
    pub fn create_schema(&mut self) -> Result<(), TournamentError> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(SCHEMA)?;
        tx.commit()?;
        Ok(())
    }
}

impl TournamentStore for SqliteStore {
    fn insert_player(&mut self, name: &str) -> Result<PlayerId, TournamentError> {
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO players (full_name) VALUES (?1)", params![name])?;
        let id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO standings (player_id, wins, losses) VALUES (?1, 0, 0)",
            params![id],
        )?;
        tx.commit()?;
        log::debug!("Registered player {} ({})", id, name);
        Ok(id)
    }

    fn delete_all_matches(&mut self) -> Result<(), TournamentError> {
        self.conn.execute("DELETE FROM matches", [])?;
        Ok(())
    }

    fn delete_all_players_and_standings(&mut self) -> Result<(), TournamentError> {
        let tx = self.conn.transaction()?;
        let recorded: i64 = tx.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        if recorded > 0 {
            return Err(TournamentError::MatchesStillRecorded);
        }
        // standings reference players
        tx.execute("DELETE FROM standings", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.commit()?;
        Ok(())
    }

    fn count_players(&self) -> Result<usize, TournamentError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<(), TournamentError> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }
        let tx = self.conn.transaction()?;
        let updated = tx.execute(
            "UPDATE standings SET wins = wins + 1 WHERE player_id = ?1",
            params![winner],
        )?;
        if updated == 0 {
            return Err(TournamentError::NotFound(winner));
        }
        let updated = tx.execute(
            "UPDATE standings SET losses = losses + 1 WHERE player_id = ?1",
            params![loser],
        )?;
        if updated == 0 {
            return Err(TournamentError::NotFound(loser));
        }
        tx.execute(
            "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2)",
            params![winner, loser],
        )?;
        tx.commit()?;
        log::debug!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    fn fetch_standings_ordered_by_wins_desc(&self) -> Result<Vec<StandingRecord>, TournamentError> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, wins, losses FROM standings ORDER BY wins DESC, player_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StandingRecord {
                player_id: row.get(0)?,
                wins: row.get(1)?,
                losses: row.get(2)?,
            })
        })?;
        let tallies = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(tallies)
    }

    fn fetch_player_name(&self, id: PlayerId) -> Result<String, TournamentError> {
        self.conn
            .query_row(
                "SELECT full_name FROM players WHERE player_id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or(TournamentError::NotFound(id))
    }

    fn fetch_all_players_and_match_counts(&self) -> Result<Vec<Standing>, TournamentError> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id,
                    p.full_name,
                    s.wins,
                    (SELECT COUNT(*) FROM matches m
                      WHERE m.winner_id = p.player_id OR m.loser_id = p.player_id)
               FROM players p
               JOIN standings s ON s.player_id = p.player_id
              ORDER BY p.player_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Standing {
                id: row.get(0)?,
                name: row.get(1)?,
                wins: row.get(2)?,
                matches: row.get(3)?,
            })
        })?;
        let standings = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.create_schema().unwrap();
        store
    }

    #[test]
    fn missing_schema_is_store_unavailable() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(
            store.count_players(),
            Err(TournamentError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn names_with_quotes_are_stored_verbatim() {
        let mut store = store();
        let id = store.insert_player("Chandra O'Neil").unwrap();
        assert_eq!(store.fetch_player_name(id).unwrap(), "Chandra O'Neil");
    }

    #[test]
    fn record_match_rolls_back_when_loser_is_unknown() {
        let mut store = store();
        let a = store.insert_player("Ann").unwrap();
        assert_eq!(
            store.record_match(a, 42),
            Err(TournamentError::NotFound(42))
        );
        let rows = store.fetch_standings_ordered_by_wins_desc().unwrap();
        assert_eq!(rows, vec![StandingRecord::zeroed(a)]);
        let all = store.fetch_all_players_and_match_counts().unwrap();
        assert_eq!(all[0].matches, 0);
    }

    #[test]
    fn record_match_increments_tallies_and_counts() {
        let mut store = store();
        let a = store.insert_player("Ann").unwrap();
        let b = store.insert_player("Bob").unwrap();
        store.record_match(a, b).unwrap();
        store.record_match(a, b).unwrap();
        let rows = store.fetch_standings_ordered_by_wins_desc().unwrap();
        assert_eq!(
            rows,
            vec![
                StandingRecord { player_id: a, wins: 2, losses: 0 },
                StandingRecord { player_id: b, wins: 0, losses: 2 },
            ]
        );
        let all = store.fetch_all_players_and_match_counts().unwrap();
        assert!(all.iter().all(|s| s.matches == 2));
    }

    #[test]
    fn unknown_player_name_is_not_found() {
        let store = store();
        assert_eq!(
            store.fetch_player_name(7),
            Err(TournamentError::NotFound(7))
        );
    }

    #[test]
    fn reset_requires_matches_cleared_first() {
        let mut store = store();
        let a = store.insert_player("Ann").unwrap();
        let b = store.insert_player("Bob").unwrap();
        store.record_match(b, a).unwrap();
        assert_eq!(
            store.delete_all_players_and_standings(),
            Err(TournamentError::MatchesStillRecorded)
        );
        store.delete_all_matches().unwrap();
        store.delete_all_players_and_standings().unwrap();
        assert_eq!(store.count_players().unwrap(), 0);
        assert!(store.fetch_all_players_and_match_counts().unwrap().is_empty());
    }
}
