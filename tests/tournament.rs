//! Integration tests: full tournament flow against both store implementations.

use swiss_tournament::{
    count_players, delete_matches, delete_players, player_standings, register_player,
    report_match, swiss_pairings, MemoryStore, SqliteStore, TournamentError, TournamentStore,
};

fn sqlite_store() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_schema().unwrap();
    store
}

/// Run `check` against a fresh store of each kind.
fn for_each_store(check: impl Fn(&mut dyn TournamentStore)) {
    let mut memory = MemoryStore::new();
    check(&mut memory);
    let mut sqlite = sqlite_store();
    check(&mut sqlite);
}

#[test]
fn four_player_round_pairs_winners_together() {
    for_each_store(|store| {
        let a = register_player(&mut *store, "Twilight Sparkle").unwrap();
        let b = register_player(&mut *store, "Fluttershy").unwrap();
        let c = register_player(&mut *store, "Applejack").unwrap();
        let d = register_player(&mut *store, "Pinkie Pie").unwrap();
        report_match(&mut *store, a, b).unwrap();
        report_match(&mut *store, c, d).unwrap();

        let standings = player_standings(&*store).unwrap();
        let ids: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, c, b, d]);
        assert!(standings.iter().all(|s| s.matches == 1));
        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[3].wins, 0);

        let pairings = swiss_pairings(&*store).unwrap();
        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].id1, pairings[0].id2), (a, c));
        assert_eq!((pairings[1].id1, pairings[1].id2), (b, d));
        assert_eq!(pairings[0].name1, "Twilight Sparkle");
        assert_eq!(pairings[1].name2, "Pinkie Pie");
    });
}

#[test]
fn report_match_changes_only_the_two_tallies() {
    for_each_store(|store| {
        let ids: Vec<_> = (0..6)
            .map(|i| register_player(&mut *store, &format!("Player {i}")).unwrap())
            .collect();
        report_match(&mut *store, ids[4], ids[1]).unwrap();

        for row in store.fetch_standings_ordered_by_wins_desc().unwrap() {
            let expected = if row.player_id == ids[4] {
                (1, 0)
            } else if row.player_id == ids[1] {
                (0, 1)
            } else {
                (0, 0)
            };
            assert_eq!((row.wins, row.losses), expected, "player {}", row.player_id);
        }
    });
}

#[test]
fn wins_plus_losses_matches_match_count() {
    for_each_store(|store| {
        let ids: Vec<_> = (0..4)
            .map(|i| register_player(&mut *store, &format!("P{i}")).unwrap())
            .collect();
        report_match(&mut *store, ids[0], ids[1]).unwrap();
        report_match(&mut *store, ids[0], ids[2]).unwrap();
        report_match(&mut *store, ids[3], ids[0]).unwrap();

        let tallies = store.fetch_standings_ordered_by_wins_desc().unwrap();
        for standing in player_standings(&*store).unwrap() {
            let tally = tallies.iter().find(|t| t.player_id == standing.id).unwrap();
            assert_eq!(tally.played(), standing.matches);
            assert_eq!(tally.wins, standing.wins);
        }
    });
}

#[test]
fn odd_field_pairs_nobody() {
    for_each_store(|store| {
        for name in ["A", "B", "C"] {
            register_player(&mut *store, name).unwrap();
        }
        assert!(swiss_pairings(&*store).unwrap().is_empty());
    });
}

#[test]
fn reset_empties_everything() {
    for_each_store(|store| {
        let a = register_player(&mut *store, "A").unwrap();
        let b = register_player(&mut *store, "B").unwrap();
        report_match(&mut *store, a, b).unwrap();

        delete_matches(&mut *store).unwrap();
        delete_players(&mut *store).unwrap();

        assert_eq!(count_players(&*store).unwrap(), 0);
        assert!(player_standings(&*store).unwrap().is_empty());
        assert!(swiss_pairings(&*store).unwrap().is_empty());
    });
}

#[test]
fn repeated_reads_are_identical() {
    for_each_store(|store| {
        let ids: Vec<_> = (0..8)
            .map(|i| register_player(&mut *store, &format!("P{i}")).unwrap())
            .collect();
        for pair in ids.chunks_exact(2) {
            report_match(&mut *store, pair[1], pair[0]).unwrap();
        }
        assert_eq!(player_standings(&*store).unwrap(), player_standings(&*store).unwrap());
        assert_eq!(swiss_pairings(&*store).unwrap(), swiss_pairings(&*store).unwrap());
    });
}

#[test]
fn reporting_unknown_players_is_not_found() {
    for_each_store(|store| {
        let a = register_player(&mut *store, "A").unwrap();
        assert_eq!(report_match(&mut *store, 999, a), Err(TournamentError::NotFound(999)));
        assert_eq!(report_match(&mut *store, a, 998), Err(TournamentError::NotFound(998)));
        assert_eq!(player_standings(&*store).unwrap()[0].matches, 0);
    });
}

#[test]
fn stores_reject_self_match_without_writing() {
    for_each_store(|store| {
        let a = store.insert_player("A").unwrap();
        assert_eq!(store.record_match(a, a), Err(TournamentError::SelfMatch(a)));

        let tallies = store.fetch_standings_ordered_by_wins_desc().unwrap();
        assert_eq!((tallies[0].wins, tallies[0].losses), (0, 0));
        assert_eq!(player_standings(&*store).unwrap()[0].matches, 0);
    });
}

#[test]
fn store_errors_reach_standings_and_pairings_unchanged() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(matches!(
        player_standings(&store),
        Err(TournamentError::StoreUnavailable(_))
    ));
    assert!(matches!(
        swiss_pairings(&store),
        Err(TournamentError::StoreUnavailable(_))
    ));
}
