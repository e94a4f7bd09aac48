use super::*;
use crate::library::TrackInput;

fn row(title: &str) -> TrackInput {
    TrackInput {
        id: None,
        title: title.into(),
        artist: "Artist".into(),
        duration: None,
        src: format!("assets/songs/{title}.mp3"),
        cover: None,
        lyrics: None,
    }
}

fn row_with_id(title: &str, id: u64) -> TrackInput {
    TrackInput {
        id: Some(id),
        ..row(title)
    }
}

#[test]
fn add_track_assigns_monotonic_ids_from_one() {
    let mut store = PlaylistStore::new();
    assert_eq!(store.add_track(row("a")).id, 1);
    assert_eq!(store.add_track(row("b")).id, 2);
    assert_eq!(store.add_track(row("c")).id, 3);
}

#[test]
fn add_track_ignores_carried_ids() {
    let mut store = PlaylistStore::new();
    store.add_track(row_with_id("a", 40));
    // Uploads always get a fresh identity past the current maximum.
    assert_eq!(store.add_track(row_with_id("b", 2)).id, 41);
}

#[test]
fn set_tracks_assigns_missing_ids_after_the_incoming_max() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row_with_id("a", 5), row("b"), row("c")]);

    let ids: Vec<u64> = store.tracks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![5, 6, 7]);
}

#[test]
fn set_tracks_starts_at_one_when_no_row_has_an_id() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b")]);

    let ids: Vec<u64> = store.tracks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn remove_track_leaves_other_ids_untouched() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b"), row("c")]);

    store.remove_track(2);
    let ids: Vec<u64> = store.tracks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // Unknown id: no-op.
    store.remove_track(42);
    assert_eq!(store.len(), 2);
}

#[test]
fn clear_empties_the_list_but_keeps_favorites_and_history() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b")]);
    store.toggle_favorite(1);
    let snapshot = store.get(2).unwrap().clone();
    store.record_played(&snapshot);

    store.clear();
    assert!(store.is_empty());
    assert!(store.is_favorite(1));
    assert_eq!(store.recently_played().len(), 1);
}

#[test]
fn toggle_favorite_flips_membership_and_reports_it() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a")]);

    assert!(store.toggle_favorite(1));
    assert!(store.is_favorite(1));
    assert!(!store.toggle_favorite(1));
    assert!(!store.is_favorite(1));
}

#[test]
fn record_played_dedups_by_id_and_keeps_most_recent_first() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b")]);
    let a = store.get(1).unwrap().clone();
    let b = store.get(2).unwrap().clone();

    store.record_played(&a);
    store.record_played(&b);
    store.record_played(&a);

    let ids: Vec<u64> = store.recently_played().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn record_played_evicts_past_the_cap() {
    let mut store = PlaylistStore::new();
    store.set_tracks((0..11).map(|i| row(&format!("t{i}"))).collect());

    for track in store.tracks().to_vec() {
        store.record_played(&track);
    }

    assert_eq!(store.recently_played().len(), MAX_RECENT);
    // Track 1 (played first) fell off the tail; track 11 leads.
    let ids: Vec<u64> = store.recently_played().iter().map(|t| t.id).collect();
    assert_eq!(ids, (2..=11).rev().collect::<Vec<u64>>());
}

#[test]
fn history_snapshots_survive_removal_from_the_list() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a")]);
    let a = store.get(1).unwrap().clone();
    store.record_played(&a);

    store.remove_track(1);
    assert_eq!(store.recently_played().len(), 1);
    assert_eq!(store.recently_played()[0].title, "a");
}

#[test]
fn reorder_applies_a_full_permutation() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b"), row("c")]);

    store.reorder(&[3, 1, 2]);
    let titles: Vec<&str> = store.tracks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
}

#[test]
fn reorder_rejects_anything_that_is_not_a_permutation() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a"), row("b"), row("c")]);
    let before: Vec<u64> = store.tracks().iter().map(|t| t.id).collect();

    store.reorder(&[1, 2]); // missing an id
    store.reorder(&[1, 2, 4]); // unknown id
    store.reorder(&[1, 2, 2]); // duplicate
    store.reorder(&[1, 2, 3, 3]); // too long

    let after: Vec<u64> = store.tracks().iter().map(|t| t.id).collect();
    assert_eq!(before, after);
}

#[test]
fn set_duration_fills_only_empty_slots() {
    let mut store = PlaylistStore::new();
    store.set_tracks(vec![row("a")]);

    assert!(store.set_duration(1, "3:45"));
    assert_eq!(store.get(1).unwrap().duration.as_deref(), Some("3:45"));

    // Already known: left alone.
    assert!(!store.set_duration(1, "9:99"));
    assert_eq!(store.get(1).unwrap().duration.as_deref(), Some("3:45"));

    // Unknown track: no-op.
    assert!(!store.set_duration(42, "1:00"));
}

#[test]
fn from_parts_truncates_an_oversized_history() {
    let mut source = PlaylistStore::new();
    source.set_tracks((0..12).map(|i| row(&format!("t{i}"))).collect());
    let oversized: Vec<_> = source.tracks().to_vec();

    let store = PlaylistStore::from_parts(Vec::new(), Default::default(), oversized);
    assert_eq!(store.recently_played().len(), MAX_RECENT);
}
