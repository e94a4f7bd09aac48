//! Filtered views over the playlist store.

use serde::{Deserialize, Serialize};

use crate::library::Track;
use crate::playlist::PlaylistStore;

/// The active view selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// The whole playlist in its manual order.
    #[default]
    All,
    /// Favorited tracks, playlist order preserved.
    Favorites,
    /// Recently played tracks, most recent first.
    Recent,
}

/// Derive the displayed sequence for `filter`.
///
/// Recomputed on every call: the result is a view over the store, never
/// a second source of truth, so there is no cache to invalidate when
/// favorites, history or the manual order change out of band.
/// Identities that linger in favorites or the history after their track
/// left the playlist are silently skipped.
pub fn displayed_tracks(store: &PlaylistStore, filter: Filter) -> Vec<&Track> {
    match filter {
        Filter::All => store.tracks().iter().collect(),
        Filter::Favorites => store
            .tracks()
            .iter()
            .filter(|t| store.is_favorite(t.id))
            .collect(),
        Filter::Recent => store
            .recently_played()
            .iter()
            .filter_map(|snapshot| store.get(snapshot.id))
            .collect(),
    }
}
