use std::collections::HashSet;

use crate::library::{Track, TrackId, TrackInput};

/// Maximum number of entries retained in the recently-played history.
pub const MAX_RECENT: usize = 10;

/// The canonical playlist.
///
/// Owns the ordered track list, the set of favorite identities and a
/// bounded recently-played history of track snapshots. Everything else
/// (filtered views, navigation) is derived from this on demand.
///
/// Favorites and history deliberately keep identities whose track has
/// since been removed from the list; the view resolver filters those
/// out at display time.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    tracks: Vec<Track>,
    favorites: HashSet<TrackId>,
    recently_played: Vec<Track>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted parts.
    pub fn from_parts(
        tracks: Vec<Track>,
        favorites: HashSet<TrackId>,
        mut recently_played: Vec<Track>,
    ) -> Self {
        recently_played.truncate(MAX_RECENT);
        Self {
            tracks,
            favorites,
            recently_played,
        }
    }

    /// The tracks in their current manual order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look a track up by identity.
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn favorites(&self) -> &HashSet<TrackId> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: TrackId) -> bool {
        self.favorites.contains(&id)
    }

    /// Played-track snapshots, most recent first.
    pub fn recently_played(&self) -> &[Track] {
        &self.recently_played
    }

    fn next_id(&self) -> TrackId {
        self.tracks.iter().map(|t| t.id).max().map_or(1, |m| m + 1)
    }

    /// Replace the whole list, assigning identities to rows that carry
    /// none. The counter starts at `max(existing ids) + 1` over the
    /// incoming rows and only counts up, so assigned identities never
    /// collide with carried ones.
    pub fn set_tracks(&mut self, rows: Vec<TrackInput>) {
        let mut counter = rows
            .iter()
            .filter_map(|r| r.id)
            .max()
            .map_or(1, |m| m + 1);

        self.tracks = rows
            .into_iter()
            .map(|row| match row.id {
                Some(id) => row.with_id(id),
                None => {
                    let id = counter;
                    counter += 1;
                    row.with_id(id)
                }
            })
            .collect();
    }

    /// Append a track under the next free identity and return the
    /// stored result, so the caller can act on it (auto-play the first
    /// upload, say).
    pub fn add_track(&mut self, row: TrackInput) -> Track {
        let track = row.with_id(self.next_id());
        self.tracks.push(track.clone());
        track
    }

    /// Remove a track by identity; unknown identities are a no-op.
    /// Other identities are untouched. Clearing any playback state that
    /// pointed at the removed track is the caller's contract.
    pub fn remove_track(&mut self, id: TrackId) {
        self.tracks.retain(|t| t.id != id);
    }

    /// Empty the track list. Favorites and history keep their entries;
    /// dangling identities are filtered out at display time.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Flip favorite membership and return the resulting state.
    pub fn toggle_favorite(&mut self, id: TrackId) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Record a play into the history: any older occurrence of the same
    /// identity is dropped, the snapshot goes to the front, and the
    /// tail is evicted past [`MAX_RECENT`].
    pub fn record_played(&mut self, track: &Track) {
        self.recently_played.retain(|t| t.id != track.id);
        self.recently_played.insert(0, track.clone());
        self.recently_played.truncate(MAX_RECENT);
    }

    /// Replace the list order with an externally supplied permutation
    /// (drag-and-drop result). The DOM order can race with concurrent
    /// mutation, so anything that is not exactly a permutation of the
    /// current identities is silently ignored.
    pub fn reorder(&mut self, order: &[TrackId]) {
        if order.len() != self.tracks.len() {
            return;
        }
        let incoming: HashSet<TrackId> = order.iter().copied().collect();
        if incoming.len() != order.len() {
            return;
        }
        if self.tracks.iter().any(|t| !incoming.contains(&t.id)) {
            return;
        }

        let position = |id: TrackId| order.iter().position(|&o| o == id);
        self.tracks
            .sort_by_key(|t| position(t.id).unwrap_or(usize::MAX));
    }

    /// Fill in a lazily discovered duration, only when the track has
    /// none yet. Returns whether anything changed.
    pub fn set_duration(&mut self, id: TrackId, duration: &str) -> bool {
        match self.tracks.iter_mut().find(|t| t.id == id) {
            Some(track) if track.duration.is_none() => {
                track.duration = Some(duration.to_string());
                true
            }
            _ => false,
        }
    }
}
