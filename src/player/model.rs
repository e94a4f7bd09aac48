use log::debug;

use crate::config::Settings;
use crate::library::{Track, TrackId, TrackInput};
use crate::lyrics::{self, LyricLine};
use crate::nav::{self, PlaybackMode};
use crate::playlist::PlaylistStore;
use crate::storage::{self, PersistedState, StorageBackend};
use crate::view::{self, Filter};

/// The playback session.
///
/// Owns the playlist store and a storage backend, plus the session
/// state the view layer renders from: active filter, playback mode,
/// volume, the currently playing identity and the current track's
/// lyrics. The view layer calls these methods synchronously and
/// re-renders afterwards; nothing here emits events.
///
/// Every mutating method updates the store fully before persisting, so
/// a re-render triggered by the caller never observes a half-applied
/// mutation.
pub struct Player {
    store: PlaylistStore,
    storage: Box<dyn StorageBackend>,
    filter: Filter,
    mode: PlaybackMode,
    volume: f32,
    current: Option<TrackId>,
    playing: bool,
    lyric_lines: Vec<LyricLine>,
    lyrics_generation: u64,
}

impl Player {
    /// Create a player hydrated from `storage`; when nothing usable is
    /// stored there, `settings` provide the defaults.
    pub fn new(storage: Box<dyn StorageBackend>, settings: &Settings) -> Self {
        let (store, volume, mode) = match storage::load(storage.as_ref()) {
            Some(state) => (
                PlaylistStore::from_parts(
                    state.playlist,
                    state.favorites.into_iter().collect(),
                    state.recently_played,
                ),
                state.volume.clamp(0.0, 1.0),
                state.playback_mode,
            ),
            None => (
                PlaylistStore::new(),
                settings.playback.default_volume.clamp(0.0, 1.0),
                settings.playback.default_mode,
            ),
        };

        Self {
            store,
            storage,
            filter: Filter::All,
            mode,
            volume,
            current: None,
            playing: false,
            lyric_lines: Vec::new(),
            lyrics_generation: 0,
        }
    }

    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_id(&self) -> Option<TrackId> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|id| self.store.get(id))
    }

    /// The sequence the active filter displays, in navigation order.
    pub fn displayed(&self) -> Vec<&Track> {
        view::displayed_tracks(&self.store, self.filter)
    }

    fn persist(&mut self) {
        let mut favorites: Vec<TrackId> = self.store.favorites().iter().copied().collect();
        favorites.sort_unstable();

        let state = PersistedState {
            playlist: self.store.tracks().to_vec(),
            favorites,
            recently_played: self.store.recently_played().to_vec(),
            volume: self.volume,
            playback_mode: self.mode,
        };
        storage::save(self.storage.as_mut(), &state);
    }

    fn reset_lyrics(&mut self) {
        self.lyric_lines.clear();
        self.lyrics_generation += 1;
    }

    /// Replace the playlist (initial load, or reload).
    pub fn set_tracks(&mut self, rows: Vec<TrackInput>) {
        self.store.set_tracks(rows);
        self.persist();
    }

    /// Append an uploaded track and return it with its identity set.
    pub fn add_track(&mut self, row: TrackInput) -> Track {
        let track = self.store.add_track(row);
        self.persist();
        track
    }

    /// Remove a track; if it was the one playing, playback stops and
    /// any in-flight lyrics fetch for it becomes stale.
    pub fn remove_track(&mut self, id: TrackId) {
        self.store.remove_track(id);
        if self.current == Some(id) {
            self.current = None;
            self.playing = false;
            self.reset_lyrics();
        }
        self.persist();
    }

    /// Empty the playlist and stop playback.
    pub fn clear(&mut self) {
        self.store.clear();
        self.current = None;
        self.playing = false;
        self.reset_lyrics();
        self.persist();
    }

    /// Flip favorite membership for `id`; returns the resulting state
    /// so the caller can update the affordance without a second query.
    pub fn toggle_favorite(&mut self, id: TrackId) -> bool {
        let favorite = self.store.toggle_favorite(id);
        self.persist();
        favorite
    }

    /// Apply a drag-and-drop permutation; non-permutations are ignored
    /// by the store.
    pub fn reorder(&mut self, order: &[TrackId]) {
        self.store.reorder(order);
        self.persist();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        self.persist();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.persist();
    }

    /// Step the volume by `delta` (use ±0.1 for key bindings), clamped.
    pub fn step_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    /// Start playing the track with identity `id`.
    ///
    /// Records the play into the history and restarts lyrics tracking.
    /// When the track is not part of the displayed sequence (picked in
    /// another view), the filter drops back to `all` so the view can
    /// show what is playing. Unknown identities are a no-op.
    pub fn play_track(&mut self, id: TrackId) -> Option<&Track> {
        let track = self.store.get(id)?.clone();

        self.current = Some(id);
        self.playing = true;
        self.reset_lyrics();
        self.store.record_played(&track);

        if self.filter != Filter::All {
            let shown = view::displayed_tracks(&self.store, self.filter);
            if !shown.iter().any(|t| t.id == id) {
                self.filter = Filter::All;
            }
        }

        self.persist();
        self.store.get(id)
    }

    /// Advance along the displayed sequence under the current mode.
    pub fn play_next(&mut self) -> Option<&Track> {
        let next = {
            let displayed = view::displayed_tracks(&self.store, self.filter);
            nav::next_track(&displayed, self.current, self.mode)?.id
        };
        self.play_track(next)
    }

    /// Step back along the displayed sequence under the current mode.
    pub fn play_previous(&mut self) -> Option<&Track> {
        let previous = {
            let displayed = view::displayed_tracks(&self.store, self.filter);
            nav::previous_track(&displayed, self.current, self.mode)?.id
        };
        self.play_track(previous)
    }

    /// Toggle play/pause. With nothing loaded, starts the first track
    /// of the playlist; with an empty playlist, does nothing. Returns
    /// whether playback is active afterwards.
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.playing = false;
        } else if self.current.is_some() {
            self.playing = true;
        } else if let Some(first) = self.store.tracks().first().map(|t| t.id) {
            self.play_track(first);
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// The media element reports the current track finished.
    ///
    /// `repeat-one` restarts it in place without touching the history;
    /// every other mode advances like a `next` press.
    pub fn track_ended(&mut self) -> Option<&Track> {
        if self.mode == PlaybackMode::RepeatOne {
            self.playing = self.current.is_some();
            return self.current_track();
        }
        self.play_next()
    }

    /// The media element reports a duration for `id` (seconds); filled
    /// in only when the track has none yet.
    pub fn note_duration(&mut self, id: TrackId, seconds: f64) {
        if self.store.set_duration(id, &lyrics::format_time(seconds)) {
            self.persist();
        }
    }

    /// Generation token identifying the lyrics fetch that should be in
    /// flight. Capture it before fetching and pass it back to
    /// [`Player::install_lyrics`].
    pub fn lyrics_generation(&self) -> u64 {
        self.lyrics_generation
    }

    /// Install fetched lyrics, unless `generation` is stale (the user
    /// skipped on while the fetch was in flight). Returns whether the
    /// lyrics were installed.
    pub fn install_lyrics(&mut self, generation: u64, text: &str) -> bool {
        if generation != self.lyrics_generation {
            debug!(
                "discarding stale lyrics (generation {generation}, current {})",
                self.lyrics_generation
            );
            return false;
        }
        self.lyric_lines = lyrics::parse_lrc(text);
        true
    }

    /// Timed lines of the current track, empty until a fetch lands.
    pub fn lyric_lines(&self) -> &[LyricLine] {
        &self.lyric_lines
    }

    /// Index of the lyric line to highlight at playback position `time`.
    pub fn active_lyric(&self, time: f64) -> Option<usize> {
        lyrics::active_line(&self.lyric_lines, time)
    }
}
