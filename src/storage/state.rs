use log::warn;
use serde::{Deserialize, Serialize};

use super::backend::{STORAGE_KEY, StorageBackend};
use crate::library::{Track, TrackId};
use crate::nav::PlaybackMode;

/// Volume used when nothing else says otherwise.
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Everything that survives a reload, as one JSON object.
///
/// The field names are part of the stored format. Favorites round-trip
/// through a list because JSON has no set type; the recently-played
/// entries are full track snapshots so they outlive removal from the
/// playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub playlist: Vec<Track>,
    pub favorites: Vec<TrackId>,
    pub recently_played: Vec<Track>,
    pub volume: f32,
    pub playback_mode: PlaybackMode,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            playlist: Vec::new(),
            favorites: Vec::new(),
            recently_played: Vec::new(),
            volume: DEFAULT_VOLUME,
            playback_mode: PlaybackMode::default(),
        }
    }
}

/// Serialize `state` under the player's storage key.
///
/// Never fails the caller; a serialization problem is logged and the
/// previous stored value stays in place.
pub fn save(backend: &mut dyn StorageBackend, state: &PersistedState) {
    match serde_json::to_string(state) {
        Ok(json) => backend.write(STORAGE_KEY, &json),
        Err(err) => warn!("failed to serialize player state: {err}"),
    }
}

/// Load previously persisted state.
///
/// Absent or unreadable data is `None`, indistinguishable from a first
/// run; the caller falls back to defaults either way.
pub fn load(backend: &dyn StorageBackend) -> Option<PersistedState> {
    let json = backend.read(STORAGE_KEY)?;
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("discarding corrupt player state: {err}");
            None
        }
    }
}
