use serde::{Deserialize, Serialize};

/// Stable identity of a track within the playlist store.
///
/// Assigned monotonically on insertion (`max(existing) + 1`, starting
/// at 1) and never mutated afterwards; every other part of the system
/// refers to tracks by identity, never by copy-and-mutate.
pub type TrackId = u64;

/// A single playable item.
///
/// `duration` starts out empty for uploaded tracks and is filled in
/// once the media element reports its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Display string like `"3:45"`, populated lazily.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Audio locator.
    pub src: String,
    /// Cover-image locator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Locator of a synchronized-lyrics (LRC) resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

/// A track as it arrives from the outside, possibly without an
/// identity yet.
///
/// This is the row format of the initial-playlist JSON document and of
/// user uploads; [`crate::playlist::PlaylistStore`] turns it into a
/// [`Track`] by assigning an identity where one is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackInput {
    #[serde(default)]
    pub id: Option<TrackId>,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub duration: Option<String>,
    pub src: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl TrackInput {
    /// Materialize the row under the given identity, ignoring any
    /// identity the row itself carried.
    pub fn with_id(self, id: TrackId) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            duration: self.duration,
            src: self.src,
            cover: self.cover,
            lyrics: self.lyrics,
        }
    }
}

impl From<Track> for TrackInput {
    fn from(track: Track) -> Self {
        Self {
            id: Some(track.id),
            title: track.title,
            artist: track.artist,
            duration: track.duration,
            src: track.src,
            cover: track.cover,
            lyrics: track.lyrics,
        }
    }
}
