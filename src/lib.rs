//! Playlist, favorites and playback-queue engine for a music player.
//!
//! The crate owns the model side of a player: the canonical playlist
//! ([`playlist`]), filtered views derived from it ([`view`]),
//! next/previous resolution ([`nav`]), durable state ([`storage`]),
//! synchronized lyrics ([`lyrics`]) and the session coordinator that
//! ties them together ([`player`]). Rendering and the actual media
//! element stay outside: the view layer calls in synchronously and
//! re-renders from return values, and the host reports media events
//! (track ended, metadata loaded, lyrics fetched) back through the
//! [`player::Player`] API.

pub mod config;
pub mod library;
pub mod lyrics;
pub mod nav;
pub mod player;
pub mod playlist;
pub mod storage;
pub mod view;

pub use library::{Track, TrackId, TrackInput};
pub use nav::PlaybackMode;
pub use player::Player;
pub use playlist::PlaylistStore;
pub use view::Filter;
