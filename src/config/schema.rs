use std::path::PathBuf;

use serde::Deserialize;

use crate::nav::PlaybackMode;
use crate::storage::DEFAULT_VOLUME;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/dacapo/config.toml` or
/// `~/.config/dacapo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DACAPO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub playlist: PlaylistSettings,
    pub storage: StorageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playback: PlaybackSettings::default(),
            playlist: PlaylistSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Mode used until persisted state says otherwise.
    ///
    /// One of `order`, `shuffle`, `repeat-one`.
    pub default_mode: PlaybackMode,
    /// Volume used until persisted state says otherwise (0.0 to 1.0).
    pub default_volume: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            default_mode: PlaybackMode::Order,
            default_volume: DEFAULT_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Where the initial playlist document lives. The host fetches it
    /// and hands the body to [`crate::library::parse_playlist`].
    pub source: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            source: "data/songs.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the storage directory. When unset, file-backed
    /// hosts use [`crate::storage::FileStorage::default_dir`].
    pub dir: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { dir: None }
    }
}
