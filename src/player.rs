//! The playback session coordinator.
//!
//! `Player` ties the store, the views, the navigator and the storage
//! gateway together and implements the collaboration contracts between
//! them: clearing playback when the current track disappears, escaping
//! a filter that hides the track being played, and persisting after
//! every mutation.

mod model;

pub use model::*;
