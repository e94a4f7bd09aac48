//! The playlist store: the canonical ordered track list, favorites and
//! the recently-played history.
//!
//! Pure state with no I/O; persistence and playback wiring live in
//! [`crate::player`] so the store can be unit-tested in isolation.

mod store;

pub use store::*;

#[cfg(test)]
mod tests;
