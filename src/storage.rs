//! The persistence gateway: durable key-value storage for the player
//! state, under a single namespaced key.
//!
//! Nothing here raises to the caller: a failed write is logged and
//! dropped, and unreadable or absent state loads as `None` so the
//! caller can fall back to defaults.

mod backend;
mod state;

pub use backend::*;
pub use state::*;
