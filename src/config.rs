//! Configuration loader and schema types.
//!
//! Settings seed a fresh player (no persisted state yet) and tell the
//! host where the playlist document and the storage directory live.

mod load;
mod schema;

pub use schema::*;
