//! Track model and the playlist-document source.
//!
//! Tracks arrive from the outside as a JSON document (or as individual
//! uploads) and may carry no identity; the playlist store assigns
//! identities on insertion.

mod model;
mod source;

pub use model::*;
pub use source::*;
