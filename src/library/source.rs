use log::warn;
use serde_json::Value;

use super::model::TrackInput;

/// Parse the initial-playlist JSON document.
///
/// Tolerant per entry: rows that do not deserialize are skipped with a
/// warning, and anything other than a JSON array yields an empty list.
/// A fetch or parse failure is an empty-state condition for the UI,
/// never an error surfaced to the caller.
pub fn parse_playlist(json: &str) -> Vec<TrackInput> {
    let rows = match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(rows)) => rows,
        Ok(_) => {
            warn!("playlist document is not a JSON array");
            return Vec::new();
        }
        Err(err) => {
            warn!("unreadable playlist document: {err}");
            return Vec::new();
        }
    };

    let mut tracks = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<TrackInput>(row) {
            Ok(track) => tracks.push(track),
            Err(err) => warn!("skipping playlist entry {index}: {err}"),
        }
    }
    tracks
}
