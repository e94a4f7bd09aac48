//! Next/previous resolution over a displayed sequence.
//!
//! Pure functions of (displayed sequence, current identity, mode): no
//! stored state, which keeps the one real state machine in the system
//! testable without any rendering or audio machinery.

use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::library::{Track, TrackId};

/// The policy governing next/previous resolution.
///
/// Governs navigation only; the underlying list is never reordered by
/// a mode change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    /// Step through the displayed sequence, wrapping at both ends.
    #[default]
    Order,
    /// Draw a uniformly random member of the displayed sequence.
    ///
    /// Both directions draw independently of the current position, so a
    /// shuffle "previous" is not an undo of the preceding "next".
    Shuffle,
    /// Keep replaying the current track.
    #[serde(alias = "repeat_one", alias = "repeatone")]
    RepeatOne,
}

#[derive(Copy, Clone)]
enum Direction {
    Forward,
    Backward,
}

/// Resolve the track to play after the current one.
pub fn next_track<'a>(
    displayed: &[&'a Track],
    current: Option<TrackId>,
    mode: PlaybackMode,
) -> Option<&'a Track> {
    resolve(displayed, current, mode, Direction::Forward)
}

/// Resolve the track to play before the current one.
pub fn previous_track<'a>(
    displayed: &[&'a Track],
    current: Option<TrackId>,
    mode: PlaybackMode,
) -> Option<&'a Track> {
    resolve(displayed, current, mode, Direction::Backward)
}

fn resolve<'a>(
    displayed: &[&'a Track],
    current: Option<TrackId>,
    mode: PlaybackMode,
    direction: Direction,
) -> Option<&'a Track> {
    if displayed.is_empty() {
        return None;
    }

    let position = current.and_then(|id| displayed.iter().position(|t| t.id == id));
    let Some(i) = position else {
        // Nothing playing, or the current track is not part of this
        // view (filter switch, removal): restart from the edge.
        return match direction {
            Direction::Forward => displayed.first().copied(),
            Direction::Backward => displayed.last().copied(),
        };
    };

    let len = displayed.len();
    let target = match mode {
        PlaybackMode::Order => match direction {
            Direction::Forward => (i + 1) % len,
            Direction::Backward => (i + len - 1) % len,
        },
        PlaybackMode::RepeatOne => i,
        PlaybackMode::Shuffle => rand::rng().random_range(0..len),
    };

    displayed.get(target).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: TrackId) -> Track {
        Track {
            id,
            title: format!("t{id}"),
            artist: String::new(),
            duration: None,
            src: format!("t{id}.mp3"),
            cover: None,
            lyrics: None,
        }
    }

    fn refs(tracks: &[Track]) -> Vec<&Track> {
        tracks.iter().collect()
    }

    #[test]
    fn empty_sequence_resolves_to_nothing() {
        for mode in [PlaybackMode::Order, PlaybackMode::Shuffle, PlaybackMode::RepeatOne] {
            assert!(next_track(&[], Some(1), mode).is_none());
            assert!(previous_track(&[], None, mode).is_none());
        }
    }

    #[test]
    fn no_current_track_starts_at_the_edges() {
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);

        assert_eq!(next_track(&displayed, None, PlaybackMode::Order).unwrap().id, 1);
        assert_eq!(previous_track(&displayed, None, PlaybackMode::Order).unwrap().id, 3);
    }

    #[test]
    fn current_track_missing_from_the_view_starts_at_the_edges() {
        // The current track was removed or belongs to another filter's
        // sequence; both cases fall back uniformly.
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);

        assert_eq!(next_track(&displayed, Some(99), PlaybackMode::Shuffle).unwrap().id, 1);
        assert_eq!(previous_track(&displayed, Some(99), PlaybackMode::RepeatOne).unwrap().id, 3);
    }

    #[test]
    fn order_wraps_in_both_directions() {
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);

        assert_eq!(next_track(&displayed, Some(3), PlaybackMode::Order).unwrap().id, 1);
        assert_eq!(previous_track(&displayed, Some(1), PlaybackMode::Order).unwrap().id, 3);
    }

    #[test]
    fn order_next_cycles_back_after_len_steps() {
        let tracks = [track(1), track(2), track(3), track(4)];
        let displayed = refs(&tracks);

        let mut current = 2;
        for _ in 0..displayed.len() {
            current = next_track(&displayed, Some(current), PlaybackMode::Order)
                .unwrap()
                .id;
        }
        assert_eq!(current, 2);
    }

    #[test]
    fn order_previous_is_the_inverse_of_next() {
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);

        for start in [1, 2, 3] {
            let forward = next_track(&displayed, Some(start), PlaybackMode::Order)
                .unwrap()
                .id;
            let back = previous_track(&displayed, Some(forward), PlaybackMode::Order)
                .unwrap()
                .id;
            assert_eq!(back, start);
        }
    }

    #[test]
    fn repeat_one_returns_the_same_track_indefinitely() {
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);

        for _ in 0..5 {
            assert_eq!(next_track(&displayed, Some(2), PlaybackMode::RepeatOne).unwrap().id, 2);
            assert_eq!(previous_track(&displayed, Some(2), PlaybackMode::RepeatOne).unwrap().id, 2);
        }
    }

    #[test]
    fn shuffle_always_lands_inside_the_sequence() {
        let tracks = [track(1), track(2), track(3)];
        let displayed = refs(&tracks);
        let members: Vec<TrackId> = tracks.iter().map(|t| t.id).collect();

        for _ in 0..100 {
            let next = next_track(&displayed, Some(2), PlaybackMode::Shuffle).unwrap();
            assert!(members.contains(&next.id));
            let prev = previous_track(&displayed, Some(2), PlaybackMode::Shuffle).unwrap();
            assert!(members.contains(&prev.id));
        }
    }

    #[test]
    fn single_track_sequences_stay_put() {
        let tracks = [track(7)];
        let displayed = refs(&tracks);

        for mode in [PlaybackMode::Order, PlaybackMode::Shuffle, PlaybackMode::RepeatOne] {
            assert_eq!(next_track(&displayed, Some(7), mode).unwrap().id, 7);
            assert_eq!(previous_track(&displayed, Some(7), mode).unwrap().id, 7);
        }
    }
}
