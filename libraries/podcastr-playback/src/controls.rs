//! Player control availability
//!
//! Which buttons a renderer should enable for a given snapshot. Pure
//! derivation, recomputed per snapshot.

use podcastr_core::EMPTY_DURATION_DISPLAY;
use serde::{Deserialize, Serialize};

use crate::types::PlaybackSnapshot;

/// Enabled state of each player control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Shuffle toggle. Disabled for a single-episode queue, where shuffling
    /// has nothing to choose from.
    pub shuffle: bool,

    /// Previous button
    pub previous: bool,

    /// Play/pause button
    pub play_pause: bool,

    /// Next button
    pub next: bool,

    /// Loop toggle
    pub repeat: bool,

    /// Total duration of the active episode, or `00:00:00`
    pub duration_display: String,
}

impl ControlState {
    /// Derive control state from a snapshot
    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Self {
        let has_episode = snapshot.active_episode.is_some();

        Self {
            shuffle: has_episode && snapshot.queue_len != 1,
            previous: has_episode && snapshot.has_previous,
            play_pause: has_episode,
            next: has_episode && snapshot.has_next,
            repeat: has_episode,
            duration_display: snapshot
                .active_episode
                .as_ref()
                .map(|e| e.audio.duration_display.clone())
                .unwrap_or_else(|| EMPTY_DURATION_DISPLAY.to_string()),
        }
    }
}
