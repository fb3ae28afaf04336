//! Player events
//!
//! Two directions:
//! - [`PlayerEvent`]: emitted by the store after a command changed state, for
//!   renderers that want deltas instead of re-reading the snapshot
//! - [`MediaEvent`]: reported by the media element, fed back through the
//!   bridge

use serde::{Deserialize, Serialize};

/// Events emitted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A new queue was loaded (single episode or list)
    QueueLoaded {
        /// New queue length
        length: usize,
        /// Position playback starts at
        start_index: usize,
    },

    /// Active position changed
    EpisodeChanged {
        /// New current index
        index: usize,
        /// ID of the new active episode (None if the index is out of range)
        episode_id: Option<String>,
        /// ID of the episode active before the change
        previous_episode_id: Option<String>,
    },

    /// Requested playing state changed
    PlayingChanged {
        /// New playing state
        is_playing: bool,
    },

    /// Loop flag changed
    LoopingChanged {
        /// New loop flag
        is_looping: bool,
    },

    /// Shuffle flag changed
    ShufflingChanged {
        /// New shuffle flag
        is_shuffling: bool,
    },
}

/// Lifecycle notifications from the media element
///
/// These may arrive asynchronously relative to user commands. The bridge
/// translates them into store commands; `Started`/`Paused` always set the
/// playing flag, never toggle it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Element actually started playing
    Started,

    /// Element actually paused
    Paused,

    /// Element reached the end of the source
    Completed,

    /// Periodic playback position
    Progress {
        /// Element position in seconds
        position_secs: f64,
    },
}
