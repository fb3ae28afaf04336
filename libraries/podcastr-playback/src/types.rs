//! Core types for playback management

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// Configuration for the player store
///
/// Only the initial toggle flags are configurable. The queue always starts
/// empty and paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start with shuffle enabled (default: false)
    #[serde(default)]
    pub shuffle: bool,

    /// Start with loop enabled (default: false)
    #[serde(default)]
    pub looping: bool,
}

/// Command accepted by the store
///
/// One variant per user-facing control or bridge notification. Hosts that
/// receive commands as data (key bindings, IPC) deserialize into this type
/// and hand it to [`PlayerStore::apply`](crate::PlayerStore::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlayerCommand {
    /// Replace the queue with a single episode and play it
    LoadSingle {
        /// Episode to play
        episode: Episode,
    },

    /// Replace the queue with a list and play from `start_index`
    LoadList {
        /// Episodes in playback order
        episodes: Vec<Episode>,
        /// Position to start at
        start_index: usize,
    },

    /// Flip the requested playing state
    TogglePlay,

    /// Set the requested playing state exactly
    SetPlaying {
        /// New playing state
        playing: bool,
    },

    /// Flip loop
    ToggleLoop,

    /// Flip shuffle
    ToggleShuffle,

    /// Move to the next episode (random while shuffling)
    Advance,

    /// Move to the previous episode
    Retreat,
}

impl PlayerCommand {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadSingle { .. } => "load_single",
            Self::LoadList { .. } => "load_list",
            Self::TogglePlay => "toggle_play",
            Self::SetPlaying { .. } => "set_playing",
            Self::ToggleLoop => "toggle_loop",
            Self::ToggleShuffle => "toggle_shuffle",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
        }
    }
}

/// Read-only view of the store after a command
///
/// Owned copy, so renderers and bridges can hold it without borrowing the
/// store. Re-read after every command; derived flags go stale otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Episode at `current_index`, if any
    pub active_episode: Option<Episode>,

    /// Current position in the queue
    pub current_index: usize,

    /// Number of queued episodes
    pub queue_len: usize,

    /// Requested playing state
    pub is_playing: bool,

    /// Loop enabled
    pub is_looping: bool,

    /// Shuffle enabled
    pub is_shuffling: bool,

    /// Whether `Advance` can move
    pub has_next: bool,

    /// Whether `Retreat` can move
    pub has_previous: bool,
}
