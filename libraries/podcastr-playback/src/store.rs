//! Player store - queue state machine
//!
//! Owns the episode queue and the three playback flags, and is the only
//! place they change. Every command runs to completion before returning, so
//! observers never see a half-applied state.

use std::fmt;

use podcastr_core::Episode;
use tracing::{debug, warn};

use crate::{
    error::{PlaybackError, Result},
    events::PlayerEvent,
    queue::EpisodeQueue,
    random::{RandomSource, ThreadRandom},
    types::{PlaybackSnapshot, PlayerCommand, PlayerConfig},
};

/// Queue state store
///
/// Holds:
/// - Episode queue and current index
/// - Requested playing state (intent, not what the element is doing)
/// - Loop and shuffle flags
///
/// Commands never fail. Navigation past either end of the queue is a
/// silent no-op, and an empty queue simply has no active episode.
pub struct PlayerStore {
    // State
    queue: EpisodeQueue,
    is_playing: bool,

    // Settings
    is_looping: bool,
    is_shuffling: bool,

    // Shuffle target selection
    random: Box<dyn RandomSource>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerStore {
    /// Create new store using the thread-local random generator
    pub fn new(config: PlayerConfig) -> Self {
        Self::with_random(config, Box::new(ThreadRandom))
    }

    /// Create new store with an injected random source
    pub fn with_random(config: PlayerConfig, random: Box<dyn RandomSource>) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffle,
            random,
            pending_events: Vec::new(),
        }
    }

    // ===== Commands =====

    /// Apply a command
    pub fn apply(&mut self, command: PlayerCommand) {
        debug!(command = command.name(), "applying player command");

        match command {
            PlayerCommand::LoadSingle { episode } => self.load_single(episode),
            PlayerCommand::LoadList {
                episodes,
                start_index,
            } => self.load_list(episodes, start_index),
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::SetPlaying { playing } => self.set_playing(playing),
            PlayerCommand::ToggleLoop => self.toggle_loop(),
            PlayerCommand::ToggleShuffle => self.toggle_shuffle(),
            PlayerCommand::Advance => self.advance(),
            PlayerCommand::Retreat => self.retreat(),
        }
    }

    /// Play a single episode
    ///
    /// Replaces the queue with `[episode]` at index 0 and requests playback.
    pub fn load_single(&mut self, episode: Episode) {
        self.load(vec![episode], 0);
    }

    /// Play a list starting at `start_index`
    ///
    /// Replaces the queue and requests playback. Callers must pass
    /// `start_index < episodes.len()`; an out-of-range index is stored as-is
    /// and leaves the store without an active episode until the next load.
    /// Use [`try_load_list`](Self::try_load_list) to validate first.
    pub fn load_list(&mut self, episodes: Vec<Episode>, start_index: usize) {
        if start_index >= episodes.len() {
            warn!(
                start_index,
                len = episodes.len(),
                "loading episode list with out-of-range start index"
            );
        }
        self.load(episodes, start_index);
    }

    /// Validate and play a list starting at `start_index`
    ///
    /// State is untouched when validation fails.
    pub fn try_load_list(&mut self, episodes: Vec<Episode>, start_index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlaybackError::EmptyList);
        }
        if start_index >= episodes.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index: start_index,
                len: episodes.len(),
            });
        }

        self.load(episodes, start_index);
        Ok(())
    }

    /// Flip the requested playing state
    pub fn toggle_play(&mut self) {
        self.update_playing(!self.is_playing);
    }

    /// Set the requested playing state exactly
    ///
    /// Used for the media element's own started/paused notifications, which
    /// must not be re-interpreted as a toggle.
    pub fn set_playing(&mut self, playing: bool) {
        self.update_playing(playing);
    }

    /// Flip loop
    ///
    /// The store itself never consults this flag. The bridge uses it to make
    /// the element restart on completion instead of advancing.
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        self.pending_events.push(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip shuffle
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        self.pending_events.push(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Play next
    ///
    /// - Shuffling: jump to a uniformly random index over the whole queue.
    ///   The current index is a valid target; there is no no-repeat rule.
    /// - Otherwise: step forward one, or do nothing at the end of the queue.
    ///
    /// Never wraps and never touches the playing flag.
    pub fn advance(&mut self) {
        let previous_index = self.queue.current_index();
        let previous_id = self.active_id();

        if self.is_shuffling {
            let target = if self.queue.is_empty() {
                0
            } else {
                self.random.pick_index(self.queue.len())
            };
            self.queue.jump_to(target);
        } else if self.has_next() {
            self.queue.step_forward();
        }

        if self.queue.current_index() != previous_index {
            self.emit_episode_changed(previous_id);
        }
    }

    /// Play previous
    ///
    /// Steps back one, or does nothing at the start of the queue.
    pub fn retreat(&mut self) {
        let previous_id = self.active_id();

        if self.queue.step_back() {
            self.emit_episode_changed(previous_id);
        }
    }

    // ===== State Queries =====

    /// Whether `advance` can move
    ///
    /// Always true while shuffling, since any index is a valid random target.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.queue.has_following()
    }

    /// Whether `retreat` can move
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Episode at the current index, or None
    pub fn active_episode(&self) -> Option<&Episode> {
        self.queue.active()
    }

    /// Current index
    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Queued episodes in playback order
    pub fn queue(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Requested playing state
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Loop flag
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Shuffle flag
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Owned copy of the observable state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            active_episode: self.active_episode().cloned(),
            current_index: self.current_index(),
            queue_len: self.queue_len(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn load(&mut self, episodes: Vec<Episode>, start_index: usize) {
        let previous_id = self.active_id();

        self.queue.replace(episodes, start_index);
        self.pending_events.push(PlayerEvent::QueueLoaded {
            length: self.queue.len(),
            start_index,
        });
        self.emit_episode_changed(previous_id);
        self.update_playing(true);
    }

    fn update_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.pending_events
                .push(PlayerEvent::PlayingChanged { is_playing: playing });
        }
    }

    fn active_id(&self) -> Option<String> {
        self.active_episode().map(|e| e.id.clone())
    }

    fn emit_episode_changed(&mut self, previous_episode_id: Option<String>) {
        self.pending_events.push(PlayerEvent::EpisodeChanged {
            index: self.queue.current_index(),
            episode_id: self.active_id(),
            previous_episode_id,
        });
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl fmt::Debug for PlayerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerStore")
            .field("queue", &self.queue)
            .field("is_playing", &self.is_playing)
            .field("is_looping", &self.is_looping)
            .field("is_shuffling", &self.is_shuffling)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}
