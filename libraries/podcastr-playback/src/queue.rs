//! Episode queue with index-based navigation
//!
//! The queue never reorders or consumes episodes. Navigation only moves
//! `current_index`, so "previous" always lands on the episode that was
//! actually before the current one in the loaded list.
//!
//! ```text
//! episodes:  [ A ][ B ][ C ][ D ]
//!                      ^
//!                current_index = 2
//! ```

use podcastr_core::Episode;

/// Ordered episode list plus the active position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeQueue {
    /// Episodes in playback order
    episodes: Vec<Episode>,

    /// Active position. Only meaningful while `episodes` is non-empty.
    current_index: usize,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole queue and jump to `start_index`
    ///
    /// `start_index` is stored unchecked; an out-of-range value simply
    /// leaves the queue without an active episode.
    pub fn replace(&mut self, episodes: Vec<Episode>, start_index: usize) {
        self.episodes = episodes;
        self.current_index = start_index;
    }

    /// Episode at the current position
    pub fn active(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    /// Current position
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// All episodes in playback order
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    /// Number of episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Whether a sequential step forward exists
    pub fn has_following(&self) -> bool {
        self.current_index.saturating_add(1) < self.episodes.len()
    }

    /// Whether a step back exists
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Move one episode forward
    ///
    /// Returns false at the end of the queue (no wrap).
    pub fn step_forward(&mut self) -> bool {
        if self.has_following() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Move one episode back
    ///
    /// Returns false at the start of the queue (no wrap).
    pub fn step_back(&mut self) -> bool {
        if self.has_previous() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump directly to `index`
    pub(crate) fn jump_to(&mut self, index: usize) {
        self.current_index = index;
    }
}
