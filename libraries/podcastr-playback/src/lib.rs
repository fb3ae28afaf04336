//! Podcastr - Playback Management
//!
//! Platform-agnostic episode queue and playback state for Podcastr.
//!
//! This crate provides:
//! - Episode queue with a current index (single episode or list)
//! - Requested playing state, loop and shuffle flags
//! - Sequential and random (shuffle) navigation
//! - Derived `has_next`/`has_previous` flags and control availability
//! - A bridge that keeps a platform media element in sync with the store
//!
//! # Architecture
//!
//! `podcastr-playback` owns no audio. The store records what the user wants;
//! the [`MediaBridge`] pushes that onto a [`MediaElement`] and turns the
//! element's lifecycle notifications back into store commands.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{PlayerConfig, PlayerStore};
//!
//! let episodes: Vec<Episode> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Episode::new(*id, *id, "Host", "thumb.png", format!("{id}.m4a"), 600))
//!     .collect();
//!
//! let mut store = PlayerStore::new(PlayerConfig::default());
//! store.load_list(episodes, 0);
//! assert!(store.is_playing());
//!
//! store.advance();
//! store.advance();
//! store.advance(); // end of queue, stays put
//! assert_eq!(store.current_index(), 2);
//! assert!(!store.has_next());
//! ```
//!
//! # Example: Deterministic Shuffle
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{PlayerCommand, PlayerConfig, PlayerStore, SequenceRandom};
//!
//! let mut store = PlayerStore::with_random(
//!     PlayerConfig { shuffle: true, looping: false },
//!     Box::new(SequenceRandom::new(vec![1])),
//! );
//! store.apply(PlayerCommand::LoadList {
//!     episodes: vec![
//!         Episode::new("a", "A", "Host", "t", "a.m4a", 60),
//!         Episode::new("b", "B", "Host", "t", "b.m4a", 60),
//!     ],
//!     start_index: 0,
//! });
//! store.apply(PlayerCommand::Advance);
//! assert_eq!(store.active_episode().map(|e| e.id.as_str()), Some("b"));
//! ```

mod bridge;
mod controls;
mod error;
mod events;
mod handle;
mod progress;
mod queue;
mod random;
mod store;
pub mod types;

// Public exports
pub use bridge::{MediaBridge, MediaElement, ObservedState};
pub use controls::ControlState;
pub use error::{PlaybackError, Result};
pub use events::{MediaEvent, PlayerEvent};
pub use handle::PlayerHandle;
pub use progress::ProgressTracker;
pub use queue::EpisodeQueue;
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use store::PlayerStore;
pub use types::{PlaybackSnapshot, PlayerCommand, PlayerConfig};
