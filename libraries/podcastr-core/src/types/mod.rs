//! Domain types

mod episode;

pub use episode::{Episode, EpisodeAudio};
