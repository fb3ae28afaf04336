//! Podcastr Core
//!
//! Platform-agnostic domain types shared by the Podcastr crates.
//!
//! This crate provides:
//! - **Domain Types**: `Episode`, `EpisodeAudio`
//! - **Time Formatting**: `format_duration` (`HH:MM:SS` display strings)
//!
//! Episodes arrive already normalized from the data-fetch layer. Nothing here
//! parses API payloads or dates.
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode};
//!
//! let episode = Episode::new(
//!     "a-importancia-da-contribuicao-em-open-source",
//!     "A importância da contribuição em Open Source",
//!     "Diego e Richard",
//!     "https://example.com/thumb.png",
//!     "https://example.com/episode.m4a",
//!     3981,
//! );
//!
//! assert_eq!(episode.audio.duration_display, "01:06:21");
//! assert_eq!(format_duration(0), "00:00:00");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod time;
pub mod types;

pub use time::{format_duration, EMPTY_DURATION_DISPLAY};
pub use types::{Episode, EpisodeAudio};
