/// Episode types supplied by the data-fetch layer
use serde::{Deserialize, Serialize};

use crate::time::format_duration;

/// One playable podcast episode
///
/// Immutable once built. The playback engine only reads `id` and `audio`;
/// the remaining fields are display metadata passed through to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Stable unique identifier
    pub id: String,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a single display string
    pub members: String,

    /// Thumbnail reference (opaque to the engine)
    pub thumbnail: String,

    /// Playable audio file
    pub audio: EpisodeAudio,
}

/// Audio file attached to an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeAudio {
    /// Source URL handed to the media element
    pub url: String,

    /// Total duration in whole seconds
    pub duration_secs: u64,

    /// Pre-formatted duration (`HH:MM:SS`)
    pub duration_display: String,
}

impl Episode {
    /// Create a new episode, formatting its duration for display
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        url: impl Into<String>,
        duration_secs: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            audio: EpisodeAudio::new(url, duration_secs),
        }
    }
}

impl EpisodeAudio {
    /// Create audio metadata, deriving `duration_display` from `duration_secs`
    pub fn new(url: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            url: url.into(),
            duration_secs,
            duration_display: format_duration(duration_secs),
        }
    }
}
