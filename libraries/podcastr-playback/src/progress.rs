//! Playback progress for the display layer
//!
//! Tracks the elapsed position shown next to the seek bar. Fed by the
//! element's progress ticks and by user seeks; the store never sees it.

use podcastr_core::format_duration;

/// Elapsed position in whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    position_secs: u64,
}

impl ProgressTracker {
    /// Create a tracker at position 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to 0 (new source loaded)
    pub fn reset(&mut self) {
        self.position_secs = 0;
    }

    /// Record a progress tick from the element
    ///
    /// Fractional seconds are floored. Negative or non-finite input is
    /// treated as 0.
    pub fn update(&mut self, position_secs: f64) {
        self.position_secs = if position_secs.is_finite() && position_secs > 0.0 {
            position_secs.floor() as u64
        } else {
            0
        };
    }

    /// Record a user seek, clamped to the episode duration
    ///
    /// Returns the position actually stored.
    pub fn seek(&mut self, position_secs: u64, duration_secs: u64) -> u64 {
        self.position_secs = position_secs.min(duration_secs);
        self.position_secs
    }

    /// Current position
    pub fn position_secs(&self) -> u64 {
        self.position_secs
    }

    /// Position formatted as `HH:MM:SS`
    pub fn elapsed_display(&self) -> String {
        format_duration(self.position_secs)
    }

    /// Fraction of `duration_secs` played, in `[0.0, 1.0]`
    pub fn ratio(&self, duration_secs: u64) -> f64 {
        if duration_secs == 0 {
            return 0.0;
        }
        (self.position_secs as f64 / duration_secs as f64).clamp(0.0, 1.0)
    }
}
