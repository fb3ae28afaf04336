//! Simulated audio element
//!
//! Stands in for a real audio output in the terminal host. It keeps a clock
//! advanced by hand (`tick`) and answers requests with the notifications a
//! browser audio tag would send, queued until the host drains them.

use std::collections::VecDeque;

use podcastr_playback::{MediaElement, MediaEvent};
use tracing::info;

#[derive(Debug, Default)]
pub struct SimulatedElement {
    source: Option<String>,
    playing: bool,
    looping: bool,
    position_secs: f64,
    duration_secs: Option<u64>,
    outbox: VecDeque<MediaEvent>,
}

impl SimulatedElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications produced since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.outbox.drain(..).collect()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Media duration, known once the source metadata has loaded
    pub fn set_duration(&mut self, duration_secs: Option<u64>) {
        self.duration_secs = duration_secs;
    }

    pub fn duration_secs(&self) -> Option<u64> {
        self.duration_secs
    }

    /// Advance the clock while playing and report progress
    ///
    /// The position stops at the media duration, where the element finishes
    /// the source.
    pub fn tick(&mut self, secs: f64) {
        if !self.playing || self.source.is_none() {
            return;
        }

        self.position_secs += secs.max(0.0);
        let reached_end = match self.duration_secs {
            Some(duration) if self.position_secs >= duration as f64 => {
                self.position_secs = duration as f64;
                true
            }
            _ => false,
        };

        self.outbox.push_back(MediaEvent::Progress {
            position_secs: self.position_secs,
        });
        if reached_end {
            self.finish();
        }
    }

    /// Reach the end of the current source
    ///
    /// A looping element restarts silently. Otherwise it pauses and then
    /// reports completion, in that order.
    pub fn finish(&mut self) {
        if self.source.is_none() {
            return;
        }

        if self.looping {
            info!("element: looping back to start");
            self.position_secs = 0.0;
            self.outbox.push_back(MediaEvent::Progress { position_secs: 0.0 });
            return;
        }

        info!("element: reached end of source");
        if self.playing {
            self.playing = false;
            self.outbox.push_back(MediaEvent::Paused);
        }
        self.outbox.push_back(MediaEvent::Completed);
    }

    /// Playback started from outside the player (media keys)
    pub fn external_play(&mut self) {
        if self.source.is_some() {
            self.play();
        }
    }

    /// Playback paused from outside the player (media keys)
    pub fn external_pause(&mut self) {
        self.pause();
    }
}

impl MediaElement for SimulatedElement {
    fn set_source(&mut self, url: &str) {
        info!(url, "element: source assigned");
        self.source = Some(url.to_string());
        self.position_secs = 0.0;
        self.duration_secs = None;

        // autoplay
        self.playing = true;
        self.outbox.push_back(MediaEvent::Started);
    }

    fn clear_source(&mut self) {
        info!("element: source cleared");
        self.source = None;
        self.position_secs = 0.0;
        self.duration_secs = None;
        self.playing = false;
    }

    fn play(&mut self) {
        if !self.playing {
            info!("element: play");
            self.playing = true;
            self.outbox.push_back(MediaEvent::Started);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            info!("element: pause");
            self.playing = false;
            self.outbox.push_back(MediaEvent::Paused);
        }
    }

    fn set_looping(&mut self, looping: bool) {
        info!(looping, "element: loop attribute");
        self.looping = looping;
    }

    fn seek(&mut self, position_secs: u64) {
        info!(position_secs, "element: seek");
        self.position_secs = position_secs as f64;
    }
}
