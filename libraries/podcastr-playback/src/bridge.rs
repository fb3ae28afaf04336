//! Media element bridge
//!
//! Connects the store's playback intent to a physical audio element and
//! relays the element's lifecycle back as store commands.
//!
//! Two separate states are kept on purpose:
//! - desired: `is_playing` in the [`PlayerStore`]
//! - observed: [`ObservedState`], updated only from the element's own events
//!
//! ```text
//!  PlayerStore ──snapshot──▶ reconcile() ──▶ MediaElement
//!       ▲                                        │
//!       └──── handle_event() ◀── MediaEvent ─────┘
//! ```

use tracing::trace;

use crate::{events::MediaEvent, progress::ProgressTracker, store::PlayerStore, types::PlaybackSnapshot};

/// Platform audio element
///
/// Implementors wrap whatever actually produces sound (an HTML audio tag,
/// a native player, a test double). Calls are fire-and-forget: the element
/// reports what really happened later through [`MediaEvent`]s.
pub trait MediaElement {
    /// Load a new source URL
    ///
    /// The element is expected to start the new source on its own
    /// (autoplay) and report [`MediaEvent::Started`] once it does.
    fn set_source(&mut self, url: &str);

    /// Unload the current source
    fn clear_source(&mut self);

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Enable or disable self-restart on completion
    ///
    /// A looping element restarts instead of reporting
    /// [`MediaEvent::Completed`].
    fn set_looping(&mut self, looping: bool);

    /// Jump to a position in the current source
    fn seek(&mut self, position_secs: u64);
}

/// What the element last reported or was configured with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedState {
    /// Element reported itself playing
    pub playing: bool,

    /// Source currently assigned to the element
    pub source_url: Option<String>,

    /// Queue position and id of the episode the source belongs to
    pub episode: Option<(usize, String)>,

    /// Loop attribute currently set on the element
    pub looping: bool,
}

/// Reconciles a [`MediaElement`] with the store
pub struct MediaBridge<E: MediaElement> {
    element: E,
    observed: ObservedState,
    /// Play (`true`) or pause (`false`) issued but not yet confirmed
    pending: Option<bool>,
    progress: ProgressTracker,
}

impl<E: MediaElement> MediaBridge<E> {
    /// Wrap an element with no source loaded
    pub fn new(element: E) -> Self {
        Self {
            element,
            observed: ObservedState::default(),
            pending: None,
            progress: ProgressTracker::new(),
        }
    }

    /// Apply the store's intent to the element
    ///
    /// Call after every command. In order:
    /// 1. Assign (or clear) the source when the active episode (position and
    ///    id) changed. A new source autoplays, so no play/pause is issued on
    ///    the same pass.
    /// 2. Sync the loop attribute.
    /// 3. Issue `play()`/`pause()` when desired and observed state differ.
    pub fn reconcile(&mut self, snapshot: &PlaybackSnapshot) {
        let desired_episode = snapshot
            .active_episode
            .as_ref()
            .map(|e| (snapshot.current_index, e.id.clone()));

        if self.observed.looping != snapshot.is_looping {
            trace!(looping = snapshot.is_looping, "syncing loop attribute");
            self.element.set_looping(snapshot.is_looping);
            self.observed.looping = snapshot.is_looping;
        }

        if desired_episode != self.observed.episode {
            match &snapshot.active_episode {
                Some(episode) => {
                    trace!(url = %episode.audio.url, id = %episode.id, "assigning source");
                    self.element.set_source(&episode.audio.url);
                    self.observed.source_url = Some(episode.audio.url.clone());
                    self.pending = Some(true);
                }
                None => {
                    trace!("clearing source");
                    self.element.clear_source();
                    self.observed.source_url = None;
                    self.pending = None;
                }
            }
            self.observed.episode = desired_episode;
            self.observed.playing = false;
            self.progress.reset();
            return;
        }

        if self.observed.source_url.is_none() {
            return;
        }

        let desired = snapshot.is_playing;
        if desired == self.observed.playing {
            // A request the element never confirmed is moot once intent matches
            self.pending = None;
        } else if self.pending != Some(desired) {
            trace!(playing = desired, "requesting element state");
            if desired {
                self.element.play();
            } else {
                self.element.pause();
            }
            self.pending = Some(desired);
        }
    }

    /// Translate an element notification into store commands
    ///
    /// - `Started` sets playing to true, `Paused` to false (never a toggle)
    /// - `Completed` advances, unless looping (a looping element restarts on
    ///   its own, so a stray completion is ignored)
    /// - `Progress` only moves the progress tracker
    ///
    /// Returns true when the store's index or playing flag changed.
    pub fn handle_event(&mut self, store: &mut PlayerStore, event: MediaEvent) -> bool {
        let before = (store.current_index(), store.is_playing());

        match event {
            MediaEvent::Started => {
                self.observed.playing = true;
                self.pending = None;
                store.set_playing(true);
            }
            MediaEvent::Paused => {
                self.observed.playing = false;
                self.pending = None;
                store.set_playing(false);
            }
            MediaEvent::Completed => {
                if store.is_looping() {
                    trace!("ignoring completion while looping");
                } else {
                    self.observed.playing = false;
                    store.advance();
                }
            }
            MediaEvent::Progress { position_secs } => {
                self.progress.update(position_secs);
            }
        }

        before != (store.current_index(), store.is_playing())
    }

    /// Seek within the active episode
    ///
    /// The position is clamped to the episode duration. Returns the position
    /// applied, or None when there is no active episode.
    pub fn seek(&mut self, snapshot: &PlaybackSnapshot, position_secs: u64) -> Option<u64> {
        let episode = snapshot.active_episode.as_ref()?;
        let applied = self.progress.seek(position_secs, episode.audio.duration_secs);
        self.element.seek(applied);
        Some(applied)
    }

    /// Last observed element state
    pub fn observed(&self) -> &ObservedState {
        &self.observed
    }

    /// Display progress
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Get reference to the element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Get mutable reference to the element
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
}
