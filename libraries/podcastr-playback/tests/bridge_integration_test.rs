//! Media bridge integration tests
//!
//! Drives a store and a simulated element the way a host event loop does:
//! apply a command, reconcile, then feed the element's notifications back.

use std::collections::VecDeque;

use podcastr_core::Episode;
use podcastr_playback::{MediaBridge, MediaElement, MediaEvent, PlayerHandle, PlayerStore};

// ===== Test Helpers =====

/// Element that answers play/pause/source requests with the matching
/// notification on the next pump, like a real audio tag.
#[derive(Debug, Default)]
struct FakeAudio {
    source: Option<String>,
    playing: bool,
    looping: bool,
    outbox: VecDeque<MediaEvent>,
}

impl FakeAudio {
    /// Simulate reaching the end of the source
    fn finish(&mut self) {
        if self.looping {
            return;
        }
        if self.playing {
            self.playing = false;
            self.outbox.push_back(MediaEvent::Paused);
        }
        self.outbox.push_back(MediaEvent::Completed);
    }
}

impl MediaElement for FakeAudio {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.playing = true;
        self.outbox.push_back(MediaEvent::Started);
    }

    fn clear_source(&mut self) {
        self.source = None;
        self.playing = false;
    }

    fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.outbox.push_back(MediaEvent::Started);
        }
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.outbox.push_back(MediaEvent::Paused);
        }
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn seek(&mut self, _position_secs: u64) {}
}

/// Reconcile and deliver notifications until the element goes quiet
fn pump(handle: &PlayerHandle, bridge: &mut MediaBridge<FakeAudio>) {
    loop {
        bridge.reconcile(&handle.snapshot());
        let Some(event) = bridge.element_mut().outbox.pop_front() else {
            break;
        };
        handle.update(|store| bridge.handle_event(store, event));
    }
}

fn create_episode(id: &str) -> Episode {
    Episode::new(id, id, "Host", "thumb.png", format!("https://cdn/{}.m4a", id), 1200)
}

fn setup(ids: &[&str], start: usize) -> (PlayerHandle, MediaBridge<FakeAudio>) {
    let handle = PlayerHandle::new(PlayerStore::default());
    handle.update(|store| store.load_list(ids.iter().map(|id| create_episode(id)).collect(), start));
    let mut bridge = MediaBridge::new(FakeAudio::default());
    pump(&handle, &mut bridge);
    (handle, bridge)
}

// ===== Tests =====

#[test]
fn test_load_starts_element() {
    let (handle, bridge) = setup(&["a", "b"], 0);

    assert_eq!(bridge.element().source.as_deref(), Some("https://cdn/a.m4a"));
    assert!(bridge.element().playing);
    assert!(bridge.observed().playing);
    assert!(handle.snapshot().is_playing);
}

#[test]
fn test_toggle_play_pauses_and_resumes_element() {
    let (handle, mut bridge) = setup(&["a"], 0);

    handle.update(|store| store.toggle_play());
    pump(&handle, &mut bridge);
    assert!(!bridge.element().playing);
    assert!(!handle.snapshot().is_playing);

    handle.update(|store| store.toggle_play());
    pump(&handle, &mut bridge);
    assert!(bridge.element().playing);
    assert!(handle.snapshot().is_playing);
}

#[test]
fn test_completion_plays_following_episode() {
    let (handle, mut bridge) = setup(&["a", "b", "c"], 0);

    bridge.element_mut().finish();
    pump(&handle, &mut bridge);

    assert_eq!(handle.snapshot().current_index, 1);
    assert_eq!(bridge.element().source.as_deref(), Some("https://cdn/b.m4a"));
    assert!(bridge.element().playing);
    assert!(handle.snapshot().is_playing);
}

#[test]
fn test_completion_of_last_episode_stops() {
    let (handle, mut bridge) = setup(&["a", "b"], 1);

    bridge.element_mut().finish();
    pump(&handle, &mut bridge);

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert!(!snapshot.is_playing);
    assert!(!bridge.element().playing);
}

#[test]
fn test_looping_element_never_advances() {
    let (handle, mut bridge) = setup(&["a", "b"], 0);

    handle.update(|store| store.toggle_loop());
    pump(&handle, &mut bridge);
    assert!(bridge.element().looping);

    bridge.element_mut().finish();
    pump(&handle, &mut bridge);

    assert_eq!(handle.snapshot().current_index, 0);
    assert!(handle.snapshot().is_playing);
}

#[test]
fn test_external_pause_is_not_a_toggle() {
    let (handle, mut bridge) = setup(&["a"], 0);

    // Headset button pauses the element behind the store's back, twice
    bridge.element_mut().pause();
    bridge.element_mut().outbox.push_back(MediaEvent::Paused);
    pump(&handle, &mut bridge);

    assert!(!handle.snapshot().is_playing);
    assert!(!bridge.element().playing);
}

#[test]
fn test_next_while_paused_autoplays_new_source() {
    let (handle, mut bridge) = setup(&["a", "b"], 0);

    handle.update(|store| store.toggle_play());
    pump(&handle, &mut bridge);
    assert!(!handle.snapshot().is_playing);

    handle.update(|store| store.advance());
    pump(&handle, &mut bridge);

    assert_eq!(bridge.element().source.as_deref(), Some("https://cdn/b.m4a"));
    assert!(handle.snapshot().is_playing);
}

#[test]
fn test_progress_and_seek_track_display_position() {
    let (handle, mut bridge) = setup(&["a"], 0);

    handle.update(|store| bridge.handle_event(store, MediaEvent::Progress { position_secs: 75.4 }));
    assert_eq!(bridge.progress().elapsed_display(), "00:01:15");

    assert_eq!(bridge.seek(&handle.snapshot(), 5000), Some(1200));
    assert_eq!(bridge.progress().elapsed_display(), "00:20:00");
    assert_eq!(bridge.progress().ratio(1200), 1.0);
}
