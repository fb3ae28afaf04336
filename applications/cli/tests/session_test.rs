//! Interactive session tests
//!
//! Feed scripted stdin to the session loop and check both the printed status
//! lines and the final player/element state.

use std::io::Cursor;

use podcastr_cli::{run, Flow, ReplCommand, Session};
use podcastr_core::Episode;
use podcastr_playback::{PlayerConfig, PlayerHandle, PlayerStore};

// ===== Test Helpers =====

fn create_episode(id: &str) -> Episode {
    Episode::new(
        id,
        format!("Episode {}", id),
        "Host",
        "thumb.png",
        format!("https://cdn.example.com/{}.m4a", id),
        600,
    )
}

fn session_with(ids: &[&str], start: usize, config: PlayerConfig) -> Session {
    let mut store = PlayerStore::new(config);
    store
        .try_load_list(ids.iter().map(|id| create_episode(id)).collect(), start)
        .unwrap();
    Session::new(PlayerHandle::new(store))
}

fn catalog_session(ids: &[&str]) -> Session {
    let catalog: Vec<Episode> = ids.iter().map(|id| create_episode(id)).collect();
    let mut store = PlayerStore::default();
    store.try_load_list(catalog.clone(), 0).unwrap();
    Session::with_catalog(PlayerHandle::new(store), catalog)
}

fn run_script(session: &mut Session, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    run(session, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ===== Tests =====

#[test]
fn test_session_starts_playing_first_episode() {
    let session = session_with(&["a", "b", "c"], 0, PlayerConfig::default());

    assert_eq!(
        session.bridge().element().source(),
        Some("https://cdn.example.com/a.m4a")
    );
    assert!(session.bridge().element().is_playing());
    assert_eq!(
        session.status_line(),
        "[playing] 1/3 Episode a (00:00:00 / 00:10:00) shuffle:off loop:off"
    );
}

#[test]
fn test_scripted_listening_session() {
    let mut session = session_with(&["a", "b", "c"], 0, PlayerConfig::default());

    let lines = run_script(
        &mut session,
        "tick 75\n\
         end\n\
         loop\n\
         end\n\
         toggle\n\
         play\n\
         prev\n\
         bogus\n\
         quit\n\
         next\n",
    );

    assert_eq!(
        lines,
        vec![
            "[playing] 1/3 Episode a (00:00:00 / 00:10:00) shuffle:off loop:off",
            "[playing] 1/3 Episode a (00:01:15 / 00:10:00) shuffle:off loop:off",
            "[playing] 2/3 Episode b (00:00:00 / 00:10:00) shuffle:off loop:off",
            "[playing] 2/3 Episode b (00:00:00 / 00:10:00) shuffle:off loop:on",
            "[playing] 2/3 Episode b (00:00:00 / 00:10:00) shuffle:off loop:on",
            "[paused] 2/3 Episode b (00:00:00 / 00:10:00) shuffle:off loop:on",
            "[playing] 2/3 Episode b (00:00:00 / 00:10:00) shuffle:off loop:on",
            "[playing] 1/3 Episode a (00:00:00 / 00:10:00) shuffle:off loop:on",
            "error: Unknown command: bogus",
        ]
    );

    // Input after quit is never read
    assert_eq!(session.handle().snapshot().current_index, 0);
}

#[test]
fn test_last_episode_completion_stops_playback() {
    let mut session = session_with(&["a", "b"], 1, PlayerConfig::default());

    session.execute(ReplCommand::End).unwrap();

    let snapshot = session.handle().snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert!(!snapshot.is_playing);
    assert!(!session.bridge().element().is_playing());
}

#[test]
fn test_disabled_controls_report_errors() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());

    let lines = run_script(&mut session, "next\nprev\nshuffle\nseek x\n");
    assert_eq!(
        lines[1..],
        [
            "error: Control is disabled: next",
            "error: Control is disabled: previous",
            "error: Control is disabled: shuffle",
            "error: Invalid argument for seek: x",
        ]
    );
}

#[test]
fn test_seek_clamps_and_moves_element() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());

    session.execute(ReplCommand::Seek(9_999)).unwrap();

    assert_eq!(session.bridge().progress().position_secs(), 600);
    assert_eq!(session.bridge().element().position_secs(), 600.0);
    assert!(session.status_line().contains("(00:10:00 / 00:10:00)"));
}

#[test]
fn test_shuffle_keeps_next_available_at_end() {
    let mut session = session_with(
        &["a", "b", "c"],
        2,
        PlayerConfig {
            shuffle: true,
            looping: false,
        },
    );

    assert_eq!(session.execute(ReplCommand::Next).unwrap(), Flow::Continue);
    let snapshot = session.handle().snapshot();
    assert!(snapshot.current_index < 3);
    assert!(snapshot.is_playing);
}

#[test]
fn test_external_pause_then_play() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());

    session.execute(ReplCommand::Pause).unwrap();
    assert!(!session.handle().snapshot().is_playing);

    session.execute(ReplCommand::Play).unwrap();
    assert!(session.handle().snapshot().is_playing);
    assert!(session.bridge().element().is_playing());
}

#[test]
fn test_end_of_input_finishes_cleanly() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());
    let lines = run_script(&mut session, "status\n\n");
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_ticking_past_end_completes_and_advances() {
    let mut session = session_with(&["a", "b"], 0, PlayerConfig::default());

    session.execute(ReplCommand::Tick(10_000.0)).unwrap();

    let snapshot = session.handle().snapshot();
    assert_eq!(snapshot.current_index, 1);
    assert!(snapshot.is_playing);
    assert_eq!(
        session.status_line(),
        "[playing] 2/2 Episode b (00:00:00 / 00:10:00) shuffle:off loop:off"
    );
}

#[test]
fn test_ticking_past_last_episode_stops_at_duration() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());

    session.execute(ReplCommand::Tick(599.0)).unwrap();
    session.execute(ReplCommand::Tick(30.0)).unwrap();

    assert_eq!(
        session.status_line(),
        "[paused] 1/1 Episode a (00:10:00 / 00:10:00) shuffle:off loop:off"
    );
    assert_eq!(session.bridge().element().position_secs(), 600.0);
}

#[test]
fn test_episode_command_plays_single_episode() {
    let mut session = catalog_session(&["a", "b", "c"]);

    let lines = run_script(&mut session, "episode b\nnext\nepisode zzz\n");

    assert_eq!(
        lines[1..],
        [
            "[playing] 1/1 Episode b (00:00:00 / 00:10:00) shuffle:off loop:off",
            "error: Control is disabled: next",
            "error: Episode not found in catalog: zzz",
        ]
    );
    assert_eq!(
        session.bridge().element().source(),
        Some("https://cdn.example.com/b.m4a")
    );
}

#[test]
fn test_select_reloads_catalog_mid_session() {
    let mut session = catalog_session(&["a", "b", "c"]);
    session.execute(ReplCommand::Loop).unwrap();
    session.execute(ReplCommand::Toggle).unwrap();
    assert!(!session.handle().snapshot().is_playing);

    session.execute(ReplCommand::Select(2)).unwrap();

    let snapshot = session.handle().snapshot();
    assert_eq!(snapshot.current_index, 2);
    assert_eq!(snapshot.queue_len, 3);
    assert!(snapshot.is_playing);
    assert!(snapshot.is_looping);
    assert_eq!(
        session.bridge().element().source(),
        Some("https://cdn.example.com/c.m4a")
    );
}

#[test]
fn test_select_out_of_range_keeps_queue() {
    let mut session = catalog_session(&["a", "b"]);

    let lines = run_script(&mut session, "select 5\n");

    assert_eq!(
        lines[1],
        "error: Cannot start playback: Index out of bounds: 5 (list length 2)"
    );
    assert_eq!(session.handle().snapshot().current_index, 0);
}

#[test]
fn test_select_without_catalog_is_error() {
    let mut session = session_with(&["a"], 0, PlayerConfig::default());

    assert!(session.execute(ReplCommand::Select(0)).is_err());
    assert_eq!(session.handle().snapshot().queue_len, 1);
}
