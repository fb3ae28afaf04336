//! Interactive player session
//!
//! Reads one command per line. User controls go to the store as commands;
//! `play`, `pause`, `tick` and `end` act on the simulated element instead and
//! reach the store only through the bridge, the way media keys and the audio
//! clock do in a browser.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use podcastr_core::Episode;
use podcastr_playback::{
    ControlState, MediaBridge, PlayerCommand, PlayerHandle, PlaybackSnapshot,
};
use tracing::{debug, info, warn};

use crate::{
    catalog::find_episode,
    element::SimulatedElement,
    error::{CliError, Result},
};

/// Upper bound on reconcile/notify rounds per command
const MAX_PUMP_ROUNDS: usize = 32;

pub const HELP: &str = "commands: select <n> episode <id> play pause toggle \
                        next prev shuffle loop tick <secs> seek <secs> end \
                        status help quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Play the catalog starting at a row
    Select(usize),
    /// Play one catalog episode on its own
    Episode(String),
    /// Element started externally
    Play,
    /// Element paused externally
    Pause,
    Toggle,
    Next,
    Prev,
    Shuffle,
    Loop,
    /// Advance the element clock
    Tick(f64),
    Seek(u64),
    /// Element reached the end of its source
    End,
    Status,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match name.to_ascii_lowercase().as_str() {
            "select" => Self::Select(parse_arg("select", arg)?),
            "episode" => match arg {
                Some(id) => Self::Episode(id.to_string()),
                None => {
                    return Err(CliError::InvalidArgument {
                        command: "episode",
                        value: String::new(),
                    })
                }
            },
            "play" => Self::Play,
            "pause" => Self::Pause,
            "toggle" | "p" => Self::Toggle,
            "next" | "n" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "shuffle" => Self::Shuffle,
            "loop" | "repeat" => Self::Loop,
            "tick" => Self::Tick(parse_arg("tick", arg)?),
            "seek" => Self::Seek(parse_arg("seek", arg)?),
            "end" => Self::End,
            "status" | "s" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

fn parse_arg<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T> {
    let value = arg.unwrap_or_default();
    value.parse().map_err(|_| CliError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Store handle plus the bridged element
pub struct Session {
    handle: PlayerHandle,
    bridge: MediaBridge<SimulatedElement>,
    catalog: Vec<Episode>,
}

impl Session {
    /// Attach a simulated element and bring it in line with the store
    pub fn new(handle: PlayerHandle) -> Self {
        Self::with_catalog(handle, Vec::new())
    }

    /// Same as [`Session::new`], with episodes `select`/`episode` can load
    pub fn with_catalog(handle: PlayerHandle, catalog: Vec<Episode>) -> Self {
        let mut session = Self {
            handle,
            bridge: MediaBridge::new(SimulatedElement::new()),
            catalog,
        };
        session.pump();
        session
    }

    pub fn handle(&self) -> &PlayerHandle {
        &self.handle
    }

    pub fn bridge(&self) -> &MediaBridge<SimulatedElement> {
        &self.bridge
    }

    /// Run one command to completion, including element notifications
    pub fn execute(&mut self, command: ReplCommand) -> Result<Flow> {
        let controls = ControlState::from_snapshot(&self.handle.snapshot());

        match command {
            ReplCommand::Select(index) => {
                let episodes = self.catalog.clone();
                self.handle
                    .update(|store| store.try_load_list(episodes, index))?;
            }
            ReplCommand::Episode(id) => {
                let episode = find_episode(&self.catalog, &id)?.clone();
                self.handle.dispatch(PlayerCommand::LoadSingle { episode });
            }
            ReplCommand::Play => self.bridge.element_mut().external_play(),
            ReplCommand::Pause => self.bridge.element_mut().external_pause(),
            ReplCommand::Toggle => {
                require(controls.play_pause, "play/pause")?;
                self.handle.dispatch(PlayerCommand::TogglePlay);
            }
            ReplCommand::Next => {
                require(controls.next, "next")?;
                self.handle.dispatch(PlayerCommand::Advance);
            }
            ReplCommand::Prev => {
                require(controls.previous, "previous")?;
                self.handle.dispatch(PlayerCommand::Retreat);
            }
            ReplCommand::Shuffle => {
                require(controls.shuffle, "shuffle")?;
                self.handle.dispatch(PlayerCommand::ToggleShuffle);
            }
            ReplCommand::Loop => {
                require(controls.repeat, "repeat")?;
                self.handle.dispatch(PlayerCommand::ToggleLoop);
            }
            ReplCommand::Tick(secs) => self.bridge.element_mut().tick(secs),
            ReplCommand::Seek(position) => {
                let snapshot = self.handle.snapshot();
                if self.bridge.seek(&snapshot, position).is_none() {
                    return Err(CliError::ControlDisabled("seek"));
                }
            }
            ReplCommand::End => self.bridge.element_mut().finish(),
            ReplCommand::Status | ReplCommand::Help => {}
            ReplCommand::Quit => return Ok(Flow::Quit),
        }

        self.pump();
        Ok(Flow::Continue)
    }

    /// One-line summary of the player
    pub fn status_line(&self) -> String {
        let snapshot = self.handle.snapshot();
        format_status(&snapshot, &self.bridge.progress().elapsed_display())
    }

    /// Reconcile and deliver element notifications until both sides settle
    fn pump(&mut self) {
        for _ in 0..MAX_PUMP_ROUNDS {
            let snapshot = self.handle.snapshot();
            self.bridge.reconcile(&snapshot);
            self.sync_duration(&snapshot);

            let events = self.bridge.element_mut().drain_events();
            if events.is_empty() {
                self.log_store_events();
                return;
            }

            for event in events {
                debug!(?event, "delivering media event");
                let bridge = &mut self.bridge;
                self.handle.update(|store| bridge.handle_event(store, event));
            }
        }

        warn!("element did not settle after {} rounds", MAX_PUMP_ROUNDS);
        self.log_store_events();
    }

    /// Metadata load: the element learns the active episode's length
    fn sync_duration(&mut self, snapshot: &PlaybackSnapshot) {
        let element = self.bridge.element_mut();
        if element.source().is_some() && element.duration_secs().is_none() {
            let duration = snapshot.active_episode.as_ref().map(|e| e.audio.duration_secs);
            element.set_duration(duration);
        }
    }

    fn log_store_events(&self) {
        for event in self.handle.drain_events() {
            info!(?event, "player");
        }
    }
}

fn require(enabled: bool, control: &'static str) -> Result<()> {
    if enabled {
        Ok(())
    } else {
        Err(CliError::ControlDisabled(control))
    }
}

fn format_status(snapshot: &PlaybackSnapshot, elapsed: &str) -> String {
    let Some(episode) = &snapshot.active_episode else {
        return "[stopped] nothing queued".to_string();
    };

    let state = if snapshot.is_playing { "playing" } else { "paused" };
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    format!(
        "[{}] {}/{} {} ({} / {}) shuffle:{} loop:{}",
        state,
        snapshot.current_index + 1,
        snapshot.queue_len,
        episode.title,
        elapsed,
        episode.audio.duration_display,
        on_off(snapshot.is_shuffling),
        on_off(snapshot.is_looping),
    )
}

/// Drive a session from `input` until `quit` or end of input
///
/// Bad lines are reported on `output` and skipped.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", session.status_line())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "error: {}", err)?;
                continue;
            }
        };
        let is_help = command == ReplCommand::Help;

        match session.execute(command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) if is_help => writeln!(output, "{}", HELP)?,
            Ok(Flow::Continue) => writeln!(output, "{}", session.status_line())?,
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }

    output.flush()?;
    Ok(())
}
