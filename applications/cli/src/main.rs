/// Podcastr - terminal podcast player
use clap::{Parser, Subcommand};
use podcastr_cli::{catalog, config::CliConfig, repl, CliError, Session};
use podcastr_playback::{PlayerHandle, PlayerStore};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr")]
#[command(about = "Podcastr terminal player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PODCASTR_CONFIG")]
    config: Option<PathBuf>,

    /// Episode catalog (overrides the configured path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog episodes
    List,
    /// Play the catalog interactively, reading commands from stdin
    Play {
        /// Index of the first episode
        #[arg(short, long, default_value_t = 0)]
        start: usize,
        /// Play a single episode by id instead of the whole catalog
        #[arg(short, long, conflicts_with = "start")]
        episode: Option<String>,
        /// Start with shuffle enabled
        #[arg(long)]
        shuffle: bool,
        /// Start with loop enabled
        #[arg(long = "loop")]
        looping: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr=info,podcastr_cli=info,podcastr_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }
    config.validate()?;

    match cli.command {
        Commands::List => list(&config)?,
        Commands::Play {
            start,
            episode,
            shuffle,
            looping,
        } => play(&config, start, episode.as_deref(), shuffle, looping)?,
    }

    Ok(())
}

fn list(config: &CliConfig) -> anyhow::Result<()> {
    let episodes = catalog::load_catalog(&config.catalog.path)?;

    if episodes.is_empty() {
        println!("No episodes in {}", config.catalog.path.display());
        return Ok(());
    }

    for (index, episode) in episodes.iter().enumerate() {
        println!("{}", catalog::format_row(index, episode));
    }

    Ok(())
}

fn play(
    config: &CliConfig,
    start: usize,
    episode: Option<&str>,
    shuffle: bool,
    looping: bool,
) -> anyhow::Result<()> {
    let episodes = catalog::load_catalog(&config.catalog.path)?;

    let mut store = PlayerStore::new(config.player_config(shuffle, looping));
    match episode {
        Some(id) => {
            store.load_single(catalog::find_episode(&episodes, id)?.clone());
            tracing::info!("Starting playback of episode {}", id);
        }
        None => {
            store
                .try_load_list(episodes.clone(), start)
                .map_err(CliError::from)?;
            tracing::info!("Starting playback at episode {}", start);
        }
    }
    tracing::info!("{}", repl::HELP);

    let mut session = Session::with_catalog(PlayerHandle::new(store), episodes);
    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
