/// CLI configuration
use crate::error::{CliError, Result};
use podcastr_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub player: PlayerSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub looping: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `podcastr.toml` in the
    /// working directory is used if present. `PODCASTR_*` variables override
    /// both (`PODCASTR_PLAYER_SHUFFLE=true`, `PODCASTR_CATALOG_PATH=...`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with PODCASTR_)
        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(CliError::Config(
                "Catalog path is required (set PODCASTR_CATALOG_PATH)".to_string(),
            ));
        }

        Ok(())
    }

    /// Initial store flags, with command-line switches forcing them on
    pub fn player_config(&self, shuffle: bool, looping: bool) -> PlayerConfig {
        PlayerConfig {
            shuffle: self.player.shuffle || shuffle,
            looping: self.player.looping || looping,
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        path: default_catalog_path(),
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./episodes.json")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            player: PlayerSettings::default(),
            catalog: default_catalog(),
        }
    }
}
