//! Episode catalog file
//!
//! A JSON array in the shape served by the episodes API. Entries are
//! normalized into [`Episode`] values on load; fields the player does not use
//! (`published_at`, `description`, ...) are ignored.

use std::{fs, path::Path};

use podcastr_core::Episode;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    members: String,
    #[serde(default)]
    thumbnail: String,
    file: CatalogFile,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    url: String,
    duration: u64,
}

impl From<CatalogEntry> for Episode {
    fn from(entry: CatalogEntry) -> Self {
        Episode::new(
            entry.id,
            entry.title,
            entry.members,
            entry.thumbnail,
            entry.file.url,
            entry.file.duration,
        )
    }
}

/// Parse catalog JSON into episodes, preserving order
pub fn parse_catalog(json: &str) -> serde_json::Result<Vec<Episode>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    Ok(entries.into_iter().map(Episode::from).collect())
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<Episode>> {
    let json = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let episodes = parse_catalog(&json).map_err(|source| CliError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = ?path, count = episodes.len(), "loaded catalog");
    Ok(episodes)
}

/// Look up a catalog episode by id
pub fn find_episode<'a>(episodes: &'a [Episode], id: &str) -> Result<&'a Episode> {
    episodes
        .iter()
        .find(|episode| episode.id == id)
        .ok_or_else(|| CliError::UnknownEpisode(id.to_string()))
}

/// One row of `podcastr list`
pub fn format_row(index: usize, episode: &Episode) -> String {
    format!(
        "{:>3}  {}  {} ({})",
        index, episode.audio.duration_display, episode.title, episode.members
    )
}
