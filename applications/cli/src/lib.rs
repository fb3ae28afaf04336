//! Podcastr CLI Library
//!
//! Terminal host for the Podcastr player: catalog loading, configuration, a
//! simulated audio element and the interactive session loop.
//!
//! This library exposes the core components for testing purposes.

pub mod catalog;
pub mod config;
pub mod element;
pub mod error;
pub mod repl;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, parse_catalog};
pub use config::CliConfig;
pub use element::SimulatedElement;
pub use error::{CliError, Result};
pub use repl::{run, Flow, ReplCommand, Session};
