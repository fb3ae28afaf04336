//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Store commands never fail. These errors only come from the checked
/// entry points that validate caller input before applying it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Tried to load an empty episode list
    #[error("Episode list is empty")]
    EmptyList,

    /// Start index outside the loaded list
    #[error("Index out of bounds: {index} (list length {len})")]
    IndexOutOfBounds {
        /// Requested start index
        index: usize,
        /// Length of the list it was checked against
        len: usize,
    },
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
