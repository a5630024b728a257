//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// State transitions never fail; the only fallible surface is the
/// media-element command path.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Media element rejected a transport command
    #[error("Media element error: {0}")]
    Element(String),

    /// Invalid seek position
    #[error("Invalid seek position: {0:?}")]
    InvalidSeekPosition(std::time::Duration),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
