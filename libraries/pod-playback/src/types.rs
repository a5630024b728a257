//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Episode information for queue management
///
/// Contains all metadata needed for playback and display.
/// An episode has no identity beyond its position in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Hosts/guests line for display
    pub members: String,

    /// Cover image URL
    pub thumbnail_url: String,

    /// Episode duration
    pub duration: Duration,

    /// Audio URL the media element is bound to
    pub media_url: String,
}

/// Queue navigation mode
///
/// Determines how `advance` selects the next episode and whether
/// `has_next` is bounded by the end of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    /// Walk the queue in order
    Sequential,

    /// Jump to a uniformly random episode on every advance
    Shuffled,
}

impl NavigationMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            NavigationMode::Sequential => NavigationMode::Shuffled,
            NavigationMode::Shuffled => NavigationMode::Sequential,
        }
    }

    /// Check if this is shuffled navigation
    pub fn is_shuffled(self) -> bool {
        self == NavigationMode::Shuffled
    }
}

/// Configuration for the player controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial navigation mode (default: Sequential)
    pub navigation: NavigationMode,

    /// Initial loop flag (default: off)
    pub looping: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationMode::Sequential,
            looping: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.navigation, NavigationMode::Sequential);
        assert!(!config.looping);
    }

    #[test]
    fn navigation_mode_toggles() {
        assert_eq!(
            NavigationMode::Sequential.toggled(),
            NavigationMode::Shuffled
        );
        assert_eq!(
            NavigationMode::Shuffled.toggled(),
            NavigationMode::Sequential
        );
        assert!(NavigationMode::Shuffled.is_shuffled());
        assert!(!NavigationMode::Sequential.is_shuffled());
    }

    #[test]
    fn episode_creation() {
        let episode = Episode {
            title: "Test Episode".to_string(),
            members: "Host, Guest".to_string(),
            thumbnail_url: "https://example.com/cover.jpg".to_string(),
            duration: Duration::from_secs(1800),
            media_url: "https://example.com/audio.mp3".to_string(),
        };

        assert_eq!(episode.title, "Test Episode");
        assert_eq!(episode.duration, Duration::from_secs(1800));
    }
}
