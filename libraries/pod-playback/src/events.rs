//! Playback events
//!
//! Event-based communication for UI synchronization. Events are emitted
//! at key points:
//! - Transport flag changes (play/pause)
//! - Episode changes (the cue to rebind the media element)
//! - Queue replacement and clearing
//! - Position counter updates

use crate::types::NavigationMode;
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
///
/// Drained by the presentation layer via
/// [`PlayerController::drain_events`](crate::PlayerController::drain_events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playing flag changed
    StateChanged {
        /// Whether playback is now running
        playing: bool,
    },

    /// Current episode changed
    ///
    /// The presentation layer should rebind the media element to the
    /// episode at `index` (source URL and native loop setting).
    EpisodeChanged {
        /// New current index into the queue
        index: usize,
    },

    /// Queue was replaced
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Queue was emptied; no current episode remains
    QueueCleared,

    /// Tracked position counter changed
    PositionChanged {
        /// Current position in milliseconds (whole-second granularity)
        position_ms: u64,
    },

    /// Loop flag changed
    LoopChanged {
        /// Whether the media element should loop the current episode
        looping: bool,
    },

    /// Navigation mode changed
    NavigationChanged {
        /// The new mode
        mode: NavigationMode,
    },
}
