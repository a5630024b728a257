//! Pod Player - Playback State Management
//!
//! Platform-agnostic playback state management for Pod Player.
//!
//! This crate provides:
//! - Episode queue with index-based navigation
//! - Transport flags (playing, looping)
//! - Sequential and shuffled navigation modes
//! - A controller facade deriving the read-only UI view
//!   (`has_next`/`has_previous`, current episode, position)
//! - A media-element bridge (transport commands out, playback
//!   notifications in)
//! - An event queue for UI synchronization
//!
//! # Architecture
//!
//! `pod-playback` is completely platform-agnostic:
//! - No dependency on a UI framework
//! - No audio decoding, buffering, or network I/O
//! - Single-threaded and synchronous; every operation runs on the
//!   host's event loop
//!
//! The host provides the actual playback primitive (an HTML audio
//! element, a native media session, ...) behind the [`MediaElement`]
//! trait and forwards its notifications to the controller in emission
//! order.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use pod_playback::{Episode, PlayerConfig, PlayerController};
//! use std::time::Duration;
//!
//! let mut player = PlayerController::new(PlayerConfig::default());
//!
//! let episode = Episode {
//!     title: "Faladev #30".to_string(),
//!     members: "Diego, Richard".to_string(),
//!     thumbnail_url: "https://example.com/faladev30.jpg".to_string(),
//!     duration: Duration::from_secs(3600),
//!     media_url: "https://example.com/faladev30.mp3".to_string(),
//! };
//!
//! player.play(episode).unwrap();
//! assert!(player.is_playing());
//! assert_eq!(player.current_episode().unwrap().title, "Faladev #30");
//! ```
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use pod_playback::{Episode, PlayerController};
//! use std::time::Duration;
//!
//! # fn episode(title: &str) -> Episode {
//! #     Episode {
//! #         title: title.to_string(),
//! #         members: "Host".to_string(),
//! #         thumbnail_url: "https://example.com/cover.jpg".to_string(),
//! #         duration: Duration::from_secs(1800),
//! #         media_url: "https://example.com/audio.mp3".to_string(),
//! #     }
//! # }
//! let mut player = PlayerController::default();
//! player.play_list(vec![episode("one"), episode("two")], 0).unwrap();
//!
//! assert!(player.has_next());
//! player.play_next();
//! assert_eq!(player.current_episode_index(), 1);
//!
//! // Shuffled navigation always has a next pick
//! player.toggle_shuffle();
//! assert!(player.has_next());
//! ```
//!
//! # Example: Media Element Integration
//!
//! ```rust
//! use pod_playback::{
//!     Episode, MediaElement, MediaNotification, PlayerController, Result,
//! };
//! use std::time::Duration;
//!
//! // Implement MediaElement for your platform player
//! struct MyAudioHandle {
//!     // ... platform-specific handle
//! }
//!
//! impl MediaElement for MyAudioHandle {
//!     fn play(&mut self) -> Result<()> {
//!         // Start the platform player
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn set_current_time(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut player = PlayerController::default();
//! # let episode = Episode {
//! #     title: "ep".to_string(),
//! #     members: "Host".to_string(),
//! #     thumbnail_url: "https://example.com/cover.jpg".to_string(),
//! #     duration: Duration::from_secs(1800),
//! #     media_url: "https://example.com/audio.mp3".to_string(),
//! # };
//! player.play(episode).unwrap();
//!
//! // The presentation layer binds the element to the episode URL
//! player.set_media_element(Box::new(MyAudioHandle {})).unwrap();
//!
//! // ... and forwards the element's notifications
//! player.handle_notification(MediaNotification::MetadataLoaded);
//! player.handle_notification(MediaNotification::TimeUpdate(Duration::from_secs(7)));
//! assert_eq!(player.position(), Duration::from_secs(7));
//!
//! // Natural completion with nothing left to play clears the player
//! player.handle_notification(MediaNotification::Ended);
//! assert!(player.episodes().is_empty());
//! ```

mod controller;
mod element;
mod error;
mod events;
mod queue;
mod shuffle;
mod state;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use element::{MediaElement, MediaNotification};
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use state::PlayerState;
pub use types::{Episode, NavigationMode, PlayerConfig};
