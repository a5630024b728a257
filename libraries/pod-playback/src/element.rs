//! Media element abstraction
//!
//! Abstracts the host platform's media-playback primitive (an HTML audio
//! element, a native media session, ...). The controller commands it and
//! consumes its notifications; decoding, buffering, and network I/O stay
//! entirely on the host side.

use crate::error::Result;
use std::time::Duration;

/// Host-provided media playback primitive
///
/// Implementors execute transport commands against the platform player
/// for the currently bound media URL. Binding the element to an
/// episode's `media_url` - and propagating the loop flag to the native
/// loop setting - is the presentation layer's job; it installs the bound
/// element with
/// [`PlayerController::set_media_element`](crate::PlayerController::set_media_element).
///
/// Failures inside the element (network, decode) are its own concern;
/// the controller only sees rejected commands.
pub trait MediaElement: Send {
    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Jump to a position from the start of the episode
    fn set_current_time(&mut self, position: Duration) -> Result<()>;
}

/// Notifications fired by the media element
///
/// Fired one at a time and delivered by the host in emission order via
/// [`PlayerController::handle_notification`](crate::PlayerController::handle_notification).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaNotification {
    /// Playback started (autoplay, user gesture, or a play command)
    Play,

    /// Playback paused
    Pause,

    /// The current episode finished naturally
    Ended,

    /// Duration/seekability is known for a newly bound episode
    MetadataLoaded,

    /// Periodic position report
    TimeUpdate(Duration),
}

/// Command-recording media element for tests
///
/// Shares its log behind an `Arc` so tests can inspect commands after
/// handing the element to a controller.
#[cfg(test)]
pub(crate) mod testing {
    use super::{MediaElement, Result};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Commands a controller issued to the element
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Command {
        Play,
        Pause,
        SetCurrentTime(Duration),
    }

    #[derive(Default)]
    pub(crate) struct RecordingElement {
        log: Arc<Mutex<Vec<Command>>>,
    }

    impl RecordingElement {
        pub(crate) fn new() -> (Self, Arc<Mutex<Vec<Command>>>) {
            let element = Self::default();
            let log = Arc::clone(&element.log);
            (element, log)
        }
    }

    impl MediaElement for RecordingElement {
        fn play(&mut self) -> Result<()> {
            self.log.lock().unwrap().push(Command::Play);
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.log.lock().unwrap().push(Command::Pause);
            Ok(())
        }

        fn set_current_time(&mut self, position: Duration) -> Result<()> {
            self.log.lock().unwrap().push(Command::SetCurrentTime(position));
            Ok(())
        }
    }
}
