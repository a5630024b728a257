//! Player controller - facade and media bridge
//!
//! Coordinates the playback state with the host's media element and
//! derives the read-only view consumed by the presentation layer.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{
    element::{MediaElement, MediaNotification},
    error::Result,
    events::PlayerEvent,
    state::PlayerState,
    types::{Episode, NavigationMode, PlayerConfig},
};

/// Central playback coordination
///
/// Owns the playback state, the optionally bound media element, the
/// whole-second position counter, and the pending event queue drained by
/// the UI.
///
/// One controller exists per player session. It is constructed
/// explicitly and handed to presentation code by reference - never held
/// as a process-wide global - so the core stays testable without a UI
/// framework.
///
/// All methods run synchronously on the host's event loop; notifications
/// from the media element must be delivered in emission order.
pub struct PlayerController {
    state: PlayerState,
    element: Option<Box<dyn MediaElement>>,
    position: Duration,
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a new controller with an empty queue
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            state: PlayerState::new(&config),
            element: None,
            position: Duration::ZERO,
            pending_events: Vec::new(),
        }
    }

    // ===== Media element binding =====

    /// Install the media element bound to the current episode
    ///
    /// Called by the presentation layer after it rebinds the platform
    /// player to the current episode's `media_url`. If playback is
    /// already supposed to be running, the element is commanded to play
    /// immediately.
    pub fn set_media_element(&mut self, mut element: Box<dyn MediaElement>) -> Result<()> {
        if self.state.is_playing() {
            element.play()?;
        }
        self.element = Some(element);
        Ok(())
    }

    /// Drop the bound media element
    pub fn clear_media_element(&mut self) {
        self.element = None;
    }

    // ===== Transport operations =====

    /// Replace the queue with a single episode and start playing
    pub fn play(&mut self, episode: Episode) -> Result<()> {
        debug!(title = %episode.title, "play single episode");
        let was_playing = self.state.is_playing();
        self.state.play_single(episode);
        self.emit_queue_changed();
        self.emit_episode_changed();
        self.sync_element_playback(was_playing)
    }

    /// Replace the queue wholesale and start playing from `index`
    ///
    /// The caller must supply a valid index for the new list; an
    /// out-of-range index is an unchecked precondition.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        debug!(count = episodes.len(), index, "play episode list");
        let was_playing = self.state.is_playing();
        self.state.play_queue(episodes, index);
        self.emit_queue_changed();
        self.emit_episode_changed();
        self.sync_element_playback(was_playing)
    }

    /// Flip the playing flag and command the element accordingly
    ///
    /// Inert while the queue is empty.
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_empty() {
            return Ok(());
        }
        let was_playing = self.state.is_playing();
        self.state.toggle_play();
        self.emit_state_changed();
        self.sync_element_playback(was_playing)
    }

    /// Mirror the element's actual playback flag
    ///
    /// Used by the element's own play/pause notifications; deliberately
    /// does NOT command the element back, so notification handling never
    /// feeds a command loop.
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.state.is_playing() == playing {
            return;
        }
        self.state.set_playing(playing);
        self.emit_state_changed();
    }

    /// Move to the next episode
    ///
    /// Shuffled navigation jumps to a uniformly random episode (repeats
    /// allowed); sequential navigation steps forward. No-op when nothing
    /// follows.
    pub fn play_next(&mut self) {
        if self.state.advance() {
            debug!(index = self.state.current_index(), "advanced to next episode");
            self.emit_episode_changed();
        }
    }

    /// Move to the previous episode; no-op at the start of the queue
    pub fn play_previous(&mut self) {
        if self.state.retreat() {
            debug!(index = self.state.current_index(), "retreated to previous episode");
            self.emit_episode_changed();
        }
    }

    /// Flip the loop flag
    ///
    /// The presentation layer propagates the flag to the element's
    /// native loop setting; restart-on-completion then happens inside
    /// the element (a looping element never fires `Ended`).
    pub fn toggle_loop(&mut self) {
        self.state.toggle_loop();
        let looping = self.state.is_looping();
        self.pending_events.push(PlayerEvent::LoopChanged { looping });
    }

    /// Toggle between sequential and shuffled navigation
    pub fn toggle_shuffle(&mut self) {
        self.state.toggle_shuffle();
        let mode = self.state.navigation();
        self.pending_events.push(PlayerEvent::NavigationChanged { mode });
    }

    /// Empty the queue and return the player to its idle state
    ///
    /// Also unbinds the media element and zeroes the position counter;
    /// transport flags and navigation mode survive, as they do across
    /// every queue replacement.
    pub fn clear_player_state(&mut self) {
        debug!("clearing player state");
        self.state.clear();
        self.element = None;
        self.position = Duration::ZERO;
        self.pending_events.push(PlayerEvent::QueueCleared);
    }

    /// Jump to a position in the current episode
    ///
    /// Commands the element and optimistically updates the tracked
    /// position counter without waiting for the element's confirming
    /// time update. Inert while no episode is loaded.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        if self.state.current_episode().is_none() {
            return Ok(());
        }
        if let Some(element) = self.element.as_mut() {
            element.set_current_time(position)?;
        }
        self.set_position(position);
        Ok(())
    }

    // ===== Media element notifications =====

    /// Dispatch a notification from the media element
    pub fn handle_notification(&mut self, notification: MediaNotification) {
        match notification {
            MediaNotification::Play => self.handle_play(),
            MediaNotification::Pause => self.handle_pause(),
            MediaNotification::Ended => self.handle_ended(),
            MediaNotification::MetadataLoaded => self.handle_metadata_loaded(),
            MediaNotification::TimeUpdate(position) => self.handle_time_update(position),
        }
    }

    /// The element started playing
    pub fn handle_play(&mut self) {
        self.set_playing_state(true);
    }

    /// The element paused
    pub fn handle_pause(&mut self) {
        self.set_playing_state(false);
    }

    /// The current episode finished naturally
    ///
    /// Advances to the next episode when one is available; otherwise
    /// clears the player entirely instead of wrapping to the start of
    /// the queue.
    pub fn handle_ended(&mut self) {
        debug!("episode ended");
        if self.state.has_next() {
            self.play_next();
        } else {
            self.clear_player_state();
        }
    }

    /// Duration/seekability is known for a newly bound episode
    ///
    /// Resets the tracked position counter; subsequent time updates
    /// drive it forward.
    pub fn handle_metadata_loaded(&mut self) {
        self.set_position(Duration::ZERO);
    }

    /// Periodic position report from the element
    pub fn handle_time_update(&mut self, position: Duration) {
        trace!(?position, "time update");
        self.set_position(position);
    }

    // ===== Derived view =====

    /// All queued episodes in playback order
    pub fn episodes(&self) -> &[Episode] {
        self.state.episodes()
    }

    /// Current position in the queue (unused while empty)
    pub fn current_episode_index(&self) -> usize {
        self.state.current_index()
    }

    /// Episode at the current position, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current_episode()
    }

    /// Playing flag
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Loop flag
    pub fn is_looping(&self) -> bool {
        self.state.is_looping()
    }

    /// Check if navigation is shuffled
    pub fn is_shuffling(&self) -> bool {
        self.state.navigation().is_shuffled()
    }

    /// Current navigation mode
    pub fn navigation(&self) -> NavigationMode {
        self.state.navigation()
    }

    /// Check if `play_next` would select an episode
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Check if an episode precedes the current one
    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    /// Tracked playback position (whole seconds)
    pub fn position(&self) -> Duration {
        self.position
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain, in emission
    /// order. The UI calls this after invoking controller operations or
    /// forwarding element notifications.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Command the element when the playing flag actually transitioned
    fn sync_element_playback(&mut self, was_playing: bool) -> Result<()> {
        let playing = self.state.is_playing();
        if playing == was_playing {
            return Ok(());
        }
        if let Some(element) = self.element.as_mut() {
            if playing {
                element.play()?;
            } else {
                element.pause()?;
            }
        }
        Ok(())
    }

    /// Truncate to whole seconds and emit when the value changed
    fn set_position(&mut self, raw: Duration) {
        let truncated = Duration::from_secs(raw.as_secs());
        if truncated != self.position {
            self.position = truncated;
            let position_ms = self.position.as_millis() as u64;
            self.pending_events.push(PlayerEvent::PositionChanged { position_ms });
        }
    }

    fn emit_state_changed(&mut self) {
        let playing = self.state.is_playing();
        self.pending_events.push(PlayerEvent::StateChanged { playing });
    }

    fn emit_episode_changed(&mut self) {
        let index = self.state.current_index();
        self.pending_events.push(PlayerEvent::EpisodeChanged { index });
    }

    fn emit_queue_changed(&mut self) {
        let length = self.state.episodes().len();
        self.pending_events.push(PlayerEvent::QueueChanged { length });
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
