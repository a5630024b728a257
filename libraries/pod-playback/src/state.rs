//! Playback state and transition operations
//!
//! `PlayerState` is the sole mutable entity of the crate: the episode
//! queue, the transport flags, and the navigation mode. Every transition
//! operation is synchronous and total - when a precondition does not
//! hold, the state is left untouched instead of failing.

use crate::queue::EpisodeQueue;
use crate::shuffle;
use crate::types::{Episode, NavigationMode, PlayerConfig};

/// Playback state for one player session
///
/// Created once per session (empty queue, not playing; loop flag and
/// navigation mode from config), owned by a
/// [`PlayerController`](crate::PlayerController), and returned to its
/// initial empty-queue state by [`clear`](PlayerState::clear).
#[derive(Debug, Clone)]
pub struct PlayerState {
    queue: EpisodeQueue,
    is_playing: bool,
    is_looping: bool,
    navigation: NavigationMode,
}

impl PlayerState {
    /// Create a fresh state from config
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            is_looping: config.looping,
            navigation: config.navigation,
        }
    }

    // ===== Queries =====

    /// All queued episodes in playback order
    pub fn episodes(&self) -> &[Episode] {
        self.queue.episodes()
    }

    /// Current position in the queue (unused while empty)
    pub fn current_index(&self) -> usize {
        self.queue.current_index()
    }

    /// Episode at the current position, if any
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current_episode()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued episodes
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Playing flag
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Loop flag
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Current navigation mode
    pub fn navigation(&self) -> NavigationMode {
        self.navigation
    }

    /// Check if an episode precedes the current one
    pub fn has_previous(&self) -> bool {
        self.queue.has_previous()
    }

    /// Check if `advance` would select an episode
    ///
    /// Shuffled navigation always has a next pick while the queue is
    /// non-empty - even for a single-episode queue, where the random
    /// target can only be the current episode again.
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty()
            && (self.navigation.is_shuffled() || self.queue.has_next_sequential())
    }

    // ===== Transitions =====

    /// Replace the queue with a single episode and start playing
    ///
    /// Loop flag and navigation mode are left unchanged.
    pub fn play_single(&mut self, episode: Episode) {
        self.queue.replace_single(episode);
        self.is_playing = true;
    }

    /// Replace the queue wholesale and start playing from `start_index`
    ///
    /// The caller must supply a valid index for the new list; an
    /// out-of-range index is an unchecked precondition.
    pub fn play_queue(&mut self, episodes: Vec<Episode>, start_index: usize) {
        self.queue.replace(episodes, start_index);
        self.is_playing = true;
    }

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Set the playing flag directly
    ///
    /// Used to mirror the media element's own play/pause notifications so
    /// the flag tracks actual playback without re-commanding the element.
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Flip the loop flag
    ///
    /// Restart-on-completion is the bound media element's native loop
    /// behavior; this flag only records what the presentation layer
    /// should propagate to it.
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Toggle between sequential and shuffled navigation
    pub fn toggle_shuffle(&mut self) {
        self.navigation = self.navigation.toggled();
    }

    /// Empty the queue and reset the position to 0
    ///
    /// The transport flags and navigation mode survive.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Move to the next episode
    ///
    /// Shuffled: jump to a uniformly random index (repeats allowed).
    /// Sequential: step forward iff an episode follows.
    /// Returns true if a target was selected, false for the no-op case.
    pub fn advance(&mut self) -> bool {
        match shuffle::next_index(self.navigation, self.queue.current_index(), self.queue.len()) {
            Some(index) => self.queue.jump_to(index),
            None => false,
        }
    }

    /// Move to the previous episode iff one precedes the current one
    ///
    /// Returns true if the position moved.
    pub fn retreat(&mut self) -> bool {
        self.queue.step_back()
    }
}
