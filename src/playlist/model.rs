//! Playlist model types: `Playlist` and `PlaylistState`.

use std::fmt;

use tracing::debug;

use crate::config::PlaybackSettings;
use crate::error::{PlaylistError, Result};
use crate::library::Track;
use crate::sort::{Collator, SortPolicy, default_collator, sort_tracks};

use super::shuffle::{RandomShuffler, Shuffler};
use super::status::PlaylistStatus;

/// Whether a playlist currently has anything to play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaylistState {
    Empty,
    Loaded,
}

/// The active play order plus the position and flags that go with it.
///
/// Invariant: while loaded, `current_index() < len()`. Every mutation either
/// applies completely or returns an error and leaves the playlist untouched.
/// Mutations other than `load` and `set_loop` do nothing on an empty playlist.
pub struct Playlist {
    tracks: Vec<Track>,
    index: usize,
    looping: bool,
    shuffled: bool,
    policy: SortPolicy,
    collator: Box<dyn Collator>,
    shuffler: Box<dyn Shuffler>,
}

impl Playlist {
    /// Create an empty playlist using root Unicode collation and an
    /// entropy-seeded shuffler.
    pub fn new(policy: SortPolicy) -> Self {
        Self {
            tracks: Vec::new(),
            index: 0,
            looping: false,
            shuffled: false,
            policy,
            collator: default_collator(None),
            shuffler: Box::new(RandomShuffler::new()),
        }
    }

    /// Create an empty playlist with the policy, collation locale and loop
    /// flag from `settings`.
    ///
    /// The shuffle default is applied by [`Playlist::apply_playback_defaults`]
    /// once tracks are loaded, since loading never shuffles.
    pub fn from_settings(settings: &PlaybackSettings) -> Self {
        let mut playlist = Self::new(settings.sort_policy);
        playlist.collator = default_collator(settings.locale.as_deref());
        playlist.looping = settings.looping;
        playlist
    }

    /// Replace the collator used by [`SortPolicy::Locale`].
    pub fn with_collator(mut self, collator: impl Collator + 'static) -> Self {
        self.collator = Box::new(collator);
        self
    }

    /// Replace the source of shuffle permutations.
    pub fn with_shuffler(mut self, shuffler: impl Shuffler + 'static) -> Self {
        self.shuffler = Box::new(shuffler);
        self
    }

    /// Replace the contents with `tracks` ordered by `policy` and move to the
    /// first track.
    ///
    /// The new order is never shuffled, whatever the shuffle flag says; the
    /// flag itself is kept. An empty `tracks` leaves the playlist empty and
    /// returns [`PlaylistError::EmptyInput`].
    pub fn load(&mut self, tracks: Vec<Track>, policy: SortPolicy) -> Result<()> {
        let mut tracks = tracks;
        sort_tracks(&mut tracks, policy, self.collator.as_ref());

        self.policy = policy;
        self.index = 0;
        self.tracks = tracks;

        debug!(count = self.tracks.len(), %policy, "playlist loaded");
        if self.tracks.is_empty() {
            return Err(PlaylistError::EmptyInput);
        }
        Ok(())
    }

    /// Apply the startup loop and shuffle defaults from `settings`.
    pub fn apply_playback_defaults(&mut self, settings: &PlaybackSettings) {
        self.set_loop(settings.looping);
        self.set_shuffle(settings.shuffle);
    }

    /// Turn shuffle on or off.
    ///
    /// Switching on replaces the order with a random permutation; switching
    /// off re-sorts the same tracks under the current policy. Either way the
    /// position restarts at the top. Setting the current value again, or any
    /// call on an empty playlist, changes nothing.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.tracks.is_empty() || self.shuffled == enabled {
            return;
        }

        if enabled {
            self.shuffler.shuffle(&mut self.tracks);
        } else {
            sort_tracks(&mut self.tracks, self.policy, self.collator.as_ref());
        }
        self.shuffled = enabled;
        self.index = 0;

        debug!(shuffled = enabled, count = self.tracks.len(), policy = %self.policy, "playlist reordered");
    }

    /// Flip the shuffle flag (see [`Playlist::set_shuffle`]).
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffled);
    }

    /// Set the loop flag. Order and position are unaffected.
    pub fn set_loop(&mut self, enabled: bool) {
        self.looping = enabled;
        debug!(looping = enabled, "loop changed");
    }

    /// Flip the loop flag.
    pub fn toggle_loop(&mut self) {
        self.set_loop(!self.looping);
    }

    /// Jump to the 1-based position `one_based`.
    ///
    /// Positions outside `1..=len()` are rejected, not clamped.
    pub fn seek(&mut self, one_based: usize) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Ok(());
        }
        if !(1..=len).contains(&one_based) {
            return Err(PlaylistError::IndexOutOfRange {
                requested: one_based,
                len,
            });
        }

        self.index = one_based - 1;
        debug!(index = self.index, "seek");
        Ok(())
    }

    /// Jump to a 1-based position typed by the user.
    pub fn goto(&mut self, input: &str) -> Result<()> {
        if self.tracks.is_empty() {
            return Ok(());
        }
        let input = input.trim();
        let one_based = input
            .parse::<usize>()
            .map_err(|_| PlaylistError::InvalidInput(input.to_string()))?;
        self.seek(one_based)
    }

    /// Move to the next track.
    ///
    /// Past the last track this wraps to the first when looping, otherwise it
    /// reports [`PlaylistError::EndOfPlaylist`] and stays put.
    pub fn advance(&mut self) -> Result<()> {
        let len = self.tracks.len();
        if len == 0 {
            return Ok(());
        }

        if self.index + 1 < len {
            self.index += 1;
        } else if self.looping {
            self.index = 0;
        } else {
            return Err(PlaylistError::EndOfPlaylist);
        }
        Ok(())
    }

    /// Move to the previous track. Before the first track this wraps to the
    /// last when looping and does nothing otherwise.
    pub fn retreat(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }

        if self.index > 0 {
            self.index -= 1;
        } else if self.looping {
            self.index = len - 1;
        }
    }

    /// Go back to the first track without touching order or flags.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    pub fn state(&self) -> PlaylistState {
        if self.tracks.is_empty() {
            PlaylistState::Empty
        } else {
            PlaylistState::Loaded
        }
    }

    /// 0-based index of the current track (0 when empty).
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The active order.
    pub fn ordered_tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    /// Counter and flags for display.
    ///
    /// `shuffled` reports the shuffle flag, which survives [`Playlist::load`]
    /// even though a fresh load is always in canonical order; right after such
    /// a load the status reads shuffle ON over an unshuffled list.
    pub fn status(&self) -> PlaylistStatus {
        let total = self.tracks.len();
        PlaylistStatus {
            current: if total > 0 { self.index + 1 } else { 0 },
            total,
            looping: self.looping,
            shuffled: self.shuffled,
        }
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(SortPolicy::default())
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("tracks", &self.tracks)
            .field("index", &self.index)
            .field("looping", &self.looping)
            .field("shuffled", &self.shuffled)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
