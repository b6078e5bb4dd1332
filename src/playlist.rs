//! Playlist module: the sequencer that owns the active order.
//!
//! A [`Playlist`] holds the ordered tracks, the current index and the
//! loop/shuffle flags, and recomputes the order on load and on shuffle
//! changes. All operations are synchronous.

mod model;
mod shuffle;
mod status;

pub use model::{Playlist, PlaylistState};
pub use shuffle::{RandomShuffler, Shuffler};
pub use status::PlaylistStatus;

#[cfg(test)]
mod tests;
