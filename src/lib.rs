//! Playlist ordering engine for a folder-based media player.
//!
//! The crate turns a set of media file names into a deterministic play order
//! and keeps the playback position consistent while that order changes:
//!
//! - [`sort`]: natural (numeric-aware) and locale-collation ordering of names;
//! - [`playlist`]: the sequencer holding the active order, current index and
//!   the loop/shuffle flags;
//! - [`library`]: the track model and the recognized media extensions;
//! - [`config`]: settings loaded from `config.toml` and the environment.
//!
//! Everything here is synchronous and free of I/O (apart from reading the
//! config file). Callers that drive a [`Playlist`] from several threads must
//! serialize access themselves.
//!
//! ```
//! use seamless::{Playlist, SortPolicy, Track};
//!
//! let mut playlist = Playlist::new(SortPolicy::Natural);
//! playlist
//!     .load(
//!         vec![
//!             Track::new("uri:2", "video2.mp4"),
//!             Track::new("uri:10", "video10.mp4"),
//!             Track::new("uri:1", "video1.mp4"),
//!         ],
//!         SortPolicy::Natural,
//!     )
//!     .unwrap();
//!
//! let names: Vec<&str> = playlist.ordered_tracks().iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["video1.mp4", "video2.mp4", "video10.mp4"]);
//! assert_eq!(playlist.status().to_string(), "1/3");
//! ```

pub mod config;
mod error;
pub mod library;
pub mod playlist;
pub mod sort;

pub use error::{PlaylistError, Result};
pub use library::{MEDIA_EXTENSIONS, Track, filter_media, is_media_name};
pub use playlist::{Playlist, PlaylistState, PlaylistStatus, RandomShuffler, Shuffler};
pub use sort::{
    CaseFoldCollator, Collator, Segment, SortKey, SortPolicy, UnicodeCollator, default_collator,
    natural_cmp, sort_tracks,
};
