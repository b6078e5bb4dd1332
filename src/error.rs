//! Error types for playlist operations

use thiserror::Error;

/// Conditions a [`crate::Playlist`] reports back to its caller.
///
/// None of these are fatal: the playlist is always left in a consistent state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// `load` was given no tracks; the playlist is now empty.
    #[error("no media found")]
    EmptyInput,

    /// A 1-based position outside `1..=len` was requested.
    #[error("position {requested} is out of range, expected a number from 1 to {len}")]
    IndexOutOfRange { requested: usize, len: usize },

    /// Advanced past the last track with looping disabled.
    #[error("end of playlist")]
    EndOfPlaylist,

    /// No collation data could be loaded for the requested locale.
    #[error("unsupported collation locale {0}")]
    UnsupportedLocale(String),

    /// Text typed for a go-to request is not a number.
    #[error("invalid position: {0:?}")]
    InvalidInput(String),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
