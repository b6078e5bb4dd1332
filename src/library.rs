//! Library module: the track model and the media-name filter applied before
//! tracks are handed to a playlist.

mod media;
mod model;

pub use media::{MEDIA_EXTENSIONS, filter_media, is_media_name, media_extension};
pub use model::Track;
