use super::model::Track;

/// Extensions (lowercase, without dot) recognized as playable media.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "mp3", "mp4", "avi", "mkv", "flv", "wmv", "mov", "m4v", "flac", "wav", "ogg", "aac", "wma",
    "m4a", "webm", "3gp", "ts", "m2ts",
];

/// Return the lowercased text after the last `.` of `name`, or `None` when the
/// name has no dot at all.
pub fn media_extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Return true when `name` ends in one of the built-in [`MEDIA_EXTENSIONS`].
pub fn is_media_name(name: &str) -> bool {
    media_extension(name)
        .map(|ext| MEDIA_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn matches_extensions(name: &str, exts: &[String]) -> bool {
    media_extension(name)
        .map(|ext| exts.iter().any(|e| e == &ext))
        .unwrap_or(false)
}

/// Keep only the tracks whose name carries one of `extensions`.
///
/// Extensions are compared case-insensitively; a leading dot and surrounding
/// whitespace in the configured values are ignored. Input order is preserved.
pub fn filter_media<I>(tracks: I, extensions: &[String]) -> Vec<Track>
where
    I: IntoIterator<Item = Track>,
{
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    tracks
        .into_iter()
        .filter(|t| matches_extensions(&t.name, &exts))
        .collect()
}
