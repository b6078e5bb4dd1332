use serde::Deserialize;

use crate::library::MEDIA_EXTENSIONS;
use crate::sort::SortPolicy;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/seamless/config.toml` or `~/.config/seamless/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SEAMLESS__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Order used when shuffle is off: `"natural"` or `"locale"`.
    pub sort_policy: SortPolicy,
    /// BCP 47 tag for `"locale"` ordering, e.g. `"pl"`; root collation when unset.
    pub locale: Option<String>,
    /// Whether playback wraps around at the end of the playlist.
    #[serde(alias = "loop")]
    pub looping: bool,
    /// Whether shuffle is switched on after the first load.
    pub shuffle: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as media (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: MEDIA_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
