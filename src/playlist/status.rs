use std::fmt;

/// Counters and flags for the player's labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaylistStatus {
    /// 1-based position of the current track, 0 when nothing is loaded.
    pub current: usize,
    pub total: usize,
    pub looping: bool,
    pub shuffled: bool,
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

impl PlaylistStatus {
    /// Summary line, e.g. `12 files | loop: ON | shuffle: OFF`.
    pub fn info_line(&self) -> String {
        format!(
            "{} files | loop: {} | shuffle: {}",
            self.total,
            on_off(self.looping),
            on_off(self.shuffled)
        )
    }
}

/// Renders the file counter, `current/total`.
impl fmt::Display for PlaylistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
