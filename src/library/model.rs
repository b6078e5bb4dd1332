use serde::{Deserialize, Serialize};

/// One playable entry: an opaque handle the playback engine can open, plus
/// the display name the ordering is computed from.
///
/// Two tracks with the same name are still distinct when their ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
