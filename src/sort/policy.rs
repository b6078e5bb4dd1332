use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::library::Track;

use super::collate::Collator;
use super::key::SortKey;

/// How a playlist orders its tracks when it is not shuffled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortPolicy {
    /// Numeric-aware order: `video2` before `video10`.
    #[default]
    #[serde(alias = "numeric", alias = "standard")]
    Natural,
    /// Host collation order, like a desktop file manager: may put `video10`
    /// before `video2`.
    #[serde(alias = "windows", alias = "collation")]
    Locale,
}

impl SortPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortPolicy::Natural => "natural",
            SortPolicy::Locale => "locale",
        }
    }

    /// Compare two names under this policy.
    pub fn compare(self, a: &str, b: &str, collator: &dyn Collator) -> Ordering {
        match self {
            SortPolicy::Natural => SortKey::new(a).cmp(&SortKey::new(b)),
            SortPolicy::Locale => collator.compare(a, b),
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" | "numeric" | "standard" => Ok(SortPolicy::Natural),
            "locale" | "windows" | "collation" => Ok(SortPolicy::Locale),
            other => Err(format!("unknown sort policy: {other:?}")),
        }
    }
}

/// Sort `tracks` in place under `policy`.
///
/// Ties under the policy fall back to the raw name and then the id, so the
/// result depends only on the set of tracks and never on their input order.
pub fn sort_tracks(tracks: &mut [Track], policy: SortPolicy, collator: &dyn Collator) {
    match policy {
        SortPolicy::Natural => {
            tracks.sort_by_cached_key(|t| (SortKey::new(&t.name), t.name.clone(), t.id.clone()))
        }
        SortPolicy::Locale => tracks.sort_by(|a, b| {
            collator
                .compare(&a.name, &b.name)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        }),
    }
}
