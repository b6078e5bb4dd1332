//! Ordering of track names.
//!
//! Two policies are available: [`SortPolicy::Natural`] compares embedded digit
//! runs by magnitude (`file2` before `file10`), [`SortPolicy::Locale`] defers to
//! a host-provided [`Collator`].

mod collate;
mod key;
mod policy;

pub use collate::{CaseFoldCollator, Collator, UnicodeCollator, default_collator};
pub use key::{Segment, SortKey, natural_cmp};
pub use policy::{SortPolicy, sort_tracks};
