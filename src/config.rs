//! Configuration loader and schema types.
//!
//! This module exposes the settings that pick the sort policy, the startup
//! loop/shuffle flags and the media extensions, plus helpers to load them from
//! disk and the environment.

mod load;
mod schema;

pub use load::{default_config_path, load_or_default, resolve_config_path};
pub use schema::*;
