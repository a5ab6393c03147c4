//! Jukebox settings.
//!
//! One section per subsystem (`server`, `library`, `covers`, `audio`,
//! `display`, `visualizer`, `logging`). Values come from an optional TOML
//! file, then `JUKEBOX__SECTION__KEY` environment variables, then defaults.

mod load;
mod schema;

pub use schema::*;
