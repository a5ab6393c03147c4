//! What is playing right now, and the transitions between tracks.

mod controller;
mod state;

pub use controller::PlaybackController;
pub use state::{PlayState, PlaybackSnapshot};

#[cfg(test)]
mod tests;
