//! Audio output and decoding.
//!
//! [`AudioPlayer`] owns the output device on a dedicated thread and is driven
//! through [`AudioEngine`]. When no device can be opened it keeps working in
//! silent mode so the rest of the jukebox stays usable.
//! [`SampleLoader`] decodes whole files for the visualizer.

use std::path::Path;
use std::time::Duration;

use crate::error::AudioError;

mod player;
mod samples;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use samples::{DecoderSamples, MonoSamples, SampleLoader};
pub use types::EngineStatus;

/// Transport controls the playback controller needs from an output backend.
pub trait AudioEngine: Send + Sync {
    /// Load `path` and start it, replacing anything loaded before.
    fn play(&self, path: &Path) -> Result<(), AudioError>;
    fn pause(&self);
    fn resume(&self);
    fn stop(&self);
    fn status(&self) -> EngineStatus;
    /// Offset into the loaded track.
    fn position(&self) -> Duration;
}

#[cfg(test)]
mod tests;
