//! Audio-related small types and handles.
//!
//! This module defines the commands understood by the audio thread and the
//! playback information it publishes.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AudioError;

/// What the output is doing right now.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// Nothing loaded, or the loaded track ran out.
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace whatever is loaded with `path` and start it. The load result
    /// goes back on `reply`.
    Play {
        path: PathBuf,
        reply: Sender<Result<(), AudioError>>,
    },
    /// Pause the loaded track.
    Pause,
    /// Continue a paused track.
    Resume,
    /// Stop playback immediately.
    Stop,
    /// Stop and end the audio thread.
    Quit,
}

#[derive(Debug, Clone, Default)]
/// Runtime playback information published by the audio thread.
pub struct PlaybackInfo {
    pub status: EngineStatus,
    /// Offset into the loaded track.
    pub position: Duration,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
