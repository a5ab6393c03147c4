use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[error("audio thread is gone")]
    Disconnected,

    #[error("audio thread did not answer in time")]
    Timeout,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("display I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("frame is {got_w}x{got_h}, panel expects {want_w}x{want_h}")]
    SizeMismatch {
        got_w: u32,
        got_h: u32,
        want_w: u32,
        want_h: u32,
    },
}

#[derive(Error, Debug)]
pub enum CoverError {
    #[error("tag read failed: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artwork request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("No music files in {0}")]
    NoTracks(PathBuf),

    #[error("Could not play {name}: {source}")]
    Load { name: String, source: AudioError },
}
