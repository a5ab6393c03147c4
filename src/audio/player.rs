use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::error::AudioError;

use super::AudioEngine;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, EngineStatus, PlaybackHandle, PlaybackInfo};

/// `rodio`-backed engine. All output work happens on a dedicated thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    load_timeout: Duration,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(settings: &AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, playback_info.clone(), settings.force_silent);

        Self {
            tx,
            playback: playback_info,
            load_timeout: Duration::from_millis(settings.load_timeout_ms),
            join: Mutex::new(Some(audio_handle)),
        }
    }

    /// Stop playback and wait for the audio thread to exit.
    pub fn shutdown(&self) {
        let _ = self.tx.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }

    fn info(&self) -> PlaybackInfo {
        self.playback
            .lock()
            .map(|info| info.clone())
            .unwrap_or_default()
    }
}

impl AudioEngine for AudioPlayer {
    fn play(&self, path: &Path) -> Result<(), AudioError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(AudioCmd::Play {
                path: path.to_path_buf(),
                reply: reply_tx,
            })
            .map_err(|_| AudioError::Disconnected)?;

        match reply_rx.recv_timeout(self.load_timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(AudioError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(AudioError::Disconnected),
        }
    }

    fn pause(&self) {
        let _ = self.tx.send(AudioCmd::Pause);
    }

    fn resume(&self) {
        let _ = self.tx.send(AudioCmd::Resume);
    }

    fn stop(&self) {
        let _ = self.tx.send(AudioCmd::Stop);
    }

    fn status(&self) -> EngineStatus {
        self.info().status
    }

    fn position(&self) -> Duration {
        self.info().position
    }
}
