use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder};
use tracing::{debug, info, warn};

use super::sink::Loaded;
use super::types::{AudioCmd, EngineStatus, PlaybackHandle};

/// How often the published position/idle state is refreshed.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn open_output(force_silent: bool) -> Option<OutputStream> {
    if force_silent {
        info!("audio output disabled, running in silent mode");
        return None;
    }
    match OutputStreamBuilder::open_default_stream() {
        Ok(mut stream) => {
            // rodio logs to stderr when OutputStream is dropped; we log ourselves.
            stream.log_on_drop(false);
            Some(stream)
        }
        Err(e) => {
            warn!("audio init failed ({e}), falling back to silent mode");
            None
        }
    }
}

fn publish(playback: &PlaybackHandle, f: impl FnOnce(&mut super::types::PlaybackInfo)) {
    if let Ok(mut info) = playback.lock() {
        f(&mut info);
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback: PlaybackHandle,
    force_silent: bool,
) -> JoinHandle<()> {
    thread::spawn(move || {
        // The stream must live on this thread for as long as anything plays.
        let output = open_output(force_silent);
        let mut current: Option<Loaded> = None;

        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(AudioCmd::Play { path, reply }) => {
                    if let Some(old) = current.take() {
                        old.stop();
                    }
                    let result = match Loaded::start(output.as_ref(), &path) {
                        Ok(loaded) => {
                            debug!("audio thread loaded {}", path.display());
                            current = Some(loaded);
                            publish(&playback, |info| {
                                info.status = EngineStatus::Playing;
                                info.position = Duration::ZERO;
                            });
                            Ok(())
                        }
                        Err(e) => {
                            publish(&playback, |info| {
                                info.status = EngineStatus::Idle;
                                info.position = Duration::ZERO;
                            });
                            Err(e)
                        }
                    };
                    let _ = reply.send(result);
                }
                Ok(AudioCmd::Pause) => {
                    if let Some(c) = current.as_mut() {
                        c.pause();
                        publish(&playback, |info| info.status = EngineStatus::Paused);
                    }
                }
                Ok(AudioCmd::Resume) => {
                    if let Some(c) = current.as_mut() {
                        c.resume();
                        publish(&playback, |info| info.status = EngineStatus::Playing);
                    }
                }
                Ok(AudioCmd::Stop) => {
                    if let Some(c) = current.take() {
                        c.stop();
                    }
                    publish(&playback, |info| *info = Default::default());
                }
                Ok(AudioCmd::Quit) => {
                    if let Some(c) = current.take() {
                        c.stop();
                    }
                    publish(&playback, |info| *info = Default::default());
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if current.as_ref().is_some_and(Loaded::finished) {
                current = None;
                publish(&playback, |info| info.status = EngineStatus::Idle);
            }
            if let Some(c) = current.as_ref() {
                let position = c.position();
                publish(&playback, |info| info.position = position);
            }
        }
        debug!("audio thread stopped");
    })
}
