use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::audio::{AudioEngine, EngineStatus, SampleLoader};

use super::Visuals;

pub type SharedVisuals = Arc<Mutex<Visuals>>;

/// Handle to the thread animating one track.
///
/// The thread stops on [`VisualizerTask::cancel`], when the handle is
/// dropped, when the engine goes idle, or on the first decode/display error.
pub struct VisualizerTask {
    cancelled: Arc<AtomicBool>,
    stop_tx: Sender<()>,
}

impl VisualizerTask {
    pub fn spawn(
        path: PathBuf,
        tick: Duration,
        loader: Arc<dyn SampleLoader>,
        engine: Arc<dyn AudioEngine>,
        visuals: SharedVisuals,
    ) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let flag = cancelled.clone();

        thread::spawn(move || {
            let samples = match loader.load(&path) {
                Ok(s) => s,
                Err(e) => {
                    warn!("visualizer disabled for {}: {e}", path.display());
                    return;
                }
            };
            if flag.load(Ordering::SeqCst) {
                return;
            }

            loop {
                match stop_rx.recv_timeout(tick) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }

                match engine.status() {
                    EngineStatus::Idle => {
                        debug!("track ended, visualizer for {} exits", path.display());
                        break;
                    }
                    EngineStatus::Paused => continue,
                    EngineStatus::Playing => {}
                }
                let position = engine.position();

                let mut visuals = visuals.lock().unwrap_or_else(|e| e.into_inner());
                // A newer task may own the visuals by now.
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                if !visuals.meter.tick(&samples, position) {
                    continue;
                }
                if let Err(e) = visuals.redraw() {
                    warn!("visualizer stopped: {e}");
                    break;
                }
            }
            debug!("visualizer thread for {} stopped", path.display());
        });

        Self { cancelled, stop_tx }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = self.stop_tx.send(());
    }
}
