use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::audio::{AudioEngine, EngineStatus, SampleLoader};
use crate::error::PlaybackError;
use crate::library::{LibraryIndex, Track};
use crate::visualizer::{SharedVisuals, VisualizerTask};

use super::state::{PlayState, PlaybackSnapshot};

#[derive(Default)]
struct Inner {
    snapshot: PlaybackSnapshot,
    visualizer: Option<VisualizerTask>,
}

/// The one place playback state lives. Request handlers share it through an
/// `Arc` and every operation answers with the message shown to the user.
pub struct PlaybackController {
    engine: Arc<dyn AudioEngine>,
    library: Arc<LibraryIndex>,
    loader: Arc<dyn SampleLoader>,
    visuals: SharedVisuals,
    tick: Duration,
    inner: Mutex<Inner>,
}

impl PlaybackController {
    pub fn new(
        engine: Arc<dyn AudioEngine>,
        library: Arc<LibraryIndex>,
        loader: Arc<dyn SampleLoader>,
        visuals: SharedVisuals,
        tick: Duration,
    ) -> Self {
        Self {
            engine,
            library,
            loader,
            visuals,
            tick,
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Cancel the visualizer, zero the bars and blank the panel.
    fn quiesce(&self, inner: &mut Inner) {
        if let Some(task) = inner.visualizer.take() {
            task.cancel();
        }
        self.visuals
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .reset();
    }

    /// Start `file_name` if the library has it, otherwise a random track.
    pub fn play(&self, file_name: Option<&str>) -> String {
        match self.try_play(file_name) {
            Ok(track) => format!("Playing: {}", track.stem()),
            Err(e) => {
                warn!("{e}");
                e.to_string()
            }
        }
    }

    fn try_play(&self, file_name: Option<&str>) -> Result<Track, PlaybackError> {
        let mut inner = self.lock();

        self.engine.stop();
        self.quiesce(&mut inner);
        inner.snapshot.state = PlayState::Stopped;
        inner.snapshot.current = None;

        let tracks = self.library.tracks();
        if tracks.is_empty() {
            return Err(PlaybackError::NoTracks(self.library.dir().to_path_buf()));
        }

        let index = file_name
            .and_then(|name| tracks.iter().position(|t| t.file_name == name))
            .unwrap_or_else(|| {
                if let Some(name) = file_name {
                    debug!("{name} is not in the library, picking at random");
                }
                rand::rng().random_range(0..tracks.len())
            });
        let track = tracks[index].clone();

        self.engine
            .play(&track.path)
            .map_err(|source| PlaybackError::Load {
                name: track.file_name.clone(),
                source,
            })?;

        inner.visualizer = Some(VisualizerTask::spawn(
            track.path.clone(),
            self.tick,
            self.loader.clone(),
            self.engine.clone(),
            self.visuals.clone(),
        ));
        inner.snapshot = PlaybackSnapshot {
            state: PlayState::Playing,
            current: Some(track.clone()),
            position: index,
        };
        info!("playing {}", track.file_name);
        Ok(track)
    }

    pub fn pause(&self) -> String {
        let mut inner = self.lock();
        if inner.snapshot.state == PlayState::Playing
            && self.engine.status() == EngineStatus::Playing
        {
            self.engine.pause();
            inner.snapshot.state = PlayState::Paused;
            "Paused music.".to_string()
        } else {
            "Nothing playing.".to_string()
        }
    }

    pub fn resume(&self) -> String {
        let mut inner = self.lock();
        if inner.snapshot.state == PlayState::Paused {
            self.engine.resume();
            inner.snapshot.state = PlayState::Playing;
            "Resumed music.".to_string()
        } else {
            "Nothing to resume.".to_string()
        }
    }

    pub fn stop(&self) -> String {
        let mut inner = self.lock();
        self.engine.stop();
        self.quiesce(&mut inner);
        inner.snapshot.state = PlayState::Stopped;
        inner.snapshot.current = None;
        "Stopped music.".to_string()
    }

    pub fn next(&self) -> String {
        self.step(|position, len| (position + 1) % len)
    }

    pub fn previous(&self) -> String {
        self.step(|position, len| (position + len - 1) % len)
    }

    fn step(&self, advance: impl FnOnce(usize, usize) -> usize) -> String {
        let tracks = self.library.tracks();
        if tracks.is_empty() {
            return "No songs found.".to_string();
        }
        let position = self.lock().snapshot.position.min(tracks.len() - 1);
        let target = tracks[advance(position, tracks.len())].file_name.clone();
        self.play(Some(&target))
    }

    pub fn status(&self) -> String {
        let mut inner = self.lock();
        if inner.snapshot.state == PlayState::Playing && self.engine.status() == EngineStatus::Idle
        {
            debug!("track finished");
            inner.snapshot.state = PlayState::Stopped;
            inner.snapshot.current = None;
        }

        match (&inner.snapshot.state, &inner.snapshot.current) {
            (PlayState::Playing, Some(t)) => format!("Playing: {}", t.stem()),
            (PlayState::Paused, Some(t)) => format!("Paused: {}", t.stem()),
            _ => "Stopped.".to_string(),
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.lock().snapshot.clone()
    }

    pub fn bar_levels(&self) -> Vec<f32> {
        self.visuals
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .meter
            .levels()
            .to_vec()
    }
}
