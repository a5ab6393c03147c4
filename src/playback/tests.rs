use super::*;
use crate::audio::{AudioEngine, EngineStatus, MonoSamples, SampleLoader};
use crate::config::{DisplaySettings, LibrarySettings, VisualizerSettings};
use crate::error::AudioError;
use crate::library::LibraryIndex;
use crate::visualizer::{SharedVisuals, Visuals};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, Weak};
use std::time::{Duration, Instant};

#[derive(Default)]
struct FakeEngine {
    status: Mutex<EngineStatus>,
    played: Mutex<Vec<PathBuf>>,
    fail_loads: bool,
    /// Transport calls in order, e.g. `stop`, `play a.mp3`.
    events: Mutex<Vec<String>>,
    /// Whether bars and panel were blank when each load started.
    blank_at_load: Mutex<Vec<bool>>,
    visuals: Mutex<Weak<Mutex<Visuals>>>,
}

impl FakeEngine {
    fn played_names(&self) -> Vec<String> {
        self.played
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn set(&self, status: EngineStatus) {
        *self.status.lock().unwrap() = status;
    }
}

impl AudioEngine for FakeEngine {
    fn play(&self, path: &Path) -> Result<(), AudioError> {
        if self.fail_loads {
            return Err(AudioError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::InvalidData),
            });
        }
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.events.lock().unwrap().push(format!("play {name}"));
        if let Some(visuals) = self.visuals.lock().unwrap().upgrade() {
            let v = visuals.lock().unwrap();
            let blank = v.meter.levels().iter().all(|&l| l == 0.0)
                && v.screen.frame().lit_count() == 0;
            self.blank_at_load.lock().unwrap().push(blank);
        }
        self.played.lock().unwrap().push(path.to_path_buf());
        self.set(EngineStatus::Playing);
        Ok(())
    }
    fn pause(&self) {
        let mut s = self.status.lock().unwrap();
        if *s == EngineStatus::Playing {
            *s = EngineStatus::Paused;
        }
    }
    fn resume(&self) {
        let mut s = self.status.lock().unwrap();
        if *s == EngineStatus::Paused {
            *s = EngineStatus::Playing;
        }
    }
    fn stop(&self) {
        self.events.lock().unwrap().push("stop".to_string());
        self.set(EngineStatus::Idle);
    }
    fn status(&self) -> EngineStatus {
        *self.status.lock().unwrap()
    }
    fn position(&self) -> Duration {
        Duration::ZERO
    }
}

struct LoudSamples;

impl SampleLoader for LoudSamples {
    fn load(&self, _path: &Path) -> Result<MonoSamples, AudioError> {
        Ok(MonoSamples {
            samples: vec![0.7; 50_000],
            sample_rate: 1000,
        })
    }
}

struct Fixture {
    _dir: tempfile::TempDir,
    engine: Arc<FakeEngine>,
    visuals: SharedVisuals,
    controller: PlaybackController,
}

fn fixture_with(files: &[&str], engine: FakeEngine) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    for f in files {
        std::fs::write(dir.path().join(f), b"not really audio").unwrap();
    }
    let library = Arc::new(LibraryIndex::new(dir.path(), LibrarySettings::default()));
    let engine = Arc::new(engine);
    let visuals: SharedVisuals = Arc::new(Mutex::new(Visuals::headless(
        &DisplaySettings::default(),
        &VisualizerSettings::default(),
    )));
    *engine.visuals.lock().unwrap() = Arc::downgrade(&visuals);
    let controller = PlaybackController::new(
        engine.clone(),
        library,
        Arc::new(LoudSamples),
        visuals.clone(),
        Duration::from_millis(5),
    );
    Fixture {
        _dir: dir,
        engine,
        visuals,
        controller,
    }
}

fn fixture(files: &[&str]) -> Fixture {
    fixture_with(files, FakeEngine::default())
}

#[test]
fn explicit_selection_plays_exactly_that_track() {
    let fx = fixture(&["a.mp3", "b.mp3", "c.mp3"]);
    assert_eq!(fx.controller.play(Some("b.mp3")), "Playing: b");
    assert_eq!(fx.engine.played_names(), vec!["b.mp3"]);

    let snap = fx.controller.snapshot();
    assert_eq!(snap.state, PlayState::Playing);
    assert_eq!(snap.position, 1);
    assert_eq!(snap.current.unwrap().file_name, "b.mp3");
}

#[test]
fn random_selection_stays_within_the_library() {
    let fx = fixture(&["a.mp3", "b.mp3", "c.mp3"]);
    for _ in 0..20 {
        let msg = fx.controller.play(None);
        assert!(["Playing: a", "Playing: b", "Playing: c"].contains(&msg.as_str()));
    }
    // Unknown names fall back to a random pick as well.
    assert!(fx.controller.play(Some("zzz.mp3")).starts_with("Playing: "));
}

#[test]
fn next_wraps_around_the_library() {
    let fx = fixture(&["a.mp3", "b.mp3", "c.mp3"]);
    fx.controller.play(Some("c.mp3"));
    assert_eq!(fx.controller.snapshot().position, 2);

    assert_eq!(fx.controller.next(), "Playing: a");
    assert_eq!(fx.controller.snapshot().position, 0);
    assert_eq!(fx.engine.played_names().last().unwrap(), "a.mp3");
}

#[test]
fn previous_wraps_to_the_last_track() {
    let fx = fixture(&["a.mp3", "b.mp3", "c.mp3"]);
    fx.controller.play(Some("a.mp3"));
    assert_eq!(fx.controller.previous(), "Playing: c");
    assert_eq!(fx.controller.previous(), "Playing: b");
}

#[test]
fn empty_library_is_reported_not_fatal() {
    let fx = fixture(&[]);
    assert!(fx.controller.play(None).starts_with("No music files in "));
    assert_eq!(fx.controller.next(), "No songs found.");
    assert_eq!(fx.controller.previous(), "No songs found.");
    assert_eq!(fx.controller.status(), "Stopped.");
}

#[test]
fn load_failure_leaves_controller_stopped() {
    let fx = fixture_with(
        &["a.mp3"],
        FakeEngine {
            fail_loads: true,
            ..FakeEngine::default()
        },
    );
    let msg = fx.controller.play(Some("a.mp3"));
    assert!(msg.starts_with("Could not play a.mp3"), "{msg}");
    assert_eq!(fx.controller.snapshot().state, PlayState::Stopped);
    assert_eq!(fx.controller.status(), "Stopped.");
}

#[test]
fn pause_and_resume_answer_for_idle_states() {
    let fx = fixture(&["a.mp3"]);
    assert_eq!(fx.controller.pause(), "Nothing playing.");
    assert_eq!(fx.controller.resume(), "Nothing to resume.");

    fx.controller.play(Some("a.mp3"));
    assert_eq!(fx.controller.resume(), "Nothing to resume.");
    assert_eq!(fx.controller.pause(), "Paused music.");
    assert_eq!(fx.controller.status(), "Paused: a");
    assert_eq!(fx.controller.pause(), "Nothing playing.");
    assert_eq!(fx.controller.resume(), "Resumed music.");
    assert_eq!(fx.controller.status(), "Playing: a");
}

#[test]
fn stop_zeroes_bar_levels() {
    let fx = fixture(&["a.mp3"]);
    fx.controller.play(Some("a.mp3"));

    let deadline = Instant::now() + Duration::from_secs(2);
    while fx.controller.bar_levels().iter().all(|&l| l == 0.0) && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(fx.controller.bar_levels().iter().any(|&l| l > 0.0));

    assert_eq!(fx.controller.stop(), "Stopped music.");
    assert!(fx.controller.bar_levels().iter().all(|&l| l == 0.0));
    assert_eq!(fx.visuals.lock().unwrap().screen.frame().lit_count(), 0);
    assert_eq!(fx.controller.status(), "Stopped.");
}

#[test]
fn finished_track_reports_stopped() {
    let fx = fixture(&["a.mp3"]);
    fx.controller.play(Some("a.mp3"));
    assert_eq!(fx.controller.status(), "Playing: a");

    fx.engine.set(EngineStatus::Idle);
    assert_eq!(fx.controller.status(), "Stopped.");
    assert_eq!(fx.controller.snapshot().state, PlayState::Stopped);
}

fn wait_for_levels(controller: &PlaybackController) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if controller.bar_levels().iter().any(|&l| l > 0.0) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn starting_a_track_tears_down_the_previous_one_first() {
    let fx = fixture(&["a.mp3", "b.mp3"]);
    fx.controller.play(Some("a.mp3"));
    assert!(wait_for_levels(&fx.controller));

    assert_eq!(fx.controller.play(Some("b.mp3")), "Playing: b");
    assert_eq!(
        fx.engine.events(),
        vec!["stop", "play a.mp3", "stop", "play b.mp3"]
    );
    assert_eq!(*fx.engine.blank_at_load.lock().unwrap(), vec![true, true]);

    // Fixture, controller and b's visualizer thread; a's thread has exited.
    let deadline = Instant::now() + Duration::from_secs(2);
    while Arc::strong_count(&fx.visuals) != 3 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(Arc::strong_count(&fx.visuals), 3);
}

#[test]
fn pause_after_stop_does_not_trust_a_stale_engine_status() {
    let fx = fixture(&["a.mp3"]);
    fx.controller.play(Some("a.mp3"));
    fx.controller.stop();
    // The audio thread publishes asynchronously and may still say Playing.
    fx.engine.set(EngineStatus::Playing);

    assert_eq!(fx.controller.pause(), "Nothing playing.");
    assert_eq!(fx.controller.resume(), "Nothing to resume.");
    assert_eq!(fx.controller.snapshot().state, PlayState::Stopped);
}
