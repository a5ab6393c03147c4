use super::samples::downmix;
use super::*;
use crate::config::AudioSettings;
use std::time::{Duration, Instant};

fn silent_player() -> AudioPlayer {
    AudioPlayer::new(&AudioSettings {
        force_silent: true,
        load_timeout_ms: 2000,
    })
}

fn wait_for(player: &AudioPlayer, want: EngineStatus) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if player.status() == want {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn downmix_averages_frames() {
    let stereo = vec![1.0, 0.0, -0.5, -0.5, 0.25, 0.75, 0.9];
    assert_eq!(downmix(stereo, 2), vec![0.5, -0.5, 0.5]);
    assert_eq!(downmix(vec![0.1, 0.2], 1), vec![0.1, 0.2]);
    assert_eq!(downmix(vec![0.1, 0.2], 0), vec![0.1, 0.2]);
}

#[test]
fn window_maps_position_to_offset() {
    let samples = MonoSamples {
        samples: (0..100).map(|i| i as f32).collect(),
        sample_rate: 10,
    };
    assert_eq!(samples.offset_for(Duration::from_secs(2)), 20);
    assert_eq!(samples.window(Duration::from_secs(2), 3), &[20.0, 21.0, 22.0]);
    assert_eq!(samples.window(Duration::from_millis(9_800), 5), &[98.0, 99.0]);
    assert!(samples.window(Duration::from_secs(60), 5).is_empty());
}

#[test]
fn decoder_samples_reports_open_errors() {
    let err = DecoderSamples
        .load(std::path::Path::new("/nonexistent/track.mp3"))
        .unwrap_err();
    assert!(matches!(err, crate::error::AudioError::Open { .. }));
}

#[test]
fn silent_player_rejects_undecodable_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.mp3");
    std::fs::write(&path, b"definitely not audio").unwrap();

    let player = silent_player();
    let err = player.play(&path).unwrap_err();
    assert!(matches!(err, crate::error::AudioError::Decode { .. }));
    assert_eq!(player.status(), EngineStatus::Idle);
    player.shutdown();
}

#[test]
fn silent_player_ignores_pause_when_nothing_is_loaded() {
    let player = silent_player();
    player.pause();
    player.resume();
    player.stop();
    assert!(wait_for(&player, EngineStatus::Idle));
    assert_eq!(player.position(), Duration::ZERO);
    player.shutdown();
}

#[test]
fn play_after_shutdown_is_disconnected() {
    let player = silent_player();
    player.shutdown();
    let err = player.play(std::path::Path::new("/tmp/x.mp3")).unwrap_err();
    assert!(matches!(err, crate::error::AudioError::Disconnected));
}
