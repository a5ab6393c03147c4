use std::time::Duration;

use crate::audio::MonoSamples;
use crate::config::VisualizerSettings;

/// Per-bar amplitude levels in `[0, 1]` with peak decay.
#[derive(Debug, Clone, PartialEq)]
pub struct BarMeter {
    levels: Vec<f32>,
    decay: f32,
    gain: f32,
    window: Duration,
    bar_width: u32,
    bar_gap: u32,
}

impl BarMeter {
    /// As many bars as fit across `width` pixels.
    pub fn new(width: u32, settings: &VisualizerSettings) -> Self {
        let slot = (settings.bar_width + settings.bar_gap).max(1);
        Self {
            levels: vec![0.0; (width / slot) as usize],
            decay: settings.decay,
            gain: settings.gain,
            window: Duration::from_millis(settings.window_ms),
            bar_width: settings.bar_width,
            bar_gap: settings.bar_gap,
        }
    }

    pub fn bar_count(&self) -> usize {
        self.levels.len()
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn bar_gap(&self) -> u32 {
        self.bar_gap
    }

    pub fn levels(&self) -> &[f32] {
        &self.levels
    }

    pub fn reset(&mut self) {
        self.levels.fill(0.0);
    }

    /// Fold the samples under `position` into the levels.
    ///
    /// Returns `false` and leaves the levels alone when the window is empty,
    /// i.e. `position` is past the end of the decoded audio.
    pub fn tick(&mut self, samples: &MonoSamples, position: Duration) -> bool {
        let bars = self.bar_count();
        if bars == 0 {
            return false;
        }

        let wanted = samples.offset_for(self.window).max(bars);
        let window = samples.window(position, wanted);
        if window.is_empty() {
            return false;
        }

        let len = window.len();
        for (i, level) in self.levels.iter_mut().enumerate() {
            let segment = &window[i * len / bars..(i + 1) * len / bars];
            let fresh = if segment.is_empty() {
                0.0
            } else {
                let sum: f32 = segment.iter().map(|s| s.abs()).sum();
                (sum / segment.len() as f32).clamp(0.0, 1.0)
            };
            *level = fresh.max(*level * self.decay);
        }
        true
    }

    pub fn heights(&self, height: u32) -> Vec<u32> {
        bar_heights(&self.levels, height, self.gain)
    }
}

/// `level * height * gain` per bar, before any capping.
pub(super) fn scaled_heights(levels: &[f32], height: u32, gain: f32) -> Vec<f32> {
    levels
        .iter()
        .map(|l| l.clamp(0.0, 1.0) * height as f32 * gain)
        .collect()
}

/// Pixel heights, capped at the panel height.
pub fn bar_heights(levels: &[f32], height: u32, gain: f32) -> Vec<u32> {
    scaled_heights(levels, height, gain)
        .into_iter()
        .map(|h| (h as u32).min(height))
        .collect()
}
