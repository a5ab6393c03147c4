//! Fully decoded, channel-averaged sample data for the visualizer.

use std::path::Path;
use std::time::Duration;

use rodio::Source;

use crate::error::AudioError;

use super::sink::open_decoder;

#[derive(Debug, Clone, PartialEq)]
pub struct MonoSamples {
    /// One value per frame, roughly in [-1, 1].
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl MonoSamples {
    /// Sample index that corresponds to `position` into the track.
    pub fn offset_for(&self, position: Duration) -> usize {
        (position.as_secs_f64() * f64::from(self.sample_rate)) as usize
    }

    /// Up to `len` samples starting at `position`; empty past the end.
    pub fn window(&self, position: Duration, len: usize) -> &[f32] {
        let start = self.offset_for(position).min(self.samples.len());
        let end = start.saturating_add(len).min(self.samples.len());
        &self.samples[start..end]
    }
}

/// Produces the samples a visualizer task runs on.
pub trait SampleLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<MonoSamples, AudioError>;
}

/// Decodes the whole file with `rodio`'s decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecoderSamples;

impl SampleLoader for DecoderSamples {
    fn load(&self, path: &Path) -> Result<MonoSamples, AudioError> {
        let source = open_decoder(path)?;
        let channels = usize::from(u16::from(source.channels()).max(1));
        let sample_rate = u32::from(source.sample_rate());

        Ok(MonoSamples {
            samples: downmix(source, channels),
            sample_rate,
        })
    }
}

/// Average interleaved frames of `channels` samples into one value each.
/// A trailing partial frame is dropped.
pub(super) fn downmix(interleaved: impl IntoIterator<Item = f32>, channels: usize) -> Vec<f32> {
    let channels = channels.max(1);
    let mut mono = Vec::new();
    let mut sum = 0.0f32;
    let mut n = 0usize;

    for s in interleaved {
        sum += s;
        n += 1;
        if n == channels {
            mono.push(sum / channels as f32);
            sum = 0.0;
            n = 0;
        }
    }
    mono
}
