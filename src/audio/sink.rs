//! Opening and decoding files, and wrapping a decoded file in a `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::AudioError;

pub(super) fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// A started track. Without an output device there is no sink and the
/// position comes from the wall clock.
pub(super) struct Loaded {
    sink: Option<Sink>,
    total: Option<Duration>,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Loaded {
    pub(super) fn start(output: Option<&OutputStream>, path: &Path) -> Result<Self, AudioError> {
        let source = open_decoder(path)?;
        let total = source.total_duration();

        let sink = output.map(|stream| {
            let sink = Sink::connect_new(stream.mixer());
            sink.append(source);
            sink.play();
            sink
        });

        Ok(Self {
            sink,
            total,
            started_at: Some(Instant::now()),
            accumulated: Duration::ZERO,
        })
    }

    pub(super) fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    pub(super) fn resume(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub(super) fn is_paused(&self) -> bool {
        self.started_at.is_none()
    }

    pub(super) fn position(&self) -> Duration {
        match self.sink.as_ref() {
            Some(s) => s.get_pos(),
            None => self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed()),
        }
    }

    /// True once the whole track has been played.
    pub(super) fn finished(&self) -> bool {
        if self.is_paused() {
            return false;
        }
        match self.sink.as_ref() {
            Some(s) => s.empty(),
            // Silent clock with unknown length keeps "playing" until stopped.
            None => self.total.is_some_and(|t| self.position() >= t),
        }
    }

    pub(super) fn stop(self) {
        if let Some(s) = self.sink {
            s.stop();
        }
    }
}
