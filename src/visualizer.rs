//! Bar visualizer: decayed per-bar levels computed from decoded samples and
//! drawn onto the [`Screen`](crate::display::Screen).

mod levels;
mod task;

pub use levels::{BarMeter, bar_heights};
pub use task::{SharedVisuals, VisualizerTask};

use tracing::warn;

use crate::config::{DisplaySettings, VisualizerSettings};
use crate::display::Screen;

/// Bar levels and the screen they are drawn on, locked together so a frame
/// never mixes two tracks.
pub struct Visuals {
    pub meter: BarMeter,
    pub screen: Screen,
}

impl Visuals {
    pub fn new(meter: BarMeter, screen: Screen) -> Self {
        Self { meter, screen }
    }

    pub fn headless(display: &DisplaySettings, settings: &VisualizerSettings) -> Self {
        Self::new(
            BarMeter::new(display.width, settings),
            Screen::headless(display.width, display.height),
        )
    }

    /// Draw the current levels and push the frame.
    pub fn redraw(&mut self) -> Result<(), crate::error::DisplayError> {
        let heights = self.meter.heights(self.screen.height());
        self.screen
            .draw_bars(&heights, self.meter.bar_width(), self.meter.bar_gap());
        self.screen.flush()
    }

    /// Zero the levels and blank the panel.
    pub fn reset(&mut self) {
        self.meter.reset();
        self.screen.clear();
        if let Err(e) = self.screen.flush() {
            warn!("failed to clear display: {e}");
        }
    }
}
