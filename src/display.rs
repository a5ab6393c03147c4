//! Monochrome frame buffer and the panel it is pushed to.
//!
//! Drawing goes through `embedded-graphics` onto a [`Frame`]; a [`Panel`]
//! receives finished frames. Only [`HeadlessPanel`] ships here, a hardware
//! driver plugs in through the same trait.

mod frame;
mod panel;

pub use frame::Frame;
pub use panel::{HeadlessPanel, Panel};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::error::DisplayError;

/// A frame plus the panel it ends up on.
pub struct Screen {
    frame: Frame,
    panel: Box<dyn Panel + Send>,
}

impl Screen {
    pub fn new(width: u32, height: u32, panel: Box<dyn Panel + Send>) -> Self {
        Self {
            frame: Frame::new(width, height),
            panel,
        }
    }

    pub fn headless(width: u32, height: u32) -> Self {
        Self::new(width, height, Box::new(HeadlessPanel::new(width, height)))
    }

    #[cfg(test)]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn height(&self) -> u32 {
        self.frame.size().height
    }

    /// Blank the frame. Nothing reaches the panel until [`Screen::flush`].
    pub fn clear(&mut self) {
        self.frame.clear_all();
    }

    /// Clear, then draw one bottom-anchored bar per height.
    pub fn draw_bars(&mut self, heights: &[u32], bar_width: u32, gap: u32) {
        self.frame.clear_all();
        let height = self.height();
        let style = PrimitiveStyle::with_fill(BinaryColor::On);

        for (i, &h) in heights.iter().enumerate() {
            let h = h.min(height);
            if h == 0 {
                continue;
            }
            let x = i as i32 * (bar_width + gap) as i32;
            let y = (height - h) as i32;
            // Frame::draw_iter is infallible.
            let _ = Rectangle::new(Point::new(x, y), Size::new(bar_width, h))
                .into_styled(style)
                .draw(&mut self.frame);
        }
    }

    pub fn flush(&mut self) -> Result<(), DisplayError> {
        self.panel.show(&self.frame)
    }
}
