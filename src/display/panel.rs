use tracing::trace;

use crate::error::DisplayError;

use super::frame::Frame;

/// Whatever finally shows a frame: an OLED driver, a test double, or nothing.
pub trait Panel {
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError>;
}

/// Panel that only checks the frame size and logs each push.
#[derive(Debug, Clone)]
pub struct HeadlessPanel {
    width: u32,
    height: u32,
    pushed: u64,
}

impl HeadlessPanel {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pushed: 0,
        }
    }
}

impl Panel for HeadlessPanel {
    fn show(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        use embedded_graphics::prelude::OriginDimensions;

        let size = frame.size();
        if size.width != self.width || size.height != self.height {
            return Err(DisplayError::SizeMismatch {
                got_w: size.width,
                got_h: size.height,
                want_w: self.width,
                want_h: self.height,
            });
        }
        self.pushed += 1;
        trace!(
            frame = self.pushed,
            lit = frame.lit_count(),
            bytes = frame.to_pages().len(),
            "headless panel frame"
        );
        Ok(())
    }
}
