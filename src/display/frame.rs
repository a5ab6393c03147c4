use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// 1-bit frame buffer, row-major, one `bool` per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
        }
    }

    pub fn clear_all(&mut self) {
        self.pixels.fill(false);
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[(y * self.width + x) as usize]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Pack into SSD130x page layout: one byte per column per 8-row page,
    /// least significant bit on top.
    pub fn to_pages(&self) -> Vec<u8> {
        let pages = self.height.div_ceil(8);
        let mut out = vec![0u8; (pages * self.width) as usize];

        for y in 0..self.height {
            let page = y / 8;
            let bit = 1u8 << (y % 8);
            for x in 0..self.width {
                if self.get(x, y) {
                    out[(page * self.width + x) as usize] |= bit;
                }
            }
        }
        out
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            self.pixels[(y * self.width + x) as usize] = color.is_on();
        }
        Ok(())
    }
}
