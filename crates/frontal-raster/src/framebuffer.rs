//! Off-screen RGBA pixel buffer.

use crate::error::{RasterError, Result};
use crate::BACKGROUND;

/// Upper bound on total pixels per buffer (16384 x 16384).
const MAX_PIXELS: usize = 16384 * 16384;

/// An off-screen RGBA8 image buffer, row-major, top row first.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a buffer cleared to the background color.
    ///
    /// Fails with [`RasterError::BackendUnavailable`] when the requested
    /// dimensions cannot back an off-screen context (zero-sized or beyond
    /// the allocation cap).
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::BackendUnavailable(format!(
                "cannot create {}x{} off-screen buffer",
                width, height
            )));
        }
        let pixels = width as usize * height as usize;
        if pixels > MAX_PIXELS {
            return Err(RasterError::BackendUnavailable(format!(
                "{}x{} off-screen buffer exceeds allocation cap",
                width, height
            )));
        }
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&BACKGROUND);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn num_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw RGBA bytes, 4 per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Overwrite the RGBA value at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&rgba);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_background() {
        let fb = Framebuffer::new(4, 3).unwrap();
        assert_eq!(fb.num_pixels(), 12);
        assert_eq!(fb.pixels().len(), 48);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(fb.pixel(x, y), BACKGROUND);
            }
        }
    }

    #[test]
    fn test_set_pixel() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(2, 1, [0, 0, 0, 255]);
        assert_eq!(fb.pixel(2, 1), [0, 0, 0, 255]);
        assert_eq!(fb.pixel(1, 2), BACKGROUND);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Framebuffer::new(0, 10),
            Err(RasterError::BackendUnavailable(_))
        ));
        assert!(matches!(
            Framebuffer::new(10, 0),
            Err(RasterError::BackendUnavailable(_))
        ));
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(matches!(
            Framebuffer::new(100_000, 100_000),
            Err(RasterError::BackendUnavailable(_))
        ));
    }
}
