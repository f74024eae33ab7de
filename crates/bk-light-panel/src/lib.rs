#![cfg_attr(not(test), no_std)]

//! Pixel buffers for BK-Light LED matrix panels.
//!
//! Frames sent to a panel are opaque RGB canvases ([`RgbFrame`]); rendered
//! text lives in straight-alpha RGBA buffers ([`RgbaBitmap`]) until it is
//! pasted onto a frame.

extern crate alloc;

mod bitmap;
mod framebuffer;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use bitmap::RgbaBitmap;
pub use framebuffer::RgbFrame;

/// Edge length of one BK-Light tile in pixels.
pub const PANEL_EDGE: u32 = 32;

/// Canvas of a single tile.
pub const PANEL_SIZE: CanvasSize = CanvasSize::new(PANEL_EDGE, PANEL_EDGE);

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the colour with a full-opacity alpha byte appended.
    pub const fn opaque(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Pixel dimensions of a display canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Creates a canvas size. Zero dimensions are raised to one pixel.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Number of pixels covered by the canvas.
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        PANEL_SIZE
    }
}

/// Blends `src` over `dst` with an 8-bit weight, rounding to nearest.
#[inline]
pub(crate) fn lerp_u8(dst: u8, src: u8, weight: u8) -> u8 {
    let w = weight as u32;
    ((src as u32 * w + dst as u32 * (255 - w) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_canvas_dimensions_are_raised() {
        let size = CanvasSize::new(0, 16);
        assert_eq!(size, CanvasSize::new(1, 16));
        assert_eq!(size.area(), 16);
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        assert_eq!(lerp_u8(10, 200, 0), 10);
        assert_eq!(lerp_u8(10, 200, 255), 200);
        assert_eq!(lerp_u8(0, 255, 128), 128);
    }
}
