//! Opaque RGB frame matching the panel resolution.

use alloc::{vec, vec::Vec};

use crate::{CanvasSize, Rgb, RgbaBitmap, lerp_u8};

/// Opaque RGB canvas handed to a transport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RgbFrame {
    size: CanvasSize,
    pixels: Vec<Rgb>,
}

impl RgbFrame {
    /// Creates a frame filled with `fill`.
    pub fn new(size: CanvasSize, fill: Rgb) -> Self {
        Self {
            size,
            pixels: vec![fill; size.area()],
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Fills the whole frame with one colour.
    pub fn clear(&mut self, fill: Rgb) {
        self.pixels.fill(fill);
    }

    /// Reads a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Sets a pixel.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> bool {
        if x >= self.size.width || y >= self.size.height {
            return false;
        }
        let idx = self.index(x, y);
        self.pixels[idx] = color;
        true
    }

    /// Pastes `bitmap` at `(x, y)` using its own alpha channel as the mask.
    ///
    /// Out-of-bounds pixels are dropped.
    pub fn paste_masked(&mut self, bitmap: &RgbaBitmap, x: i32, y: i32) {
        let width = bitmap.width();
        for (i, src) in bitmap.pixels().iter().enumerate() {
            let alpha = src[3];
            if alpha == 0 {
                continue;
            }

            let dx = x as i64 + (i as u32 % width) as i64;
            let dy = y as i64 + (i as u32 / width) as i64;
            let Some(idx) = self.signed_index(dx, dy) else {
                continue;
            };

            let dst = &mut self.pixels[idx];
            *dst = Rgb::new(
                lerp_u8(dst.r, src[0], alpha),
                lerp_u8(dst.g, src[1], alpha),
                lerp_u8(dst.b, src[2], alpha),
            );
        }
    }

    /// Copies `src` onto this frame with its top-left at `(x, y)`, clipped.
    pub fn blit(&mut self, src: &RgbFrame, x: i32, y: i32) {
        for sy in 0..src.height() {
            let dy = y as i64 + sy as i64;
            if dy < 0 || dy >= self.size.height as i64 {
                continue;
            }

            let first = (-(x as i64)).max(0) as u32;
            let last = (self.size.width as i64 - x as i64).clamp(0, src.width() as i64) as u32;
            if first >= last {
                continue;
            }

            let src_row = src.index(0, sy);
            let dst_row = self.index(0, dy as u32);
            let dst_start = (x as i64 + first as i64) as usize;
            let len = (last - first) as usize;
            self.pixels[dst_row + dst_start..dst_row + dst_start + len].copy_from_slice(
                &src.pixels[src_row + first as usize..src_row + first as usize + len],
            );
        }
    }

    /// Row-major RGB888 payload.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }

    fn signed_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width as i64 || y >= self.size.height as i64 {
            return None;
        }
        Some(self.index(x as u32, y as u32))
    }
}
