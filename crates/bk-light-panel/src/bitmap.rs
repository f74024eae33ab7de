//! Straight-alpha RGBA buffer used for rendered text.

use alloc::{vec, vec::Vec};

use crate::Rgb;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// RGBA bitmap, row-major, never smaller than 1x1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RgbaBitmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl RgbaBitmap {
    /// Creates a fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Solid `color` tile whose alpha comes from a coverage mask.
    ///
    /// `mask` is row-major with one byte per pixel; missing bytes count as
    /// zero coverage. Uncovered pixels stay fully transparent.
    pub fn from_coverage(width: u32, height: u32, color: Rgb, mask: &[u8]) -> Self {
        let mut tile = Self::new(width, height);
        for (pixel, &alpha) in tile.pixels.iter_mut().zip(mask.iter()) {
            if alpha != 0 {
                *pixel = [color.r, color.g, color.b, alpha];
            }
        }
        tile
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reads a pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Whether every pixel has zero alpha.
    pub fn is_transparent(&self) -> bool {
        self.pixels.iter().all(|p| p[3] == 0)
    }

    /// Composites `src` over this bitmap with its top-left at `(x, y)`.
    ///
    /// Pixels falling outside this bitmap are dropped.
    pub fn alpha_composite(&mut self, src: &RgbaBitmap, x: i32, y: i32) {
        for sy in 0..src.height {
            let dy = y as i64 + sy as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x as i64 + sx as i64;
                if dx < 0 || dx >= self.width as i64 {
                    continue;
                }

                let s = src.pixels[src.index(sx, sy)];
                if s[3] == 0 {
                    continue;
                }
                let idx = self.index(dx as u32, dy as u32);
                self.pixels[idx] = over(s, self.pixels[idx]);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Porter-Duff "over" on straight (non-premultiplied) alpha.
fn over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    let da = dst[3] as u32;
    if sa == 255 || da == 0 {
        return src;
    }

    let dst_weight = da * (255 - sa);
    let out_a = sa * 255 + dst_weight;
    if out_a == 0 {
        return TRANSPARENT;
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let num = src[c] as u32 * sa * 255 + dst[c] as u32 * dst_weight;
        out[c] = ((num + out_a / 2) / out_a) as u8;
    }
    out[3] = ((out_a + 127) / 255) as u8;
    out
}
