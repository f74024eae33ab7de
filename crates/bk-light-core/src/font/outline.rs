//! TrueType/OpenType fonts rasterized with `fontdue`.

use fontdue::{Font, FontSettings, Metrics};

use super::{FontError, FontResource, GlyphBounds, LineMetrics};

/// Outline font fixed to one pixel size.
pub struct OutlineFont {
    font: Font,
    px: f32,
}

impl OutlineFont {
    pub fn from_bytes(data: &[u8], size: u32) -> Result<Self, FontError> {
        let px = size.max(1) as f32;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(FontError::Parse)?;
        Ok(Self { font, px })
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    /// Metrics for glyphs the font actually contains.
    fn metrics(&self, c: char) -> Option<Metrics> {
        if self.font.lookup_glyph_index(c) == 0 {
            return None;
        }
        Some(self.font.metrics(c, self.px))
    }
}

fn ink_bounds(m: &Metrics) -> Option<GlyphBounds> {
    if m.width == 0 || m.height == 0 {
        return None;
    }
    let (width, height) = (m.width as i32, m.height as i32);
    Some(GlyphBounds::new(
        m.xmin,
        -(m.ymin + height),
        m.xmin + width,
        -m.ymin,
    ))
}

impl FontResource for OutlineFont {
    fn advance(&self, c: char) -> Option<f32> {
        self.metrics(c)
            .map(|m| m.advance_width)
            .filter(|&advance| advance > 0.0)
    }

    fn bounds(&self, c: char) -> Option<GlyphBounds> {
        self.metrics(c).as_ref().and_then(ink_bounds)
    }

    fn line_metrics(&self) -> LineMetrics {
        match self.font.horizontal_line_metrics(self.px) {
            Some(lm) => LineMetrics {
                ascent: lm.ascent.round() as i32,
                descent: (-lm.descent).round() as i32,
            },
            None => LineMetrics::default(),
        }
    }

    fn coverage(&self, c: char, bounds: &GlyphBounds) -> Vec<u8> {
        let (width, height) = (bounds.width() as usize, bounds.height() as usize);
        let mut mask = vec![0u8; width * height];
        if self.font.lookup_glyph_index(c) == 0 {
            return mask;
        }

        let (metrics, bitmap) = self.font.rasterize(c, self.px);
        let Some(ink) = ink_bounds(&metrics) else {
            return mask;
        };

        // Raster origin relative to the requested tile.
        let dx = ink.left - bounds.left;
        let dy = ink.top - bounds.top;
        for gy in 0..metrics.height {
            let ty = gy as i32 + dy;
            if ty < 0 || ty >= height as i32 {
                continue;
            }
            for gx in 0..metrics.width {
                let tx = gx as i32 + dx;
                if tx < 0 || tx >= width as i32 {
                    continue;
                }
                mask[ty as usize * width + tx as usize] = bitmap[gy * metrics.width + gx];
            }
        }
        mask
    }
}
