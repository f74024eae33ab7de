use std::borrow::Cow;

use log::debug;

use crate::{
    Rgb, RgbaBitmap,
    font::{FontResource, GlyphBounds},
    layout::LineLayout,
};

/// Coverage at or above this counts as ink when antialiasing is off.
const INK_THRESHOLD: u8 = 128;

/// How text is drawn into a bitmap.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    pub size: u32,
    pub line_spacing: i32,
    pub antialias: bool,
    pub monospace_digits: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Rgb::WHITE,
            size: 16,
            line_spacing: 0,
            antialias: true,
            monospace_digits: false,
        }
    }
}

/// Turns literal `\n` sequences into real line breaks.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") {
        Cow::Owned(text.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Rasterizes `ch` into a solid `color` tile the size of `bounds`.
pub fn rasterize_glyph<F: FontResource + ?Sized>(
    font: &F,
    ch: char,
    bounds: &GlyphBounds,
    color: Rgb,
    antialias: bool,
) -> RgbaBitmap {
    let mut mask = font.coverage(ch, bounds);
    if !antialias {
        for alpha in &mut mask {
            *alpha = if *alpha >= INK_THRESHOLD { 255 } else { 0 };
        }
    }
    RgbaBitmap::from_coverage(bounds.width(), bounds.height(), color, &mask)
}

/// Renders `text` into a bitmap cropped to the ink of every line.
///
/// Text without any visible glyph yields a 1x1 transparent bitmap.
pub fn build_text_bitmap<F: FontResource + ?Sized>(
    font: &F,
    text: &str,
    style: &TextStyle,
) -> RgbaBitmap {
    let text = normalize_line_breaks(text);
    let layout = LineLayout::new(font, style.size.max(1), style.line_spacing, style.monospace_digits)
        .layout(text.lines());

    let Some(extent) = layout.extent else {
        return RgbaBitmap::new(1, 1);
    };

    let (width, height) = extent.pixel_size();
    let mut canvas = RgbaBitmap::new(width, height);
    for placement in &layout.placements {
        let tile = rasterize_glyph(
            font,
            placement.ch,
            &placement.bounds,
            style.color,
            style.antialias,
        );
        let x = (placement.x - extent.min_x).round_ties_even() as i32;
        let y = (placement.y - extent.min_y).round_ties_even() as i32;
        canvas.alpha_composite(&tile, x, y);
    }

    debug!("text bitmap {width}x{height} from {} glyphs", layout.placements.len());
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::PixelFont;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn style(size: u32) -> TextStyle {
        TextStyle {
            size,
            ..TextStyle::default()
        }
    }

    /// Fixed-width font with uniform partial coverage.
    struct HazeFont(u8);

    impl FontResource for HazeFont {
        fn advance(&self, _c: char) -> Option<f32> {
            Some(3.0)
        }

        fn bounds(&self, c: char) -> Option<GlyphBounds> {
            (c != ' ').then(|| GlyphBounds::new(0, -2, 2, 0))
        }

        fn coverage(&self, _c: char, bounds: &GlyphBounds) -> Vec<u8> {
            vec![self.0; (bounds.width() * bounds.height()) as usize]
        }
    }

    #[test]
    fn invisible_text_is_a_transparent_pixel() {
        let font = PixelFont::new(10);
        for text in ["", "   ", "\u{2603}\u{2603}", "\\n"] {
            let bitmap = build_text_bitmap(&font, text, &style(10));
            assert_eq!((bitmap.width(), bitmap.height()), (1, 1), "{text:?}");
            assert!(bitmap.is_transparent());
        }
    }

    #[test]
    fn clock_text_uses_digit_cells() {
        let font = PixelFont::new(10);
        let style = TextStyle {
            monospace_digits: true,
            ..style(10)
        };
        let bitmap = build_text_bitmap(&font, "12:34", &style);

        assert_eq!((bitmap.width(), bitmap.height()), (26, 7));
        // Stem of the '1'.
        assert!((0..7).all(|y| bitmap.pixel(1, y).unwrap()[3] == 255));
        // Colon dots on rows 1 and 4, gap on row 3.
        assert_eq!(bitmap.pixel(12, 1).unwrap(), Rgb::WHITE.opaque());
        assert_eq!(bitmap.pixel(12, 3).unwrap()[3], 0);
        assert_eq!(bitmap.pixel(13, 4).unwrap(), Rgb::WHITE.opaque());
    }

    #[test]
    fn proportional_digits_are_narrower() {
        let font = PixelFont::new(10);
        let bitmap = build_text_bitmap(&font, "11", &style(10));
        assert_eq!((bitmap.width(), bitmap.height()), (8, 7));

        let mono = TextStyle {
            monospace_digits: true,
            ..style(10)
        };
        let bitmap = build_text_bitmap(&font, "11", &mono);
        assert_eq!(bitmap.width(), 9);
    }

    #[test]
    fn literal_and_real_breaks_both_split_lines() {
        let font = PixelFont::new(10);
        let escaped = build_text_bitmap(&font, "0\\n0", &style(10));
        let real = build_text_bitmap(&font, "0\n0", &style(10));

        assert_eq!(escaped, real);
        assert_eq!((real.width(), real.height()), (5, 14));
    }

    #[test]
    fn building_twice_gives_identical_pixels() {
        let font = PixelFont::new(16);
        let style = TextStyle {
            color: RED,
            line_spacing: -1,
            monospace_digits: true,
            ..style(16)
        };
        let first = build_text_bitmap(&font, "Hi 2024\nok", &style);
        let second = build_text_bitmap(&font, "Hi 2024\nok", &style);
        assert_eq!(first, second);
    }

    #[test]
    fn fill_colour_is_uniform() {
        let font = PixelFont::new(10);
        let style = TextStyle {
            color: RED,
            ..style(10)
        };
        let bitmap = build_text_bitmap(&font, "A8", &style);
        assert!(
            bitmap
                .pixels()
                .iter()
                .filter(|p| p[3] != 0)
                .all(|p| p[..3] == [255, 0, 0])
        );
    }

    #[test]
    fn antialias_off_binarizes_coverage() {
        let soft = TextStyle {
            antialias: true,
            ..style(10)
        };
        let hard = TextStyle {
            antialias: false,
            ..style(10)
        };

        let bitmap = build_text_bitmap(&HazeFont(200), "x", &soft);
        assert_eq!(bitmap.pixel(0, 0).unwrap()[3], 200);
        let bitmap = build_text_bitmap(&HazeFont(200), "x", &hard);
        assert_eq!(bitmap.pixel(0, 0).unwrap()[3], 255);
        let bitmap = build_text_bitmap(&HazeFont(100), "x", &hard);
        assert!(bitmap.is_transparent());
    }

    #[test]
    fn spaces_keep_their_advance() {
        let bitmap = build_text_bitmap(&HazeFont(255), "x x", &style(10));
        assert_eq!((bitmap.width(), bitmap.height()), (8, 2));
        assert_eq!(bitmap.pixel(4, 0).unwrap()[3], 0);
        assert_eq!(bitmap.pixel(6, 0).unwrap()[3], 255);
    }
}
