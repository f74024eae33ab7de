//! Glyph metric resolution with fixed fallbacks.
//!
//! Fonts are allowed to be vague: an advance may be missing or zero and the
//! line metrics may be all zeros. Everything here turns that into numbers
//! the layout engine can do arithmetic on.

use log::debug;

use crate::font::FontResource;

/// Advance used when neither the font nor the rendered extent give one.
pub const DEFAULT_ADVANCE: f32 = 1.0;

/// Glyph whose ink box stands in for missing line metrics.
pub const REFERENCE_GLYPH: char = '0';

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Resolved vertical metrics of one font at one size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub line_height: i32,
}

/// Advance of `c`: native, then measured extent, then [`DEFAULT_ADVANCE`].
pub fn resolve_advance<F: FontResource + ?Sized>(font: &F, c: char) -> f32 {
    if let Some(advance) = font.advance(c).filter(|&a| a > 0.0) {
        return advance;
    }

    let measured = font.measured_width(c);
    if measured > 0.0 {
        return measured;
    }

    DEFAULT_ADVANCE
}

/// Line metrics of `font`, derived from [`REFERENCE_GLYPH`] when the font
/// reports none. The line height falls back to `size`.
pub fn resolve_vertical<F: FontResource + ?Sized>(font: &F, size: u32) -> VerticalMetrics {
    let reported = font.line_metrics();
    let (ascent, descent) = if reported.ascent == 0 && reported.descent == 0 {
        match font.bounds(REFERENCE_GLYPH) {
            Some(bounds) => ((-bounds.top).max(0), bounds.bottom.max(0)),
            None => (0, 0),
        }
    } else {
        (reported.ascent, reported.descent)
    };

    let line_height = if ascent + descent > 0 {
        ascent + descent
    } else {
        size.max(1) as i32
    };

    debug!("vertical metrics: ascent={ascent} descent={descent} line_height={line_height}");
    VerticalMetrics {
        ascent,
        descent,
        line_height,
    }
}

/// Widest resolved advance among the ten decimal digits.
pub fn max_digit_advance<F: FontResource + ?Sized>(font: &F) -> f32 {
    DIGITS
        .iter()
        .map(|&d| resolve_advance(font, d))
        .fold(0.0, f32::max)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{GlyphBounds, LineMetrics, PixelFont};

    /// Font whose answers are fixed per test.
    struct StubFont {
        advance: Option<f32>,
        bounds: Option<GlyphBounds>,
        line: LineMetrics,
    }

    impl FontResource for StubFont {
        fn advance(&self, _c: char) -> Option<f32> {
            self.advance
        }

        fn bounds(&self, _c: char) -> Option<GlyphBounds> {
            self.bounds
        }

        fn line_metrics(&self) -> LineMetrics {
            self.line
        }

        fn coverage(&self, _c: char, bounds: &GlyphBounds) -> Vec<u8> {
            vec![0; (bounds.width() * bounds.height()) as usize]
        }
    }

    fn stub(advance: Option<f32>, bounds: Option<GlyphBounds>) -> StubFont {
        StubFont {
            advance,
            bounds,
            line: LineMetrics::default(),
        }
    }

    #[test]
    fn native_advance_wins_when_positive() {
        let font = stub(Some(7.5), Some(GlyphBounds::new(0, -5, 3, 0)));
        assert_eq!(resolve_advance(&font, 'x'), 7.5);
    }

    #[test]
    fn non_positive_advance_falls_back_to_measured_width() {
        let font = stub(Some(0.0), Some(GlyphBounds::new(1, -5, 5, 0)));
        assert_eq!(resolve_advance(&font, 'x'), 4.0);

        let font = stub(Some(-2.0), Some(GlyphBounds::new(0, -5, 2, 0)));
        assert_eq!(resolve_advance(&font, 'x'), 2.0);
    }

    #[test]
    fn missing_everything_defaults_to_one_pixel() {
        let font = stub(None, None);
        assert_eq!(resolve_advance(&font, 'x'), DEFAULT_ADVANCE);
    }

    #[test]
    fn reported_line_metrics_are_used() {
        let font = StubFont {
            advance: None,
            bounds: None,
            line: LineMetrics {
                ascent: 9,
                descent: 3,
            },
        };
        let v = resolve_vertical(&font, 16);
        assert_eq!((v.ascent, v.descent, v.line_height), (9, 3, 12));
    }

    #[test]
    fn zero_line_metrics_derive_from_reference_glyph() {
        let font = stub(None, Some(GlyphBounds::new(0, -8, 5, 2)));
        let v = resolve_vertical(&font, 16);
        assert_eq!((v.ascent, v.descent, v.line_height), (8, 2, 10));

        let v = resolve_vertical(&PixelFont::new(10), 10);
        assert_eq!((v.ascent, v.descent, v.line_height), (7, 0, 7));
    }

    #[test]
    fn unusable_metrics_fall_back_to_size() {
        let v = resolve_vertical(&stub(None, None), 13);
        assert_eq!((v.ascent, v.descent, v.line_height), (0, 0, 13));

        // Reference glyph sitting entirely below the baseline.
        let v = resolve_vertical(&stub(None, Some(GlyphBounds::new(0, 2, 3, 0))), 11);
        assert_eq!(v.line_height, 11);
    }

    #[test]
    fn digit_cell_is_widest_digit() {
        // '1' is the narrow one in the built-in font.
        let font = PixelFont::new(10);
        assert_eq!(resolve_advance(&font, '1'), 5.0);
        assert_eq!(max_digit_advance(&font), 6.0);
        assert_eq!(max_digit_advance(&PixelFont::new(16)), 12.0);
    }

    #[test]
    fn sub_pixel_digit_advances_are_kept() {
        let font = stub(Some(0.6), None);
        assert_eq!(max_digit_advance(&font), 0.6);
    }
}
