//! Font resources consumed by the layout engine.
//!
//! A [`FontResource`] answers per-character questions (advance, ink bounds,
//! coverage) and font-wide line metrics. Any of them may be missing; the
//! fallbacks live in [`crate::metrics`], not in the fonts.

mod outline;
mod pixel;

use core::fmt;

use log::warn;

pub use outline::OutlineFont;
pub use pixel::PixelFont;

/// Tight ink rectangle of one glyph, relative to the pen origin on the
/// baseline. `y` grows downwards, so `top` is negative above the baseline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Tile width, never below one pixel.
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(1) as u32
    }

    /// Tile height, never below one pixel.
    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(1) as u32
    }
}

/// Font-wide vertical metrics in whole pixels. Both zero means "unknown".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineMetrics {
    pub ascent: i32,
    pub descent: i32,
}

/// Glyph source with per-character metrics and coverage.
pub trait FontResource {
    /// Native advance width, if the font reports one.
    fn advance(&self, c: char) -> Option<f32>;

    /// Width of the rendered extent of `c` alone.
    fn measured_width(&self, c: char) -> f32 {
        self.bounds(c)
            .map(|b| (b.right - b.left) as f32)
            .unwrap_or(0.0)
    }

    /// Ink bounds, `None` when the glyph has no visible coverage.
    fn bounds(&self, c: char) -> Option<GlyphBounds>;

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics::default()
    }

    /// Coverage of `c` over the clamped `bounds` box, row-major, one byte
    /// per pixel (`0` = no ink, `255` = full ink).
    fn coverage(&self, c: char, bounds: &GlyphBounds) -> Vec<u8>;
}

impl<F: FontResource + ?Sized> FontResource for &F {
    fn advance(&self, c: char) -> Option<f32> {
        (**self).advance(c)
    }

    fn measured_width(&self, c: char) -> f32 {
        (**self).measured_width(c)
    }

    fn bounds(&self, c: char) -> Option<GlyphBounds> {
        (**self).bounds(c)
    }

    fn line_metrics(&self) -> LineMetrics {
        (**self).line_metrics()
    }

    fn coverage(&self, c: char, bounds: &GlyphBounds) -> Vec<u8> {
        (**self).coverage(c, bounds)
    }
}

/// Font loading errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FontError {
    /// The font data could not be parsed.
    Parse(&'static str),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(reason) => write!(f, "font parse failed: {reason}"),
        }
    }
}

impl std::error::Error for FontError {}

/// Either a parsed outline font or the built-in pixel font.
pub enum LoadedFont {
    Outline(OutlineFont),
    Pixel(PixelFont),
}

impl LoadedFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Pixel(_))
    }
}

/// Loads an outline font at `size` pixels, falling back to the built-in
/// pixel font when no data is given or it does not parse.
pub fn load_font(data: Option<&[u8]>, size: u32) -> LoadedFont {
    let Some(data) = data else {
        return LoadedFont::Pixel(PixelFont::new(size));
    };

    match OutlineFont::from_bytes(data, size) {
        Ok(font) => LoadedFont::Outline(font),
        Err(err) => {
            warn!("{err}; using built-in pixel font");
            LoadedFont::Pixel(PixelFont::new(size))
        }
    }
}

impl FontResource for LoadedFont {
    fn advance(&self, c: char) -> Option<f32> {
        match self {
            Self::Outline(font) => font.advance(c),
            Self::Pixel(font) => font.advance(c),
        }
    }

    fn measured_width(&self, c: char) -> f32 {
        match self {
            Self::Outline(font) => font.measured_width(c),
            Self::Pixel(font) => font.measured_width(c),
        }
    }

    fn bounds(&self, c: char) -> Option<GlyphBounds> {
        match self {
            Self::Outline(font) => font.bounds(c),
            Self::Pixel(font) => font.bounds(c),
        }
    }

    fn line_metrics(&self) -> LineMetrics {
        match self {
            Self::Outline(font) => font.line_metrics(),
            Self::Pixel(font) => font.line_metrics(),
        }
    }

    fn coverage(&self, c: char, bounds: &GlyphBounds) -> Vec<u8> {
        match self {
            Self::Outline(font) => font.coverage(c, bounds),
            Self::Pixel(font) => font.coverage(c, bounds),
        }
    }
}
