//! Baseline layout of text lines.

use log::debug;

use crate::{
    font::{FontResource, GlyphBounds},
    metrics::{VerticalMetrics, is_digit, max_digit_advance, resolve_advance, resolve_vertical},
};

/// One glyph positioned in layout space (top-left of its clamped box).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub ch: char,
    pub bounds: GlyphBounds,
    pub x: f32,
    pub y: f32,
}

impl Placement {
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    pub fn height(&self) -> u32 {
        self.bounds.height()
    }
}

/// Union rectangle of placed tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Extent {
    fn of(placement: &Placement) -> Self {
        Self {
            min_x: placement.x,
            min_y: placement.y,
            max_x: placement.x + placement.width() as f32,
            max_y: placement.y + placement.height() as f32,
        }
    }

    fn include(&mut self, other: Extent) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Pixel size, rounded up and never below 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        let width = (self.max_x - self.min_x).ceil().max(1.0);
        let height = (self.max_y - self.min_y).ceil().max(1.0);
        (width as u32, height as u32)
    }
}

/// Glyph placements of a whole text and their extent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    pub placements: Vec<Placement>,
    pub extent: Option<Extent>,
}

/// Places characters for one font, size and spacing.
pub struct LineLayout<'a, F: ?Sized> {
    font: &'a F,
    vertical: VerticalMetrics,
    line_spacing: i32,
    digit_cell: Option<f32>,
}

impl<'a, F: FontResource + ?Sized> LineLayout<'a, F> {
    pub fn new(font: &'a F, size: u32, line_spacing: i32, monospace_digits: bool) -> Self {
        Self {
            font,
            vertical: resolve_vertical(font, size),
            line_spacing,
            digit_cell: monospace_digits
                .then(|| max_digit_advance(font))
                .filter(|&cell| cell > 0.0),
        }
    }

    pub fn vertical(&self) -> VerticalMetrics {
        self.vertical
    }

    /// Uniform digit advance, when digits are normalized.
    pub fn digit_cell(&self) -> Option<f32> {
        self.digit_cell
    }

    /// Baseline of line `index`.
    pub fn baseline(&self, index: usize) -> f32 {
        let pitch = self.vertical.line_height + self.line_spacing;
        (index as i64 * pitch as i64 + self.vertical.ascent as i64) as f32
    }

    /// Places `line` on baseline `index`, appending to `out`.
    ///
    /// Returns the cursor position after the last character.
    pub fn place_line(&self, line: &str, index: usize, out: &mut Vec<Placement>) -> f32 {
        let baseline = self.baseline(index);
        let mut cursor = 0.0f32;

        for ch in line.chars() {
            let mut advance = resolve_advance(self.font, ch);
            let Some(bounds) = self.font.bounds(ch) else {
                cursor += advance;
                continue;
            };

            let mut adjust = 0.0;
            if let Some(cell) = self.digit_cell.filter(|_| is_digit(ch)) {
                adjust = 0.5 * (cell - advance);
                advance = cell;
            }

            out.push(Placement {
                ch,
                bounds,
                x: cursor + adjust + bounds.left as f32,
                y: baseline + bounds.top as f32,
            });
            cursor += advance;
        }

        cursor
    }

    /// Lays out every line of `lines`.
    pub fn layout<'s, I>(&self, lines: I) -> TextLayout
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut placements = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            self.place_line(line, index, &mut placements);
        }

        let extent = placements.iter().map(Extent::of).reduce(|mut acc, e| {
            acc.include(e);
            acc
        });
        if let Some(extent) = extent {
            debug!(
                "layout: {} glyphs, extent ({}, {})..({}, {})",
                placements.len(),
                extent.min_x,
                extent.min_y,
                extent.max_x,
                extent.max_y
            );
        }

        TextLayout { placements, extent }
    }
}
