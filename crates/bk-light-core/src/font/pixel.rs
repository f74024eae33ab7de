//! Built-in 5x7 bitmap font, scaled by whole pixels.
//!
//! Each glyph is five column bytes; bit `n` is row `n`, rows `0..=6` sit
//! above the baseline and row `7` is the descender.

use super::{FontResource, GlyphBounds};

/// Nominal cell height (seven rows plus descender) per scale step.
const CELL_ROWS: u32 = 8;
const BASELINE_ROW: i32 = 7;
const SPACE_ADVANCE: i32 = 3;

/// Pixel font used when no outline font is available.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PixelFont {
    scale: u32,
}

impl PixelFont {
    /// Pixel font for a requested size; one scale step per eight pixels.
    pub const fn new(size: u32) -> Self {
        let scale = size / CELL_ROWS;
        Self {
            scale: if scale == 0 { 1 } else { scale },
        }
    }

    pub const fn scale(&self) -> u32 {
        self.scale
    }

    fn ink(c: char) -> Option<Ink> {
        glyph_5x7(normalize_glyph_char(c)).and_then(Ink::of)
    }
}

/// Column/row extent of the set bits of one glyph.
#[derive(Clone, Copy)]
struct Ink {
    glyph: [u8; 5],
    first_col: i32,
    last_col: i32,
    first_row: i32,
    last_row: i32,
}

impl Ink {
    fn of(glyph: [u8; 5]) -> Option<Self> {
        let first_col = glyph.iter().position(|&bits| bits != 0)?;
        let last_col = glyph.iter().rposition(|&bits| bits != 0)?;
        let rows = glyph.iter().fold(0u8, |acc, &bits| acc | bits);

        Some(Self {
            glyph,
            first_col: first_col as i32,
            last_col: last_col as i32,
            first_row: rows.trailing_zeros() as i32,
            last_row: 7 - rows.leading_zeros() as i32,
        })
    }

    fn is_set(&self, col: i32, row: i32) -> bool {
        if !(0..5).contains(&col) || !(0..8).contains(&row) {
            return false;
        }
        self.glyph[col as usize] & (1 << row) != 0
    }
}

impl FontResource for PixelFont {
    fn advance(&self, c: char) -> Option<f32> {
        let s = self.scale as i32;
        let glyph = glyph_5x7(normalize_glyph_char(c))?;
        let cols = match Ink::of(glyph) {
            Some(ink) => ink.last_col + 2,
            None => SPACE_ADVANCE,
        };
        Some((cols * s) as f32)
    }

    fn bounds(&self, c: char) -> Option<GlyphBounds> {
        let s = self.scale as i32;
        let ink = Self::ink(c)?;
        Some(GlyphBounds::new(
            ink.first_col * s,
            (ink.first_row - BASELINE_ROW) * s,
            (ink.last_col + 1) * s,
            (ink.last_row + 1 - BASELINE_ROW) * s,
        ))
    }

    fn coverage(&self, c: char, bounds: &GlyphBounds) -> Vec<u8> {
        let (width, height) = (bounds.width(), bounds.height());
        let mut mask = vec![0u8; width as usize * height as usize];
        let Some(ink) = Self::ink(c) else {
            return mask;
        };

        let s = self.scale as i32;
        for py in 0..height as i32 {
            let row = (bounds.top + py).div_euclid(s) + BASELINE_ROW;
            for px in 0..width as i32 {
                let col = (bounds.left + px).div_euclid(s);
                if ink.is_set(col, row) {
                    mask[(py * width as i32 + px) as usize] = 255;
                }
            }
        }
        mask
    }
}

fn normalize_glyph_char(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
        'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'A',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'É' | 'È' | 'Ë' | 'Ê' => 'E',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'Í' | 'Ì' | 'Ï' | 'Î' => 'I',
        'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'O',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'Ú' | 'Ù' | 'Ü' | 'Û' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        '‐' | '‑' | '‒' | '–' | '—' | '―' => '-',
        '…' => '.',
        '\u{a0}' => ' ',
        _ => c,
    }
}

fn glyph_5x7(c: char) -> Option<[u8; 5]> {
    let glyph = match c {
        'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => [0x7F, 0x20, 0x18, 0x20, 0x7F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x03, 0x04, 0x78, 0x04, 0x03],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        'a' => [0x20, 0x54, 0x54, 0x54, 0x78],
        'b' => [0x7F, 0x48, 0x44, 0x44, 0x38],
        'c' => [0x38, 0x44, 0x44, 0x44, 0x20],
        'd' => [0x38, 0x44, 0x44, 0x48, 0x7F],
        'e' => [0x38, 0x54, 0x54, 0x54, 0x18],
        'f' => [0x08, 0x7E, 0x09, 0x01, 0x02],
        'g' => [0x08, 0x14, 0x54, 0x54, 0x3C],
        'h' => [0x7F, 0x08, 0x04, 0x04, 0x78],
        'i' => [0x00, 0x44, 0x7D, 0x40, 0x00],
        'j' => [0x20, 0x40, 0x44, 0x3D, 0x00],
        'k' => [0x7F, 0x10, 0x28, 0x44, 0x00],
        'l' => [0x00, 0x41, 0x7F, 0x40, 0x00],
        'm' => [0x7C, 0x04, 0x18, 0x04, 0x78],
        'n' => [0x7C, 0x08, 0x04, 0x04, 0x78],
        'o' => [0x38, 0x44, 0x44, 0x44, 0x38],
        'p' => [0x7C, 0x14, 0x14, 0x14, 0x08],
        'q' => [0x08, 0x14, 0x14, 0x18, 0x7C],
        'r' => [0x7C, 0x08, 0x04, 0x04, 0x08],
        's' => [0x48, 0x54, 0x54, 0x54, 0x20],
        't' => [0x04, 0x3F, 0x44, 0x40, 0x20],
        'u' => [0x3C, 0x40, 0x40, 0x20, 0x7C],
        'v' => [0x1C, 0x20, 0x40, 0x20, 0x1C],
        'w' => [0x3C, 0x40, 0x30, 0x40, 0x3C],
        'x' => [0x44, 0x28, 0x10, 0x28, 0x44],
        'y' => [0x0C, 0x50, 0x50, 0x50, 0x3C],
        'z' => [0x44, 0x64, 0x54, 0x4C, 0x44],
        '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        ',' => [0x00, 0x80, 0x60, 0x00, 0x00],
        ';' => [0x00, 0x80, 0x66, 0x00, 0x00],
        ':' => [0x00, 0x36, 0x36, 0x00, 0x00],
        '!' => [0x00, 0x00, 0x5F, 0x00, 0x00],
        '?' => [0x02, 0x01, 0x51, 0x09, 0x06],
        '/' => [0x20, 0x10, 0x08, 0x04, 0x02],
        '<' => [0x08, 0x14, 0x22, 0x41, 0x00],
        '>' => [0x00, 0x41, 0x22, 0x14, 0x08],
        '[' => [0x00, 0x7F, 0x41, 0x41, 0x00],
        ']' => [0x00, 0x41, 0x41, 0x7F, 0x00],
        '(' => [0x00, 0x1C, 0x22, 0x41, 0x00],
        ')' => [0x00, 0x41, 0x22, 0x1C, 0x00],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '+' => [0x08, 0x08, 0x3E, 0x08, 0x08],
        '=' => [0x14, 0x14, 0x14, 0x14, 0x14],
        '_' => [0x40, 0x40, 0x40, 0x40, 0x40],
        '%' => [0x23, 0x13, 0x08, 0x64, 0x62],
        '#' => [0x14, 0x7F, 0x14, 0x7F, 0x14],
        '*' => [0x14, 0x08, 0x3E, 0x08, 0x14],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00],
        _ => return None,
    };
    Some(glyph)
}
