//! Colour specification parsing.

use core::fmt;

use heapless::{String as HeaplessString, Vec as HeaplessVec};

use crate::Rgb;

const SPEC_BYTES: usize = 32;

/// Reasons a colour specification was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorParseError {
    /// Neither `r,g,b` nor six hex digits.
    InvalidFormat,
    /// Comma form with fewer than three components.
    MissingComponent,
    /// A component is not a number in `0..=255`.
    InvalidComponent,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("invalid color: expected RRGGBB or r,g,b"),
            Self::MissingComponent => f.write_str("invalid color: r,g,b needs three components"),
            Self::InvalidComponent => f.write_str("invalid color: component out of range"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// Parses `#RRGGBB`, `RRGGBB` or `r,g,b` (extra components are ignored).
///
/// `#` and spaces are stripped anywhere in the input.
pub fn parse_color(value: &str) -> Result<Rgb, ColorParseError> {
    let mut cleaned = HeaplessString::<SPEC_BYTES>::new();
    for ch in value.chars().filter(|&c| c != '#' && c != ' ') {
        cleaned
            .push(ch)
            .map_err(|_| ColorParseError::InvalidFormat)?;
    }

    if cleaned.contains(',') {
        let mut parts = HeaplessVec::<u8, 3>::new();
        for part in cleaned.split(',').take(3) {
            let value = part
                .parse::<u8>()
                .map_err(|_| ColorParseError::InvalidComponent)?;
            let _ = parts.push(value);
        }
        return match parts.as_slice() {
            &[r, g, b] => Ok(Rgb::new(r, g, b)),
            _ => Err(ColorParseError::MissingComponent),
        };
    }

    if cleaned.len() == 6 && cleaned.is_ascii() {
        let channel = |i: usize| {
            u8::from_str_radix(&cleaned[i..i + 2], 16).map_err(|_| ColorParseError::InvalidComponent)
        };
        return Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?));
    }

    Err(ColorParseError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms_parse() {
        assert_eq!(parse_color("#FF7800"), Ok(Rgb::new(255, 120, 0)));
        assert_eq!(parse_color("00ff7f"), Ok(Rgb::new(0, 255, 127)));
        assert_eq!(parse_color(" # 10 20 30"), Ok(Rgb::new(0x10, 0x20, 0x30)));
    }

    #[test]
    fn comma_form_takes_first_three_components() {
        assert_eq!(parse_color("255, 0, 10"), Ok(Rgb::new(255, 0, 10)));
        assert_eq!(parse_color("1,2,3,4"), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn malformed_specs_are_rejected() {
        assert_eq!(parse_color("red"), Err(ColorParseError::InvalidFormat));
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidFormat));
        assert_eq!(parse_color("GG0000"), Err(ColorParseError::InvalidComponent));
        assert_eq!(parse_color("1,2"), Err(ColorParseError::MissingComponent));
        assert_eq!(parse_color("1,2,300"), Err(ColorParseError::InvalidComponent));
        assert_eq!(parse_color(""), Err(ColorParseError::InvalidFormat));
    }
}
