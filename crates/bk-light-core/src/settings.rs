//! Text presets and per-run overrides.

use crate::{Rgb, render::TextStyle};

/// How a text session presents its bitmap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisplayMode {
    #[default]
    Static,
    Scroll,
}

impl DisplayMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Self::Static),
            "scroll" => Some(Self::Scroll),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Scroll => "scroll",
        }
    }
}

/// Direction the text travels while scrolling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
}

impl ScrollDirection {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Named set of text rendering and session parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextPreset {
    pub color: Rgb,
    pub background: Rgb,
    pub size: u32,
    pub spacing: i32,
    pub mode: DisplayMode,
    pub direction: ScrollDirection,
    /// Blank pixels between scroll repetitions.
    pub gap: u32,
    /// Pixels advanced per scroll frame.
    pub step: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Pause between scroll frames.
    pub interval_ms: u64,
    pub antialias: bool,
    pub monospace_digits: bool,
}

impl TextPreset {
    pub const fn new() -> Self {
        Self {
            color: Rgb::WHITE,
            background: Rgb::BLACK,
            size: 16,
            spacing: 0,
            mode: DisplayMode::Static,
            direction: ScrollDirection::Left,
            gap: 8,
            step: 1,
            offset_x: 0,
            offset_y: 0,
            interval_ms: 50,
            antialias: true,
            monospace_digits: true,
        }
    }

    /// Layers a font profile and per-run overrides over this preset.
    ///
    /// Size comes from the override, then the profile's recommendation,
    /// then the preset. Offsets from the profile are added on top.
    pub fn resolve(&self, profile: &FontProfile, overrides: &TextOverrides) -> Self {
        let size = overrides
            .size
            .or(profile.recommended_size)
            .unwrap_or(self.size)
            .max(1);

        Self {
            color: overrides.color.unwrap_or(self.color),
            background: overrides.background.unwrap_or(self.background),
            size,
            spacing: overrides.spacing.unwrap_or(self.spacing),
            mode: overrides.mode.unwrap_or(self.mode),
            direction: overrides.direction.unwrap_or(self.direction),
            gap: overrides.gap.unwrap_or(self.gap),
            step: overrides.step.unwrap_or(self.step).max(1),
            offset_x: overrides
                .offset_x
                .unwrap_or(self.offset_x)
                .saturating_add(profile.offset_x),
            offset_y: overrides
                .offset_y
                .unwrap_or(self.offset_y)
                .saturating_add(profile.offset_y),
            interval_ms: overrides.interval_ms.unwrap_or(self.interval_ms),
            antialias: overrides.antialias.unwrap_or(self.antialias),
            monospace_digits: overrides.monospace_digits.unwrap_or(self.monospace_digits),
        }
    }

    /// Bitmap style for this preset.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            color: self.color,
            size: self.size.max(1),
            line_spacing: self.spacing,
            antialias: self.antialias,
            monospace_digits: self.monospace_digits,
        }
    }
}

impl Default for TextPreset {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-font layout tweaks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FontProfile {
    pub recommended_size: Option<u32>,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Values that replace preset fields for a single run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextOverrides {
    pub color: Option<Rgb>,
    pub background: Option<Rgb>,
    pub size: Option<u32>,
    pub spacing: Option<i32>,
    pub mode: Option<DisplayMode>,
    pub direction: Option<ScrollDirection>,
    pub gap: Option<u32>,
    pub step: Option<u32>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub interval_ms: Option<u64>,
    pub antialias: Option<bool>,
    pub monospace_digits: Option<bool>,
}

/// Counting display: `count` frames starting at `start`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CounterPreset {
    pub start: i64,
    pub count: u32,
    pub delay_ms: u64,
}

impl CounterPreset {
    pub const fn new(start: i64, count: u32, delay_ms: u64) -> Self {
        Self {
            start,
            count,
            delay_ms,
        }
    }
}

impl Default for CounterPreset {
    fn default() -> Self {
        Self::new(0, 10, 1_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(DisplayMode::from_name(" Scroll "), Some(DisplayMode::Scroll));
        assert_eq!(DisplayMode::from_name("marquee"), None);
        assert_eq!(ScrollDirection::from_name("RIGHT"), Some(ScrollDirection::Right));
        assert_eq!(ScrollDirection::Left.name(), "left");
    }

    #[test]
    fn no_overrides_keeps_preset() {
        let preset = TextPreset::default();
        let resolved = preset.resolve(&FontProfile::default(), &TextOverrides::default());
        assert_eq!(resolved, preset);
    }

    #[test]
    fn size_prefers_override_then_profile() {
        let preset = TextPreset::default();
        let profile = FontProfile {
            recommended_size: Some(11),
            ..FontProfile::default()
        };

        let resolved = preset.resolve(&profile, &TextOverrides::default());
        assert_eq!(resolved.size, 11);

        let overrides = TextOverrides {
            size: Some(20),
            ..TextOverrides::default()
        };
        assert_eq!(preset.resolve(&profile, &overrides).size, 20);

        let overrides = TextOverrides {
            size: Some(0),
            ..TextOverrides::default()
        };
        assert_eq!(preset.resolve(&profile, &overrides).size, 1);
    }

    #[test]
    fn profile_offsets_add_to_preset_offsets() {
        let preset = TextPreset {
            offset_x: 2,
            offset_y: -1,
            ..TextPreset::default()
        };
        let profile = FontProfile {
            recommended_size: None,
            offset_x: 1,
            offset_y: 3,
        };
        let overrides = TextOverrides {
            offset_x: Some(-5),
            ..TextOverrides::default()
        };

        let resolved = preset.resolve(&profile, &overrides);
        assert_eq!((resolved.offset_x, resolved.offset_y), (-4, 2));
    }

    #[test]
    fn step_is_at_least_one() {
        let overrides = TextOverrides {
            step: Some(0),
            mode: Some(DisplayMode::Scroll),
            ..TextOverrides::default()
        };
        let resolved = TextPreset::default().resolve(&FontProfile::default(), &overrides);
        assert_eq!(resolved.step, 1);
        assert_eq!(resolved.mode, DisplayMode::Scroll);
    }

    #[test]
    fn text_style_mirrors_preset() {
        let preset = TextPreset {
            color: Rgb::new(1, 2, 3),
            spacing: -2,
            antialias: false,
            ..TextPreset::default()
        };
        let style = preset.text_style();
        assert_eq!(style.color, Rgb::new(1, 2, 3));
        assert_eq!(style.line_spacing, -2);
        assert!(!style.antialias);
        assert!(style.monospace_digits);
    }
}
