use core::{fmt, str::FromStr};
use std::path::PathBuf;

use bk_light_core::{
    CanvasSize, PANEL_SIZE,
    color::{ColorParseError, parse_color},
    settings::{CounterPreset, DisplayMode, FontProfile, ScrollDirection, TextOverrides, TextPreset},
};
use embassy_time::Duration;

/// What the preview tool was asked to show.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Command {
    Text(String),
    Counter,
    Corners,
    Panel(u32),
}

impl Command {
    pub(super) fn from_args<I>(mut args: I) -> Result<Self, ConfigError>
    where
        I: Iterator<Item = String>,
    {
        let Some(first) = args.next() else {
            return Err(ConfigError::MissingText);
        };

        match first.as_str() {
            "--counter" => Ok(Self::Counter),
            "--corners" => Ok(Self::Corners),
            "--panel" => {
                let value = args.next().unwrap_or_default();
                value
                    .parse()
                    .map(Self::Panel)
                    .map_err(|_| ConfigError::Invalid {
                        key: "--panel",
                        value,
                    })
            }
            _ => Ok(Self::Text(first)),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum ConfigError {
    MissingText,
    Invalid { key: &'static str, value: String },
    Color { key: &'static str, source: ColorParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingText => {
                f.write_str("usage: bk-light <text> | --counter | --corners | --panel <n>")
            }
            Self::Invalid { key, value } => write!(f, "{key}: cannot use {value:?}"),
            Self::Color { key, source } => write!(f, "{key}: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Preview settings layered from `BK_LIGHT_*` environment variables.
#[derive(Clone, Debug)]
pub(super) struct EnvConfig {
    pub canvas: CanvasSize,
    pub font_path: Option<PathBuf>,
    pub profile: FontProfile,
    pub overrides: TextOverrides,
    pub counter: CounterPreset,
    /// Stop after this long; scroll sessions otherwise run forever.
    pub run_for: Option<Duration>,
    /// Raw RGB888 frames are appended here when set.
    pub dump_path: Option<PathBuf>,
}

impl EnvConfig {
    pub(super) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let env = Lookup(lookup);
        let defaults = CounterPreset::default();

        let canvas = match env.get("BK_LIGHT_CANVAS") {
            Some(value) => parse_canvas(&value).ok_or(ConfigError::Invalid {
                key: "BK_LIGHT_CANVAS",
                value,
            })?,
            None => PANEL_SIZE,
        };

        let profile = FontProfile {
            recommended_size: env.parse("BK_LIGHT_FONT_SIZE")?,
            offset_x: env.parse("BK_LIGHT_FONT_OFFSET_X")?.unwrap_or(0),
            offset_y: env.parse("BK_LIGHT_FONT_OFFSET_Y")?.unwrap_or(0),
        };

        let overrides = TextOverrides {
            color: env.color("BK_LIGHT_COLOR")?,
            background: env.color("BK_LIGHT_BACKGROUND")?,
            size: env.parse("BK_LIGHT_SIZE")?,
            spacing: env.parse("BK_LIGHT_SPACING")?,
            mode: env.named("BK_LIGHT_MODE", DisplayMode::from_name)?,
            direction: env.named("BK_LIGHT_DIRECTION", ScrollDirection::from_name)?,
            gap: env.parse("BK_LIGHT_GAP")?,
            step: env.parse("BK_LIGHT_STEP")?,
            offset_x: env.parse("BK_LIGHT_OFFSET_X")?,
            offset_y: env.parse("BK_LIGHT_OFFSET_Y")?,
            interval_ms: env.parse("BK_LIGHT_INTERVAL_MS")?,
            antialias: env.named("BK_LIGHT_ANTIALIAS", parse_flag)?,
            monospace_digits: env.named("BK_LIGHT_MONOSPACE_DIGITS", parse_flag)?,
        };

        let counter = CounterPreset::new(
            env.parse("BK_LIGHT_COUNTER_START")?.unwrap_or(defaults.start),
            env.parse("BK_LIGHT_COUNTER_COUNT")?.unwrap_or(defaults.count),
            env.parse("BK_LIGHT_COUNTER_DELAY_MS")?
                .unwrap_or(defaults.delay_ms),
        );

        Ok(Self {
            canvas,
            font_path: env.get("BK_LIGHT_FONT").map(PathBuf::from),
            profile,
            overrides,
            counter,
            run_for: env.parse("BK_LIGHT_RUN_MS")?.map(Duration::from_millis),
            dump_path: env.get("BK_LIGHT_DUMP").map(PathBuf::from),
        })
    }
}

impl EnvConfig {
    /// Preset for text and calibration frames: profile, then overrides.
    pub(super) fn text_preset(&self) -> TextPreset {
        TextPreset::default().resolve(&self.profile, &self.overrides)
    }

    /// Counters follow the font profile only; text overrides do not apply.
    pub(super) fn counter_preset(&self) -> TextPreset {
        TextPreset::default().resolve(&self.profile, &TextOverrides::default())
    }
}

struct Lookup<L>(L);

impl<L: Fn(&str) -> Option<String>> Lookup<L> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn parse<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, ConfigError> {
        self.named(key, |value| value.trim().parse().ok())
    }

    fn named<T>(
        &self,
        key: &'static str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        match parse(&value) {
            Some(parsed) => Ok(Some(parsed)),
            None => Err(ConfigError::Invalid { key, value }),
        }
    }

    fn color(&self, key: &'static str) -> Result<Option<bk_light_core::Rgb>, ConfigError> {
        self.get(key)
            .map(|value| parse_color(&value).map_err(|source| ConfigError::Color { key, source }))
            .transpose()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `WIDTHxHEIGHT`, both positive.
fn parse_canvas(value: &str) -> Option<CanvasSize> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    (width > 0 && height > 0).then(|| CanvasSize::new(width, height))
}
