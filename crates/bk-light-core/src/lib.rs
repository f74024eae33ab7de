//! Text rendering and frame composition for BK-Light LED matrix panels.
//!
//! Text is laid out glyph by glyph with a [`font::FontResource`], composited
//! into a tight [`RgbaBitmap`] and then placed onto fixed-size frames either
//! centred ([`render::render_static_frame`]) or as a seamlessly wrapping
//! scroll ([`render::render_scroll_frame`]). [`session`] drives the frame
//! cadence against an external [`session::FrameSink`].

pub mod color;
pub mod font;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod session;
pub mod settings;

pub use bk_light_panel::{CanvasSize, PANEL_SIZE, Rgb, RgbFrame, RgbaBitmap};
