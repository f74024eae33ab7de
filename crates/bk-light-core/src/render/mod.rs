//! Text bitmaps and the frames built from them.

mod calibration;
mod compose;
mod scroll;
mod text;

pub use calibration::{PANEL_OUTLINE, render_corner_markers, render_panel_marker};
pub use compose::{render_static_frame, static_origin};
pub use scroll::{ScrollStrip, render_scroll_frame, scroll_start};
pub use text::{TextStyle, build_text_bitmap, normalize_line_breaks, rasterize_glyph};
