//! Seamless horizontal scrolling by tiling one repeating strip.

use crate::{
    CanvasSize, Rgb, RgbFrame, RgbaBitmap, render::static_origin, settings::ScrollDirection,
};

/// One period of a scrolling text: the bitmap followed by its gap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScrollStrip {
    frame: RgbFrame,
}

impl ScrollStrip {
    /// Builds the strip for a canvas `canvas_height` pixels tall.
    ///
    /// The text sits at `x = 0`, vertically centred plus `offset_y`.
    pub fn new(
        canvas_height: u32,
        bitmap: &RgbaBitmap,
        background: Rgb,
        gap: u32,
        offset_y: i32,
    ) -> Self {
        let width = bitmap.width().saturating_add(gap).max(1);
        let size = CanvasSize::new(width, canvas_height);
        let mut frame = RgbFrame::new(size, background);
        let (_, y) = static_origin(size, bitmap, 0, offset_y);
        frame.paste_masked(bitmap, 0, y);
        Self { frame }
    }

    /// Period of the scroll in pixels.
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn as_frame(&self) -> &RgbFrame {
        &self.frame
    }

    /// Window of the endlessly repeated strip at `position`.
    pub fn render(
        &self,
        canvas: CanvasSize,
        background: Rgb,
        direction: ScrollDirection,
        offset_x: i32,
        position: i64,
    ) -> RgbFrame {
        let mut frame = RgbFrame::new(canvas, background);
        let width = self.width() as i64;
        let mut x = scroll_start(self.width(), direction, offset_x, position);
        while x < canvas.width as i64 {
            frame.blit(&self.frame, x as i32, 0);
            x += width;
        }
        frame
    }
}

/// X of the first strip copy, always in `(-2 * width, -width]`.
///
/// Congruent to stepping left one strip at a time until the copy sits at or
/// beyond `-width`, computed in one step. Copies further left would never
/// reach the canvas, so starts below the range are pulled up into it.
pub fn scroll_start(width: u32, direction: ScrollDirection, offset_x: i32, position: i64) -> i64 {
    let width = width.max(1) as i64;
    let shift = position.rem_euclid(width);
    let start = match direction {
        ScrollDirection::Left => offset_x as i64 - shift,
        ScrollDirection::Right => offset_x as i64 + shift,
    };
    let floor = 1 - 2 * width;
    floor + (start - floor).rem_euclid(width)
}

/// Builds the strip for `bitmap` and renders it at `position`.
#[allow(clippy::too_many_arguments)]
pub fn render_scroll_frame(
    canvas: CanvasSize,
    bitmap: &RgbaBitmap,
    background: Rgb,
    direction: ScrollDirection,
    gap: u32,
    offset_x: i32,
    offset_y: i32,
    position: i64,
) -> RgbFrame {
    ScrollStrip::new(canvas.height, bitmap, background, gap, offset_y)
        .render(canvas, background, direction, offset_x, position)
}
