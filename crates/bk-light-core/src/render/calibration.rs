//! Frames for checking panel wiring and tile order.

use core::fmt::Write as _;

use embedded_graphics::{
    Pixel,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use heapless::String as HeaplessString;

use crate::{
    CanvasSize, Rgb, RgbFrame,
    font::PixelFont,
    render::{TextStyle, build_text_bitmap, render_static_frame},
};

/// Outline colour drawn around each tile by [`render_panel_marker`].
pub const PANEL_OUTLINE: Rgb = Rgb::new(50, 50, 50);

/// Lights the four corner pixels of `canvas` with `marker`.
pub fn render_corner_markers(canvas: CanvasSize, background: Rgb, marker: Rgb) -> RgbFrame {
    let mut frame = RgbFrame::new(canvas, background);
    let right = canvas.width as i32 - 1;
    let bottom = canvas.height as i32 - 1;
    let color = Rgb888::from(marker);

    let corners = [
        Point::new(0, 0),
        Point::new(right, 0),
        Point::new(0, bottom),
        Point::new(right, bottom),
    ];
    let _ = frame.draw_iter(corners.into_iter().map(|p| Pixel(p, color)));
    frame
}

/// Tile `number` centred on black, outlined in [`PANEL_OUTLINE`].
pub fn render_panel_marker(tile: CanvasSize, number: u32, color: Rgb, antialias: bool) -> RgbFrame {
    let mut label = HeaplessString::<10>::new();
    let _ = write!(label, "{number}");

    let size = (tile.height / 2).max(8);
    let style = TextStyle {
        color,
        size,
        line_spacing: 0,
        antialias,
        monospace_digits: true,
    };
    let bitmap = build_text_bitmap(&PixelFont::new(size), &label, &style);
    let mut frame = render_static_frame(tile, &bitmap, Rgb::BLACK, 0, 0);

    let _ = Rectangle::new(Point::zero(), Size::new(tile.width, tile.height))
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::from(PANEL_OUTLINE), 1))
        .draw(&mut frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PANEL_SIZE;

    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn only_corners_are_lit() {
        let frame = render_corner_markers(CanvasSize::new(64, 32), Rgb::BLACK, GREEN);

        for (x, y) in [(0, 0), (63, 0), (0, 31), (63, 31)] {
            assert_eq!(frame.pixel(x, y), Some(GREEN));
        }
        assert_eq!(frame.pixels().iter().filter(|&&p| p == GREEN).count(), 4);
    }

    #[test]
    fn single_pixel_canvas_has_one_marker() {
        let frame = render_corner_markers(CanvasSize::new(1, 1), Rgb::BLACK, GREEN);
        assert_eq!(frame.pixels(), [GREEN]);
    }

    #[test]
    fn panel_marker_outlines_the_tile() {
        let frame = render_panel_marker(PANEL_SIZE, 3, Rgb::WHITE, false);

        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31), (15, 0), (0, 15)] {
            assert_eq!(frame.pixel(x, y), Some(PANEL_OUTLINE), "({x}, {y})");
        }
        assert_eq!(frame.pixel(1, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn panel_number_is_drawn_inside() {
        let frame = render_panel_marker(PANEL_SIZE, 12, GREEN, true);
        let inner = (1..31)
            .flat_map(|y| (1..31).map(move |x| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y) == Some(GREEN))
            .count();
        assert!(inner > 0);
    }
}
