use crate::{CanvasSize, Rgb, RgbFrame, RgbaBitmap};

/// Top-left of `bitmap` centred on `canvas`, then shifted by the offsets.
pub fn static_origin(
    canvas: CanvasSize,
    bitmap: &RgbaBitmap,
    offset_x: i32,
    offset_y: i32,
) -> (i32, i32) {
    let dx = (canvas.width as i64 - bitmap.width() as i64).div_euclid(2);
    let dy = (canvas.height as i64 - bitmap.height() as i64).div_euclid(2);
    ((dx + offset_x as i64) as i32, (dy + offset_y as i64) as i32)
}

/// Centred text on an opaque `background`. Overhanging pixels are clipped.
pub fn render_static_frame(
    canvas: CanvasSize,
    bitmap: &RgbaBitmap,
    background: Rgb,
    offset_x: i32,
    offset_y: i32,
) -> RgbFrame {
    let mut frame = RgbFrame::new(canvas, background);
    let (x, y) = static_origin(canvas, bitmap, offset_x, offset_y);
    frame.paste_masked(bitmap, x, y);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        PANEL_SIZE,
        font::PixelFont,
        metrics::{max_digit_advance, resolve_advance},
        render::{TextStyle, build_text_bitmap},
    };

    #[test]
    fn bitmap_is_centred() {
        let bitmap = RgbaBitmap::new(40, 10);
        assert_eq!(static_origin(CanvasSize::new(100, 32), &bitmap, 0, 0), (30, 11));
        assert_eq!(static_origin(CanvasSize::new(100, 32), &bitmap, -4, 3), (26, 14));
    }

    #[test]
    fn oversized_bitmap_rounds_towards_negative() {
        let bitmap = RgbaBitmap::new(41, 1);
        assert_eq!(static_origin(PANEL_SIZE, &bitmap, 0, 0), (-5, 15));
    }

    #[test]
    fn empty_text_still_yields_background_frame() {
        let bg = Rgb::new(0, 0, 40);
        let frame = render_static_frame(PANEL_SIZE, &RgbaBitmap::new(1, 1), bg, 0, 0);
        assert!(frame.pixels().iter().all(|&p| p == bg));
    }

    #[test]
    fn offsets_can_push_text_off_canvas() {
        let bitmap = RgbaBitmap::from_coverage(4, 4, Rgb::WHITE, &[255; 16]);
        let frame = render_static_frame(PANEL_SIZE, &bitmap, Rgb::BLACK, 100, 0);
        assert!(frame.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    /// Left edges of every run of lit columns.
    fn ink_run_starts(frame: &RgbFrame) -> Vec<u32> {
        let lit = |x: u32| (0..frame.height()).any(|y| frame.pixel(x, y) == Some(Rgb::WHITE));
        (0..frame.width())
            .filter(|&x| lit(x) && (x == 0 || !lit(x - 1)))
            .collect()
    }

    fn clock_style() -> TextStyle {
        TextStyle {
            size: 10,
            monospace_digits: true,
            ..TextStyle::default()
        }
    }

    #[test]
    fn clock_frame_has_digit_cell_transitions() {
        let font = PixelFont::new(10);
        let bitmap = build_text_bitmap(&font, "12:34", &clock_style());
        assert_eq!(static_origin(PANEL_SIZE, &bitmap, 0, 0), (3, 12));

        let frame = render_static_frame(PANEL_SIZE, &bitmap, Rgb::BLACK, 0, 0);
        // Middle row of the text: row 3 of every glyph. The colon gap is dark there.
        let lit: Vec<u32> = (0..32)
            .filter(|&x| frame.pixel(x, 15) == Some(Rgb::WHITE))
            .collect();
        assert!(lit.contains(&4));
        assert!(!lit.iter().any(|&x| (15..=16).contains(&x)));
        assert!(lit.iter().all(|&x| (3..29).contains(&x)));

        // '1' is centred in its cell; the colon run merges into '3'.
        assert_eq!(ink_run_starts(&frame), vec![3, 7, 15, 23]);
        let cell = max_digit_advance(&font) as u32;
        assert_eq!(cell, 6);
        // '3' to '4' is one cell, '2' to '3' is one cell plus the colon.
        assert_eq!(23 - 17, cell);
        assert_eq!(17 - 7, cell + resolve_advance(&font, ':') as u32);
        assert_eq!(frame.pixel(17, 12), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(16, 12), Some(Rgb::BLACK));
    }

    #[test]
    fn digit_cells_are_one_max_advance_apart() {
        let font = PixelFont::new(10);
        let bitmap = build_text_bitmap(&font, "1234", &clock_style());
        assert_eq!((bitmap.width(), bitmap.height()), (22, 7));

        let frame = render_static_frame(PANEL_SIZE, &bitmap, Rgb::BLACK, 0, 0);
        let starts = ink_run_starts(&frame);
        assert_eq!(starts, vec![5, 9, 15, 21]);

        let cell = max_digit_advance(&font) as u32;
        assert!(starts[1..].windows(2).all(|pair| pair[1] - pair[0] == cell));
    }
}
