use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
};

use crate::{Rgb, RgbFrame};

impl From<Rgb888> for Rgb {
    fn from(color: Rgb888) -> Self {
        Rgb::new(color.r(), color.g(), color.b())
    }
}

impl From<Rgb> for Rgb888 {
    fn from(color: Rgb) -> Self {
        Rgb888::new(color.r, color.g, color.b)
    }
}

impl DrawTarget for RgbFrame {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set_pixel(point.x as u32, point.y as u32, color.into());
        }

        Ok(())
    }
}

impl OriginDimensions for RgbFrame {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_core::geometry::Point;

    use super::*;
    use crate::CanvasSize;

    #[test]
    fn negative_and_outside_points_are_ignored() {
        let mut frame = RgbFrame::new(CanvasSize::new(2, 2), Rgb::BLACK);
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb888::RED),
            Pixel(Point::new(5, 1), Rgb888::RED),
            Pixel(Point::new(1, 1), Rgb888::GREEN),
        ];

        frame.draw_iter(pixels).unwrap();

        assert_eq!(frame.pixel(1, 1), Some(Rgb::new(0, 255, 0)));
        assert_eq!(frame.pixels().iter().filter(|&&p| p != Rgb::BLACK).count(), 1);
    }

    #[test]
    fn reports_frame_dimensions() {
        let frame = RgbFrame::new(CanvasSize::new(64, 32), Rgb::BLACK);
        assert_eq!(OriginDimensions::size(&frame), Size::new(64, 32));
    }
}
