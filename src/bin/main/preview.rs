use core::fmt::Write as _;
use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use bk_light_core::{RgbFrame, session::FrameSink};
use log::debug;

/// Draws frames in a truecolour terminal, two panel rows per text row.
///
/// Each redraw moves the cursor back over the previous frame so scrolling
/// text animates in place.
pub(super) struct TerminalSink {
    out: io::Stdout,
    dump: Option<File>,
    drawn_rows: u32,
    frames: u64,
}

impl TerminalSink {
    pub(super) fn new() -> Self {
        Self {
            out: io::stdout(),
            dump: None,
            drawn_rows: 0,
            frames: 0,
        }
    }

    /// Also appends every frame's RGB888 payload to `path`.
    pub(super) fn with_dump(mut self, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.dump = Some(file);
        Ok(self)
    }

    pub(super) fn frames(&self) -> u64 {
        self.frames
    }

    fn draw(&mut self, frame: &RgbFrame) -> io::Result<()> {
        let mut text = String::new();
        if self.drawn_rows > 0 {
            let _ = write!(text, "\x1b[{}A", self.drawn_rows);
        }

        let mut rows = 0;
        for y in (0..frame.height()).step_by(2) {
            for x in 0..frame.width() {
                let Some(top) = frame.pixel(x, y) else {
                    continue;
                };
                let _ = write!(text, "\x1b[38;2;{};{};{}m", top.r, top.g, top.b);
                match frame.pixel(x, y + 1) {
                    Some(bottom) => {
                        let _ = write!(text, "\x1b[48;2;{};{};{}m\u{2580}", bottom.r, bottom.g, bottom.b);
                    }
                    None => text.push_str("\x1b[49m\u{2580}"),
                }
            }
            text.push_str("\x1b[0m\n");
            rows += 1;
        }

        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        self.drawn_rows = rows;
        Ok(())
    }
}

impl FrameSink for TerminalSink {
    type Error = io::Error;

    async fn send_frame(&mut self, frame: &RgbFrame, delay: f32) -> Result<(), Self::Error> {
        self.draw(frame)?;
        if let Some(dump) = self.dump.as_mut() {
            dump.write_all(&frame.to_rgb_bytes())?;
        }

        self.frames += 1;
        debug!(
            "frame {} ({}x{}, pacing {delay}s)",
            self.frames,
            frame.width(),
            frame.height()
        );
        Ok(())
    }
}
