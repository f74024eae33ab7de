//! Frame dispatch loop.
//!
//! A session owns the only mutable state of the pipeline (the scroll
//! position) and has exactly two suspension points per frame: the hand-off
//! to the [`FrameSink`] and the wait afterwards. Cancellation is only
//! observed during the wait, so a cancelled session never sends another
//! frame.

use core::fmt::Write as _;

use embassy_futures::select::{Either, select};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};
use heapless::String as HeaplessString;
use log::{debug, info};

use crate::{
    CanvasSize, RgbFrame, RgbaBitmap,
    font::FontResource,
    render::{ScrollStrip, TextStyle, build_text_bitmap, render_static_frame},
    settings::{CounterPreset, DisplayMode, TextPreset},
};


/// Pacing hint passed along with a static frame.
pub const STATIC_SEND_DELAY: f32 = 0.15;
/// Pacing hint passed along with each scroll frame.
pub const SCROLL_SEND_DELAY: f32 = 0.1;
/// Hold time after a static frame before the session completes.
pub const STATIC_SETTLE: Duration = Duration::from_millis(200);

/// Raised by the owner of a session to stop it at the next wait.
pub type CancelSignal = Signal<CriticalSectionRawMutex, ()>;

/// Transport that delivers frames to a panel.
#[allow(async_fn_in_trait)]
pub trait FrameSink {
    type Error;

    /// Sends one frame. `delay` is an opaque pacing hint for the transport.
    async fn send_frame(&mut self, frame: &RgbFrame, delay: f32) -> Result<(), Self::Error>;
}

/// How a session ended when the transport did not fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionEnd {
    Completed,
    Cancelled,
}

/// Scroll position within one strip period.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollState {
    pub position: u32,
    pub strip_width: u32,
    pub step: u32,
}

impl ScrollState {
    pub const fn new(strip_width: u32, step: u32) -> Self {
        Self {
            position: 0,
            strip_width: if strip_width == 0 { 1 } else { strip_width },
            step: if step == 0 { 1 } else { step },
        }
    }

    /// Moves one step forward, wrapping at the strip width.
    pub fn advance(&mut self) {
        let next = (self.position as u64 + self.step as u64) % self.strip_width as u64;
        self.position = next as u32;
    }
}

/// Waits for `duration`. Returns `true` if `cancel` fired first.
async fn wait_or_cancel(cancel: &CancelSignal, duration: Duration) -> bool {
    matches!(
        select(cancel.wait(), Timer::after(duration)).await,
        Either::First(())
    )
}

/// Shows `bitmap` according to `preset.mode`.
///
/// Static sessions send one frame and complete after a short settle time.
/// Scroll sessions run until `cancel` fires. Sink errors are returned as-is.
pub async fn run_text_session<S: FrameSink>(
    sink: &mut S,
    canvas: CanvasSize,
    bitmap: &RgbaBitmap,
    preset: &TextPreset,
    cancel: &CancelSignal,
) -> Result<SessionEnd, S::Error> {
    match preset.mode {
        DisplayMode::Static => {
            let frame = render_static_frame(
                canvas,
                bitmap,
                preset.background,
                preset.offset_x,
                preset.offset_y,
            );
            info!(
                "static session: {}x{} text on {}x{} canvas",
                bitmap.width(),
                bitmap.height(),
                canvas.width,
                canvas.height
            );
            sink.send_frame(&frame, STATIC_SEND_DELAY).await?;

            if wait_or_cancel(cancel, STATIC_SETTLE).await {
                return Ok(SessionEnd::Cancelled);
            }
            Ok(SessionEnd::Completed)
        }
        DisplayMode::Scroll => run_scroll(sink, canvas, bitmap, preset, cancel).await,
    }
}

async fn run_scroll<S: FrameSink>(
    sink: &mut S,
    canvas: CanvasSize,
    bitmap: &RgbaBitmap,
    preset: &TextPreset,
    cancel: &CancelSignal,
) -> Result<SessionEnd, S::Error> {
    let strip = ScrollStrip::new(
        canvas.height,
        bitmap,
        preset.background,
        preset.gap,
        preset.offset_y,
    );
    let mut state = ScrollState::new(strip.width(), preset.step);
    let interval = Duration::from_millis(preset.interval_ms);
    info!(
        "scroll session: strip {} px, step {}, every {} ms, {}",
        state.strip_width,
        state.step,
        preset.interval_ms,
        preset.direction.name()
    );

    loop {
        let frame = strip.render(
            canvas,
            preset.background,
            preset.direction,
            preset.offset_x,
            state.position as i64,
        );
        sink.send_frame(&frame, SCROLL_SEND_DELAY).await?;

        if wait_or_cancel(cancel, interval).await {
            info!("scroll session cancelled at position {}", state.position);
            return Ok(SessionEnd::Cancelled);
        }
        state.advance();
    }
}

/// Shows `counter.count` consecutive numbers as static frames.
pub async fn run_counter<S, F>(
    sink: &mut S,
    canvas: CanvasSize,
    font: &F,
    preset: &TextPreset,
    counter: &CounterPreset,
    cancel: &CancelSignal,
) -> Result<SessionEnd, S::Error>
where
    S: FrameSink,
    F: FontResource + ?Sized,
{
    let style = TextStyle {
        monospace_digits: true,
        ..preset.text_style()
    };
    let delay = Duration::from_millis(counter.delay_ms);
    info!(
        "counter session: {} frames from {}",
        counter.count, counter.start
    );

    let mut value = counter.start;
    for _ in 0..counter.count {
        let mut label = HeaplessString::<20>::new();
        let _ = write!(label, "{value}");
        let bitmap = build_text_bitmap(font, &label, &style);
        let frame = render_static_frame(
            canvas,
            &bitmap,
            preset.background,
            preset.offset_x,
            preset.offset_y,
        );
        debug!("counter frame {label}");
        sink.send_frame(&frame, STATIC_SEND_DELAY).await?;

        value = value.saturating_add(1);
        if wait_or_cancel(cancel, delay).await {
            return Ok(SessionEnd::Cancelled);
        }
    }

    Ok(SessionEnd::Completed)
}
