//! Host-side preview for BK-Light panels.
//!
//! Renders text, counters and calibration frames with `bk-light-core` and
//! draws them in the terminal instead of sending them over BLE.

use core::{convert::Infallible, future::pending};

use bk_light_core::{
    Rgb,
    font::{LoadedFont, load_font},
    render::{build_text_bitmap, render_corner_markers, render_panel_marker},
    session::{CancelSignal, FrameSink, SessionEnd, run_counter, run_text_session},
};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_time::Timer;
use log::{error, info, warn};

use env_config::{Command, EnvConfig};
use preview::TerminalSink;

#[path = "main/env_config.rs"]
mod env_config;
#[path = "main/preview.rs"]
mod preview;

const CORNER_MARKER: Rgb = Rgb::new(255, 0, 0);

static CANCEL: CancelSignal = CancelSignal::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The executor never returns, so the process has to exit explicitly.
    std::process::exit(exit_code(&run().await));
}

fn exit_code(result: &Result<(), ()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(()) => 1,
    }
}

/// Runs one command. Failures are logged before returning.
async fn run() -> Result<(), ()> {
    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            error!("{err}");
            return Err(());
        }
    };
    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return Err(());
        }
    };

    let mut sink = TerminalSink::new();
    if let Some(path) = config.dump_path.as_deref() {
        sink = match sink.with_dump(path) {
            Ok(sink) => sink,
            Err(err) => {
                error!("cannot open frame dump {}: {err}", path.display());
                return Err(());
            }
        };
    }

    let preset = match command {
        Command::Counter => config.counter_preset(),
        _ => config.text_preset(),
    };
    let font = load_configured_font(&config, preset.size);
    info!(
        "canvas {}x{}, font size {} ({})",
        config.canvas.width,
        config.canvas.height,
        preset.size,
        if font.is_builtin() { "built-in" } else { "outline" }
    );

    let session = async {
        match &command {
            Command::Text(text) => {
                let bitmap = build_text_bitmap(&font, text, &preset.text_style());
                run_text_session(&mut sink, config.canvas, &bitmap, &preset, &CANCEL).await
            }
            Command::Counter => {
                run_counter(
                    &mut sink,
                    config.canvas,
                    &font,
                    &preset,
                    &config.counter,
                    &CANCEL,
                )
                .await
            }
            Command::Corners => {
                let frame = render_corner_markers(config.canvas, preset.background, CORNER_MARKER);
                sink.send_frame(&frame, 0.1).await.map(|()| SessionEnd::Completed)
            }
            Command::Panel(number) => {
                let frame = render_panel_marker(config.canvas, *number, preset.color, preset.antialias);
                sink.send_frame(&frame, 0.1).await.map(|()| SessionEnd::Completed)
            }
        }
    };

    let deadline = async {
        match config.run_for {
            Some(duration) => {
                Timer::after(duration).await;
                info!("run time elapsed, stopping");
                CANCEL.signal(());
            }
            None => warn!("no BK_LIGHT_RUN_MS set; scroll sessions run until interrupted"),
        }
        pending::<Infallible>().await
    };

    let result = match select(session, deadline).await {
        Either::First(result) => result,
        Either::Second(never) => match never {},
    };
    match result {
        Ok(end) => {
            info!("session {end:?} after {} frames", sink.frames());
            Ok(())
        }
        Err(err) => {
            error!("frame output failed: {err}");
            Err(())
        }
    }
}

fn load_configured_font(config: &EnvConfig, size: u32) -> LoadedFont {
    let Some(path) = config.font_path.as_deref() else {
        return load_font(None, size);
    };

    match std::fs::read(path) {
        Ok(bytes) => load_font(Some(&bytes), size),
        Err(err) => {
            warn!("cannot read font {}: {err}", path.display());
            load_font(None, size)
        }
    }
}
