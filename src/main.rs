//! Bubble Wars EX ∞ runner (default binary).
//!
//! Interactive mode draws the animated canvas and HUD into a framebuffer
//! and flushes it with crossterm once per tick. `headless` runs the same
//! loop without a terminal and prints JSON snapshots.

use std::io;

use anyhow::Result;

use bubble_wars::cli::{parse_args, Mode};
use bubble_wars::config::Config;
use bubble_wars::core::Session;
use bubble_wars::engine::{Driver, FrameClock};
use bubble_wars::headless::run_headless;
use bubble_wars::input::InputBatch;
use bubble_wars::logging::{self, LogTarget};
use bubble_wars::term::{TerminalRenderer, TerminalViewport, ViewportSource};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = parse_args(&args)?;
    let config = Config::from_env();

    match mode {
        Mode::Headless(headless) => {
            logging::init(LogTarget::file_or(
                config.log_path.as_deref(),
                LogTarget::Stderr,
            ))?;
            let seed = headless.seed.unwrap_or(config.seed);
            let stdout = io::stdout();
            run_headless(&headless, seed, &mut stdout.lock())?;
            Ok(())
        }
        Mode::Interactive => {
            logging::init(LogTarget::file_or(
                config.log_path.as_deref(),
                LogTarget::Disabled,
            ))?;

            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    log::info!("starting: seed {}, tick {}ms", config.seed, config.tick_ms);

    let mut driver = Driver::new(Session::new(config.seed));
    let mut viewport = TerminalViewport::new();
    let mut input = InputBatch::new();
    let mut clock = FrameClock::fixed(config.tick_interval());
    let stop = clock.stop_handle();

    let ticks = clock.start(|frame| {
        // Commands and resizes land between ticks.
        input.clear();
        input.drain_pending()?;
        if input.quit_requested() {
            stop.stop();
            return Ok(());
        }
        if input.resized() {
            term.invalidate();
        }
        driver.apply_all(input.commands());

        driver.tick(frame, viewport.viewport());
        term.draw_swap(driver.framebuffer_mut())?;
        Ok(())
    })?;

    log::info!(
        "quit after {ticks} ticks ({} skipped draws)",
        driver.skipped_frames()
    );
    Ok(())
}
