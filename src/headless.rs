//! Headless runner: the same loop under a virtual clock, no terminal.
//!
//! Starts a run, ticks it `ticks` times against a fixed-size surface and
//! writes one JSON [`HudSnapshot`] per line: every `every` ticks when
//! requested, and always once at the end.

use std::io::Write;

use anyhow::Result;

use crate::cli::HeadlessArgs;
use crate::core::{HudSnapshot, Session};
use crate::engine::{Driver, FrameClock};
use crate::term::{FixedViewport, ViewportSource};
use crate::types::Command;

pub fn run_headless(args: &HeadlessArgs, seed: u32, out: &mut impl Write) -> Result<HudSnapshot> {
    let mut driver = Driver::new(Session::new(seed));
    driver.apply(Command::Start);
    log::info!(
        "headless run: seed {seed}, {} ticks on {}x{}",
        args.ticks,
        args.width,
        args.height
    );

    if args.ticks > 0 {
        let mut viewport = FixedViewport::new(args.width, args.height);
        let mut clock = FrameClock::virtual_rate();
        let stop = clock.stop_handle();
        let mut done = 0u64;

        clock.start(|frame| {
            driver.tick(frame, viewport.viewport());
            done += 1;
            if done >= args.ticks {
                stop.stop();
            } else if args.every.is_some_and(|k| done % k == 0) {
                write_snapshot(&mut *out, &driver.snapshot())?;
            }
            Ok(())
        })?;
    }

    let last = driver.snapshot();
    write_snapshot(out, &last)?;
    log::info!(
        "headless run finished: score {}, wave {}, gems {}",
        last.stats.score,
        last.stats.wave,
        last.stats.gems
    );
    Ok(last)
}

fn write_snapshot(out: &mut impl Write, snap: &HudSnapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snap)?;
    out.write_all(b"\n")?;
    Ok(())
}
