//! Command line parsing.
//!
//! ```text
//! bubble-wars                      interactive terminal mode
//! bubble-wars headless [options]   run without a terminal, print JSON
//!     --ticks N     ticks to run (default 1000)
//!     --seed S      seed (default: BUBBLE_WARS_SEED or clock)
//!     --every K     also print a snapshot every K ticks
//!     --width W     virtual surface width in cells (default 80)
//!     --height H    virtual surface height in cells (default 24)
//! ```

use std::str::FromStr;

use anyhow::{anyhow, Result};

pub const DEFAULT_HEADLESS_TICKS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessArgs {
    pub ticks: u64,
    pub seed: Option<u32>,
    pub every: Option<u64>,
    pub width: u16,
    pub height: u16,
}

impl Default for HeadlessArgs {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_HEADLESS_TICKS,
            seed: None,
            every: None,
            width: 80,
            height: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Headless(HeadlessArgs),
}

pub fn parse_args(args: &[String]) -> Result<Mode> {
    let Some(first) = args.first() else {
        return Ok(Mode::Interactive);
    };
    if first != "headless" {
        return Err(anyhow!("unknown command: {}", first));
    }

    let mut out = HeadlessArgs::default();
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("headless: missing value for {}", flag))?;
        match flag {
            "--ticks" => out.ticks = parse_value(flag, value)?,
            "--seed" => out.seed = Some(parse_value(flag, value)?),
            "--every" => {
                let every: u64 = parse_value(flag, value)?;
                if every == 0 {
                    return Err(anyhow!("headless: --every must be positive"));
                }
                out.every = Some(every);
            }
            "--width" => out.width = parse_value(flag, value)?,
            "--height" => out.height = parse_value(flag, value)?,
            other => return Err(anyhow!("headless: unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Mode::Headless(out))
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("headless: invalid {} value: {}", flag, value))
}
