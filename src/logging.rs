//! Logger setup.
//!
//! The interactive mode owns the terminal, so logs either go to a file or
//! nowhere. Headless mode writes them to stderr, leaving stdout for JSON.
//! The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File when a path is configured, otherwise `fallback`.
    pub fn file_or(path: Option<&str>, fallback: LogTarget) -> Self {
        match path {
            Some(p) => LogTarget::File(PathBuf::from(p)),
            None => fallback,
        }
    }
}

pub fn init(target: LogTarget) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    match &target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
    }
    builder.try_init().context("install logger")?;
    Ok(())
}
