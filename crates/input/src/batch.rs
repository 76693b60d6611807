//! Per-tick input batching.
//!
//! Events are drained without blocking at the start of a tick. Commands are
//! kept in arrival order in a fixed-capacity buffer; extra commands beyond
//! the capacity in a single tick are dropped.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::Command;

pub const MAX_COMMANDS_PER_TICK: usize = 16;

#[derive(Debug, Clone, Default)]
pub struct InputBatch {
    commands: ArrayVec<Command, MAX_COMMANDS_PER_TICK>,
    quit: bool,
    resized: bool,
}

impl InputBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous tick.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.quit = false;
        self.resized = false;
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn resized(&self) -> bool {
        self.resized
    }

    /// Record one terminal event.
    pub fn push_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    self.quit = true;
                } else if let Some(cmd) = handle_key_event(key) {
                    let _ = self.commands.try_push(cmd);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }

    /// Drain every event that is already pending, without waiting.
    pub fn drain_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            self.push_event(event::read()?);
        }
        Ok(())
    }
}
