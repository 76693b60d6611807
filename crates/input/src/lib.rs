//! Terminal input module (control surface).
//!
//! This module is intentionally independent of the renderer. It maps
//! `crossterm` key events into [`types::Command`]s and batches everything
//! that arrived since the previous tick so the loop can apply it between
//! frames.

pub mod batch;
pub mod map;

pub use bubble_wars_types as types;

pub use batch::{InputBatch, MAX_COMMANDS_PER_TICK};
pub use map::{handle_key_event, should_quit};
