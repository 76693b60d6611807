//! Terminal "canvas renderer" module.
//!
//! This is a small, game-oriented rendering layer for the terminal. It
//! renders into a simple framebuffer that is then flushed to a terminal
//! backend, with no widget toolkit in between.
//!
//! - [`scene`]: the animated canvas (gradient, grid, circles, titles, stats)
//! - [`hud`]: the read-only overlay fed by a [`core::HudSnapshot`]
//! - [`viewport`]: per-tick surface sizing
//! - [`renderer`]: diffing terminal output

pub mod fb;
pub mod hud;
pub mod renderer;
pub mod scene;
pub mod viewport;

pub use bubble_wars_core as core;
pub use bubble_wars_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use hud::HudOverlay;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::Scene;
pub use viewport::{FixedViewport, TerminalViewport, Viewport, ViewportSource};
