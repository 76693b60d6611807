//! Bubble Wars EX ∞ (workspace facade crate).
//!
//! Re-exports the member crates as `bubble_wars::{types, core, engine, input, term}`
//! and hosts the binary-side plumbing (configuration, argument parsing,
//! logging setup and the headless runner) so it can be tested.

pub use bubble_wars_core as core;
pub use bubble_wars_engine as engine;
pub use bubble_wars_input as input;
pub use bubble_wars_term as term;
pub use bubble_wars_types as types;

pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
