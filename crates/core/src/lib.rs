//! Core module - pure, deterministic, and testable
//!
//! This module contains the stats store, the run/pause/stop state machine
//! and the random-walk simulation step. It has **zero dependencies** on
//! terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical stats trajectories
//! - **Testable**: Every transition and draw is unit tested
//! - **Portable**: Runs the same in the terminal loop and headless
//!
//! # Module Structure
//!
//! - [`rng`]: Injectable [`RandomSource`] trait and a seeded LCG
//! - [`run_state`]: Stopped/Running/Paused state machine
//! - [`session`]: Authoritative [`Stats`](types::Stats) store gated by the run state
//! - [`sim`]: One tick of the stats random walk
//! - [`snapshot`]: Read-only view handed to the HUD
//!
//! # Example
//!
//! ```
//! use bubble_wars_core::Session;
//! use bubble_wars_types::{Command, RunState};
//!
//! let mut session = Session::new(12345);
//! assert!(!session.step()); // stopped: no simulation
//!
//! session.apply(Command::Start);
//! for _ in 0..100 {
//!     session.step();
//! }
//! assert_eq!(session.run_state(), RunState::Running);
//! assert_eq!(session.steps(), 100);
//!
//! session.apply(Command::Reset);
//! assert_eq!(session.stats().score, 0);
//! ```

pub mod rng;
pub mod run_state;
pub mod session;
pub mod sim;
pub mod snapshot;

pub use bubble_wars_types as types;

// Re-export commonly used types for convenience
pub use rng::{RandomSource, SimpleRng};
pub use run_state::{RunStateMachine, Transition};
pub use session::Session;
pub use sim::advance;
pub use snapshot::HudSnapshot;
