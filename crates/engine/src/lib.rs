//! Engine module - the frame loop.
//!
//! - [`clock`]: [`FrameClock`] delivers ticks, real-time or virtual
//! - [`driver`]: [`Driver`] runs one tick (render, then step when running)
//!
//! # Example
//!
//! ```
//! use bubble_wars_engine::{Driver, FrameClock};
//! use bubble_wars_core::Session;
//! use bubble_wars_term::Viewport;
//! use bubble_wars_types::Command;
//!
//! let mut driver = Driver::new(Session::new(7));
//! driver.apply(Command::Start);
//!
//! let mut clock = FrameClock::virtual_rate();
//! let stop = clock.stop_handle();
//! clock
//!     .start(|frame| {
//!         driver.tick(frame, Viewport::new(80, 24));
//!         if frame == 99 {
//!             stop.stop();
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(driver.session().steps(), 100);
//! ```

pub mod clock;
pub mod driver;

pub use bubble_wars_core as core;
pub use bubble_wars_term as term;
pub use bubble_wars_types as types;

pub use clock::{FrameClock, Pacing, StopHandle};
pub use driver::{Driver, TickReport};
