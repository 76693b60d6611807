//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they can be used from the
//! simulation, the renderer and the headless JSON output alike.
//!
//! # Timing and animation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default tick interval (~60 FPS) |
//! | `GRID_SIZE_PX` | 60.0 | Spacing of the background grid lines |
//! | `SCROLL_SPEED_PX` | 0.5 | Grid scroll per frame |
//! | `WOBBLE_AMPLITUDE_PX` | 20.0 | Circle drift amplitude |
//! | `WOBBLE_RATE` | 0.005 | Circle drift angular rate per frame |
//!
//! # Simulation constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_STEP_MAX` | 9 | Score gain per running tick is uniform in `0..=9` |
//! | `WAVE_CHANCE` | 0.001 | Per-tick probability of a new wave |
//! | `GEM_CHANCE` | 0.005 | Per-tick probability of a gem pickup |
//! | `GEM_MIN..=GEM_MAX` | 1..=5 | Gems granted per pickup |
//!
//! # Examples
//!
//! ```
//! use bubble_wars_types::{Command, RunState, Stats};
//!
//! let stats = Stats::default();
//! assert_eq!(stats.wave, 1);
//! assert_eq!(stats.lives, 3);
//!
//! assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
//! assert_eq!(RunState::default(), RunState::Stopped);
//! ```

use serde::Serialize;

/// Default tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Width of one terminal cell in virtual canvas pixels.
pub const CELL_PX_W: f64 = 8.0;

/// Height of one terminal cell in virtual canvas pixels.
pub const CELL_PX_H: f64 = 16.0;

/// Distance between two background grid lines, in virtual pixels.
pub const GRID_SIZE_PX: f64 = 60.0;

/// Grid scroll speed in virtual pixels per frame.
pub const SCROLL_SPEED_PX: f64 = 0.5;

/// Peak displacement of the background circles, in virtual pixels.
pub const WOBBLE_AMPLITUDE_PX: f64 = 20.0;

/// Angular rate of the circle drift (radians per frame).
pub const WOBBLE_RATE: f64 = 0.005;

/// Frame offset between the drift phases of consecutive circles.
pub const WOBBLE_PHASE_FRAMES: u64 = 1000;

/// Largest score gain of a single running tick.
pub const SCORE_STEP_MAX: u32 = 9;

/// Per-tick probability that a new wave starts.
pub const WAVE_CHANCE: f64 = 0.001;

/// Per-tick probability of a gem pickup.
pub const GEM_CHANCE: f64 = 0.005;

/// Smallest gem pickup.
pub const GEM_MIN: u32 = 1;

/// Largest gem pickup.
pub const GEM_MAX: u32 = 5;

/// Lives granted at the start of every run.
pub const STARTING_LIVES: u32 = 3;

/// Game statistics shown on the canvas and in the HUD.
///
/// This is the only persistent record of a run. It is reset on `start` and
/// `reset`, and otherwise only changed by the simulation step.
///
/// - `wave` and `level` start at 1 and never decrease during a run
/// - `lives` is displayed and reset but never changed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stats {
    pub score: u64,
    pub wave: u32,
    pub lives: u32,
    pub level: u32,
    pub gems: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            score: 0,
            wave: 1,
            lives: STARTING_LIVES,
            level: 1,
            gems: 0,
        }
    }
}

/// Run state of a session.
///
/// - **Stopped**: initial state, simulation idle
/// - **Running**: simulation advances once per tick
/// - **Paused**: simulation idle, stats kept
///
/// Rendering happens every tick in all three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunState {
    /// Upper-case label shown by the HUD indicator.
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Stopped => "STOPPED",
            RunState::Running => "RUNNING",
            RunState::Paused => "PAUSED",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Stopped => "stopped",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

/// Commands issued by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a fresh run (only from Stopped)
    Start,
    /// Pause a running session
    Pause,
    /// Resume a paused session
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    /// Stop the run and restore default stats
    Reset,
    /// Flip the sound indicator (no audio is attached)
    ToggleSound,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bubble_wars_types::Command;
    ///
    /// assert_eq!(Command::from_str("start"), Some(Command::Start));
    /// assert_eq!(Command::from_str("RESET"), Some(Command::Reset));
    /// assert_eq!(Command::from_str("toggleSound"), Some(Command::ToggleSound));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "togglepause" => Some(Command::TogglePause),
            "reset" => Some(Command::Reset),
            "togglesound" => Some(Command::ToggleSound),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::TogglePause => "togglePause",
            Command::Reset => "reset",
            Command::ToggleSound => "toggleSound",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_match_a_fresh_run() {
        let s = Stats::default();
        assert_eq!(s.score, 0);
        assert_eq!(s.wave, 1);
        assert_eq!(s.lives, 3);
        assert_eq!(s.level, 1);
        assert_eq!(s.gems, 0);
    }

    #[test]
    fn command_names_round_trip() {
        for cmd in [
            Command::Start,
            Command::Pause,
            Command::Resume,
            Command::TogglePause,
            Command::Reset,
            Command::ToggleSound,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn grid_period_is_whole_frames() {
        let period = GRID_SIZE_PX / SCROLL_SPEED_PX;
        assert_eq!(period.fract(), 0.0);
    }
}
