//! Session - the authoritative stats store and its run state.
//!
//! A session is the single writer of [`Stats`]. Control commands go through
//! [`Session::apply`], and the loop calls [`Session::step`] once per tick.
//! Readers get copies via [`Session::stats`] or [`Session::snapshot`].

use crate::rng::{RandomSource, SimpleRng};
use crate::run_state::{RunStateMachine, Transition};
use crate::sim;
use crate::snapshot::HudSnapshot;
use crate::types::{Command, RunState, Stats};

#[derive(Debug, Clone)]
pub struct Session<R = SimpleRng> {
    stats: Stats,
    machine: RunStateMachine,
    rng: R,
    /// Display-only flag; there is no audio subsystem behind it.
    sound_enabled: bool,
    /// Number of simulation steps taken in the current run.
    steps: u64,
}

impl Session<SimpleRng> {
    /// Create a session with the default LCG source.
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            stats: Stats::default(),
            machine: RunStateMachine::new(),
            rng,
            sound_enabled: true,
            steps: 0,
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn run_state(&self) -> RunState {
        self.machine.state()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn snapshot(&self, frame: u64) -> HudSnapshot {
        HudSnapshot {
            frame,
            run_state: self.machine.state(),
            sound_enabled: self.sound_enabled,
            stats: self.stats,
        }
    }

    pub fn start(&mut self) -> bool {
        self.apply(Command::Start)
    }

    pub fn pause(&mut self) -> bool {
        self.apply(Command::Pause)
    }

    pub fn resume(&mut self) -> bool {
        self.apply(Command::Resume)
    }

    pub fn reset(&mut self) -> bool {
        self.apply(Command::Reset)
    }

    /// Apply a control command. Returns `false` when it had no effect.
    pub fn apply(&mut self, command: Command) -> bool {
        if command == Command::ToggleSound {
            self.sound_enabled = !self.sound_enabled;
            log::info!(
                "sound {}",
                if self.sound_enabled { "on" } else { "off" }
            );
            return true;
        }

        let transition = self.machine.apply(command);
        match transition {
            Transition::Ignored => {
                log::debug!(
                    "{} ignored while {}",
                    command.as_str(),
                    self.machine.state().as_str()
                );
            }
            Transition::Moved { from, to } => {
                log::info!("{}: {} -> {}", command.as_str(), from.as_str(), to.as_str());
            }
            Transition::Restarted { from, to } => {
                self.stats = Stats::default();
                self.steps = 0;
                log::info!(
                    "{}: {} -> {}, stats reset",
                    command.as_str(),
                    from.as_str(),
                    to.as_str()
                );
            }
        }
        transition.changed()
    }

    /// Advance the stats by one tick if running. Returns whether a step ran.
    pub fn step(&mut self) -> bool {
        if !self.machine.is_running() {
            return false;
        }
        self.stats = sim::advance(&self.stats, &mut self.rng);
        self.steps = self.steps.wrapping_add(1);
        true
    }
}

impl Default for Session<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
