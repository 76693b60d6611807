//! Run/pause/stop state machine.
//!
//! Every transition is total: a command that has no edge from the current
//! state is a silent no-op and reports `false`.
//!
//! ```text
//!            start              pause
//! Stopped ──────────▶ Running ────────▶ Paused
//!    ▲                  ▲   ◀────────     │
//!    │                  │     resume      │
//!    └──────── reset ───┴─────────────────┘
//! ```

use crate::types::{Command, RunState};

/// Outcome of a command applied to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No edge for this command; nothing changed.
    Ignored,
    /// The state moved from one value to another.
    Moved { from: RunState, to: RunState },
    /// The run was (re)initialised; the owner must reset its stats.
    Restarted { from: RunState, to: RunState },
}

impl Transition {
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }

    pub fn resets_stats(&self) -> bool {
        matches!(self, Transition::Restarted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStateMachine {
    state: RunState,
}

impl RunStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the simulation should advance on this tick.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn start(&mut self) -> Transition {
        match self.state {
            RunState::Stopped => self.restart_into(RunState::Running),
            _ => Transition::Ignored,
        }
    }

    pub fn pause(&mut self) -> Transition {
        match self.state {
            RunState::Running => self.move_to(RunState::Paused),
            _ => Transition::Ignored,
        }
    }

    pub fn resume(&mut self) -> Transition {
        match self.state {
            RunState::Paused => self.move_to(RunState::Running),
            _ => Transition::Ignored,
        }
    }

    pub fn toggle_pause(&mut self) -> Transition {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
            RunState::Stopped => Transition::Ignored,
        }
    }

    /// Stop a running or paused run and reset its stats.
    ///
    /// Stopped is only ever entered with default stats, so resetting while
    /// stopped has nothing to undo.
    pub fn reset(&mut self) -> Transition {
        match self.state {
            RunState::Running | RunState::Paused => self.restart_into(RunState::Stopped),
            RunState::Stopped => Transition::Ignored,
        }
    }

    /// Apply a run-control command. `ToggleSound` has no edge here.
    pub fn apply(&mut self, command: Command) -> Transition {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::ToggleSound => Transition::Ignored,
        }
    }

    fn move_to(&mut self, to: RunState) -> Transition {
        let from = self.state;
        self.state = to;
        Transition::Moved { from, to }
    }

    fn restart_into(&mut self, to: RunState) -> Transition {
        let from = self.state;
        self.state = to;
        Transition::Restarted { from, to }
    }
}
