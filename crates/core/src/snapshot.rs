use serde::Serialize;

use crate::types::{RunState, Stats};

/// Read-only view of a session, handed to the HUD and to headless output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HudSnapshot {
    pub frame: u64,
    pub run_state: RunState,
    pub sound_enabled: bool,
    pub stats: Stats,
}

impl HudSnapshot {
    pub fn running(&self) -> bool {
        self.run_state == RunState::Running
    }
}

impl Default for HudSnapshot {
    fn default() -> Self {
        Self {
            frame: 0,
            run_state: RunState::Stopped,
            sound_enabled: true,
            stats: Stats::default(),
        }
    }
}
