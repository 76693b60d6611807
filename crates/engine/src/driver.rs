//! Loop driver: one tick = draw, then (maybe) simulate.
//!
//! The driver owns the session (and with it the only writable copy of the
//! stats), the scene, the HUD and the reusable framebuffer. It does no I/O;
//! flushing the framebuffer is up to the caller.

use crate::core::{HudSnapshot, RandomSource, Session, SimpleRng};
use crate::term::{FrameBuffer, HudOverlay, Scene, Viewport};
use crate::types::{Command, RunState, Stats};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub frame: u64,
    /// False when the surface was unavailable and the draw was skipped.
    pub drawn: bool,
    /// True when the simulation advanced.
    pub stepped: bool,
}

#[derive(Debug)]
pub struct Driver<R = SimpleRng> {
    session: Session<R>,
    scene: Scene,
    hud: HudOverlay,
    fb: FrameBuffer,
    last_frame: u64,
    skipped: u64,
}

impl<R: RandomSource> Driver<R> {
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            scene: Scene::default(),
            hud: HudOverlay::new(),
            fb: FrameBuffer::new(0, 0),
            last_frame: 0,
            skipped: 0,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn stats(&self) -> Stats {
        self.session.stats()
    }

    pub fn run_state(&self) -> RunState {
        self.session.run_state()
    }

    /// Snapshot as of the most recent tick.
    pub fn snapshot(&self) -> HudSnapshot {
        self.session.snapshot(self.last_frame)
    }

    /// Frames whose draw was skipped because the surface was unavailable.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped
    }

    /// Apply a control command between ticks.
    pub fn apply(&mut self, command: Command) -> bool {
        self.session.apply(command)
    }

    pub fn apply_all(&mut self, commands: &[Command]) {
        for &cmd in commands {
            self.session.apply(cmd);
        }
    }

    /// Run one tick: render the current stats, then advance them if running.
    pub fn tick(&mut self, frame: u64, viewport: Viewport) -> TickReport {
        self.last_frame = frame;
        let stats = self.session.stats();

        let drawn = self.scene.render_into(&mut self.fb, viewport, frame, &stats);
        if drawn {
            let snap = self.session.snapshot(frame);
            self.hud.render_into(&mut self.fb, &snap);
        } else {
            self.skipped += 1;
        }

        let stepped = self.session.step();
        TickReport {
            frame,
            drawn,
            stepped,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Mutable access for swap-based flushing.
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }
}

impl Default for Driver<SimpleRng> {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
