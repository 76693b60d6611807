//! Viewport sizing.
//!
//! The loop asks a [`ViewportSource`] for the current size at the start of
//! every tick instead of caching it, so terminal resizes take effect on the
//! next frame without restarting anything.

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A zero-sized surface cannot be drawn on.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

pub trait ViewportSource {
    fn viewport(&mut self) -> Viewport;
}

/// Queries the real terminal size every time.
#[derive(Debug, Default)]
pub struct TerminalViewport {
    last: Option<Viewport>,
}

impl TerminalViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportSource for TerminalViewport {
    fn viewport(&mut self) -> Viewport {
        let vp = match crossterm::terminal::size() {
            Ok((w, h)) => Viewport::new(w, h),
            Err(err) => {
                log::debug!("terminal size unavailable: {err}");
                Viewport::default()
            }
        };
        if self.last != Some(vp) {
            log::debug!("viewport {}x{}", vp.width, vp.height);
            self.last = Some(vp);
        }
        vp
    }
}

/// A fixed size, for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub Viewport);

impl FixedViewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self(Viewport::new(width, height))
    }

    pub fn set(&mut self, width: u16, height: u16) {
        self.0 = Viewport::new(width, height);
    }
}

impl ViewportSource for FixedViewport {
    fn viewport(&mut self) -> Viewport {
        self.0
    }
}
