//! FrameClock: the tick sequence that drives the loop.
//!
//! Ticks are delivered one at a time on the calling thread, in strictly
//! increasing frame order. A tick callback always runs to completion before
//! the next one starts. Stopping is cooperative: [`StopHandle::stop`] only
//! prevents future ticks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

/// How ticks are spaced in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Real time, one tick per interval. Late ticks are not replayed.
    Fixed(Duration),
    /// No waiting between ticks; for headless runs and tests.
    Virtual,
}

/// Cloneable handle that stops a running clock. Idempotent.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn rearm(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug)]
pub struct FrameClock {
    pacing: Pacing,
    /// Index handed to the next tick. Not reset by stop/start.
    frame: u64,
    stop: StopHandle,
}

impl FrameClock {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            frame: 0,
            stop: StopHandle::default(),
        }
    }

    pub fn fixed(interval: Duration) -> Self {
        Self::new(Pacing::Fixed(interval))
    }

    pub fn virtual_rate() -> Self {
        Self::new(Pacing::Virtual)
    }

    /// Index the next tick will receive.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Run ticks until stopped. Returns the number of ticks delivered.
    ///
    /// An error from `on_tick` stops the clock and is returned as is.
    pub fn start<F>(&mut self, mut on_tick: F) -> Result<u64>
    where
        F: FnMut(u64) -> Result<()>,
    {
        self.stop.rearm();
        let mut delivered = 0u64;
        let mut deadline = Instant::now();

        log::debug!("clock started at frame {} ({:?})", self.frame, self.pacing);
        while !self.stop.is_stopped() {
            let frame = self.frame;
            if let Err(err) = on_tick(frame) {
                self.stop.stop();
                return Err(err);
            }
            self.frame = self.frame.wrapping_add(1);
            delivered += 1;

            if self.stop.is_stopped() {
                break;
            }
            if let Pacing::Fixed(interval) = self.pacing {
                deadline += interval;
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                } else {
                    deadline = now;
                }
            }
        }
        log::debug!("clock stopped after {delivered} ticks");
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn delivers_frames_in_order_until_stopped() {
        let mut clock = FrameClock::virtual_rate();
        let stop = clock.stop_handle();
        let mut seen = Vec::new();
        let n = clock
            .start(|frame| {
                seen.push(frame);
                if seen.len() == 5 {
                    stop.stop();
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(n, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(clock.is_stopped());
    }

    #[test]
    fn restart_continues_the_frame_counter() {
        let mut clock = FrameClock::virtual_rate();
        let stop = clock.stop_handle();
        clock
            .start(|f| {
                if f == 2 {
                    stop.stop();
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(clock.frame(), 3);

        let mut first = None;
        let stop = clock.stop_handle();
        clock
            .start(|f| {
                first.get_or_insert(f);
                stop.stop();
                Ok(())
            })
            .unwrap();
        assert_eq!(first, Some(3));
    }

    #[test]
    fn stop_is_idempotent() {
        let clock = FrameClock::virtual_rate();
        clock.stop();
        clock.stop();
        assert!(clock.is_stopped());
        clock.stop_handle().stop();
        assert!(clock.is_stopped());
    }

    #[test]
    fn tick_error_stops_the_clock() {
        let mut clock = FrameClock::virtual_rate();
        let mut calls = 0;
        let err = clock
            .start(|_| {
                calls += 1;
                if calls == 3 {
                    Err(anyhow!("flush failed"))
                } else {
                    Ok(())
                }
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "flush failed");
        assert_eq!(calls, 3);
        assert!(clock.is_stopped());
    }

    #[test]
    fn fixed_pacing_spaces_ticks() {
        let interval = Duration::from_millis(5);
        let mut clock = FrameClock::fixed(interval);
        let stop = clock.stop_handle();
        let begin = Instant::now();
        clock
            .start(|f| {
                if f == 3 {
                    stop.stop();
                }
                Ok(())
            })
            .unwrap();
        // Three full intervals elapse between four ticks.
        assert!(begin.elapsed() >= interval * 3);
    }
}
