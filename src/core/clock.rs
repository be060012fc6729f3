//=========================================================================
// Clock
//=========================================================================
//
// Monotonic millisecond tick source used for frame pacing and timers.
//
// `SystemClock` reads `Instant` and sleeps the thread. `ManualClock` only
// moves when told to, so loops that pace themselves can be tested
// without sleeping.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

//=== Clock Trait =========================================================

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds elapsed since the clock was created.
    fn ticks_ms(&self) -> u64;

    /// Blocks for `ms` milliseconds.
    fn delay(&self, ms: u64);
}

//=== SystemClock =========================================================

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

//=== ManualClock =========================================================

/// Clock that advances only through [`ManualClock::advance`] or
/// [`Clock::delay`].
///
/// Also records the total time spent in `delay`, which lets tests check
/// frame pacing.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    delayed: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `ms` without counting it as a delay.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    /// Total milliseconds requested through [`Clock::delay`].
    pub fn total_delay(&self) -> u64 {
        self.delayed.get()
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay(&self, ms: u64) {
        self.advance(ms);
        self.delayed.set(self.delayed.get() + ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.ticks_ms(), 0);
        assert_eq!(clock.total_delay(), 0);
    }

    #[test]
    fn manual_clock_delay_advances_and_is_recorded() {
        let clock = ManualClock::new();
        clock.advance(7);
        clock.delay(43);
        assert_eq!(clock.ticks_ms(), 50);
        assert_eq!(clock.total_delay(), 43);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.ticks_ms();
        clock.delay(2);
        let b = clock.ticks_ms();
        assert!(b >= a + 2);
    }
}
