//=========================================================================
// Timers
//=========================================================================
//
// Pausable stopwatch and average frame-rate counter.
//
// Both are driven by explicit tick readings (`now` in milliseconds) taken
// from a [`Clock`](crate::core::clock::Clock), so they hold no reference
// to the clock themselves.
//
//=========================================================================

//=== Timer ===============================================================

/// Stopwatch with pause support.
///
/// ```text
///   stopped ──start──> running ──pause──> paused
///      ^                  │  ^              │
///      └──────stop────────┘  └───unpause────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    start_ticks: u64,
    paused_ticks: u64,
    started: bool,
    paused: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the timer at `now`.
    pub fn start(&mut self, now: u64) {
        self.started = true;
        self.paused = false;
        self.start_ticks = now;
        self.paused_ticks = 0;
    }

    /// Stops the timer and clears its readings.
    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.start_ticks = 0;
        self.paused_ticks = 0;
    }

    /// Freezes the reading. No-op unless running and not yet paused.
    pub fn pause(&mut self, now: u64) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_ticks = now.saturating_sub(self.start_ticks);
            self.start_ticks = 0;
        }
    }

    /// Resumes from the frozen reading. No-op unless paused.
    pub fn unpause(&mut self, now: u64) {
        if self.started && self.paused {
            self.paused = false;
            self.start_ticks = now.saturating_sub(self.paused_ticks);
            self.paused_ticks = 0;
        }
    }

    /// Milliseconds measured so far. Zero when stopped.
    pub fn ticks(&self, now: u64) -> u64 {
        if !self.started {
            return 0;
        }

        if self.paused {
            self.paused_ticks
        } else {
            now.saturating_sub(self.start_ticks)
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Paused and running.
    pub fn is_paused(&self) -> bool {
        self.paused && self.started
    }
}

//=== FrameRateCounter ====================================================

/// Average frames-per-second since the counter was started.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameRateCounter {
    timer: Timer,
    frames: u64,
}

impl FrameRateCounter {
    /// Readings above this are the result of dividing by a near-zero
    /// elapsed time and are reported as zero.
    const MAX_PLAUSIBLE_FPS: f64 = 2_000_000.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: u64) {
        self.timer.start(now);
        self.frames = 0;
    }

    pub fn is_started(&self) -> bool {
        self.timer.is_started()
    }

    /// Records one presented frame.
    pub fn count_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average frame rate between `start` and `now`.
    pub fn average_fps(&self, now: u64) -> f64 {
        let elapsed_ms = self.timer.ticks(now);
        if elapsed_ms == 0 {
            return 0.0;
        }

        let fps = self.frames as f64 / (elapsed_ms as f64 / 1000.0);
        if fps > Self::MAX_PLAUSIBLE_FPS {
            0.0
        } else {
            fps
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Timer ------------------------------------------------------------

    #[test]
    fn stopped_timer_reads_zero() {
        let timer = Timer::new();
        assert!(!timer.is_started());
        assert!(!timer.is_paused());
        assert_eq!(timer.ticks(1_000), 0);
    }

    #[test]
    fn running_timer_measures_elapsed() {
        let mut timer = Timer::new();
        timer.start(100);
        assert!(timer.is_started());
        assert_eq!(timer.ticks(130), 30);
    }

    #[test]
    fn pause_freezes_and_unpause_resumes() {
        let mut timer = Timer::new();
        timer.start(0);
        timer.pause(40);
        assert!(timer.is_paused());
        assert_eq!(timer.ticks(500), 40);

        timer.unpause(500);
        assert!(!timer.is_paused());
        assert_eq!(timer.ticks(510), 50);
    }

    #[test]
    fn pause_before_start_is_noop() {
        let mut timer = Timer::new();
        timer.pause(10);
        assert!(!timer.is_paused());
        timer.unpause(20);
        assert!(!timer.is_started());
    }

    #[test]
    fn double_pause_keeps_first_reading() {
        let mut timer = Timer::new();
        timer.start(0);
        timer.pause(10);
        timer.pause(90);
        assert_eq!(timer.ticks(100), 10);
    }

    #[test]
    fn stop_resets() {
        let mut timer = Timer::new();
        timer.start(5);
        timer.pause(15);
        timer.stop();
        assert!(!timer.is_started());
        assert!(!timer.is_paused());
        assert_eq!(timer.ticks(100), 0);
    }

    #[test]
    fn restart_discards_pause() {
        let mut timer = Timer::new();
        timer.start(0);
        timer.pause(10);
        timer.start(200);
        assert!(!timer.is_paused());
        assert_eq!(timer.ticks(250), 50);
    }

    //--- FrameRateCounter -------------------------------------------------

    #[test]
    fn average_fps_over_elapsed_time() {
        let mut counter = FrameRateCounter::new();
        counter.start(0);
        for _ in 0..40 {
            counter.count_frame();
        }
        assert_eq!(counter.frames(), 40);
        assert!((counter.average_fps(2_000) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_elapsed_reports_zero() {
        let mut counter = FrameRateCounter::new();
        counter.start(10);
        counter.count_frame();
        assert_eq!(counter.average_fps(10), 0.0);
    }

    #[test]
    fn start_resets_frame_count() {
        let mut counter = FrameRateCounter::new();
        counter.start(0);
        counter.count_frame();
        counter.start(100);
        assert_eq!(counter.frames(), 0);
    }
}
