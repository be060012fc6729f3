//=========================================================================
// Core Systems
//
// Platform-independent heart of the demo: the state machine, the world
// it simulates, and the driver loop that ties them to input, rendering
// and time.
//
// Responsibilities:
// - Poll input once per iteration and hand it to the active state
// - Run state logic, apply at most one transition, render
// - Keep a fixed frame interval using a millisecond clock
//
// Notes:
// Everything here is single-threaded and talks to the outside world only
// through the `InputSource`, `Canvas` and `Clock` traits, so the whole
// machine runs headless in tests.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Crates =====================================================

use log::{debug, info};

//=== Module Declarations =================================================

pub mod clock;
pub mod globals;
pub mod input;
pub mod render;
pub mod scene;
pub mod timer;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

//=== Internal Modules ====================================================

use crate::error::EngineError;
use clock::Clock;
use globals::GlobalContext;
use input::{InputEvent, InputSource};
use render::Canvas;
use scene::{SceneManager, StateKind};
use timer::{FrameRateCounter, Timer};
use world::Size;

//=== TickControl =========================================================
//
// Defines control flow for the driver loop.
// Each iteration signals either to continue or terminate the loop.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== Driver ==============================================================

/// Runs the state machine one frame at a time.
///
/// Each iteration:
///  1. Polls every pending input event
///  2. `handle_input` on the active state
///  3. `logic` on the active state
///  4. Applies the pending transition (Exit stops here, nothing is drawn)
///  5. `render` and present
///
/// Frame pacing is left to the caller through [`Driver::frame_delay`], or
/// done by [`Driver::run`] with a [`Clock`].
pub struct Driver {
    scenes: SceneManager,
    context: GlobalContext,
    events: Vec<InputEvent>,
    frame_interval_ms: u64,
    frame_timer: Timer,
    frame_rate: FrameRateCounter,
}

impl Driver {
    //--- Construction -----------------------------------------------------

    /// Creates a driver in the Intro state for a `screen`-sized viewport
    /// running at `fps` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn new(screen: Size, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);

        let mut context = GlobalContext::new(screen);
        let scenes = SceneManager::new(&mut context);

        Self {
            scenes,
            context,
            events: Vec::with_capacity(16),
            frame_interval_ms: 1000 / u64::from(fps),
            frame_timer: Timer::new(),
            frame_rate: FrameRateCounter::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Kind of the active state.
    pub fn state_kind(&self) -> StateKind {
        self.scenes.kind()
    }

    pub fn context(&self) -> &GlobalContext {
        &self.context
    }

    /// Target time between frame starts.
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frame_rate.frames()
    }

    /// Average frames per second since the first iteration.
    pub fn average_fps(&self, now: u64) -> f64 {
        self.frame_rate.average_fps(now)
    }

    //--- Iteration --------------------------------------------------------

    /// Runs one iteration that started at `now` milliseconds.
    ///
    /// Returns [`TickControl::Exit`] once the Exit transition has been
    /// applied. Calling `step` after that is a no-op that keeps returning
    /// `Exit`.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        canvas: &mut dyn Canvas,
        now: u64,
    ) -> Result<TickControl, EngineError> {
        if self.scenes.is_finished() {
            return Ok(TickControl::Exit);
        }

        if !self.frame_rate.is_started() {
            self.frame_rate.start(now);
        }
        self.frame_timer.start(now);

        //--- Step 1: Gather input ------------------------------------------
        self.events.clear();
        input.poll_events(&mut self.events);

        //--- Step 2: State input and logic ---------------------------------
        self.scenes.handle_input(&self.events, &mut self.context);
        self.scenes.logic(&mut self.context);

        //--- Step 3: Transition --------------------------------------------
        self.scenes.apply_transition(&mut self.context);
        if self.scenes.is_finished() {
            info!(target: "driver", "Exit reached after {} frames", self.frame_rate.frames());
            return Ok(TickControl::Exit);
        }

        //--- Step 4: Render ------------------------------------------------
        self.scenes.render(&self.context, canvas);
        canvas.present()?;
        self.frame_rate.count_frame();

        Ok(TickControl::Continue)
    }

    /// Milliseconds left in the current frame at `now`; zero if the frame
    /// already overran.
    pub fn frame_delay(&self, now: u64) -> u64 {
        self.frame_interval_ms
            .saturating_sub(self.frame_timer.ticks(now))
    }

    /// Runs iterations until Exit, sleeping on `clock` to hold the frame
    /// interval.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        canvas: &mut dyn Canvas,
        clock: &dyn Clock,
    ) -> Result<(), EngineError> {
        info!(target: "driver", "Driver loop started ({} ms per frame)", self.frame_interval_ms);

        loop {
            let now = clock.ticks_ms();
            if let TickControl::Exit = self.step(input, canvas, now)? {
                break;
            }

            let delay = self.frame_delay(clock.ticks_ms());
            if delay > 0 {
                clock.delay(delay);
            }
        }

        let now = clock.ticks_ms();
        info!(
            target: "driver",
            "Driver loop finished: {} frames, {:.1} fps average",
            self.frame_rate.frames(),
            self.frame_rate.average_fps(now)
        );
        Ok(())
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("state", &self.scenes.kind())
            .field("context", &self.context)
            .field("frame_interval_ms", &self.frame_interval_ms)
            .field("frames", &self.frame_rate.frames())
            .finish()
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        debug!(target: "driver", "Driver dropped in {:?}", self.scenes.kind());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::input::{ChannelInput, KeyCode};
    use crate::core::render::SpriteId;
    use crate::core::testing::{RecordingCanvas, ScriptedInput};

    const SCREEN: Size = Size::new(640, 480);

    fn driver() -> Driver {
        Driver::new(SCREEN, 20)
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn starts_in_intro_with_frame_interval() {
        let driver = driver();
        assert_eq!(driver.state_kind(), StateKind::Intro);
        assert_eq!(driver.frame_interval_ms(), 50);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn zero_fps_panics() {
        Driver::new(SCREEN, 0);
    }

    //--- Step -------------------------------------------------------------

    #[test]
    fn step_renders_and_presents_current_state() {
        let mut driver = driver();
        let (_tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        let control = driver.step(&mut input, &mut canvas, 0).unwrap();

        assert_eq!(control, TickControl::Continue);
        assert_eq!(canvas.presented, 1);
        assert_eq!(canvas.sprite_position(SpriteId::IntroBackground), Some((0, 0)));
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn transition_is_rendered_in_same_iteration() {
        let mut driver = driver();
        let (tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        tx.send(InputEvent::KeyDown(KeyCode::Enter)).unwrap();
        driver.step(&mut input, &mut canvas, 0).unwrap();

        assert_eq!(driver.state_kind(), StateKind::Title);
        assert!(canvas.sprite_position(SpriteId::TitleBackground).is_some());
        assert!(canvas.sprite_position(SpriteId::IntroBackground).is_none());
    }

    #[test]
    fn quit_stops_without_rendering() {
        let mut driver = driver();
        let (tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        tx.send(InputEvent::Quit).unwrap();
        let control = driver.step(&mut input, &mut canvas, 0).unwrap();

        assert_eq!(control, TickControl::Exit);
        assert_eq!(driver.state_kind(), StateKind::Exit);
        assert!(canvas.calls.is_empty());
        assert_eq!(canvas.presented, 0);

        // Further steps stay terminal.
        tx.send(InputEvent::KeyDown(KeyCode::Enter)).unwrap();
        assert_eq!(driver.step(&mut input, &mut canvas, 50).unwrap(), TickControl::Exit);
        assert_eq!(driver.state_kind(), StateKind::Exit);
    }

    #[test]
    fn held_arrow_moves_dot_once_per_frame() {
        let mut driver = driver();
        let (tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        tx.send(InputEvent::KeyDown(KeyCode::Enter)).unwrap();
        driver.step(&mut input, &mut canvas, 0).unwrap();
        tx.send(InputEvent::KeyDown(KeyCode::Enter)).unwrap();
        driver.step(&mut input, &mut canvas, 50).unwrap();
        assert_eq!(driver.state_kind(), StateKind::Overworld);

        tx.send(InputEvent::KeyDown(KeyCode::ArrowRight)).unwrap();
        for frame in 0..3 {
            driver.step(&mut input, &mut canvas, 100 + frame * 50).unwrap();
        }
        assert_eq!(driver.context().dot.bounds().x, 660);

        tx.send(InputEvent::KeyUp(KeyCode::ArrowRight)).unwrap();
        driver.step(&mut input, &mut canvas, 250).unwrap();
        assert_eq!(driver.context().dot.bounds().x, 660);
    }

    //--- Pacing -----------------------------------------------------------

    #[test]
    fn frame_delay_is_interval_minus_elapsed() {
        let mut driver = driver();
        let (_tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        driver.step(&mut input, &mut canvas, 1_000).unwrap();
        assert_eq!(driver.frame_delay(1_000), 50);
        assert_eq!(driver.frame_delay(1_030), 20);
        assert_eq!(driver.frame_delay(1_050), 0);
        assert_eq!(driver.frame_delay(1_200), 0, "overrun frames do not wait");
    }

    #[test]
    fn run_paces_until_quit() {
        let mut driver = driver();
        let mut input = ScriptedInput::new(vec![vec![InputEvent::KeyDown(KeyCode::Enter)]]);
        let mut canvas = RecordingCanvas::new();
        let clock = ManualClock::new();

        // Frame 1: Enter → Title. Frame 2: script exhausted → Quit.
        driver.run(&mut input, &mut canvas, &clock).unwrap();

        assert_eq!(driver.state_kind(), StateKind::Exit);
        assert_eq!(driver.frames(), 1);
        assert_eq!(canvas.presented, 1);
        assert_eq!(clock.total_delay(), 50);
    }

    #[test]
    fn average_fps_counts_presented_frames() {
        let mut driver = driver();
        let (_tx, mut input) = ChannelInput::channel();
        let mut canvas = RecordingCanvas::new();

        for frame in 0..20 {
            driver.step(&mut input, &mut canvas, frame * 50).unwrap();
        }
        assert!((driver.average_fps(1_000) - 20.0).abs() < 1e-9);
    }
}
