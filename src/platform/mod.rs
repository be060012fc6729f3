//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's driver loop.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ├─ window_event                            │
//  │   │   ├─ KeyboardInput → map_key ─┐          │
//  │   │   └─ CloseRequested → Quit ───┤          │
//  │   │                               ↓          │
//  │   │                     crossbeam channel    │
//  │   │                               ↓          │
//  │   └─ about_to_wait                ↓          │
//  │       └─ Driver::step(ChannelInput, Canvas)  │
//  │           └─ WaitUntil(next frame)           │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Close is just input**: `CloseRequested` enqueues `Quit`; the active
//   state turns it into the Exit transition like any other quit
// - **Pacing via ControlFlow**: the loop sleeps with `WaitUntil` instead
//   of blocking the event loop thread
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create and manage OS window and pixel surface
// - Convert Winit types → engine InputEvents
// - Run one driver iteration per frame interval
//
//=========================================================================

//=== Submodules ==========================================================

mod canvas;
mod event_mapper;
mod framebuffer;

//=== Standard Library Imports ============================================

use std::sync::Arc;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::assets::Assets;
use crate::core::clock::{Clock, SystemClock};
use crate::core::input::{ChannelInput, InputEvent};
use crate::core::world::Size;
use crate::core::{Driver, TickControl};
use crate::error::EngineError;
use canvas::PixelCanvas;
use event_mapper::map_key;

//=== PlatformConfig ======================================================

/// Window settings.
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub screen: Size,
}

//=== Platform ============================================================

/// Window owner and driver host.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, assets, driver)`
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Window creation**: lazily in `resumed()`
/// 4. **Shutdown**: the driver reaches Exit → `event_loop.exit()`
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    config: PlatformConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Pixel surface (None until `resumed()` called).
    canvas: Option<PixelCanvas>,

    /// Handed to the canvas once the window exists.
    assets: Option<Assets>,

    driver: Driver,

    /// Receiving end of the input queue, read by the driver.
    input: ChannelInput,

    /// Sending end of the input queue, fed by window events.
    event_sender: Sender<InputEvent>,

    clock: SystemClock,

    /// Clock time at which the next iteration may start.
    next_frame_ms: u64,

    /// First fatal error raised inside the event loop.
    failure: Option<EngineError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(config: PlatformConfig, assets: Assets, driver: Driver) -> Self {
        let (event_sender, input) = ChannelInput::channel();
        info!(target: "platform", "Platform subsystem initialized");

        Self {
            config,
            window: None,
            canvas: None,
            assets: Some(assets),
            driver,
            input,
            event_sender,
            clock: SystemClock::new(),
            next_frame_ms: 0,
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the driver reaches Exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop cannot be created, or the first
    /// window, surface, or present failure raised while running.
    pub fn run(mut self) -> Result<(), EngineError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;

        match self.failure.take() {
            Some(e) => Err(e),
            None => {
                info!(target: "platform", "Event loop finished after {} frames", self.driver.frames());
                Ok(())
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Enqueues an event for the next driver iteration.
    fn send(&self, event: InputEvent) {
        trace!(target: "platform::input", "Queued {:?}", event);
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform::input", "Input channel disconnected, dropping {:?}", event);
        }
    }

    /// Records a fatal error and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EngineError) {
        error!(target: "platform", "{}", error);
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let screen = self.config.screen;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(screen.width as u32, screen.height as u32));

        let window = Arc::new(event_loop.create_window(attrs)?);
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let assets = self.assets.take().unwrap_or_else(|| Assets::placeholder(screen));
        self.canvas = Some(PixelCanvas::new(Arc::clone(&window), screen, assets)?);
        self.window = Some(window);
        Ok(())
    }

    /// Runs one driver iteration if the frame interval has elapsed.
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };

        let now = self.clock.ticks_ms();
        if now < self.next_frame_ms {
            wait_for(event_loop, self.next_frame_ms - now);
            return;
        }

        match self.driver.step(&mut self.input, canvas, now) {
            Ok(TickControl::Continue) => {
                let after = self.clock.ticks_ms();
                let delay = self.driver.frame_delay(after);
                self.next_frame_ms = after + delay;
                wait_for(event_loop, delay);
            }
            Ok(TickControl::Exit) => {
                info!(target: "platform", "Driver finished, closing window");
                event_loop.exit();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

fn wait_for(event_loop: &ActiveEventLoop, ms: u64) {
    event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + Duration::from_millis(ms)));
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(InputEvent::Quit);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match map_key(key_event.physical_key, key_event.state, key_event.repeat) {
                    Some(event) => self.send(event),
                    None => trace!(target: "platform::input", "Key ignored: {:?}", key_event.physical_key),
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(canvas) = self.canvas.as_mut() {
                    canvas.resize(size.width, size.height);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.tick(event_loop);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
