//=========================================================================
// Overworld Engine
//
// Main entry point and coordinator for the demo.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_fps()              ├─ loads assets
//         ├─ with_screen_size()      ├─ builds the driver
//         ├─ with_title()            └─ runs platform
//         ├─ with_assets()              blocks until exit
//         └─ with_font()
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::assets::Assets;
use crate::core::world::Size;
use crate::core::Driver;
use crate::error::EngineError;
use crate::font::Font;
use crate::platform::{Platform, PlatformConfig};

//=== Defaults ============================================================

pub const DEFAULT_FPS: u32 = 20;
pub const DEFAULT_SCREEN: Size = Size::new(640, 480);
pub const DEFAULT_TITLE: &str = "State Machine Demo";

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **FPS**: 20
/// - **Screen**: 640x480
/// - **Title**: "State Machine Demo"
/// - **Assets**: none (generated placeholder sprites)
/// - **Font**: `lazy.ttf` in the asset directory; none without one
///
/// # Examples
///
/// ```no_run
/// use overworld::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_fps(30)
///     .with_assets("assets")
///     .build()
///     .run()?;
/// # Ok::<(), overworld::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    fps: u32,
    screen: Size,
    title: String,
    assets: Option<PathBuf>,
    font: Option<PathBuf>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            screen: DEFAULT_SCREEN,
            title: DEFAULT_TITLE.to_string(),
            assets: None,
            font: None,
        }
    }

    /// Sets the target frame rate of the driver loop.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Sets the logical screen (viewport) size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_screen_size(mut self, width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Screen size must be positive, got {}x{}",
            width,
            height
        );
        self.screen = Size::new(width, height);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Loads sprites from `dir` instead of generating placeholders.
    pub fn with_assets(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets = Some(dir.into());
        self
    }

    /// Renders the message text with the font at `path`, overriding the
    /// asset directory's `lazy.ttf`. Also applies to placeholder sprites.
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.font = Some(path.into());
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (FPS: {}, screen: {}x{})",
            self.fps, self.screen.width, self.screen.height
        );

        Engine {
            fps: self.fps,
            screen: self.screen,
            title: self.title,
            assets: self.assets,
            font: self.font,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Demo runtime.
///
/// Create via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Event Loop)
///         ├─► Window, Pixel surface, Input
///         └─► Driver (state machine @ FPS)
/// ```
#[derive(Debug)]
pub struct Engine {
    fps: u32,
    screen: Size,
    title: String,
    assets: Option<PathBuf>,
    font: Option<PathBuf>,
}

impl Engine {
    /// Loads the configured sprites, or placeholders when no directory
    /// was given.
    ///
    /// Placeholder messages are plain bars unless a font was configured.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Asset`] for the first image that fails to
    /// load, [`EngineError::Font`] if the font is unusable.
    pub fn load_assets(&self) -> Result<Assets, EngineError> {
        match (&self.assets, &self.font) {
            (Some(dir), Some(font)) => Assets::load_with_font(dir, font),
            (Some(dir), None) => Assets::load(dir),
            (None, font) => {
                info!(target: "assets", "No asset directory given, using placeholder sprites");
                let mut assets = Assets::placeholder(self.screen);
                match font {
                    Some(path) => assets.render_text(&Font::load(path)?),
                    None => info!(target: "assets", "No font given, messages drawn as bars"),
                }
                Ok(assets)
            }
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the demo and blocks until the Exit state is reached or the
    /// window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if assets fail to load, the window or pixel
    /// surface cannot be created, or presenting a frame fails.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (FPS: {})", self.fps);

        //--- 1. Load every sprite up front --------------------------------
        let assets = self.load_assets()?;
        info!(target: "assets", "{} sprites ready", assets.len());

        //--- 2. Build the state machine -----------------------------------
        let driver = Driver::new(self.screen, self.fps);

        //--- 3. Launch the platform subsystem -----------------------------
        let config = PlatformConfig {
            title: self.title,
            screen: self.screen,
        };
        let platform = Platform::new(config, assets, driver);
        info!("Platform initialized, entering event loop");

        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
