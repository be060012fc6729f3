//=========================================================================
// Engine Errors
//=========================================================================
//
// Everything that can stop the demo. All of these are startup or
// presentation failures; the state machine itself has no error channel.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Crates =====================================================

use thiserror::Error;

//=== EngineError =========================================================

/// Fatal engine failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Failed to create or run the window event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    /// Pixel surface creation or presentation failed.
    #[error("surface error: {0}")]
    Surface(#[from] pixels::Error),

    /// An image in the asset directory could not be loaded.
    #[error("unable to load image {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The font in the asset directory could not be loaded.
    #[error("unable to load font {}: {source}", path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: FontError,
    },
}

//=== FontError ===========================================================

/// Why a font file was rejected.
#[derive(Debug, Error)]
pub enum FontError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("no usable font face")]
    Invalid,
}
