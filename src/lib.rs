//=========================================================================
// Overworld - Library Root
//
// A small state-machine game: Intro and Title screens, a scrolling
// overworld with two houses, and a room behind each house door.
//
// Responsibilities:
// - Expose the engine interface (`Engine`, `EngineBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the state machine (`core`) and
//   OS integration (window, pixel surface, input)
//
// Typical usage:
// ```no_run
// use overworld::EngineBuilder;
//
// fn main() -> Result<(), overworld::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the state machine, world simulation and driver loop.
// It never touches the OS and runs headless.
//
// `assets` loads and owns the sprites, `font` renders their text,
// `error` holds the crate error type.
//
pub mod assets;
pub mod core;
pub mod error;
pub mod font;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// pixel surface) and is kept private, as it is not part of the public
// API surface.
//
// `engine` defines the main entry point and initialization logic.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, DEFAULT_FPS, DEFAULT_SCREEN, DEFAULT_TITLE};
pub use error::EngineError;
