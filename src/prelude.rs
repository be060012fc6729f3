//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use overworld::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::EngineError;

// Driver loop
pub use crate::core::clock::{Clock, SystemClock};
pub use crate::core::{Driver, TickControl};

// Global context
pub use crate::core::globals::GlobalContext;

// Input system
pub use crate::core::input::{ChannelInput, InputEvent, InputSource, KeyCode};

// Rendering
pub use crate::assets::Assets;
pub use crate::font::Font;
pub use crate::core::render::{Canvas, Color, SpriteId};

// Scene system
pub use crate::core::scene::{SceneManager, State, StateKind, TransitionSlot};

// World
pub use crate::core::world::{check_collision, Dot, Rect, Size};
