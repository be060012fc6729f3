//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for states.
//
// Contains state data that states read/write:
// - dot: the movable entity (survives state swaps)
// - transitions: single pending-transition slot
// - screen: viewport extent used for camera and centring
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::scene::TransitionSlot;
use crate::core::world::{self, Dot, Rect, Size};

//=== GlobalContext =======================================================

/// Shared context data accessible to states.
///
/// States receive `&mut GlobalContext` while handling input and running
/// logic, and `&GlobalContext` while rendering.
#[derive(Debug)]
pub struct GlobalContext {
    /// The movable dot.
    ///
    /// State constructors place it; overworld and rooms move it.
    pub dot: Dot,

    /// Pending transition requested during the current iteration.
    ///
    /// Consumed by the scene manager after `logic()`.
    pub transitions: TransitionSlot,

    screen: Size,
}

impl GlobalContext {
    /// Creates a context for a viewport of `screen` pixels.
    pub fn new(screen: Size) -> Self {
        Self {
            dot: Dot::new(),
            transitions: TransitionSlot::new(),
            screen,
        }
    }

    /// Viewport extent.
    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Viewport following the dot, clamped to the dot's current level.
    pub fn camera(&self) -> Rect {
        world::follow(self.dot.bounds(), self.dot.level(), self.screen)
    }
}
