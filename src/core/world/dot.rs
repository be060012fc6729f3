//=========================================================================
// Dot
//=========================================================================
//
// The movable entity. Lives in the global context so its position and
// velocity survive state swaps; every state constructor re-places it and
// tells it the extent of the level it now walks in.
//
// Motion rules:
// - Arrow key down adds one velocity step on its axis, key up takes it
//   back out, so velocity is non-zero only while a key is held.
// - Each logic tick integrates x then y. An axis whose new position would
//   leave [0, level - dot] is rolled back for that tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::geometry::{Rect, Size};
use crate::core::input::{InputEvent, KeyCode};

//=== Constants ===========================================================

/// Dot sprite and collision box extent.
pub const DOT_SIZE: Size = Size::new(20, 20);

/// Velocity change applied per arrow key press (half the dot extent).
pub const DOT_STEP: i32 = DOT_SIZE.width / 2;

//=== Dot =================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    bounds: Rect,
    velocity_x: i32,
    velocity_y: i32,
    level: Size,
}

impl Dot {
    /// Creates a dot at the origin of an empty level, standing still.
    pub fn new() -> Self {
        Self {
            bounds: Rect::at(0, 0, DOT_SIZE),
            velocity_x: 0,
            velocity_y: 0,
            level: Size::default(),
        }
    }

    /// Places the dot at (`x`, `y`) inside a level of extent `level`.
    ///
    /// Velocity is kept: a key still held across a state swap keeps
    /// pushing the dot in the new level.
    pub fn place(&mut self, x: i32, y: i32, level: Size) {
        debug!(target: "scene", "Dot placed at ({}, {}) in {}x{} level", x, y, level.width, level.height);
        self.bounds.x = x;
        self.bounds.y = y;
        self.level = level;
    }

    //--- Input ------------------------------------------------------------

    /// Adjusts velocity for an arrow key press or release.
    ///
    /// Other events are ignored.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) if key.is_arrow() => self.nudge(key, 1),
            InputEvent::KeyUp(key) if key.is_arrow() => self.nudge(key, -1),
            _ => {}
        }
    }

    fn nudge(&mut self, key: KeyCode, sign: i32) {
        match key {
            KeyCode::ArrowUp => self.velocity_y -= sign * DOT_STEP,
            KeyCode::ArrowDown => self.velocity_y += sign * DOT_STEP,
            KeyCode::ArrowLeft => self.velocity_x -= sign * DOT_STEP,
            KeyCode::ArrowRight => self.velocity_x += sign * DOT_STEP,
            _ => {}
        }
    }

    //--- Motion -----------------------------------------------------------

    /// Moves the dot by its velocity, one axis at a time.
    pub fn advance(&mut self) {
        self.bounds.x += self.velocity_x;
        if self.bounds.x < 0 || self.bounds.right() > self.level.width {
            self.bounds.x -= self.velocity_x;
        }

        self.bounds.y += self.velocity_y;
        if self.bounds.y < 0 || self.bounds.bottom() > self.level.height {
            self.bounds.y -= self.velocity_y;
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Collision box in world coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Extent of the level the dot is currently confined to.
    pub fn level(&self) -> Size {
        self.level
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.velocity_x, self.velocity_y)
    }

    #[cfg(test)]
    pub(crate) fn set_velocity(&mut self, x: i32, y: i32) {
        self.velocity_x = x;
        self.velocity_y = y;
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
