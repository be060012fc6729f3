//=========================================================================
// Input Event Types
//
// Platform-independent representation of the input the states react to.
//
// The platform layer (winit) converts window callbacks into these events;
// tests and headless drivers construct them directly.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSource (channel)
//         ↓
//    State::handle_input
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys the demo can react to are listed; everything else maps
/// to `Unidentified` and is dropped by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Return/Enter key
    Enter,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Returns `true` for the four arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::ArrowRight | KeyCode::ArrowUp
        )
    }
}

//=== InputEvent ==========================================================

/// Discrete input event consumed by the active state.
///
/// # Event Types
///
/// - **Quit**: the window was closed (or the input source went away).
///   Every state answers it by requesting the Exit transition.
/// - **KeyDown/KeyUp**: a key changed state. Auto-repeat presses are
///   filtered out before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// User asked to close the application.
    Quit,

    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns `true` if this is a press of `key`.
    pub fn is_press(&self, key: KeyCode) -> bool {
        *self == InputEvent::KeyDown(key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_are_recognised() {
        assert!(KeyCode::ArrowUp.is_arrow());
        assert!(KeyCode::ArrowLeft.is_arrow());
        assert!(!KeyCode::Enter.is_arrow());
        assert!(!KeyCode::Unidentified.is_arrow());
    }

    #[test]
    fn is_press_matches_only_key_down() {
        assert!(InputEvent::KeyDown(KeyCode::Enter).is_press(KeyCode::Enter));
        assert!(!InputEvent::KeyUp(KeyCode::Enter).is_press(KeyCode::Enter));
        assert!(!InputEvent::KeyDown(KeyCode::ArrowUp).is_press(KeyCode::Enter));
        assert!(!InputEvent::Quit.is_press(KeyCode::Enter));
    }
}
