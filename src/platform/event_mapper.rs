//=========================================================================
// Platform Event Mapper
//
// Converts Winit keyboard input to engine-level `InputEvent` types.
// Provides a clean separation between OS-specific input and the
// engine's internal event representation.
//
// Responsibilities:
// - Translate physical key codes
// - Drop auto-repeat presses (velocity is adjusted once per press)
// - Drop keys the demo does not know (`Unidentified`)
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::ElementState;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only the keys the states react to are supported.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            ArrowUp => KeyCode::ArrowUp,

            //--- Special keys -----------------------------------------------------
            Enter | NumpadEnter => KeyCode::Enter,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Event Conversion ====================================================

/// Converts a keyboard callback into an [`InputEvent`].
///
/// Returns `None` for repeats, non-code physical keys, and unmapped keys.
pub(crate) fn map_key(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    if repeat {
        return None;
    }

    let key = match physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        PhysicalKey::Unidentified(_) => return None,
    };

    if key == KeyCode::Unidentified {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
