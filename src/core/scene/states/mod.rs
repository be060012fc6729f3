//=========================================================================
// Concrete States
//=========================================================================
//
// - splash: Intro and Title screens (background + centred message)
// - overworld: scrolling field with the red and blue houses
// - room: Red and Blue rooms, each with one exit door
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{State, StateKind};
use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;

//=== Module Declarations =================================================

mod overworld;
mod room;
mod splash;

//=== Public API ==========================================================

pub use overworld::Overworld;
pub use room::Room;
pub use splash::Splash;

//=== Construction ========================================================

/// Builds the state object for `kind`.
///
/// `previous` is the kind being left, or `None` at startup. Returns `None`
/// for [`StateKind::Exit`], which has no state object.
pub fn build_state(
    kind: StateKind,
    previous: Option<StateKind>,
    context: &mut GlobalContext,
) -> Option<Box<dyn State>> {
    let state: Box<dyn State> = match kind {
        StateKind::Intro => Box::new(Splash::intro()),
        StateKind::Title => Box::new(Splash::title()),
        StateKind::Overworld => Box::new(Overworld::new(previous, context)),
        StateKind::RedRoom => Box::new(Room::red(context)),
        StateKind::BlueRoom => Box::new(Room::blue(context)),
        StateKind::Exit => return None,
    };

    Some(state)
}

//=== Shared Helpers ======================================================

/// Requests Exit on a quit event. Returns `true` if `event` was a quit.
fn request_exit_on_quit(event: &InputEvent, context: &mut GlobalContext) -> bool {
    if *event == InputEvent::Quit {
        context.transitions.request(StateKind::Exit);
        true
    } else {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::world::Size;

    fn context() -> GlobalContext {
        GlobalContext::new(Size::new(640, 480))
    }

    #[test]
    fn exit_has_no_state_object() {
        let mut ctx = context();
        assert!(build_state(StateKind::Exit, Some(StateKind::Title), &mut ctx).is_none());
    }

    #[test]
    fn every_other_kind_builds() {
        let mut ctx = context();
        for kind in [
            StateKind::Intro,
            StateKind::Title,
            StateKind::Overworld,
            StateKind::RedRoom,
            StateKind::BlueRoom,
        ] {
            assert!(build_state(kind, None, &mut ctx).is_some(), "{:?}", kind);
        }
    }

    #[test]
    fn quit_requests_exit_in_every_state() {
        for kind in [
            StateKind::Intro,
            StateKind::Title,
            StateKind::Overworld,
            StateKind::RedRoom,
            StateKind::BlueRoom,
        ] {
            let mut ctx = context();
            let mut state = build_state(kind, None, &mut ctx).unwrap();
            state.handle_input(&[InputEvent::Quit], &mut ctx);
            assert_eq!(ctx.transitions.pending(), Some(StateKind::Exit), "{:?}", kind);
        }
    }
}
