//=========================================================================
// Transition Slot
//=========================================================================
//
// Single pending "next state" slot.
//
// States request transitions here while handling input or running
// logic. The scene manager takes the request once per iteration, right
// after logic and before render.
//
// Rules:
// - A later request overwrites an earlier one from the same iteration.
// - Exit is sticky: once pending it cannot be overwritten until taken.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::StateKind;

//=== TransitionSlot ======================================================

/// Holds at most one pending transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionSlot {
    pending: Option<StateKind>,
}

impl TransitionSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Requests a transition to `kind`.
    ///
    /// Ignored while Exit is pending.
    pub fn request(&mut self, kind: StateKind) {
        if self.pending == Some(StateKind::Exit) {
            debug!(target: "scene", "Exit pending, ignoring request for {:?}", kind);
            return;
        }

        if let Some(previous) = self.pending {
            debug!(target: "scene", "Pending transition {:?} replaced by {:?}", previous, kind);
        }

        self.pending = Some(kind);
    }

    /// Returns the pending transition, if any.
    pub fn pending(&self) -> Option<StateKind> {
        self.pending
    }

    /// Returns true if no transition is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Takes the pending transition, leaving the slot empty.
    pub fn take(&mut self) -> Option<StateKind> {
        self.pending.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
