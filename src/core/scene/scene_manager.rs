//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns the single active state and applies pending transitions.
//
// The old state is always dropped before the new one is constructed, so
// at most one state object is alive at any time. Exit drops the current
// state without building a replacement.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::states::build_state;
use super::{State, StateKind};
use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::render::Canvas;

//=== Scene Manager =======================================================

/// Holds the active state and its kind.
pub struct SceneManager {
    current: Option<Box<dyn State>>,
    kind: StateKind,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Starts the machine in [`StateKind::Intro`].
    pub fn new(context: &mut GlobalContext) -> Self {
        info!(target: "scene", "Starting in {:?}", StateKind::Intro);
        Self {
            current: build_state(StateKind::Intro, None, context),
            kind: StateKind::Intro,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Kind of the active state.
    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Returns `true` once Exit has been applied.
    pub fn is_finished(&self) -> bool {
        self.kind == StateKind::Exit
    }

    //--- Per-Iteration Operations ----------------------------------------

    pub fn handle_input(&mut self, events: &[InputEvent], context: &mut GlobalContext) {
        if let Some(state) = self.current.as_mut() {
            state.handle_input(events, context);
        }
    }

    pub fn logic(&mut self, context: &mut GlobalContext) {
        if let Some(state) = self.current.as_mut() {
            state.logic(context);
        }
    }

    pub fn render(&self, context: &GlobalContext, canvas: &mut dyn Canvas) {
        if let Some(state) = self.current.as_ref() {
            state.render(context, canvas);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Applies the pending transition, if any.
    ///
    /// Should be called once per iteration after `logic` and before
    /// `render`. Returns `true` if the active state changed.
    pub fn apply_transition(&mut self, context: &mut GlobalContext) -> bool {
        let Some(next) = context.transitions.take() else {
            return false;
        };

        if self.is_finished() {
            warn!(target: "scene", "Ignoring transition to {:?} after exit", next);
            return false;
        }

        let previous = self.kind;
        info!(target: "scene", "Transition {:?} -> {:?}", previous, next);

        debug!(target: "scene", "Dropping {:?}", previous);
        self.current = None;

        self.kind = next;
        self.current = build_state(next, Some(previous), context);

        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
