//=========================================================================
// Scene System
//=========================================================================
//
// Screen state machine: one active state at a time, swapped through a
// single pending-transition slot.
//
// Architecture:
//   SceneManager
//     ├─ current: Option<Box<dyn State>>
//     └─ kind: StateKind
//   GlobalContext
//     └─ transitions: TransitionSlot
//
// Flow (once per driver iteration):
//   handle_input() → logic() → apply_transition() → render()
//
// Topology:
// ```text
//   Intro ──Enter──> Title ──Enter──> Overworld ──red house──> RedRoom
//                                       ^   │                   │
//                                       │   └──blue house──> BlueRoom
//                                       └────── exit door ──────┘
//   any ──quit──> Exit
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::InputEvent;
use crate::core::render::Canvas;

//=== Module Declarations =================================================

mod scene_manager;
mod transition;
pub mod states;

//=== Public API ==========================================================

pub use scene_manager::SceneManager;
pub use transition::TransitionSlot;

//=== StateKind ===========================================================

/// Identifies the active state and the target of a pending transition.
///
/// `Exit` is terminal: it never gets a state object and the driver stops
/// once it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Intro,
    Title,
    Overworld,
    RedRoom,
    BlueRoom,
    Exit,
}

//=== State Trait =========================================================

/// One screen of the demo.
///
/// The driver calls the three operations once per iteration, in order.
/// A state never swaps itself out: it only requests a transition through
/// `context.transitions`, which the scene manager applies after `logic`.
pub trait State {
    /// Reacts to the events polled this iteration.
    fn handle_input(&mut self, events: &[InputEvent], context: &mut GlobalContext);

    /// Advances the simulation using in-memory state only.
    fn logic(&mut self, context: &mut GlobalContext);

    /// Draws the current frame. Must not change any state.
    fn render(&self, context: &GlobalContext, canvas: &mut dyn Canvas);
}
