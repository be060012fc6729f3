//=========================================================================
// Global Engine State
//=========================================================================
//
// Explicit replacement for process-wide mutable state. The driver owns
// one `GlobalContext` and lends it to the active state every iteration.
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;

//=== Public API ==========================================================

pub use global_context::GlobalContext;
