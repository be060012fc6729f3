//=========================================================================
// World
//=========================================================================
//
// Shared world primitives used by the concrete states:
// - geometry: rectangles and the collision test
// - dot: the movable entity
// - camera: viewport that follows the dot
//
//=========================================================================

mod camera;
mod dot;
mod geometry;

pub use camera::follow;
pub use dot::{Dot, DOT_SIZE, DOT_STEP};
pub use geometry::{check_collision, Rect, Size};
