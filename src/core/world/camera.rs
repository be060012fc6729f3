//=========================================================================
// Camera
//=========================================================================
//
// Viewport that follows the dot. Recomputed from scratch on every render,
// so it carries no state of its own between frames.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::geometry::{Rect, Size};

/// Returns the viewport rectangle centred on `target`.
///
/// The result is clamped per axis: first to 0, then to
/// `level - viewport`. A level smaller than the viewport therefore ends up
/// with a negative offset, exactly like the upper clamp alone would give.
pub fn follow(target: Rect, level: Size, viewport: Size) -> Rect {
    let mut x = (target.x + target.width / 2) - viewport.width / 2;
    let mut y = (target.y + target.height / 2) - viewport.height / 2;

    if x < 0 {
        x = 0;
    }
    if y < 0 {
        y = 0;
    }
    if x > level.width - viewport.width {
        x = level.width - viewport.width;
    }
    if y > level.height - viewport.height {
        y = level.height - viewport.height;
    }

    Rect::at(x, y, viewport)
}
