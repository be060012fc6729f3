//=========================================================================
// Geometry
//=========================================================================
//
// Integer rectangles and the axis-aligned overlap test used for door and
// house collisions.
//
// Coordinates are world pixels, origin top-left, y grows downward.
//
//=========================================================================

//=== Size ================================================================

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of `size` placed at (`x`, `y`).
    pub const fn at(x: i32, y: i32, size: Size) -> Self {
        Self::new(x, y, size.width, size.height)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same rectangle shifted by (-`dx`, -`dy`).
    ///
    /// Used to turn world coordinates into screen coordinates for a
    /// camera whose top-left corner sits at (`dx`, `dy`).
    pub const fn offset_by(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x - dx, self.y - dy, self.width, self.height)
    }

    /// Overlapping part of the two rectangles, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

//=== Collision ===========================================================

/// Axis-aligned overlap test.
///
/// `a` and `b` are separate as soon as one side of `a` lies on or beyond
/// the opposite side of `b`.
pub fn check_collision(a: Rect, b: Rect) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }

    if a.top() >= b.bottom() {
        return false;
    }

    if a.right() <= b.left() {
        return false;
    }

    if a.left() >= b.right() {
        return false;
    }

    true
}

//=========================================================================
// Unit Tests
//=========================================================================
