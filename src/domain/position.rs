use std::fmt;

/// Integer coordinate of a cell in the arena.
/// Ordering is by `x`, then `y`, which gives tests a deterministic iteration order.
///
/// Arena coordinates are bounded by the config check, so they always lie in
/// `0..i32::MAX` and every neighbour offset stays representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset.
    ///
    /// # Panics
    /// If either coordinate leaves the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Self::new(x, y),
            _ => panic!("position {} offset by ({}, {}) leaves the i32 range", self, dx, dy),
        }
    }

    /// True when the position lies inside `[0, width) × [0, height)`
    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
