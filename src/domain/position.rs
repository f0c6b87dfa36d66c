use std::fmt;

/// An integer cell on the Cartesian grid.
///
/// A position carries no invariant of its own. Whether it is valid depends on
/// where it is used: rovers require non-negative coordinates and a plateau
/// requires them to lie within its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`, saturating at the `i64` limits.
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Renders as `(x, y)`, the form used in diagnostics.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
