//! Point and orientation types.
//!
//! - `Point`: integer coordinates, compared exactly.
//! - `Orientation`: turn classification of an ordered triple.

use nalgebra::Vector2;
use std::fmt;

/// Planar point with exact integer coordinates.
///
/// Ordering is lexicographic (x, then y); it carries no geometric meaning and
/// exists for canonical set comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widened coordinate vector used by the kernel arithmetic.
    #[inline]
    pub fn wide(self) -> Vector2<i128> {
        Vector2::new(self.x as i128, self.y as i128)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn made by an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of the reversed triple `(r, q, p)`.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }

    /// True only for a strict left (counterclockwise) turn.
    #[inline]
    pub fn is_strict_left(self) -> bool {
        self == Orientation::CounterClockwise
    }
}
