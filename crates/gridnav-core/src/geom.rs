//! Geometry primitives: the world-space [`Vec2`] and the integer [`Rect`].
//!
//! Grid cells live in integer coordinates (see [`crate::coord`]); everything a
//! renderer or physics layer sees is a `Vec2` in world units.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::coord::GridCoord;

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A point or offset in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max) of grid cells. `min` is inclusive,
/// `max` is exclusive.
///
/// All empty rectangles compare equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Rect {}

impl Rect {
    /// Create a new rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: GridCoord::new(x0.min(x1), y0.min(y1)),
            max: GridCoord::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// The rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in cells.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height in cells.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `c` is inside the half-open rectangle.
    #[inline]
    pub fn contains(self, c: GridCoord) -> bool {
        c.x >= self.min.x && c.x < self.max.x && c.y >= self.min.y && c.y < self.max.y
    }

    /// Intersection of two rectangles. Non-overlapping inputs give the empty
    /// (default) rectangle.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: GridCoord::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: GridCoord::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The square of cells within Chebyshev distance `radius` of `center`,
    /// before any clipping. Edges saturate at the `i32` range.
    #[inline]
    pub fn around(center: GridCoord, radius: i32) -> Self {
        let radius = radius.max(0);
        Self::new(
            center.x.saturating_sub(radius),
            center.y.saturating_sub(radius),
            center.x.saturating_add(radius).saturating_add(1),
            center.y.saturating_add(radius).saturating_add(1),
        )
    }

    /// Row-major iterator over every cell in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = GridCoord;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the cells of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: GridCoord,
}

impl Iterator for RectIter {
    type Item = GridCoord;

    #[inline]
    fn next(&mut self) -> Option<GridCoord> {
        if self.cur.y >= self.rect.max.y || self.rect.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.rect.max.x {
            self.cur.x = self.rect.min.x;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return (0, Some(0));
        }
        let w = self.rect.width() as usize;
        let remaining_in_row = (self.rect.max.x - self.cur.x) as usize;
        let remaining_rows = (self.rect.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::ZERO.distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn rect_basics() {
        let r = Rect::new(0, 0, 3, 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(GridCoord::new(0, 0)));
        assert!(r.contains(GridCoord::new(2, 1)));
        assert!(!r.contains(GridCoord::new(3, 0)));
        assert!(!r.contains(GridCoord::new(0, 2)));
        assert!(!r.contains(GridCoord::new(-1, 0)));
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(3, 2, 0, 0);
        assert_eq!(r.min, GridCoord::new(0, 0));
        assert_eq!(r.max, GridCoord::new(3, 2));
    }

    #[test]
    fn rect_iter_row_major() {
        let cells: Vec<_> = Rect::sized(3, 2).iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], GridCoord::new(0, 0));
        assert_eq!(cells[3], GridCoord::new(0, 1));
        assert_eq!(cells[5], GridCoord::new(2, 1));
        assert_eq!(Rect::sized(3, 2).iter().len(), 6);
    }

    #[test]
    fn rect_intersect_and_empty() {
        let a = Rect::new(0, 0, 4, 4);
        assert_eq!(a.intersect(Rect::new(2, 2, 6, 6)), Rect::new(2, 2, 4, 4));
        let none = a.intersect(Rect::new(5, 5, 7, 7));
        assert!(none.is_empty());
        assert_eq!(none, Rect::default());
        assert_eq!(none.iter().count(), 0);
    }

    #[test]
    fn rect_around_clips() {
        let r = Rect::around(GridCoord::new(0, 0), 1).intersect(Rect::sized(5, 5));
        assert_eq!(r, Rect::new(0, 0, 2, 2));
        assert_eq!(Rect::around(GridCoord::new(2, 2), 0).len(), 1);
        let huge = Rect::around(GridCoord::new(2, 2), i32::MAX);
        assert_eq!(huge.min, GridCoord::new(i32::MIN + 3, i32::MIN + 3));
        assert_eq!(huge.max, GridCoord::new(i32::MAX, i32::MAX));
        assert_eq!(huge.intersect(Rect::sized(5, 5)), Rect::sized(5, 5));
    }
}
