//! Geometry primitives: [`Point`] (an axial hex coordinate) and [`Range`].

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An axial hex coordinate. `x` is the `q` axis, `y` is the `r` axis; the
/// third cube coordinate `s = -x - y`
/// is never stored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axial offsets of the six hex neighbours, starting east and turning
/// counter-clockwise.
pub const HEX_DIRECTIONS: [Point; 6] = [
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The six hex neighbours, in [`HEX_DIRECTIONS`] order.
    #[inline]
    pub fn hex_neighbors(self) -> [Point; 6] {
        HEX_DIRECTIONS.map(|d| self + d)
    }

    /// Number of hex steps between `self` and `other`.
    #[inline]
    pub fn hex_distance(self, other: Point) -> i32 {
        hex_distance(self, other)
    }
}

/// Hex (cube) distance between two axial points.
///
/// Never overestimates the number of steps, so it is an admissible A*
/// heuristic whenever every step costs at least 1.
#[inline]
pub fn hex_distance(a: Point, b: Point) -> i32 {
    let dq = a.x - b.x;
    let dr = a.y - b.y;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max) in axial space. `min` is inclusive,
/// `max` is exclusive.
///
/// Laid out on screen this is a rhombus of hexes; it is the storage shape
/// of [`HexGrid`](crate::HexGrid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Row-major flat index of `p`, or `None` when `p` is outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.x - self.cur.x) as usize;
        let remaining_rows = (self.range.max.y - self.cur.y - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_add_and_order() {
        let a = Point::new(1, 2);
        let b = Point::new(3, -4);
        assert_eq!(a + b, Point::new(4, -2));
        // Row-major: y first, then x.
        assert!(b < a);
        assert!(Point::new(0, 2) < a);
        assert_eq!(a.to_string(), "(1, 2)");
    }

    #[test]
    fn hex_neighbors_are_distinct_and_adjacent() {
        let p = Point::new(2, -1);
        let ns = p.hex_neighbors();
        let set: HashSet<_> = ns.iter().copied().collect();
        assert_eq!(set.len(), 6);
        for n in ns {
            assert_eq!(hex_distance(p, n), 1);
        }
    }

    #[test]
    fn hex_distance_axes_and_diagonals() {
        let o = Point::ZERO;
        assert_eq!(hex_distance(o, o), 0);
        assert_eq!(hex_distance(o, Point::new(3, 0)), 3);
        assert_eq!(hex_distance(o, Point::new(0, -4)), 4);
        // Moving along the s axis: (+1, -1) per step.
        assert_eq!(hex_distance(o, Point::new(2, -2)), 2);
        // Against the grain costs more than either component.
        assert_eq!(hex_distance(o, Point::new(2, 2)), 4);
        assert_eq!(hex_distance(Point::new(2, 2), o), 4);
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert!(!r.is_empty());
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.max, Point::new(3, 2));
    }

    #[test]
    fn range_index_of_is_row_major() {
        let r = Range::new(-1, -1, 2, 2);
        assert_eq!(r.index_of(Point::new(-1, -1)), Some(0));
        assert_eq!(r.index_of(Point::new(1, -1)), Some(2));
        assert_eq!(r.index_of(Point::new(-1, 0)), Some(3));
        assert_eq!(r.index_of(Point::new(2, 0)), None);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
        }
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[5], Point::new(2, 1));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(2, 2, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}
