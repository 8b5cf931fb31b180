use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::{LatticeError, Result};
use crate::neighborhood::{self, Neighborhood};

/// A cell on the lattice, or a displacement between two cells.
///
/// The same type serves both roles: `position + displacement` moves an entity,
/// `a - b` measures how far apart two cells are. A raw `Point` carries no range
/// invariant; it only becomes a position on the plane once it is wrapped with
/// [`Point::normalize`] against a [`Dimension`].
///
/// `Point` is `Copy`, so assigning one hands the receiver its own value. The
/// transforming methods consume `self` and return the result; use the
/// `*_assign` operators or [`Point::move_by`] to update a point in place.
///
/// Arithmetic on the plain operators is unchecked. With 64-bit coordinates an
/// overflow needs a world far larger than anything addressable in memory; use
/// [`Point::checked_add`] when the operands are untrusted. The sum inside
/// [`Point::add_absolute`] is unchecked too; its absolute value saturates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Sum of both points with every coordinate replaced by its magnitude.
    ///
    /// Used for clamped movement at a hard boundary: the result never has a
    /// negative coordinate.
    #[must_use]
    pub fn add_absolute(self, other: Point) -> Self {
        (self + other).absolute_value()
    }

    /// Replaces each coordinate with its magnitude.
    ///
    /// Zero stays zero and applying it twice is the same as applying it once.
    /// `i64::MIN` has no positive counterpart and saturates to `i64::MAX`.
    #[must_use]
    pub fn absolute_value(self) -> Self {
        Self::new(self.x.saturating_abs(), self.y.saturating_abs())
    }

    /// Wraps the point onto the plane described by `bound`.
    ///
    /// Uses the Euclidean remainder, so the result always lies in
    /// `[0, width) x [0, height)`, including for negative inputs: `(-1, -1)`
    /// on a 10x10 plane becomes `(9, 9)`.
    #[must_use]
    pub fn normalize(self, bound: Dimension) -> Self {
        Self::new(
            self.x.rem_euclid(bound.width()),
            self.y.rem_euclid(bound.height()),
        )
    }

    /// Coordinate-wise sum that reports overflow instead of wrapping or panicking.
    pub fn checked_add(self, other: Point) -> Result<Self> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(LatticeError::ArithmeticOverflow {
                lhs: self,
                rhs: other,
            }),
        }
    }

    /// The point one cell away in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// Moves this point in place by a displacement.
    pub fn move_by(&mut self, displacement: Point) {
        *self += displacement;
    }

    /// Moves this point in place one cell towards `direction`.
    pub fn move_in(&mut self, direction: Direction) {
        *self += direction.offset();
    }

    /// Reinterprets the coordinates as a width/height extent.
    pub fn to_dimension(self) -> Result<Dimension> {
        Dimension::try_from(self)
    }

    /// The toroidal Moore neighborhood of this point. See [`neighborhood()`].
    ///
    /// [`neighborhood()`]: crate::neighborhood()
    pub fn neighborhood(self, bound: Dimension) -> Neighborhood {
        neighborhood::neighborhood(self, bound)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Unit moves in screen coordinates: `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub const fn offset(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn grid(range: std::ops::RangeInclusive<i64>) -> impl Iterator<Item = Point> {
        range
            .clone()
            .flat_map(move |x| range.clone().map(move |y| Point::new(x, y)))
    }

    fn hash_of(p: &Point) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn copy_is_independent() {
        let a = Point::new(3, 4);
        let mut b = a;
        b.move_by(Point::new(1, 1));
        assert_eq!(a, Point::new(3, 4));
        assert_eq!(b, Point::new(4, 5));
    }

    #[test]
    fn add_is_coordinate_wise() {
        assert_eq!(Point::new(2, -3) + Point::new(-5, 7), Point::new(-3, 4));
        let mut p = Point::new(1, 1);
        p += Point::new(2, 3);
        assert_eq!(p, Point::new(3, 4));
    }

    #[test]
    fn sub_and_neg_invert_add() {
        let a = Point::new(7, -2);
        let b = Point::new(-4, 9);
        assert_eq!(a + b - b, a);
        assert_eq!(a + -a, Point::ORIGIN);
        let mut c = a;
        c -= a;
        assert_eq!(c, Point::ORIGIN);
    }

    #[test]
    fn absolute_value_maps_magnitudes() {
        assert_eq!(Point::new(-3, 4).absolute_value(), Point::new(3, 4));
        assert_eq!(Point::new(0, -0).absolute_value(), Point::ORIGIN);
    }

    #[test]
    fn absolute_value_saturates_at_min() {
        let p = Point::new(i64::MIN, i64::MIN + 1).absolute_value();
        assert_eq!(p, Point::new(i64::MAX, i64::MAX));
        assert_eq!(p.absolute_value(), p);
        let r = Point::new(i64::MIN, -5).add_absolute(Point::ORIGIN);
        assert_eq!(r, Point::new(i64::MAX, 5));
    }

    #[test]
    fn absolute_value_is_idempotent() {
        for p in grid(-6..=6) {
            let once = p.absolute_value();
            assert_eq!(once.absolute_value(), once, "p = {p}");
        }
    }

    #[test]
    fn add_absolute_never_negative() {
        for a in grid(-4..=4) {
            for b in grid(-4..=4) {
                let r = a.add_absolute(b);
                assert!(r.x >= 0 && r.y >= 0, "{a} + {b} gave {r}");
                assert_eq!(r, (a + b).absolute_value());
            }
        }
    }

    #[test]
    fn normalize_wraps_into_plane() {
        let bound = Dimension::new(10, 10).unwrap();
        assert_eq!(Point::new(12, 25).normalize(bound), Point::new(2, 5));
        assert_eq!(Point::new(-1, -1).normalize(bound), Point::new(9, 9));
        assert_eq!(Point::new(-10, -21).normalize(bound), Point::new(0, 9));
    }

    #[test]
    fn normalize_result_always_in_range() {
        let bound = Dimension::new(3, 5).unwrap();
        for p in grid(-12..=12) {
            let n = p.normalize(bound);
            assert!(bound.contains(n), "{p} normalized to {n}");
            assert_eq!(n.normalize(bound), n);
        }
    }

    #[test]
    fn move_then_normalize_wraps_right_edge() {
        let world = Dimension::new(20, 15).unwrap();
        let mut entity = Point::new(19, 0);
        entity.move_by(Point::new(1, 0));
        assert_eq!(entity.normalize(world), Point::new(0, 0));
    }

    #[test]
    fn checked_add_reports_overflow() {
        let a = Point::new(i64::MAX, 0);
        let b = Point::new(1, 0);
        assert_eq!(
            a.checked_add(b),
            Err(LatticeError::ArithmeticOverflow { lhs: a, rhs: b })
        );
        assert_eq!(
            Point::new(1, 2).checked_add(Point::new(3, 4)),
            Ok(Point::new(4, 6))
        );
    }

    #[test]
    fn directions_move_one_cell() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Direction::Up), Point::new(5, 4));
        assert_eq!(p.step(Direction::Right), Point::new(6, 5));
        assert_eq!(p.step(Direction::Down), Point::new(5, 6));
        assert_eq!(p.step(Direction::Left), Point::new(4, 5));

        let mut q = p;
        for d in Direction::ALL {
            q.move_in(d);
        }
        assert_eq!(q, p);
    }

    #[test]
    fn equal_points_hash_equal() {
        for p in grid(-3..=3) {
            let q = Point::new(p.x, p.y);
            assert_eq!(p, q);
            assert_eq!(hash_of(&p), hash_of(&q));
        }
    }

    #[test]
    fn points_work_as_set_members() {
        let visited: HashSet<Point> = [Point::new(1, 2), Point::new(1, 2), Point::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(visited.len(), 2);
        assert!(visited.contains(&Point::new(2, 1)));
    }

    #[test]
    fn display_and_tuple_conversions() {
        let p = Point::from((-4, 8));
        assert_eq!(p.to_string(), "(-4, 8)");
        assert_eq!(<(i64, i64)>::from(p), (-4, 8));
    }

    #[test]
    fn serde_uses_named_coordinates() {
        let json = serde_json::to_string(&Point::new(3, -1)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-1}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(3, -1));
    }
}
