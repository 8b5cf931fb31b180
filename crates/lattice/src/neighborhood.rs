use std::ops::Index;

use crate::dimension::Dimension;
use crate::point::Point;

/// Offsets of the nine Moore neighborhood cells, `dx` outer and `dy` inner.
///
/// Index `i` holds `(i / 3 - 1, i % 3 - 1)`; the zero offset sits at
/// [`Neighborhood::CENTER_INDEX`].
pub const OFFSETS: [Point; 9] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 0),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// The nine wrapped cells around (and including) a center cell.
///
/// Ordering follows [`OFFSETS`], so callers may index positionally: `[0]` is
/// the north-west corner, `[4]` the center, `[8]` the south-east corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    cells: [Point; 9],
}

impl Neighborhood {
    pub const LEN: usize = 9;
    pub const CENTER_INDEX: usize = 4;

    /// The center cell, wrapped onto the plane.
    pub fn center(&self) -> Point {
        self.cells[Self::CENTER_INDEX]
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.cells.get(index).copied()
    }

    pub fn iter(&self) -> std::array::IntoIter<Point, 9> {
        self.cells.into_iter()
    }

    /// The eight surrounding cells, in [`OFFSETS`] order with the center skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != Self::CENTER_INDEX)
            .map(|(_, p)| *p)
    }

    pub fn as_array(&self) -> &[Point; 9] {
        &self.cells
    }
}

impl Index<usize> for Neighborhood {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.cells[index]
    }
}

impl IntoIterator for Neighborhood {
    type Item = Point;
    type IntoIter = std::array::IntoIter<Point, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Computes the toroidal Moore neighborhood of `center` on a plane of size `bound`.
///
/// Each axis wraps independently: stepping off the left edge lands on the
/// right edge, off the top lands on the bottom. Every cell is computed as
/// `(center + offset) mod bound` with a non-negative remainder.
///
/// `center` is not required to be on the plane already; an out-of-range
/// center yields the same neighborhood as its wrapped equivalent, with the
/// wrapped center at [`Neighborhood::CENTER_INDEX`]. The center is wrapped
/// before the offsets are applied, so any `i64` coordinate is accepted.
///
/// Always returns nine cells. On a plane with a side of 1 or 2 some of them
/// coincide (on a 1x1 plane all nine are `(0, 0)`), since stepping either
/// way along that axis reaches the same cell.
pub fn neighborhood(center: Point, bound: Dimension) -> Neighborhood {
    let (w, h) = (bound.width(), bound.height());
    // In [0, w) x [0, h): adding a unit offset cannot overflow.
    let c = center.normalize(bound);
    let cells = OFFSETS.map(|offset| {
        Point::new(
            (c.x + offset.x).rem_euclid(w),
            (c.y + offset.y).rem_euclid(h),
        )
    });
    Neighborhood { cells }
}
