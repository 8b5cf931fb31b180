use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};
use crate::point::Point;

/// Width and height of a toroidal plane.
///
/// Both sides are strictly positive. This is checked once, when the value is
/// built (including when it is deserialized), so code holding a `Dimension`
/// can take remainders against it without checking again.
///
/// There are no setters: build a new `Dimension` instead of changing one that
/// other parts of the world read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimension", into = "RawDimension")]
pub struct Dimension {
    width: i64,
    height: i64,
}

/// Wire shape of [`Dimension`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawDimension {
    width: i64,
    height: i64,
}

impl Dimension {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            tracing::debug!(width, height, "rejected non-positive lattice dimension");
            return Err(LatticeError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// The extent as a point, `(width, height)`.
    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells on the plane, saturating at `i64::MAX`.
    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    /// Whether `point` is already a wrapped position on this plane.
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Every cell of the plane, row by row (`y` outer, `x` inner).
    pub fn points(self) -> impl Iterator<Item = Point> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<Point> for Dimension {
    type Error = LatticeError;

    fn try_from(p: Point) -> Result<Self> {
        Self::new(p.x, p.y)
    }
}

impl From<Dimension> for Point {
    fn from(d: Dimension) -> Self {
        d.to_point()
    }
}

impl TryFrom<RawDimension> for Dimension {
    type Error = LatticeError;

    fn try_from(raw: RawDimension) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl From<Dimension> for RawDimension {
    fn from(d: Dimension) -> Self {
        Self {
            width: d.width,
            height: d.height,
        }
    }
}
