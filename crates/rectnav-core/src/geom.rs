//! Geometry primitives: [`Point`], [`Cell`] and [`Portal`].
//!
//! Cells are axis-aligned rectangles compared by value, so they can be used
//! directly as graph node identities and map keys.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D floating-point position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether the point is inside the half-open bounds of `cell`.
    #[inline]
    pub fn in_cell(self, cell: &Cell) -> bool {
        cell.contains(self)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
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

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An axis-aligned rectangular region of walkable space.
///
/// Containment is half-open: `x_min` and `y_min` are inclusive, `x_max` and
/// `y_max` exclusive. Two cells with identical bounds are the same cell.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct Cell {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Bit pattern used for equality and hashing. `-0.0` and `0.0` share a key.
#[inline]
fn key_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

impl Cell {
    /// Create a cell from its x and y extents, auto-canonicalizing so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self {
            x_min: x0.min(x1),
            x_max: x0.max(x1),
            y_min: y0.min(y1),
            y_max: y0.max(y1),
        }
    }

    /// Width of the cell.
    #[inline]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the cell.
    #[inline]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    /// Geometric center.
    #[inline]
    pub fn centroid(self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Whether `p` is inside the half-open bounds.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y < self.y_max
    }

    /// Overlap of the two cells' projections on each axis.
    ///
    /// For adjacent cells this is the shared boundary: a point, a vertical
    /// segment or a horizontal segment. For cells that do not touch the
    /// extents come out inverted (`min > max`).
    #[inline]
    pub fn portal(self, other: &Cell) -> Portal {
        Portal {
            x_min: self.x_min.max(other.x_min),
            x_max: self.x_max.min(other.x_max),
            y_min: self.y_min.max(other.y_min),
            y_max: self.y_max.min(other.y_max),
        }
    }

    /// Whether the two cells share a boundary segment of positive length.
    pub fn shares_edge(self, other: &Cell) -> bool {
        let p = self.portal(other);
        let vertical = p.x_min == p.x_max && p.y_max > p.y_min;
        let horizontal = p.y_min == p.y_max && p.x_max > p.x_min;
        vertical || horizontal
    }

    /// Smallest cell that contains both cells.
    #[inline]
    pub fn union(self, other: Cell) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        key_bits(self.x_min) == key_bits(other.x_min)
            && key_bits(self.x_max) == key_bits(other.x_max)
            && key_bits(self.y_min) == key_bits(other.y_min)
            && key_bits(self.y_max) == key_bits(other.y_max)
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        key_bits(self.x_min).hash(state);
        key_bits(self.x_max).hash(state);
        key_bits(self.y_min).hash(state);
        key_bits(self.y_max).hash(state);
    }
}

/// Takes the bounds as written. An inverted box stays inverted and contains
/// no point; use [`Cell::new`] to reorder.
impl From<[f64; 4]> for Cell {
    fn from([x_min, x_max, y_min, y_max]: [f64; 4]) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl From<Cell> for [f64; 4] {
    fn from(c: Cell) -> Self {
        [c.x_min, c.x_max, c.y_min, c.y_max]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

// ---------------------------------------------------------------------------
// Portal
// ---------------------------------------------------------------------------

/// The shared boundary between two cells, as returned by [`Cell::portal`].
///
/// Bounds are inclusive on both ends.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Portal {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Portal {
    /// Whether the x-extent has collapsed to a single coordinate.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self.x_min == self.x_max
    }

    /// Whether the overlap is a real boundary (non-inverted on both axes).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }

    /// Clamp `x` into the x-extent. Never panics on an inverted portal.
    #[inline]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.max(self.x_min).min(self.x_max)
    }

    /// Clamp `y` into the y-extent. Never panics on an inverted portal.
    #[inline]
    pub fn clamp_y(self, y: f64) -> f64 {
        y.max(self.y_min).min(self.y_max)
    }

    /// Whether `p` lies on the portal (inclusive bounds).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}
