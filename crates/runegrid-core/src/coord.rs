use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Address of a grid cell. `y` grows towards north.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// The origin cell.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `distance` steps away in `direction`, or `None` if it falls
    /// outside the `i32` grid.
    pub fn offset(self, direction: Direction, distance: i32) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(distance)?)?,
            y: self.y.checked_add(dy.checked_mul(distance)?)?,
        })
    }

    /// The adjacent cell in `direction`, if representable.
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction, 1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned envelope of occupied cells.
///
/// Starts at the origin and only grows, so it always contains `(0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lowest `x` and `y` seen.
    pub min: Coord,
    /// Highest `x` and `y` seen.
    pub max: Coord,
}

impl Bounds {
    /// Grow the envelope to include `coord`.
    pub fn include(&mut self, coord: Coord) {
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    /// Returns true if `coord` lies inside the envelope (inclusive).
    pub fn contains(&self, coord: Coord) -> bool {
        (self.min.x..=self.max.x).contains(&coord.x) && (self.min.y..=self.max.y).contains(&coord.y)
    }

    /// Number of columns spanned.
    pub fn width(&self) -> u64 {
        u64::from(self.max.x.abs_diff(self.min.x)) + 1
    }

    /// Number of rows spanned.
    pub fn height(&self) -> u64 {
        u64::from(self.max.y.abs_diff(self.min.y)) + 1
    }

    /// Number of cells inside the envelope.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }
}
