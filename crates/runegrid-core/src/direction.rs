use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the eight compass directions, ordered clockwise from north.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Towards increasing `y`.
    #[default]
    North,
    /// Diagonal between north and east.
    NorthEast,
    /// Towards increasing `x`.
    East,
    /// Diagonal between south and east.
    SouthEast,
    /// Towards decreasing `y`.
    South,
    /// Diagonal between south and west.
    SouthWest,
    /// Towards decreasing `x`.
    West,
    /// Diagonal between north and west.
    NorthWest,
}

/// Number of compass directions.
pub const NR_DIRECTIONS: usize = 8;

const OFFSETS: [(i32, i32); NR_DIRECTIONS] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const NAMES: [&str; NR_DIRECTIONS] = [
    "NORTH",
    "NORTH_EAST",
    "EAST",
    "SOUTH_EAST",
    "SOUTH",
    "SOUTH_WEST",
    "WEST",
    "NORTH_WEST",
];

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; NR_DIRECTIONS] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The four cardinal directions, in the order emitters discover neighbors.
    pub const CARDINALS: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this direction in the clockwise ordering (0..8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index`, wrapping modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % NR_DIRECTIONS]
    }

    /// Unit cell offset `(dx, dy)`; north is `+y`.
    pub fn offset(self) -> (i32, i32) {
        OFFSETS[self.index()]
    }

    /// Display name, e.g. `NORTH_EAST`.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// The next direction clockwise.
    pub fn rotate_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns true for north, east, south and west.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Rotation angle for presentation, in degrees clockwise from north.
    pub fn degrees(self) -> u16 {
        (360 / NR_DIRECTIONS as u16) * self.index() as u16
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    /// Accepts display names (`NORTH_EAST`), plain words (`northeast`, `north-east`)
    /// and abbreviations (`ne`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();
        let dir = match normalized.as_str() {
            "n" | "north" => Self::North,
            "ne" | "northeast" => Self::NorthEast,
            "e" | "east" => Self::East,
            "se" | "southeast" => Self::SouthEast,
            "s" | "south" => Self::South,
            "sw" | "southwest" => Self::SouthWest,
            "w" | "west" => Self::West,
            "nw" | "northwest" => Self::NorthWest,
            _ => return Err(CoreError::InvalidDirection(s.to_string())),
        };
        Ok(dir)
    }
}
