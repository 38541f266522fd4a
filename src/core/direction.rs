//! Grid coordinates and the eight compass directions.
//!
//! `Position` uses signed coordinates so that stepping off the edge of the
//! board produces a representable (but out-of-bounds) position instead of
//! wrapping. Bounds are checked by `Position::in_bounds`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// A cell coordinate on the board (row 0 is the top edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a new position. No bounds check is performed.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The single center cell.
    pub const CENTER: Position = Position::new(2, 2);

    /// Check whether this position lies on the 5x5 board.
    #[must_use]
    pub fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i8;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Step one cell in the given direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Chebyshev (king-move) distance: `max(|drow|, |dcol|)`.
    #[must_use]
    pub fn chebyshev(self, other: Position) -> u8 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }

    /// Grid indices for an in-bounds position.
    #[must_use]
    pub fn index(self) -> Option<(usize, usize)> {
        self.in_bounds()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// Iterate over every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        let size = BOARD_SIZE as i8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, clockwise from north. Enumeration order follows this.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The (row-delta, col-delta) offset for this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// The lowercase token used by the command line (`n`, `ne`, ...).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.token() == s.trim())
            .ok_or_else(|| ParseError::UnknownDirection(s.to_string()))
    }
}
