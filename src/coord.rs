//! Board coordinates.

use core::fmt;

/// Offsets of the eight cells surrounding a coordinate.
static NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-indexed (row, column) position.
///
/// Components are signed so that targets proposed off the top or left edge
/// can still be represented and rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a 1-indexed (row, column) pair as typed by a person.
    pub fn from_one_based(row: u16, col: u16) -> Self {
        Self {
            row: i32::from(row) - 1,
            col: i32::from(col) - 1,
        }
    }

    /// Coordinate shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// True if the coordinate lies inside an `n`×`n` grid.
    pub fn in_bounds(self, n: usize) -> bool {
        let n = n as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// The eight surrounding coordinates, including ones off the board.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// True if `other` touches this coordinate horizontally, vertically or
    /// diagonally. A coordinate is not adjacent to itself.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Displays the 1-indexed "row col" form used for console input.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
