//! Ship definitions: bow, length, orientation and remaining health.

use core::fmt;

use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend to the right of the bow (increasing column).
    Horizontal,
    /// Cells extend below the bow (increasing row).
    Vertical,
}

impl Orientation {
    /// Unit step from one cell of a ship to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship anchored at its bow.
///
/// Occupied cells are derived from the bow, length and orientation, never
/// stored. Health starts at the length and is only lowered by the owning
/// board while resolving shots. Any length can be built here; the board
/// refuses ships outside `1..=MAX_SHIP_LENGTH`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            health: length,
        }
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Occupied cells, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// True if `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one point of damage, returning the remaining health.
    pub(crate) fn take_hit(&mut self) -> usize {
        self.health = self.health.saturating_sub(1);
        self.health
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.health,
        )
    }
}
