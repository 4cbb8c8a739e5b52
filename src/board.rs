//! Game board state: grid, ship registry, placement and shot resolution.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::common::{BoardError, ShotOutcome};
use crate::config::{
    BOARD_SIZE, EMPTY_MARKER, FLEET_SIZE, HIT_MARKER, MAX_SHIP_LENGTH, MISS_MARKER, SHIP_MARKER,
};
use crate::coord::Coordinate;
use crate::coord_set::CoordSet;
use crate::ship::Ship;

type Resolved = CoordSet<u64, BOARD_SIZE>;

/// Visible state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Undamaged ship segment. Rendered as empty on a hidden board.
    Ship,
    Hit,
    Miss,
}

impl Cell {
    fn marker(self, hidden: bool) -> char {
        match self {
            Cell::Empty => EMPTY_MARKER,
            Cell::Ship if hidden => EMPTY_MARKER,
            Cell::Ship => SHIP_MARKER,
            Cell::Hit => HIT_MARKER,
            Cell::Miss => MISS_MARKER,
        }
    }
}

/// One player's board.
///
/// The `resolved` set does double duty. While the fleet is being placed it
/// holds every ship cell plus the ring of cells around it, so no two ships
/// overlap or touch. [`Board::finalize_placement`] clears it, after which it
/// records every coordinate that has been shot at, together with the ring
/// around each sunk ship.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    resolved: Resolved,
    sunk: usize,
    finalized: bool,
}

impl Board {
    /// Create an empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::with_capacity(FLEET_SIZE),
            resolved: Resolved::new(),
            sunk: 0,
            finalized: false,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn in_bounds(coord: Coordinate) -> bool {
        coord.in_bounds(BOARD_SIZE)
    }

    /// Cell state at `coord`, or `None` off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if Self::in_bounds(coord) {
            Some(self.grid[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` once the whole fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk >= FLEET_SIZE
    }

    /// Whether `coord` is currently in the exclusion set.
    pub fn is_resolved(&self, coord: Coordinate) -> bool {
        self.resolved.contains(coord)
    }

    /// Whether placement has been closed by [`Board::finalize_placement`].
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        self.grid[coord.row as usize][coord.col as usize] = cell;
    }

    /// Add `coord` to the exclusion set, returning `true` if it was not
    /// there yet. Off-board coordinates are ignored.
    fn reserve(&mut self, coord: Coordinate) -> bool {
        self.resolved.insert(coord).unwrap_or(false)
    }

    /// Reserve every unreserved in-bounds cell touching `ship`. With `mark`
    /// set the newly reserved cells are also shown as misses.
    fn surround(&mut self, ship: &Ship, mark: bool) {
        for cell in ship.cells() {
            for near in cell.neighbours() {
                if self.reserve(near) && mark {
                    self.set_cell(near, Cell::Miss);
                }
            }
        }
    }

    /// Add `ship` to the board.
    ///
    /// Fails with [`BoardError::InvalidPlacement`] if any of its cells is off
    /// the grid or reserved by an earlier ship, if its length is outside
    /// `1..=MAX_SHIP_LENGTH`, if the fleet is already complete, or if
    /// placement has been finalized.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.finalized || self.ships.len() >= FLEET_SIZE {
            return Err(BoardError::InvalidPlacement);
        }
        if !(1..=MAX_SHIP_LENGTH).contains(&ship.length()) {
            return Err(BoardError::InvalidPlacement);
        }
        if ship
            .cells()
            .any(|c| !Self::in_bounds(c) || self.resolved.contains(c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Ship);
            self.reserve(cell);
        }
        self.surround(&ship, false);
        self.ships.push(ship);
        Ok(())
    }

    /// Close the placement phase. The exclusion set is emptied so that cells
    /// next to ships are not treated as already shot.
    pub fn finalize_placement(&mut self) {
        self.resolved.clear();
        self.finalized = true;
    }

    /// Fire at `target`.
    ///
    /// Out-of-bounds and repeated targets are rejected without touching the
    /// board. Sinking a ship marks its surroundings as misses and excludes
    /// them from further shots.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !Self::in_bounds(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.resolved.contains(target) {
            return Err(BoardError::AlreadyShot(target));
        }
        self.reserve(target);

        let Some(idx) = self.ships.iter().position(|s| s.occupies(target)) else {
            self.set_cell(target, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };
        self.set_cell(target, Cell::Hit);
        if self.ships[idx].take_hit() > 0 {
            return Ok(ShotOutcome::Hit);
        }

        let ship = self.ships[idx];
        self.surround(&ship, true);
        self.sunk += 1;
        log::debug!("ship {:?} sunk, {} of {} down", ship, self.sunk, FLEET_SIZE);
        Ok(ShotOutcome::Sunk)
    }

    /// Render the grid with 1-indexed row and column labels. A hidden board
    /// shows undamaged ship cells as empty water.
    pub fn render(&self, hidden: bool) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_grid(&mut out, hidden);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, hidden: bool) -> fmt::Result {
        write!(out, " ")?;
        for c in 0..BOARD_SIZE {
            write!(out, " | {}", c + 1)?;
        }
        write!(out, " |")?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(out, "\n{}", r + 1)?;
            for cell in row {
                write!(out, " | {}", cell.marker(hidden))?;
            }
            write!(out, " |")?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  sunk: {},\n  finalized: {},\n  ships: {:?},\n  resolved: {:?}\n}}",
            self.sunk, self.finalized, self.ships, self.resolved
        )?;
        self.write_grid(f, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    #[test]
    fn render_matches_layout() {
        let mut board = Board::new();
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 1, Orientation::Horizontal))
            .unwrap();
        board.finalize_placement();
        let shown = board.render(false);
        let mut lines = shown.lines();
        assert_eq!(lines.next(), Some("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
        assert_eq!(lines.next(), Some("1 | ■ | O | O | O | O | O |"));
        assert_eq!(board.render(true).lines().nth(1), Some("1 | O | O | O | O | O | O |"));
    }

    #[test]
    fn placement_after_finalize_is_rejected() {
        let mut board = Board::new();
        board.finalize_placement();
        let ship = Ship::new(Coordinate::new(2, 2), 2, Orientation::Vertical);
        assert_eq!(board.place_ship(ship), Err(BoardError::InvalidPlacement));
        assert!(board.ships().is_empty());
    }
}
