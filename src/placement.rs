//! Random fleet placement.
//!
//! Ships are dropped at random bows and orientations until the whole fleet
//! fits. One attempt budget covers the entire fleet; when it runs out the
//! half-filled board is thrown away and generation starts over.

use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// A finished board together with how much work it took.
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Board,
    /// Boards abandoned before this one succeeded.
    pub restarts: usize,
}

/// Candidate ship of `length` at a random bow and orientation.
///
/// Bow components range over `0..=BOARD_SIZE`, one past the last row and
/// column, so some candidates hang off the board and are rejected.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Ship {
    let n = BOARD_SIZE as i32;
    let bow = Coordinate::new(rng.random_range(0..=n), rng.random_range(0..=n));
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// Try to place the whole fleet on a fresh board within `max_attempts`
/// placement attempts. Returns `None` if the budget runs out.
pub fn try_place_fleet<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> Option<Board> {
    let mut board = Board::new();
    let mut attempts = 0usize;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                return None;
            }
            let ship = random_ship(rng, length);
            match board.place_ship(ship) {
                Ok(()) => break,
                Err(_) => log::trace!("rejected {:?}", ship),
            }
        }
    }
    board.finalize_placement();
    Some(board)
}

/// Generate a fully placed and finalized board, restarting from scratch as
/// many times as needed.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R) -> Placement {
    place_fleet_with(rng, MAX_PLACEMENT_ATTEMPTS)
}

/// [`place_fleet`] with a caller-chosen attempt budget per board.
///
/// A budget below the fleet size can never succeed and loops forever.
pub fn place_fleet_with<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> Placement {
    let mut restarts = 0;
    loop {
        if let Some(board) = try_place_fleet(rng, max_attempts) {
            log::debug!("fleet placed after {} restart(s)", restarts);
            return Placement { board, restarts };
        }
        restarts += 1;
        log::debug!("placement budget exhausted, restarting (restart {})", restarts);
    }
}

/// Shorthand for [`place_fleet`] when the restart count is not needed.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    place_fleet(rng).board
}
