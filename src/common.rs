//! Common types for the board: shot outcomes and board errors.

use crate::coord::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot hit a ship that is still afloat. The shooter goes again.
    Hit,
    /// Shot hit open water.
    Miss,
    /// Shot destroyed the last healthy cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship leaves the grid or touches a cell reserved by another ship.
    InvalidPlacement,
    /// Shot target lies outside the grid.
    OutOfBounds(Coordinate),
    /// Shot target was already resolved.
    AlreadyShot(Coordinate),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
            BoardError::OutOfBounds(_) => write!(f, "You shot outside the board!"),
            BoardError::AlreadyShot(_) => write!(f, "You already shot at this cell"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
