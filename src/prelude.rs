//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, Board, BoardError, ComputerPlayer, Coordinate, Game, GameStatus, Orientation,
    Player, Ship, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HumanPlayer};
