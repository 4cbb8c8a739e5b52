use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::BOARD_SIZE,
    coord::Coordinate,
};
use rand::{rngs::SmallRng, Rng};

use crate::player::Player;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no record of earlier shots and relies on the board rejecting
/// repeats, so late in a game most proposals bounce off as `AlreadyShot`.
pub struct ComputerPlayer {
    name: &'static str,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self { name: "computer" }
    }

    /// Computer player with a custom display name, for computer-vs-computer runs.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniformly random in-bounds coordinate.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let n = BOARD_SIZE as i32;
    Coordinate::new(rng.random_range(0..n), rng.random_range(0..n))
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        Ok(random_target(rng))
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        log::debug!("{} fired at {} -> {:?}", self.name, target, outcome);
    }

    fn handle_rejected(&mut self, target: Coordinate, error: BoardError) {
        log::trace!("{} retrying after {} at {}", self.name, error, target);
    }
}
