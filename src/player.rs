use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
};
use rand::rngs::SmallRng;

/// Interface implemented by the different kinds of player.
///
/// A player proposes targets on the opponent's board. The board is passed
/// read-only; shots are applied by the game, which keeps asking the same
/// player until a proposal is accepted.
pub trait Player {
    /// Short name used in log lines and console messages.
    fn name(&self) -> &str;

    /// Choose the next target on `opponent`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that its proposal was rejected; it will be asked again.
    fn handle_rejected(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}
