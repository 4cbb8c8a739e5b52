//! Turn controller: two players, two boards, strictly alternating turns.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::Board,
    common::ShotOutcome,
    config::{FLEET, FLEET_SIZE},
    coord::Coordinate,
    placement::place_fleet,
    player::Player,
};

/// The two seats at the table. The human seat moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// One accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Proposals rejected before this one was accepted.
    pub rejected: usize,
}

/// Per-side counters kept for the whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SideStats {
    /// Accepted shots.
    pub shots: usize,
    /// Proposals rejected as out of bounds or already shot.
    pub rejected: usize,
    /// Enemy ships sunk.
    pub sunk: usize,
}

struct Seat {
    player: Box<dyn Player>,
    board: Board,
    stats: SideStats,
}

/// Refuse boards a game could never finish on: placement still open, or a
/// fleet that differs from [`FLEET`].
fn check_board(side: Side, board: &Board) -> anyhow::Result<()> {
    if !board.is_finalized() {
        anyhow::bail!("{} board: placement is not finalized", side);
    }
    let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    lengths.sort_unstable();
    let mut expected = FLEET;
    expected.sort_unstable();
    if lengths != expected {
        anyhow::bail!("{} board: fleet {:?} does not match {:?}", side, lengths, FLEET);
    }
    if board.all_sunk() {
        anyhow::bail!("{} board: whole fleet already sunk", side);
    }
    Ok(())
}

/// Split the seats into (active, opponent).
fn seats_for(seats: &mut [Seat; 2], side: Side) -> (&mut Seat, &mut Seat) {
    let [human, computer] = seats;
    match side {
        Side::Human => (human, computer),
        Side::Computer => (computer, human),
    }
}

/// A single game session. Owns both players, their boards and the random
/// number generator used for every random choice in the game.
pub struct Game {
    seats: [Seat; 2],
    turn: Side,
    status: GameStatus,
    rng: SmallRng,
}

impl Game {
    /// Set up a game with freshly generated boards for both sides.
    pub fn new(human: Box<dyn Player>, computer: Box<dyn Player>, mut rng: SmallRng) -> Self {
        let human_board = place_fleet(&mut rng).board;
        let computer_board = place_fleet(&mut rng).board;
        Self::assemble(human, human_board, computer, computer_board, rng)
    }

    /// Set up a game from a fixed seed.
    pub fn from_seed(human: Box<dyn Player>, computer: Box<dyn Player>, seed: u64) -> Self {
        Self::new(human, computer, SmallRng::seed_from_u64(seed))
    }

    /// Set up a game on boards prepared by the caller.
    ///
    /// Both boards must be finalized and carry exactly the standard fleet,
    /// otherwise the game could run out of targets before anyone wins.
    pub fn with_boards(
        human: Box<dyn Player>,
        human_board: Board,
        computer: Box<dyn Player>,
        computer_board: Board,
        rng: SmallRng,
    ) -> anyhow::Result<Self> {
        check_board(Side::Human, &human_board)?;
        check_board(Side::Computer, &computer_board)?;
        Ok(Self::assemble(human, human_board, computer, computer_board, rng))
    }

    fn assemble(
        human: Box<dyn Player>,
        human_board: Board,
        computer: Box<dyn Player>,
        computer_board: Board,
        rng: SmallRng,
    ) -> Self {
        log::info!("new game: {} vs {}", human.name(), computer.name());
        let seat = |player, board| Seat {
            player,
            board,
            stats: SideStats::default(),
        };
        Game {
            seats: [seat(human, human_board), seat(computer, computer_board)],
            turn: Side::Human,
            status: GameStatus::InProgress,
            rng,
        }
    }

    /// Side that will act on the next [`Game::step`].
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Won(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    pub fn stats(&self, side: Side) -> SideStats {
        self.seats[side.index()].stats
    }

    pub fn player_name(&self, side: Side) -> &str {
        self.seats[side.index()].player.name()
    }

    /// Resolve one accepted shot by the side whose turn it is.
    ///
    /// The active player is asked for targets until the opponent's board
    /// accepts one; rejected proposals do not consume the turn. A hit keeps
    /// the turn, a miss or a sinking passes it. Errors come only from the
    /// player's input channel, or from stepping a finished game.
    pub fn step(&mut self) -> anyhow::Result<ShotReport> {
        if let GameStatus::Won(side) = self.status {
            anyhow::bail!("game is over, {} already won", side);
        }
        let shooter = self.turn;
        let (me, them) = seats_for(&mut self.seats, shooter);

        let mut rejected = 0;
        let (target, outcome) = loop {
            let target = me.player.select_target(&mut self.rng, &them.board)?;
            match them.board.shoot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    rejected += 1;
                    me.stats.rejected += 1;
                    me.player.handle_rejected(target, err);
                }
            }
        };

        me.stats.shots += 1;
        me.stats.sunk = them.board.sunk_count();
        me.player.handle_shot_result(target, outcome);
        them.player.handle_opponent_shot(target, outcome);
        log::debug!("{} shot {} -> {:?}", shooter, target, outcome);

        if let Some(winner) = self.check_winner() {
            log::info!("{} wins", winner);
            self.status = GameStatus::Won(winner);
        } else if !outcome.repeats_turn() {
            self.turn = shooter.opponent();
        }

        Ok(ShotReport {
            shooter,
            target,
            outcome,
            rejected,
        })
    }

    /// The side whose opponent has lost the whole fleet, if any.
    fn check_winner(&self) -> Option<Side> {
        [Side::Human, Side::Computer]
            .into_iter()
            .find(|side| self.board(side.opponent()).sunk_count() == FLEET_SIZE)
    }

    /// Play until someone wins, handing every accepted shot to `on_shot`.
    pub fn run_with<F>(&mut self, mut on_shot: F) -> anyhow::Result<Side>
    where
        F: FnMut(&Game, &ShotReport),
    {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            let report = self.step()?;
            on_shot(self, &report);
        }
    }

    /// Play until someone wins.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        self.run_with(|_, _| {})
    }
}
