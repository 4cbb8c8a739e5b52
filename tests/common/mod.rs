#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use seabattle::{Board, BoardError, Coordinate, Orientation, Player, Ship, ShotOutcome};

pub fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

/// Full fleet laid out by hand:
///
/// ```text
///   | 1 | 2 | 3 | 4 | 5 | 6 |
/// 1 | ■ | ■ | ■ | O | ■ | O |
/// 2 | O | O | O | O | ■ | O |
/// 3 | ■ | O | ■ | O | O | O |
/// 4 | ■ | O | O | O | ■ | O |
/// 5 | O | O | O | O | O | O |
/// 6 | ■ | O | ■ | O | O | O |
/// ```
pub fn fleet() -> Vec<Ship> {
    vec![
        Ship::new(c(0, 0), 3, Orientation::Horizontal),
        Ship::new(c(0, 4), 2, Orientation::Vertical),
        Ship::new(c(2, 0), 2, Orientation::Vertical),
        Ship::new(c(2, 2), 1, Orientation::Horizontal),
        Ship::new(c(3, 4), 1, Orientation::Horizontal),
        Ship::new(c(5, 0), 1, Orientation::Vertical),
        Ship::new(c(5, 2), 1, Orientation::Vertical),
    ]
}

/// Every ship cell of [`fleet`], grouped ship by ship.
pub fn fleet_cells() -> Vec<Coordinate> {
    fleet().iter().flat_map(|s| s.cells().collect::<Vec<_>>()).collect()
}

pub fn fixed_board() -> Board {
    let mut board = Board::new();
    for ship in fleet() {
        board.place_ship(ship).unwrap();
    }
    board.finalize_placement();
    board
}

/// Player that replays a fixed list of targets and records what it is told.
pub struct ScriptedPlayer {
    name: &'static str,
    moves: VecDeque<Coordinate>,
    pub rejected: Rc<RefCell<Vec<BoardError>>>,
    pub results: Rc<RefCell<Vec<(Coordinate, ShotOutcome)>>>,
    pub incoming: Rc<RefCell<Vec<(Coordinate, ShotOutcome)>>>,
}

impl ScriptedPlayer {
    pub fn new(name: &'static str, moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            name,
            moves: moves.into_iter().collect(),
            rejected: Rc::default(),
            results: Rc::default(),
            incoming: Rc::default(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of moves", self.name))
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.results.borrow_mut().push((target, outcome));
    }

    fn handle_rejected(&mut self, _target: Coordinate, error: BoardError) {
        self.rejected.borrow_mut().push(error);
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.incoming.borrow_mut().push((target, outcome));
    }
}
