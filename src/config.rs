/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths placed on every board, in placement order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships in the fleet; a board is lost once this many are sunk.
pub const FLEET_SIZE: usize = FLEET.len();

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut sum = 0;
    let mut i = 0;
    while i < FLEET.len() {
        sum += FLEET[i];
        i += 1;
    }
    sum
};

/// Longest ship a board accepts.
pub const MAX_SHIP_LENGTH: usize = {
    let mut max = 0;
    let mut i = 0;
    while i < FLEET.len() {
        if FLEET[i] > max {
            max = FLEET[i];
        }
        i += 1;
    }
    max
};

/// Placement attempts shared by the whole fleet before the board is thrown away.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Unknown water, or a ship cell on a hidden board.
pub const EMPTY_MARKER: char = 'O';
pub const SHIP_MARKER: char = '■';
pub const HIT_MARKER: char = 'X';
pub const MISS_MARKER: char = '.';
