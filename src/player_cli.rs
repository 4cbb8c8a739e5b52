#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::{board::Board, common::BoardError, coord::Coordinate};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Reasons a typed move is re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveParseError {
    WrongCount,
    NotNumbers,
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongCount => write!(f, "Enter 2 coordinates!"),
            MoveParseError::NotNumbers => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Parse "row col", both 1-indexed, into a 0-indexed coordinate.
///
/// Only the token count and digits are checked here. A `0` or an overly
/// large number yields a coordinate the board will reject as out of bounds.
pub fn parse_move(input: &str) -> Result<Coordinate, MoveParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let &[row, col] = parts.as_slice() else {
        return Err(MoveParseError::WrongCount);
    };
    let number = |tok: &str| -> Result<u16, MoveParseError> {
        if tok.is_empty() || !tok.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoveParseError::NotNumbers);
        }
        // Digits that overflow are still a number, just far off the board.
        Ok(tok.parse::<u16>().unwrap_or(u16::MAX))
    };
    Ok(Coordinate::from_one_based(number(row)?, number(col)?))
}

/// Console player reading moves from `input` and writing prompts to `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's standard input and output.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its input and output handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_move(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a move was entered");
            }
            match parse_move(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: &Board,
    ) -> anyhow::Result<Coordinate> {
        self.read_move()
    }

    fn handle_rejected(&mut self, _target: Coordinate, error: BoardError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            log::warn!("could not report rejected move: {}", e);
        }
    }
}
