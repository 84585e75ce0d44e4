//! Simple move representation and error types.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| BoardError::InvalidOperand(s.to_string()))?;
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("'{0}' is not a board position")]
    InvalidOperand(String),
    #[error("piece cannot be on more than one square at once (already on {0})")]
    AlreadyPlaced(Position),
    #[error("piece cannot be cleared because it is not on the board")]
    NotPlaced,
    #[error("{0} is outside the board")]
    OutOfBounds(Position),
    #[error("{0} is already occupied")]
    Occupied(Position),
    #[error("piece does not occupy {0}")]
    Mismatch(Position),
    #[error("jump displacement {0:?} is not a single diagonal hop")]
    IrregularJump(Position),
}
