use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::board::SIZE;
use super::mv::BoardError;

/// Board coordinate, `x` is the column and `y` the row counted from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Per-axis sign, used to step one square along a diagonal displacement.
    #[inline]
    pub fn signum(self) -> Position {
        Position::new(self.x.signum(), self.y.signum())
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Self::Output {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Self::Output {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Squares are written like `b3`: file a-h left to right, rank 8 on the top row.
impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidOperand(s.to_string());
        let mut chars = s.trim().chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(invalid()),
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let x = file as i32 - 'a' as i32;
        let y = SIZE - (rank as i32 - '0' as i32);
        Ok(Position::new(x, y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..SIZE).contains(&self.x) && (0..SIZE).contains(&self.y) {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, SIZE - self.y)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}
