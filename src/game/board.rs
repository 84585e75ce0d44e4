// Representation of a checkers board.
// An 8x8 array of optional pieces, indexed by row then column.

use log::trace;

use super::mv::BoardError;
use super::piece::{Owner, Piece};
use super::position::Position;

pub const SIZE: i32 = 8;

/// What a square holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Coordinates off the board.
    Invalid,
    Empty,
    Occupied(Piece),
}

impl Space {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Space::Occupied(piece) => Some(piece),
            _ => None,
        }
    }
}

/// Operations the rules need from a board.
///
/// Implemented by [`Board`] and by anything that wraps one (such as a display
/// mirror). Wrappers must keep the same semantics: a failed `set_piece` or
/// `clear_piece` changes nothing.
pub trait Checkerboard {
    /// Dark squares, the only ones pieces are ever placed on: `(x + y)` is odd.
    fn is_black_space(&self, pos: Position) -> bool;

    fn is_valid_space(&self, pos: Position) -> bool;

    /// True only for a valid square with no occupant.
    fn is_empty_space(&self, pos: Position) -> bool {
        self.get_piece(pos) == Space::Empty
    }

    fn get_piece(&self, pos: Position) -> Space;

    /// Puts an off-board piece on `pos` and records `pos` on the piece.
    fn set_piece(&mut self, pos: Position, piece: &mut Piece) -> Result<(), BoardError>;

    /// Takes `piece` off its square and resets its position.
    fn clear_piece(&mut self, piece: &mut Piece) -> Result<(), BoardError>;

    /// Every placed piece, column by column.
    fn pieces(&self) -> Vec<Piece> {
        all_positions()
            .filter_map(|pos| self.get_piece(pos).piece())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; SIZE as usize]; SIZE as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board {
            squares: [[None; SIZE as usize]; SIZE as usize],
        }
    }

    fn square(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.y as usize][pos.x as usize]
    }

    fn square_mut(&mut self, pos: Position) -> &mut Option<Piece> {
        &mut self.squares[pos.y as usize][pos.x as usize]
    }

    fn locate(&self, id: u32) -> Option<Position> {
        all_positions().find(|&pos| self.square(pos).is_some_and(|p| p.id() == id))
    }
}

impl Checkerboard for Board {
    fn is_black_space(&self, pos: Position) -> bool {
        (pos.x + pos.y).rem_euclid(2) == 1
    }

    fn is_valid_space(&self, pos: Position) -> bool {
        (0..SIZE).contains(&pos.x) && (0..SIZE).contains(&pos.y)
    }

    fn get_piece(&self, pos: Position) -> Space {
        if !self.is_valid_space(pos) {
            return Space::Invalid;
        }
        match self.square(pos) {
            Some(piece) => Space::Occupied(piece),
            None => Space::Empty,
        }
    }

    fn set_piece(&mut self, pos: Position, piece: &mut Piece) -> Result<(), BoardError> {
        if let Some(current) = piece.position().or_else(|| self.locate(piece.id())) {
            return Err(BoardError::AlreadyPlaced(current));
        }
        if !self.is_valid_space(pos) {
            return Err(BoardError::OutOfBounds(pos));
        }
        if self.square(pos).is_some() {
            return Err(BoardError::Occupied(pos));
        }

        piece.set_position(Some(pos));
        *self.square_mut(pos) = Some(*piece);
        trace!("placed {} {:?} on {}", piece.owner, piece.rank, pos);
        Ok(())
    }

    fn clear_piece(&mut self, piece: &mut Piece) -> Result<(), BoardError> {
        let pos = piece.position().ok_or(BoardError::NotPlaced)?;
        if !self.is_valid_space(pos) || self.square(pos) != Some(*piece) {
            return Err(BoardError::Mismatch(pos));
        }

        *self.square_mut(pos) = None;
        piece.set_position(None);
        trace!("cleared {} {:?} from {}", piece.owner, piece.rank, pos);
        Ok(())
    }
}

impl<B: Checkerboard + ?Sized> Checkerboard for &mut B {
    fn is_black_space(&self, pos: Position) -> bool {
        (**self).is_black_space(pos)
    }

    fn is_valid_space(&self, pos: Position) -> bool {
        (**self).is_valid_space(pos)
    }

    fn is_empty_space(&self, pos: Position) -> bool {
        (**self).is_empty_space(pos)
    }

    fn get_piece(&self, pos: Position) -> Space {
        (**self).get_piece(pos)
    }

    fn set_piece(&mut self, pos: Position, piece: &mut Piece) -> Result<(), BoardError> {
        (**self).set_piece(pos, piece)
    }

    fn clear_piece(&mut self, piece: &mut Piece) -> Result<(), BoardError> {
        (**self).clear_piece(piece)
    }
}

/// Owner of the men that start on row `pos.y`: black on the top three rows,
/// red on the bottom three. Only dark squares are populated.
pub fn starting_owner(pos: Position) -> Option<Owner> {
    match pos.y {
        0..=2 => Some(Owner::Black),
        5..=7 => Some(Owner::Red),
        _ => None,
    }
}

/// All 64 coordinates, column by column.
pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..SIZE).flat_map(|x| (0..SIZE).map(move |y| Position::new(x, y)))
}
