use log::{debug, info};

use super::board::{all_positions, starting_owner, Board, Checkerboard, Space};
use super::mv::{BoardError, Move};
use super::piece::Piece;
use super::position::Position;

/// Construction options for [`Game`].
#[derive(Debug, Clone)]
pub struct GameOptions<B> {
    /// Board to play on. `None` means a fresh empty board of type `B`.
    pub board: Option<B>,
}

impl<B> Default for GameOptions<B> {
    fn default() -> Self {
        Self { board: None }
    }
}

/// Move generation and execution on top of a board.
///
/// The game keeps no state of its own besides the board: legality is worked
/// out from the current occupancy on every call, and either side may move at
/// any time.
#[derive(Debug, Clone)]
pub struct Game<B = Board> {
    board: B,
}

impl Game<Board> {
    /// A game on a fresh board set up for play.
    pub fn new() -> Self {
        Self::with_board(Board::new()).expect("an empty board has room for the starting position")
    }
}

impl Default for Game<Board> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Checkerboard + Default> Game<B> {
    pub fn from_options(options: GameOptions<B>) -> Result<Self, BoardError> {
        Self::with_board(options.board.unwrap_or_default())
    }
}

impl<B: Checkerboard> Game<B> {
    /// Sets up the starting position on `board`, which must have room for it.
    pub fn with_board(board: B) -> Result<Self, BoardError> {
        let mut game = Game { board };
        game.set_up()?;
        Ok(game)
    }

    fn set_up(&mut self) -> Result<(), BoardError> {
        for pos in all_positions() {
            if !self.board.is_black_space(pos) {
                continue;
            }
            if let Some(owner) = starting_owner(pos) {
                self.board.set_piece(pos, &mut Piece::new(owner))?;
            }
        }
        debug!("set up {} pieces", self.board.pieces().len());
        Ok(())
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get_piece(pos).piece()
    }

    pub fn pieces(&self) -> Vec<Piece> {
        self.board.pieces()
    }

    /// Squares `piece` can move to, in the order of its movement vectors.
    ///
    /// A step onto an empty square is a simple move. A step onto an enemy
    /// piece becomes a jump to the square beyond it when that square is on
    /// the board and empty.
    pub fn legal_moves(&self, piece: Option<&Piece>) -> Vec<Position> {
        let Some(piece) = piece else {
            return Vec::new();
        };
        let Some(from) = piece.position() else {
            return Vec::new();
        };

        let mut targets = Vec::new();
        for vector in piece.movement_vectors() {
            let target = from + vector;
            match self.board.get_piece(target) {
                Space::Invalid => {}
                Space::Empty => targets.push(target),
                Space::Occupied(other) if other.owner != piece.owner => {
                    let landing = target + vector;
                    if self.board.is_valid_space(landing) && self.board.is_empty_space(landing) {
                        targets.push(landing);
                    }
                }
                Space::Occupied(_) => {}
            }
        }
        targets
    }

    pub fn is_legal_move(&self, piece: &Piece, pos: Position) -> bool {
        self.legal_moves(Some(piece)).contains(&pos)
    }

    /// Moves `piece` to `pos`, removing the jumped piece on a capture, and
    /// updates `piece` to its new square.
    ///
    /// Returns `Ok(false)` without touching the board when the move is not
    /// legal. Errors mean `piece` no longer matches the board.
    pub fn do_move(&mut self, piece: &mut Piece, pos: Position) -> Result<bool, BoardError> {
        if !self.is_legal_move(piece, pos) {
            debug!("rejected {} move to {}", piece.owner, pos);
            return Ok(false);
        }

        let from = piece.position().ok_or(BoardError::NotPlaced)?;
        if self.board.get_piece(from) != Space::Occupied(*piece) {
            return Err(BoardError::Mismatch(from));
        }

        let captured = match captured_square(from, pos)? {
            Some(jumped) => {
                let victim = self
                    .board
                    .get_piece(jumped)
                    .piece()
                    .ok_or(BoardError::Mismatch(jumped))?;
                Some((jumped, victim))
            }
            None => None,
        };

        if let Some((jumped, mut victim)) = captured {
            self.board.clear_piece(&mut victim)?;
            info!("{} captured {} on {}", piece.owner, victim.owner, jumped);
        }
        self.board.clear_piece(piece)?;
        self.board.set_piece(pos, piece)?;
        debug!("{} moved {}", piece.owner, Move::new(from, pos));
        Ok(true)
    }

    /// Plays `mv` with whatever piece stands on `mv.from`.
    pub fn move_piece(&mut self, mv: Move) -> Result<bool, BoardError> {
        match self.piece_at(mv.from) {
            Some(mut piece) => self.do_move(&mut piece, mv.to),
            None => Ok(false),
        }
    }
}

/// Square of the piece jumped by moving from `from` to `to`, or `None` for a
/// single step.
///
/// A jump is exactly two squares along a diagonal. Any other displacement
/// longer than one step is an `IrregularJump`.
pub fn captured_square(from: Position, to: Position) -> Result<Option<Position>, BoardError> {
    let displacement = to - from;
    if displacement.x.abs() <= 1 && displacement.y.abs() <= 1 {
        return Ok(None);
    }
    if displacement.x.abs() != 2 || displacement.y.abs() != 2 {
        return Err(BoardError::IrregularJump(displacement));
    }
    Ok(Some(from + displacement.signum()))
}
