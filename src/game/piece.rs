use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering::Relaxed};

use super::position::Position;

static NEXT_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Red,
    Black,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Red => write!(f, "red"),
            Owner::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rank {
    #[default]
    Man,
    King,
}

const UP: [Position; 2] = [Position::new(-1, -1), Position::new(1, -1)];
const DOWN: [Position; 2] = [Position::new(-1, 1), Position::new(1, 1)];

/// A checker together with the square it currently sits on.
///
/// `position` is `None` while the piece is off the board. Only the board
/// placement operations change it. Copies of a piece share its `id`, and a
/// board holds at most one piece with a given id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Owner,
    pub rank: Rank,
    id: u32,
    position: Option<Position>,
}

impl Piece {
    pub fn new(owner: Owner) -> Self {
        Self::with_rank(owner, Rank::default())
    }

    pub fn with_rank(owner: Owner, rank: Rank) -> Self {
        Self {
            owner,
            rank,
            id: NEXT_ID.fetch_add(1, Relaxed),
            position: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }

    /// Unit diagonals this piece may step along, upward ones first.
    ///
    /// Red men move up the board (towards row 0), black men down, kings both ways.
    pub fn movement_vectors(&self) -> Vec<Position> {
        let king = self.rank == Rank::King;
        let mut vectors = Vec::with_capacity(4);
        if self.owner == Owner::Red || king {
            vectors.extend_from_slice(&UP);
        }
        if self.owner == Owner::Black || king {
            vectors.extend_from_slice(&DOWN);
        }
        vectors
    }
}
