//! Rules engine for American checkers on an 8x8 board.

pub mod game;
pub mod ui;

pub use game::board::{Board, Checkerboard, Space};
pub use game::mv::{BoardError, Move};
pub use game::piece::{Owner, Piece, Rank};
pub use game::position::Position;
pub use game::rules::{Game, GameOptions};
