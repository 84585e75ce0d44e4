pub mod board;
pub mod mv;
pub mod piece;
pub mod position;
pub mod rules;
