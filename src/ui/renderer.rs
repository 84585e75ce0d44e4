use std::fmt;

use crate::game::board::{all_positions, Board, Checkerboard, Space, SIZE};
use crate::game::mv::BoardError;
use crate::game::piece::{Owner, Piece, Rank};
use crate::game::position::Position;

/// Characters used to draw squares and pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub red_man: char,
    pub red_king: char,
    pub black_man: char,
    pub black_king: char,
    pub dark: char,
    pub light: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            red_man: 'r',
            red_king: 'R',
            black_man: 'b',
            black_king: 'B',
            dark: '.',
            light: ' ',
        }
    }
}

impl Glyphs {
    pub fn piece(&self, piece: &Piece) -> char {
        match (piece.owner, piece.rank) {
            (Owner::Red, Rank::Man) => self.red_man,
            (Owner::Red, Rank::King) => self.red_king,
            (Owner::Black, Rank::Man) => self.black_man,
            (Owner::Black, Rank::King) => self.black_king,
        }
    }

    fn square<B: Checkerboard + ?Sized>(&self, board: &B, pos: Position) -> char {
        match board.get_piece(pos) {
            Space::Occupied(piece) => self.piece(&piece),
            _ if board.is_black_space(pos) => self.dark,
            _ => self.light,
        }
    }
}

type Cells = [[char; SIZE as usize]; SIZE as usize];

/// Simple text renderer for the board.
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn render<B: Checkerboard + ?Sized>(board: &B, glyphs: &Glyphs, coordinates: bool) -> String {
        Self::draw(&Self::cells(board, glyphs), coordinates)
    }

    fn cells<B: Checkerboard + ?Sized>(board: &B, glyphs: &Glyphs) -> Cells {
        let mut cells = [[glyphs.light; SIZE as usize]; SIZE as usize];
        for pos in all_positions() {
            cells[pos.y as usize][pos.x as usize] = glyphs.square(board, pos);
        }
        cells
    }

    fn draw(cells: &Cells, coordinates: bool) -> String {
        let mut output = String::new();
        for (y, row) in cells.iter().enumerate() {
            if coordinates {
                output.push_str(&format!("{} | ", SIZE as usize - y));
            }
            for ch in row {
                output.push(*ch);
                output.push(' ');
            }
            output.push('\n');
        }
        if coordinates {
            output.push_str("    a b c d e f g h\n");
        }
        output
    }
}

/// A board that keeps a character picture of itself in step with every
/// successful placement and removal.
#[derive(Debug, Clone)]
pub struct TextBoard<B = Board> {
    inner: B,
    glyphs: Glyphs,
    cells: Cells,
}

impl<B: Checkerboard> TextBoard<B> {
    pub fn new(inner: B, glyphs: Glyphs) -> Self {
        let cells = BoardRenderer::cells(&inner, &glyphs);
        Self {
            inner,
            glyphs,
            cells,
        }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn render(&self, coordinates: bool) -> String {
        BoardRenderer::draw(&self.cells, coordinates)
    }

    /// Character currently shown for `pos`, if it is on the board.
    pub fn glyph_at(&self, pos: Position) -> Option<char> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        self.cells.get(y)?.get(x).copied()
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut char> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        self.cells.get_mut(y)?.get_mut(x)
    }
}

impl<B: Checkerboard + Default> Default for TextBoard<B> {
    fn default() -> Self {
        Self::new(B::default(), Glyphs::default())
    }
}

impl<B: Checkerboard> Checkerboard for TextBoard<B> {
    fn is_black_space(&self, pos: Position) -> bool {
        self.inner.is_black_space(pos)
    }

    fn is_valid_space(&self, pos: Position) -> bool {
        self.inner.is_valid_space(pos)
    }

    fn is_empty_space(&self, pos: Position) -> bool {
        self.inner.is_empty_space(pos)
    }

    fn get_piece(&self, pos: Position) -> Space {
        self.inner.get_piece(pos)
    }

    fn set_piece(&mut self, pos: Position, piece: &mut Piece) -> Result<(), BoardError> {
        self.inner.set_piece(pos, piece)?;
        let glyph = self.glyphs.piece(piece);
        if let Some(cell) = self.cell_mut(pos) {
            *cell = glyph;
        }
        Ok(())
    }

    fn clear_piece(&mut self, piece: &mut Piece) -> Result<(), BoardError> {
        let from = piece.position();
        self.inner.clear_piece(piece)?;
        if let Some(pos) = from {
            let glyph = self.glyphs.square(&self.inner, pos);
            if let Some(cell) = self.cell_mut(pos) {
                *cell = glyph;
            }
        }
        Ok(())
    }
}

impl<B> fmt::Display for TextBoard<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BoardRenderer::draw(&self.cells, true))
    }
}
