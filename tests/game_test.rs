use checkers::game::board::{Board, Checkerboard};
use checkers::game::rules::captured_square;
use checkers::ui::renderer::{BoardRenderer, Glyphs};
use checkers::{BoardError, Game, GameOptions, Move, Owner, Piece, Position, Rank};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// A game on an otherwise empty board with `pieces` placed.
fn game_with(pieces: &[(Position, Piece)]) -> Game {
    let mut board = Board::new();
    for &(at, mut piece) in pieces {
        board.set_piece(at, &mut piece).unwrap();
    }
    // Swap the opening position out for the prepared board.
    let mut game = Game::new();
    *game.board_mut() = board;
    game
}

#[test]
fn test_initial_setup() {
    let game = Game::new();
    assert_eq!(game.piece_at(pos(0, 0)), None);

    let black = game.piece_at(pos(1, 0)).unwrap();
    assert_eq!((black.owner, black.rank), (Owner::Black, Rank::Man));

    let red = game.piece_at(pos(0, 7)).unwrap();
    assert_eq!((red.owner, red.rank), (Owner::Red, Rank::Man));
    // (1, 7) is a light square and stays empty.
    assert_eq!(game.piece_at(pos(1, 7)), None);

    for x in 0..8 {
        assert!(game.board().is_empty_space(pos(x, 3)));
        assert!(game.board().is_empty_space(pos(x, 4)));
    }

    let pieces = game.pieces();
    assert_eq!(pieces.len(), 24);
    assert_eq!(pieces.iter().filter(|p| p.owner == Owner::Red).count(), 12);
    assert_eq!(pieces.iter().filter(|p| p.owner == Owner::Black).count(), 12);
    assert!(pieces.iter().all(|p| game.board().is_black_space(p.position().unwrap())));
}

#[test]
fn test_setup_through_options_matches_standard_board() {
    let picture = |board: &Board| BoardRenderer::render(board, &Glyphs::default(), false);
    let standard = picture(Game::new().board());

    let game: Game<Board> = Game::from_options(GameOptions::default()).unwrap();
    assert_eq!(picture(game.board()), standard);

    let supplied = Game::from_options(GameOptions {
        board: Some(Board::new()),
    })
    .unwrap();
    assert_eq!(picture(supplied.board()), standard);
    assert_eq!(supplied.pieces().len(), 24);
}

#[test]
fn test_setup_on_populated_board_fails() {
    let err = Game::with_board(Game::new().into_board()).unwrap_err();
    assert_eq!(err, BoardError::Occupied(pos(0, 1)));
}

#[test]
fn test_external_board_by_reference() {
    let mut board = Board::new();
    {
        let mut game = Game::with_board(&mut board).unwrap();
        assert!(game.move_piece(Move::new(pos(2, 5), pos(1, 4))).unwrap());
    }
    assert!(board.is_empty_space(pos(2, 5)));
    assert_eq!(board.get_piece(pos(1, 4)).piece().unwrap().owner, Owner::Red);
}

#[test]
fn test_no_piece_has_no_moves() {
    let game = Game::new();
    assert!(game.legal_moves(None).is_empty());
    assert!(game.legal_moves(Some(&Piece::new(Owner::Red))).is_empty());
}

#[test]
fn test_simple_moves_for_red_man() {
    let game = game_with(&[(pos(1, 5), Piece::new(Owner::Red))]);
    let red = game.piece_at(pos(1, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&red)), vec![pos(0, 4), pos(2, 4)]);
}

#[test]
fn test_edge_and_own_pieces_block_moves() {
    let game = game_with(&[
        (pos(0, 5), Piece::new(Owner::Red)),
        (pos(2, 5), Piece::new(Owner::Red)),
        (pos(3, 4), Piece::new(Owner::Red)),
    ]);
    let edge = game.piece_at(pos(0, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&edge)), vec![pos(1, 4)]);

    let blocked = game.piece_at(pos(2, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&blocked)), vec![pos(1, 4)]);
}

#[test]
fn test_opening_moves() {
    let game = Game::new();
    let red = game.piece_at(pos(2, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&red)), vec![pos(1, 4), pos(3, 4)]);

    let back_row = game.piece_at(pos(0, 7)).unwrap();
    assert!(game.legal_moves(Some(&back_row)).is_empty());

    let black = game.piece_at(pos(5, 2)).unwrap();
    assert_eq!(game.legal_moves(Some(&black)), vec![pos(4, 3), pos(6, 3)]);
}

#[test]
fn test_jump_captures_enemy() {
    let mut game = game_with(&[
        (pos(3, 5), Piece::new(Owner::Red)),
        (pos(2, 4), Piece::new(Owner::Black)),
    ]);
    let mut red = game.piece_at(pos(3, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&red)), vec![pos(1, 3), pos(4, 4)]);
    assert!(game.is_legal_move(&red, pos(1, 3)));

    assert!(game.do_move(&mut red, pos(1, 3)).unwrap());
    assert_eq!(game.piece_at(pos(2, 4)), None);
    assert_eq!(game.piece_at(pos(3, 5)), None);
    let moved = game.piece_at(pos(1, 3)).unwrap();
    assert_eq!(moved.owner, Owner::Red);
    assert_eq!(moved.position(), Some(pos(1, 3)));
    assert_eq!(game.pieces().len(), 1);
}

#[test]
fn test_blocked_jump_is_not_legal() {
    let game = game_with(&[
        (pos(3, 5), Piece::new(Owner::Red)),
        (pos(2, 4), Piece::new(Owner::Black)),
        (pos(1, 3), Piece::new(Owner::Black)),
    ]);
    let red = game.piece_at(pos(3, 5)).unwrap();
    let moves = game.legal_moves(Some(&red));
    assert!(!moves.contains(&pos(1, 3)));
    assert!(!moves.contains(&pos(2, 4)));
    assert_eq!(moves, vec![pos(4, 4)]);
}

#[test]
fn test_jump_off_board_is_not_legal() {
    let game = game_with(&[
        (pos(1, 5), Piece::new(Owner::Red)),
        (pos(0, 4), Piece::new(Owner::Black)),
    ]);
    let red = game.piece_at(pos(1, 5)).unwrap();
    assert_eq!(game.legal_moves(Some(&red)), vec![pos(2, 4)]);
}

#[test]
fn test_king_moves_both_ways_and_jumps_backwards() {
    let mut game = game_with(&[
        (pos(3, 3), Piece::with_rank(Owner::Red, Rank::King)),
        (pos(4, 4), Piece::new(Owner::Black)),
    ]);
    let mut king = game.piece_at(pos(3, 3)).unwrap();
    assert_eq!(
        game.legal_moves(Some(&king)),
        vec![pos(2, 2), pos(4, 2), pos(2, 4), pos(5, 5)]
    );

    assert!(game.do_move(&mut king, pos(5, 5)).unwrap());
    assert_eq!(game.piece_at(pos(4, 4)), None);
    assert_eq!(game.piece_at(pos(5, 5)).unwrap().rank, Rank::King);
}

#[test]
fn test_illegal_move_changes_nothing() {
    let mut game = Game::new();
    let before = game.board().clone();
    let mut red = game.piece_at(pos(2, 5)).unwrap();

    assert!(!game.do_move(&mut red, pos(2, 4)).unwrap());
    assert!(!game.do_move(&mut red, pos(4, 3)).unwrap());
    assert_eq!(game.board(), &before);
    assert_eq!(game.piece_at(pos(2, 5)).unwrap().position(), Some(pos(2, 5)));
}

#[test]
fn test_move_piece_from_empty_square_is_rejected() {
    let mut game = Game::new();
    assert!(!game.move_piece(Move::new(pos(0, 4), pos(1, 3))).unwrap());
    assert!(!game.move_piece("a1-b2".parse().unwrap()).unwrap());
}

#[test]
fn test_stale_piece_is_an_error() {
    let mut game = game_with(&[(pos(1, 5), Piece::new(Owner::Red))]);
    let mut red = game.piece_at(pos(1, 5)).unwrap();
    let mut stale = red;
    assert!(game.do_move(&mut red, pos(0, 4)).unwrap());

    game.board_mut().set_piece(pos(1, 5), &mut Piece::new(Owner::Black)).unwrap();
    assert_eq!(game.do_move(&mut stale, pos(2, 4)), Err(BoardError::Mismatch(pos(1, 5))));
    assert_eq!(game.piece_at(pos(1, 5)).unwrap().owner, Owner::Black);
    assert_eq!(game.piece_at(pos(0, 4)).unwrap().id(), red.id());
    assert_eq!(game.piece_at(pos(2, 4)), None);
}

#[test]
fn test_same_handle_moves_twice() {
    let mut game = game_with(&[(pos(4, 7), Piece::new(Owner::Red))]);
    let mut red = game.piece_at(pos(4, 7)).unwrap();

    assert!(game.do_move(&mut red, pos(3, 6)).unwrap());
    assert_eq!(red.position(), Some(pos(3, 6)));
    assert!(game.do_move(&mut red, pos(2, 5)).unwrap());
    assert_eq!(red.position(), Some(pos(2, 5)));

    assert_eq!(game.piece_at(pos(2, 5)), Some(red));
    assert_eq!(game.piece_at(pos(3, 6)), None);
    assert_eq!(game.piece_at(pos(4, 7)), None);
    assert_eq!(game.pieces().len(), 1);
}

#[test]
fn test_jumping_handle_keeps_moving() {
    let mut game = game_with(&[
        (pos(3, 5), Piece::new(Owner::Red)),
        (pos(2, 4), Piece::new(Owner::Black)),
    ]);
    let mut red = game.piece_at(pos(3, 5)).unwrap();
    assert!(game.do_move(&mut red, pos(1, 3)).unwrap());
    assert!(game.do_move(&mut red, pos(0, 2)).unwrap());
    assert_eq!(game.piece_at(pos(0, 2)), Some(red));
    assert_eq!(game.pieces().len(), 1);
}

#[test]
fn test_captured_square() {
    assert_eq!(captured_square(pos(2, 5), pos(1, 4)), Ok(None));
    assert_eq!(captured_square(pos(3, 5), pos(1, 3)), Ok(Some(pos(2, 4))));
    assert_eq!(captured_square(pos(3, 3), pos(5, 5)), Ok(Some(pos(4, 4))));
    assert_eq!(
        captured_square(pos(0, 7), pos(3, 4)),
        Err(BoardError::IrregularJump(pos(3, -3)))
    );
    assert_eq!(
        captured_square(pos(2, 5), pos(4, 4)),
        Err(BoardError::IrregularJump(pos(2, -1)))
    );
    assert_eq!(
        captured_square(pos(2, 5), pos(2, 3)),
        Err(BoardError::IrregularJump(pos(0, -2)))
    );
}

#[test]
fn test_sequence_of_moves_with_capture() {
    let mut game = Game::new();
    for mv in ["c3-d4", "f6-e5"] {
        assert!(game.move_piece(mv.parse().unwrap()).unwrap(), "{}", mv);
    }
    assert!(game.move_piece("d4-f6".parse().unwrap()).unwrap());
    assert_eq!(game.piece_at("e5".parse().unwrap()), None);
    assert_eq!(game.piece_at("f6".parse().unwrap()).unwrap().owner, Owner::Red);
    assert_eq!(game.pieces().len(), 23);
}
