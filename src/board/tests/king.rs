//! King predicate tests.

use crate::board::{Board, BoardBuilder, Color, Coordinate, GameRules, King, Move, Piece};

fn c(row: i8, column: i8) -> Coordinate {
    Coordinate::new(row, column)
}

#[test]
fn test_king_moves_any_distance_any_direction() {
    let king = King::new(Color::Red, c(4, 4));
    for to in [c(7, 7), c(1, 1), c(7, 1), c(1, 7), c(5, 5), c(3, 3)] {
        assert!(king.is_valid_move(to, true), "{to}");
        assert!(king.is_valid_move(to, false), "{to}");
    }
    assert!(!king.is_valid_move(c(4, 7), false));
    assert!(!king.is_valid_move(c(6, 5), false));
}

#[test]
fn test_king_own_square_is_geometrically_valid() {
    let king = King::new(Color::Black, c(4, 4));
    assert!(king.is_valid_move(c(4, 4), false));
    assert!(king.is_valid_move(c(4, 4), true));

    // On a real board the king occupies its own square.
    let board = BoardBuilder::new().king(c(4, 4), Color::Black).build();
    assert!(!king.is_valid_capture(&board, c(4, 4)));
    assert!(!board.is_legal(Move::quiet(c(4, 4), c(4, 4))));
    assert!(!board.is_legal(Move::capture(c(4, 4), c(4, 4))));
}

#[test]
fn test_king_off_board_rejected() {
    let king = King::new(Color::Black, c(4, 4));
    assert!(!king.is_valid_move(c(9, 9), true));
    assert!(!king.is_valid_move(c(0, 0), false));
    assert!(!king.is_valid_move(c(-1, 9), false));
}

#[test]
fn test_king_capture_on_empty_board() {
    let king = King::new(Color::Red, c(4, 4));
    assert!(king.is_valid_capture(&Board::empty(), c(7, 7)));
}

#[test]
fn test_king_capture_blocked_by_intervening_piece() {
    let king = King::new(Color::Red, c(4, 4));
    let board = BoardBuilder::new().man(c(5, 5), Color::Black).build();
    assert!(!king.is_valid_capture(&board, c(7, 7)));
}

#[test]
fn test_king_capture_blocked_in_every_direction() {
    let king = King::new(Color::Black, c(4, 4));
    let cases = [
        (c(6, 6), c(8, 8)),
        (c(6, 2), c(7, 1)),
        (c(2, 6), c(1, 7)),
        (c(3, 3), c(1, 1)),
    ];
    for (blocker, to) in cases {
        let board = BoardBuilder::new().man(blocker, Color::Red).build();
        assert!(!king.is_valid_capture(&board, to), "{blocker} should block {to}");
        assert!(king.is_valid_capture(&Board::empty(), to));
    }
}

#[test]
fn test_king_capture_requires_empty_destination() {
    let king = King::new(Color::Red, c(4, 4));
    let board = BoardBuilder::new().man(c(7, 7), Color::Black).build();
    assert!(!king.is_valid_capture(&board, c(7, 7)));
}

#[test]
fn test_king_capture_beyond_destination_ignored() {
    let king = King::new(Color::Red, c(4, 4));
    let board = BoardBuilder::new().man(c(8, 8), Color::Black).build();
    assert!(king.is_valid_capture(&board, c(7, 7)));
}

#[test]
fn test_king_flying_jump() {
    let king = King::new(Color::Red, c(1, 1));
    let board = BoardBuilder::new().man(c(4, 4), Color::Black).build();
    assert_eq!(king.jumped_square(&board, c(6, 6)), Some(c(4, 4)));
    assert_eq!(king.jumped_square(&board, c(5, 5)), Some(c(4, 4)));
    assert_eq!(king.jumped_square(&board, c(3, 3)), None, "nothing jumped");
}

#[test]
fn test_king_jump_rejects_two_pieces_or_own_piece() {
    let king = King::new(Color::Red, c(1, 1));
    let two = BoardBuilder::new()
        .man(c(3, 3), Color::Black)
        .man(c(5, 5), Color::Black)
        .build();
    assert!(!king.is_valid_jump(&two, c(7, 7)));

    let own = BoardBuilder::new().man(c(3, 3), Color::Red).build();
    assert!(!king.is_valid_jump(&own, c(5, 5)));
}

#[test]
fn test_king_never_promotable() {
    let king = Piece::king(Color::Red, c(7, 7));
    assert!(!king.is_promotable(c(8, 8)));
    assert!(!king.is_promotable(c(1, 1)));
    assert!(!king.is_promotable(c(4, 4)));
}
