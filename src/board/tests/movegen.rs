//! Move generation tests.

use std::collections::HashSet;

use crate::board::{Board, BoardBuilder, CapturePolicy, Color, Coordinate, Move, RulesConfig};

fn c(row: i8, column: i8) -> Coordinate {
    Coordinate::new(row, column)
}

#[test]
fn test_starting_quiet_moves() {
    let board = Board::new(false);
    let red = board.generate_moves(Color::Red);
    assert_eq!(red.len(), 7);
    assert!(red.iter().all(|m| !m.is_capture()));
    assert!(red.contains(&Move::quiet(c(3, 1), c(4, 2))));
    assert!(red.contains(&Move::quiet(c(3, 7), c(4, 8))));

    let black = board.generate_moves(Color::Black);
    assert_eq!(black.len(), 7);
    assert!(black.contains(&Move::quiet(c(6, 8), c(5, 7))));
}

#[test]
fn test_starting_open_path_captures() {
    let board = Board::new(false).with_config(RulesConfig::open_path());
    let captures = board.generate_captures(Color::Red);
    assert_eq!(captures.len(), 6);
    assert!(captures.contains(&Move::capture(c(3, 1), c(5, 3))));
    assert_eq!(board.generate_moves(Color::Red).len(), 13);
}

#[test]
fn test_jump_policy_finds_single_jump() {
    let board = BoardBuilder::new()
        .man(c(3, 3), Color::Red)
        .man(c(4, 4), Color::Black)
        .capture_policy(CapturePolicy::Jump)
        .build();
    let captures = board.generate_captures(Color::Red);
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0], Move::capture(c(3, 3), c(5, 5)));

    let black = board.generate_captures(Color::Black);
    assert_eq!(black.len(), 1);
    assert_eq!(black[0], Move::capture(c(4, 4), c(2, 2)));
}

#[test]
fn test_king_quiet_moves_stop_at_blockers() {
    let board = BoardBuilder::new()
        .king(c(4, 4), Color::Red)
        .man(c(6, 6), Color::Red)
        .capture_policy(CapturePolicy::Jump)
        .build();
    let king = *board.get_piece(c(4, 4)).unwrap();
    let moves = board.legal_moves_for(&king);
    assert!(moves.contains(&Move::quiet(c(4, 4), c(5, 5))));
    assert!(!moves.contains(&Move::quiet(c(4, 4), c(6, 6))));
    assert!(!moves.contains(&Move::quiet(c(4, 4), c(7, 7))));
    // 13 diagonal squares, minus the blocker and the two beyond it
    assert_eq!(moves.len(), 10);
}

#[test]
fn test_is_legal() {
    let board = Board::new(false);
    assert!(board.is_legal(Move::quiet(c(3, 3), c(4, 4))));
    assert!(!board.is_legal(Move::quiet(c(3, 3), c(2, 2))));
    assert!(!board.is_legal(Move::quiet(c(4, 4), c(5, 5))), "no piece on origin");
    assert!(!board.is_legal(Move::quiet(c(2, 2), c(3, 3))), "destination occupied");
}

#[test]
fn test_open_path_capture_never_lands_on_a_piece() {
    let board = BoardBuilder::new()
        .man(c(3, 1), Color::Red)
        .man(c(5, 3), Color::Black)
        .capture_policy(CapturePolicy::OpenPath)
        .build();
    assert!(!board.is_legal(Move::capture(c(3, 1), c(5, 3))));
}

#[test]
fn test_open_path_king_lists_each_square_once() {
    let board = BoardBuilder::new()
        .king(c(4, 4), Color::Red)
        .capture_policy(CapturePolicy::OpenPath)
        .build();
    let king = *board.get_piece(c(4, 4)).unwrap();
    let moves = board.legal_moves_for(&king);
    assert_eq!(moves.len(), 13);
    assert!(moves.iter().all(|m| !m.is_capture()));

    let targets: HashSet<Coordinate> = moves.iter().map(|m| m.to()).collect();
    assert_eq!(targets.len(), moves.len());
    assert!(!targets.contains(&c(4, 4)));
}

#[test]
fn test_default_policy_has_no_empty_square_captures() {
    let board = BoardBuilder::new().man(c(3, 1), Color::Red).build();
    assert!(board.generate_captures(Color::Red).is_empty());
    assert!(!board.is_legal(Move::capture(c(3, 1), c(5, 3))));
}
