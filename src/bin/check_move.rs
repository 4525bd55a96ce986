use std::env;
use std::process;

use checkers_engine::board::{Board, Coordinate, GameRules};

fn parse_coordinate(s: &str) -> Coordinate {
    s.parse().unwrap_or_else(|err| {
        eprintln!("{err}");
        process::exit(2);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: check_move <from> <to>");
        process::exit(2);
    }

    let from = parse_coordinate(&args[1]);
    let to = parse_coordinate(&args[2]);

    let board = Board::new(false);
    let Some(piece) = board.get_piece(from) else {
        println!("no piece on {from}");
        return;
    };

    println!("piece: {piece}");
    println!("valid_move: {}", piece.is_valid_move(to, false));
    println!("valid_capture: {}", piece.is_valid_capture(&board, to));
    println!("promotable: {}", piece.is_promotable(to));

    let moves = board.legal_moves_for(piece);
    println!("legal_moves: {}", moves.len());
    for mv in moves.iter() {
        println!("{mv}");
    }
}
