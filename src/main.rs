use std::env;

use checkers_engine::board::{Board, BoardRenderer};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Some(unknown) = args
        .iter()
        .find(|a| !matches!(a.as_str(), "--plain" | "--multiplayer"))
    {
        eprintln!("unknown argument: {unknown}");
        eprintln!("usage: checkers [--plain] [--multiplayer]");
        std::process::exit(2);
    }

    let plain = args.iter().any(|a| a == "--plain");
    let multiplayer = args.iter().any(|a| a == "--multiplayer");

    let board = Board::new(multiplayer);
    if plain {
        print!("{}", BoardRenderer::plain().render(&board));
    } else {
        board.debug_print();
    }
}
