//! Checkers board representation and rule predicates.
//!
//! A board is a plain collection of pieces looked up by linear scan. Each
//! piece kind answers move, capture and promotion questions through the
//! [`GameRules`] trait; the board adds move generation, move application and
//! end-of-game predicates on top.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color, Coordinate, GameRules};
//!
//! let board = Board::new(false);
//! let piece = board.get_piece(Coordinate::new(3, 3)).unwrap();
//! assert_eq!(piece.color(), Color::Red);
//! assert!(piece.is_valid_move(Coordinate::new(4, 4), false));
//! println!("Red has {} legal moves", board.generate_moves(Color::Red).len());
//! ```

#[macro_use]
mod log;

mod builder;
mod config;
mod debug;
mod error;
mod evaluation;
mod make_move;
mod movegen;
pub mod prelude;
mod render;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{CapturePolicy, RulesConfig};
pub use error::{BoardError, CoordinateError, MoveError};
pub use evaluation::GameEvaluation;
pub use make_move::MoveOutcome;
pub use render::BoardRenderer;
pub use rules::GameRules;
pub use state::Board;
pub use types::{Between, Color, Coordinate, King, Man, Move, MoveList, Piece, MAX_INDEX, MIN_INDEX};
