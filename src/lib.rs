pub mod board;

pub use board::{Board, Color, Coordinate, GameEvaluation, GameRules, Move, Piece};
