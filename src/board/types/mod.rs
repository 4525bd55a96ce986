//! Core checkers types.
//!
//! This module contains the value types used throughout the engine:
//! - `Coordinate` - 1-indexed (row, column) board square
//! - `Color`, `Man`, `King` and `Piece` - pieces and their owners
//! - `Move` and `MoveList` - single steps and jumps

mod coord;
mod moves;
mod piece;

pub use coord::{Between, Coordinate, MAX_INDEX, MIN_INDEX};
pub use moves::{Move, MoveList};
pub use piece::{Color, King, Man, Piece};
