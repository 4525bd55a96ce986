//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CapturePolicy, Color, Coordinate, GameEvaluation, GameRules, Move,
    MoveList, Piece, RulesConfig,
};
