//! Error types for board construction and mutation.
//!
//! Rule predicates never fail; these errors only cover parsing coordinates
//! and changing what stands on the board.

use std::fmt;

use super::{Coordinate, Move};

/// Error type for coordinate construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: i8 },
    /// Column out of bounds (must be 1-8)
    ColumnOutOfBounds { column: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            CoordinateError::ColumnOutOfBounds { column } => {
                write!(f, "Column {column} out of bounds (must be 1-8)")
            }
            CoordinateError::InvalidNotation { notation } => {
                write!(f, "Invalid coordinate notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Error type for placing pieces on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target square lies outside the 8x8 board
    OffBoard { at: Coordinate },
    /// Target square already holds a piece
    Occupied { at: Coordinate },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OffBoard { at } => write!(f, "Square {at} is off the board"),
            BoardError::Occupied { at } => write!(f, "Square {at} is already occupied"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for applying a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    NoPiece { at: Coordinate },
    /// Move is not legal in the current position
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { at } => write!(f, "No piece on {at}"),
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}
