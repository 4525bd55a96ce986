//! Fluent builder for constructing checkers positions.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, CapturePolicy, Color, Coordinate};
//!
//! let board = BoardBuilder::new()
//!     .man(Coordinate::new(3, 1), Color::Red)
//!     .king(Coordinate::new(6, 6), Color::Black)
//!     .capture_policy(CapturePolicy::Jump)
//!     .build();
//! assert_eq!(board.pieces().len(), 2);
//! ```

use super::{Board, CapturePolicy, Color, Coordinate, Piece, RulesConfig};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    multiplayer: bool,
    config: RulesConfig,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Create a builder starting from the standard 24-man layout.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new(false).pieces,
            ..BoardBuilder::default()
        }
    }

    /// Place a piece, replacing whatever stood on its square.
    ///
    /// Off-board pieces are ignored.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        let at = piece.position();
        if !at.is_on_board() {
            return self;
        }
        self.pieces.retain(|p| p.position() != at);
        self.pieces.push(piece);
        self
    }

    #[must_use]
    pub fn man(self, at: Coordinate, color: Color) -> Self {
        self.piece(Piece::man(color, at))
    }

    #[must_use]
    pub fn king(self, at: Coordinate, color: Color) -> Self {
        self.piece(Piece::king(color, at))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coordinate) -> Self {
        self.pieces.retain(|p| p.position() != at);
        self
    }

    #[must_use]
    pub const fn multiplayer(mut self, multiplayer: bool) -> Self {
        self.multiplayer = multiplayer;
        self
    }

    #[must_use]
    pub const fn capture_policy(mut self, policy: CapturePolicy) -> Self {
        self.config.capture_policy = policy;
        self
    }

    #[must_use]
    pub const fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        Board {
            pieces: self.pieces,
            multiplayer: self.multiplayer,
            config: self.config,
        }
    }
}
