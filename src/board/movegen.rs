//! Move generation.
//!
//! Candidates are the squares along the four diagonals through a piece;
//! each is kept if the rule predicates accept it under the board's
//! capture policy. A generated move never lands on an occupied square, and
//! no destination is listed twice.

use super::rules::{path_is_clear, GameRules};
use super::{Board, CapturePolicy, Color, Coordinate, Move, MoveList, Piece};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// On-board squares reachable along the diagonals from `from`, nearest first.
fn diagonal_targets(from: Coordinate) -> impl Iterator<Item = Coordinate> {
    DIAGONALS.into_iter().flat_map(move |(drow, dcol)| {
        std::iter::successors(Some(from.offset(drow, dcol)), move |sq| {
            Some(sq.offset(drow, dcol))
        })
        .take_while(|sq| sq.is_on_board())
    })
}

impl Board {
    /// Whether `piece` may capture onto `to` under the configured policy.
    #[must_use]
    pub fn capture_allowed(&self, piece: &Piece, to: Coordinate) -> bool {
        if self.is_occupied(to) {
            return false;
        }
        match self.config.capture_policy {
            CapturePolicy::OpenPath => piece.is_valid_capture(self, to),
            CapturePolicy::Jump => piece.is_valid_jump(self, to),
        }
    }

    /// Whether `piece` may step onto `to` without capturing.
    #[must_use]
    pub fn quiet_allowed(&self, piece: &Piece, to: Coordinate) -> bool {
        piece.is_valid_move(to, false)
            && !self.is_occupied(to)
            && path_is_clear(self, piece.position(), to)
    }

    /// Whether `mv` can be played in the current position.
    ///
    /// Turn order is not considered.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        let Some(piece) = self.get_piece(mv.from()) else {
            return false;
        };
        if mv.is_capture() {
            self.capture_allowed(piece, mv.to())
        } else {
            self.quiet_allowed(piece, mv.to())
        }
    }

    /// All legal moves and captures for a single piece.
    #[must_use]
    pub fn legal_moves_for(&self, piece: &Piece) -> MoveList {
        let from = piece.position();
        let mut moves = MoveList::new();
        for to in diagonal_targets(from) {
            // Under OpenPath a king's capture onto a free square is the same
            // square as its quiet move; list it once.
            if self.quiet_allowed(piece, to) {
                moves.push(Move::quiet(from, to));
            } else if self.capture_allowed(piece, to) {
                moves.push(Move::capture(from, to));
            }
        }
        moves
    }

    /// All legal moves and captures for every piece of `color`.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.pieces_of(color) {
            moves.extend(self.legal_moves_for(piece));
        }
        moves
    }

    /// Capturing moves only.
    #[must_use]
    pub fn generate_captures(&self, color: Color) -> MoveList {
        let mut captures = MoveList::new();
        for mv in self.generate_moves(color).captures() {
            captures.push(*mv);
        }
        captures
    }
}
