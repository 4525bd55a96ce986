//! Per-piece movement, capture and promotion predicates.
//!
//! Every predicate is total: off-board or nonsensical destinations simply
//! answer `false`.

use super::{Board, Color, Coordinate, King, Man, Piece};

/// Rules every piece kind answers for itself.
pub trait GameRules {
    /// Geometric legality of moving to `to`, ignoring other pieces.
    ///
    /// `capturing` selects the capture geometry instead of the plain step.
    fn is_valid_move(&self, to: Coordinate, capturing: bool) -> bool;

    /// Capture check against the board: capture geometry plus an open path.
    ///
    /// A man only requires the jumped-over square to be empty; neither the
    /// destination nor the colour of any piece is examined. A king requires
    /// the destination and every square between to be empty.
    fn is_valid_capture(&self, board: &Board, to: Coordinate) -> bool;

    /// True if arriving on `to` crowns the piece.
    fn is_promotable(&self, to: Coordinate) -> bool;

    /// Square of the single opposing piece a standard jump to `to` removes.
    ///
    /// `None` unless the destination is empty and exactly one opposing piece
    /// (and nothing else) lies between.
    fn jumped_square(&self, board: &Board, to: Coordinate) -> Option<Coordinate>;

    /// Standard checkers jump legality.
    fn is_valid_jump(&self, board: &Board, to: Coordinate) -> bool {
        self.jumped_square(board, to).is_some()
    }
}

/// True if no piece stands strictly between `from` and `to`.
#[must_use]
pub(crate) fn path_is_clear(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    from.between(to).all(|sq| !board.is_occupied(sq))
}

impl GameRules for Man {
    fn is_valid_move(&self, to: Coordinate, capturing: bool) -> bool {
        if !to.is_on_board() {
            return false;
        }

        let (drow, dcol) = self.position.delta(to);
        if drow.abs() != dcol.abs() {
            return false;
        }

        let backwards = match self.color {
            Color::Black => drow > 0,
            Color::Red => drow < 0,
        };
        if backwards {
            return false;
        }

        let steps = drow.abs();
        if capturing {
            steps == 2
        } else {
            steps == 1
        }
    }

    fn is_valid_capture(&self, board: &Board, to: Coordinate) -> bool {
        if !self.is_valid_move(to, true) {
            return false;
        }
        // A two-step diagonal has exactly one square between.
        path_is_clear(board, self.position, to)
    }

    fn is_promotable(&self, to: Coordinate) -> bool {
        to.row() == 8 || to.row() == 1
    }

    fn jumped_square(&self, board: &Board, to: Coordinate) -> Option<Coordinate> {
        if !self.is_valid_move(to, true) || board.is_occupied(to) {
            return None;
        }
        let midpoint = self.position.between(to).next()?;
        board
            .get_piece(midpoint)
            .filter(|p| p.color() == self.color.opponent())
            .map(|_| midpoint)
    }
}

impl GameRules for King {
    fn is_valid_move(&self, to: Coordinate, _capturing: bool) -> bool {
        to.is_on_board() && self.position.is_diagonal_to(to)
    }

    fn is_valid_capture(&self, board: &Board, to: Coordinate) -> bool {
        self.is_valid_move(to, true)
            && !board.is_occupied(to)
            && path_is_clear(board, self.position, to)
    }

    fn is_promotable(&self, _to: Coordinate) -> bool {
        false
    }

    fn jumped_square(&self, board: &Board, to: Coordinate) -> Option<Coordinate> {
        if !self.is_valid_move(to, true) || board.is_occupied(to) {
            return None;
        }

        let mut jumped = None;
        for sq in self.position.between(to) {
            if let Some(piece) = board.get_piece(sq) {
                if jumped.is_some() || piece.color() == self.color {
                    return None;
                }
                jumped = Some(sq);
            }
        }
        jumped
    }
}

impl GameRules for Piece {
    fn is_valid_move(&self, to: Coordinate, capturing: bool) -> bool {
        match self {
            Piece::Man(m) => m.is_valid_move(to, capturing),
            Piece::King(k) => k.is_valid_move(to, capturing),
        }
    }

    fn is_valid_capture(&self, board: &Board, to: Coordinate) -> bool {
        match self {
            Piece::Man(m) => m.is_valid_capture(board, to),
            Piece::King(k) => k.is_valid_capture(board, to),
        }
    }

    fn is_promotable(&self, to: Coordinate) -> bool {
        match self {
            Piece::Man(m) => m.is_promotable(to),
            Piece::King(k) => k.is_promotable(to),
        }
    }

    fn jumped_square(&self, board: &Board, to: Coordinate) -> Option<Coordinate> {
        match self {
            Piece::Man(m) => m.jumped_square(board, to),
            Piece::King(k) => k.jumped_square(board, to),
        }
    }
}
