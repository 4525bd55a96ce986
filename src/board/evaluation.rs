//! End-of-game predicates.

use super::{Board, Color};

/// Questions a game loop asks to decide whether play is over.
pub trait GameEvaluation {
    /// True if `color` has no pieces left.
    fn all_captured(&self, color: Color) -> bool;

    /// True if at least one piece of `color` has a legal move or capture.
    fn any_legal_moves(&self, color: Color) -> bool;

    /// False only when the position is a forced draw on material.
    fn any_sufficient_material(&self) -> bool;
}

impl GameEvaluation for Board {
    fn all_captured(&self, color: Color) -> bool {
        self.pieces_of(color).next().is_none()
    }

    fn any_legal_moves(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|piece| !self.legal_moves_for(piece).is_empty())
    }

    fn any_sufficient_material(&self) -> bool {
        // A lone king against a lone king cannot force a win.
        let lone_king = |color| self.count(color) == 1 && self.kings(color) == 1;
        !(lone_king(Color::Red) && lone_king(Color::Black))
    }
}
