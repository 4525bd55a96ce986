//! Applying moves to the board.

use super::error::MoveError;
use super::rules::GameRules;
use super::{Board, CapturePolicy, Move, Piece};

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The piece as it stands after the move (crowned if promoted)
    pub piece: Piece,
    /// The piece removed by a jump, if any
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl Board {
    /// Play a single step or jump.
    ///
    /// Under [`CapturePolicy::Jump`] (the default) the jumped piece is removed. A man that
    /// lands on a promotion row is replaced by a king. Multi-jump chains and
    /// turn order are left to the caller.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let from = mv.from();
        let to = mv.to();
        let piece = *self
            .get_piece(from)
            .ok_or(MoveError::NoPiece { at: from })?;

        if !self.is_legal(mv) {
            engine_log!(trace, "rejected {mv} for {piece}");
            return Err(MoveError::IllegalMove { mv });
        }

        let captured = match (mv.is_capture(), self.config.capture_policy) {
            (true, CapturePolicy::Jump) => piece
                .jumped_square(self, to)
                .and_then(|sq| self.remove_piece(sq)),
            _ => None,
        };

        let promoted = piece.is_promotable(to);
        let mut moved = piece.moved_to(to);
        if promoted {
            moved = moved.crowned();
        }
        self.replace_piece(from, moved);

        engine_log!(debug, "applied {mv}: captured={captured:?} promoted={promoted}");

        Ok(MoveOutcome {
            piece: moved,
            captured,
            promoted,
        })
    }
}
