use once_cell::sync::Lazy;

use super::error::BoardError;
use super::{Color, Coordinate, Piece, RulesConfig};

/// The 24 men of the standard opening layout.
///
/// Each side fills the dark squares of its three home rows: columns 1,3,5,7
/// on odd rows and 2,4,6,8 on even rows.
static STARTING_LAYOUT: Lazy<Vec<Piece>> = Lazy::new(|| {
    let mut layout = Vec::with_capacity(24);
    for color in [Color::Black, Color::Red] {
        for row in color.home_rows().into_iter().rev() {
            for column in 1..=8 {
                let at = Coordinate::new(row, column);
                if at.is_dark() {
                    layout.push(Piece::man(color, at));
                }
            }
        }
    }
    layout
});

/// An 8x8 checkers board: an unordered collection of placed pieces.
///
/// At most one piece stands on any coordinate. The board tracks neither turn
/// order nor move history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) multiplayer: bool,
    pub(crate) config: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(false)
    }
}

impl Board {
    /// A board set up in the standard starting position.
    #[must_use]
    pub fn new(multiplayer: bool) -> Self {
        let mut board = Board::empty();
        board.init(multiplayer);
        board
    }

    /// A board with no pieces and the default rules.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            multiplayer: false,
            config: RulesConfig::default(),
        }
    }

    /// Reset to the standard 24-man layout, replacing every piece.
    ///
    /// The rules configuration is kept.
    pub fn init(&mut self, multiplayer: bool) {
        self.pieces.clear();
        self.pieces.extend(STARTING_LAYOUT.iter().copied());
        self.multiplayer = multiplayer;
        engine_log!(debug, "board initialised with {} men", self.pieces.len());
    }

    /// The piece standing on `pos`, if any.
    #[must_use]
    pub fn get_piece(&self, pos: Coordinate) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == pos)
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, pos: Coordinate) -> bool {
        self.get_piece(pos).is_some()
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.color() == color)
    }

    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    #[must_use]
    pub fn kings(&self, color: Color) -> usize {
        self.pieces_of(color).filter(|p| p.is_king()).count()
    }

    /// Multiplayer flag recorded at initialisation. No rule consults it.
    #[must_use]
    pub fn multiplayer(&self) -> bool {
        self.multiplayer
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Put a piece on its own position.
    pub fn place_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        let at = piece.position();
        if !at.is_on_board() {
            return Err(BoardError::OffBoard { at });
        }
        if self.is_occupied(at) {
            return Err(BoardError::Occupied { at });
        }
        self.pieces.push(piece);
        Ok(())
    }

    /// Take the piece off `at`, returning it.
    pub fn remove_piece(&mut self, at: Coordinate) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.position() == at)?;
        Some(self.pieces.swap_remove(idx))
    }

    /// Swap the piece on `at` for `replacement`. Returns the previous occupant.
    pub(crate) fn replace_piece(&mut self, at: Coordinate, replacement: Piece) -> Option<Piece> {
        let slot = self.pieces.iter_mut().find(|p| p.position() == at)?;
        Some(std::mem::replace(slot, replacement))
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}
