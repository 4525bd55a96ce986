//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Checkers colors. Red starts on rows 1-3, black on rows 6-8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors, red first
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row direction a man of this color advances in (+1 for Red, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Rows occupied by this color's men in the starting layout
    #[inline]
    #[must_use]
    pub(crate) const fn home_rows(self) -> [i8; 3] {
        match self {
            Color::Red => [1, 2, 3],
            Color::Black => [6, 7, 8],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// An uncrowned piece. Moves one square forward, captures two squares forward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Man {
    pub color: Color,
    pub position: Coordinate,
}

impl Man {
    #[must_use]
    pub const fn new(color: Color, position: Coordinate) -> Self {
        Man { color, position }
    }
}

/// A crowned piece. Moves any distance along a diagonal in either direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct King {
    pub color: Color,
    pub position: Coordinate,
}

impl King {
    #[must_use]
    pub const fn new(color: Color, position: Coordinate) -> Self {
        King { color, position }
    }
}

/// A piece on the board: either a man or a king.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Man(Man),
    King(King),
}

impl Piece {
    #[must_use]
    pub const fn man(color: Color, position: Coordinate) -> Self {
        Piece::Man(Man::new(color, position))
    }

    #[must_use]
    pub const fn king(color: Color, position: Coordinate) -> Self {
        Piece::King(King::new(color, position))
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Piece::Man(m) => m.color,
            Piece::King(k) => k.color,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        match self {
            Piece::Man(m) => m.position,
            Piece::King(k) => k.position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self, Piece::King(_))
    }

    /// The same piece standing on `to`.
    #[must_use]
    pub const fn moved_to(self, to: Coordinate) -> Piece {
        match self {
            Piece::Man(m) => Piece::man(m.color, to),
            Piece::King(k) => Piece::king(k.color, to),
        }
    }

    /// The king that replaces this piece on promotion. Kings stay as they are.
    #[must_use]
    pub const fn crowned(self) -> Piece {
        match self {
            Piece::Man(m) => Piece::king(m.color, m.position),
            king @ Piece::King(_) => king,
        }
    }

    /// Single-character glyph: `P` for a man, `K` for a king.
    #[inline]
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Piece::Man(_) => 'P',
            Piece::King(_) => 'K',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_king() { "king" } else { "man" };
        write!(f, "{} {} on {}", self.color(), kind, self.position())
    }
}
