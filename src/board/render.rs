//! Text rendering of a board.
//!
//! Row 8 is drawn at the top, columns A-H left to right. The renderer only
//! reads the board through `get_piece`.

use std::fmt::{self, Write};

use super::{Board, Color, Coordinate, Piece};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const BLACK: &str = "\x1b[30m";

const TITLE: &str = "    Checker Board";
const FRAME: &str = " +-----------------+";
const FILES: &str = "   A B C D E F G H";

/// Draws a board as an 8x8 character grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardRenderer {
    /// Colour squares and pieces with ANSI escapes instead of letter case
    pub ansi: bool,
}

impl BoardRenderer {
    #[must_use]
    pub const fn plain() -> Self {
        BoardRenderer { ansi: false }
    }

    #[must_use]
    pub const fn ansi() -> Self {
        BoardRenderer { ansi: true }
    }

    #[must_use]
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_board(&mut out, board);
        out
    }

    pub fn write_board<W: Write>(&self, out: &mut W, board: &Board) -> fmt::Result {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{FRAME}")?;
        for row in (1..=8).rev() {
            write!(out, "{row}| ")?;
            for column in 1..=8 {
                let at = Coordinate::new(row, column);
                self.write_square(out, at, board.get_piece(at))?;
            }
            writeln!(out, "|")?;
        }
        writeln!(out, "{FRAME}")?;
        writeln!(out, "{FILES}")
    }

    fn write_square<W: Write>(&self, out: &mut W, at: Coordinate, piece: Option<&Piece>) -> fmt::Result {
        if !self.ansi {
            let ch = piece.map_or('*', plain_glyph);
            return write!(out, "{ch} ");
        }

        let square = if at.is_dark() { BLACK } else { RED };
        match piece {
            None => write!(out, "{square}*{RESET} "),
            Some(p) => write!(out, "{}{}{RESET} ", color_code(p.color()), p.glyph()),
        }
    }
}

const fn color_code(color: Color) -> &'static str {
    match color {
        Color::Red => RED,
        Color::Black => BLACK,
    }
}

/// Red pieces in lowercase, black in uppercase.
fn plain_glyph(piece: &Piece) -> char {
    match piece.color() {
        Color::Red => piece.glyph().to_ascii_lowercase(),
        Color::Black => piece.glyph(),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        BoardRenderer::plain().write_board(f, self)
    }
}
