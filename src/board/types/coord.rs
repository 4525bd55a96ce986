//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// Smallest valid row or column.
pub const MIN_INDEX: i8 = 1;
/// Largest valid row or column.
pub const MAX_INDEX: i8 = 8;

/// A square on the board as a 1-indexed (row, column) pair.
///
/// Row 1 is red's home rank, row 8 is black's. Column 1 is file `A`.
/// Values outside 1..=8 are representable so that rule predicates can be
/// asked about off-board destinations and answer `false` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    row: i8,
    column: i8,
}

impl Coordinate {
    /// Create a coordinate without bounds checking.
    #[inline]
    #[must_use]
    pub const fn new(row: i8, column: i8) -> Self {
        Coordinate { row, column }
    }

    /// Create a coordinate, rejecting anything off the 8x8 board.
    pub fn try_new(row: i8, column: i8) -> Result<Self, CoordinateError> {
        if !(MIN_INDEX..=MAX_INDEX).contains(&row) {
            return Err(CoordinateError::RowOutOfBounds { row });
        }
        if !(MIN_INDEX..=MAX_INDEX).contains(&column) {
            return Err(CoordinateError::ColumnOutOfBounds { column });
        }
        Ok(Coordinate { row, column })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// True if both axes lie in 1..=8.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= MIN_INDEX
            && self.row <= MAX_INDEX
            && self.column >= MIN_INDEX
            && self.column <= MAX_INDEX
    }

    /// Playing squares: those with an even `row + column`.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row as i16 + self.column as i16) % 2 == 0
    }

    #[inline]
    #[must_use]
    pub const fn offset(self, drow: i8, dcol: i8) -> Self {
        Coordinate::new(self.row.saturating_add(drow), self.column.saturating_add(dcol))
    }

    /// Signed (row, column) delta from `self` to `to`.
    #[inline]
    #[must_use]
    pub const fn delta(self, to: Coordinate) -> (i16, i16) {
        (
            to.row as i16 - self.row as i16,
            to.column as i16 - self.column as i16,
        )
    }

    /// True if `to` lies on one of the diagonals through `self`.
    ///
    /// A coordinate is considered diagonal to itself.
    #[inline]
    #[must_use]
    pub const fn is_diagonal_to(self, to: Coordinate) -> bool {
        let (drow, dcol) = self.delta(to);
        drow.abs() == dcol.abs()
    }

    /// Number of diagonal steps between `self` and `to`, or `None` if the
    /// two are not on a shared diagonal.
    #[must_use]
    pub fn diagonal_distance(self, to: Coordinate) -> Option<i16> {
        let (drow, _) = self.delta(to);
        self.is_diagonal_to(to).then_some(drow.abs())
    }

    /// Squares strictly between `self` and `to` along their shared diagonal.
    ///
    /// Yields nothing when the two are adjacent, equal, or not diagonal.
    #[must_use]
    pub fn between(self, to: Coordinate) -> Between {
        let (drow, dcol) = self.delta(to);
        let remaining = match self.diagonal_distance(to) {
            Some(steps) if steps > 1 => steps - 1,
            _ => 0,
        };
        let step = (drow.signum() as i8, dcol.signum() as i8);
        Between {
            next: self.offset(step.0, step.1),
            step,
            remaining: if self.is_on_board() { remaining } else { 0 },
        }
    }

    /// All 64 coordinates, row-major from (1,1).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (MIN_INDEX..=MAX_INDEX)
            .flat_map(|row| (MIN_INDEX..=MAX_INDEX).map(move |column| Coordinate::new(row, column)))
    }
}

/// Iterator returned by [`Coordinate::between`].
#[derive(Clone, Debug)]
pub struct Between {
    next: Coordinate,
    step: (i8, i8),
    remaining: i16,
}

impl Iterator for Between {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = current.offset(self.step.0, self.step.1);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Between {}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'A' + (self.column - 1) as u8) as char, self.row)
        } else {
            write!(f, "({},{})", self.row, self.column)
        }
    }
}

impl TryFrom<(i8, i8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((row, column): (i8, i8)) -> Result<Self, Self::Error> {
        Coordinate::try_new(row, column)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let column = match chars[0].to_ascii_uppercase() {
            c @ 'A'..='H' => (c as u8 - b'A') as i8 + 1,
            _ => return Err(invalid()),
        };
        let row = match chars[1] {
            c @ '1'..='8' => (c as u8 - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Coordinate::new(row, column))
    }
}
