//! Board coordinates.
//!
//! Row 0 is Dark's back rank (rank 8) and row 7 is Light's (rank 1); column 0
//! is the a-file. Positions are plain values and may sit off the board after a
//! translation; callers check [`BoardPosition::in_bounds`] before reading.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;

pub const BOARD_SIZE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardPosition {
    row: i8,
    col: i8,
}

impl BoardPosition {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Offsets this position by `(d_row, d_col)`. The result may be off the board.
    #[inline]
    pub const fn translate(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Square index `row * 8 + col`, only meaningful for in-bounds positions.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE as usize) as i8,
            col: (index % BOARD_SIZE as usize) as i8,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = BoardPosition> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(BoardPosition::from_index)
    }
}

impl fmt::Display for BoardPosition {
    /// Algebraic notation, e.g. row 7 col 4 is `e1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = char::from(b'a' + self.col as u8);
        let rank = BOARD_SIZE - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for BoardPosition {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(ChessError::InvalidSquare(s.to_owned()));
        }

        let col = (file - b'a') as i8;
        let row = BOARD_SIZE - (rank - b'0') as i8;
        Ok(BoardPosition::new(row, col))
    }
}
