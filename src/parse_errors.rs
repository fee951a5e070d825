//! Errors that may be encountered when reading a sudoku from a string
use crate::board::positions::{block, col, row};

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for first line, 9..=17 for 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// An error caused when parsing a sudoku in block format
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum BlockParseError {
    /// Non-digit, non-placeholder entry encountered
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Line contains more or less than 9 cells. Contains the index of the row (0-8)
    #[error("row {0} does not contain exactly 9 cells")]
    InvalidLineLength(u8),
    /// Input ends with less than 9 rows. Contains the number of rows encountered
    #[error("sudoku contains {0} rows instead of required 9")]
    NotEnoughRows(u8),
    /// More than 9 cell-bearing rows are supplied
    #[error("sudoku contains more than 9 rows")]
    TooManyRows,
}

/// An error caused when parsing a sudoku in line format
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// Accepted entries are numbers 1..=9 and '0', '.' or '_' for empty cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Contains the number of cells supplied
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if more than 81 cell positions are supplied
    #[error("sudoku contains more than 81 cells")]
    TooManyCells,
    /// Comments after the 81 cells must be delimited by a space or tab
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}
