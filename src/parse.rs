//! Parsers for the two text formats a sudoku can be read from.
//!
//! The parsers own all structural validation: cell count, digit range and
//! layout. A `Sudoku` handed out from here always holds 81 values in
//! `0..=9`, which is the precondition the solver relies on.

use crate::board::Sudoku;
use crate::consts::N_CELLS;
use crate::parse_errors::{BlockParseError, InvalidEntry, LineParseError};

/// Parses the block format: nine rows of nine cells, a digit or one of
/// `.`, `_`, `0` per cell. `|` delimiters inside a row, spaces and
/// horizontal rules such as `---+---+---` between bands are accepted and
/// ignored, as are blank lines.
pub(crate) fn from_str_block(s: &str) -> Result<Sudoku, BlockParseError> {
    let mut grid = [0; N_CELLS];
    let mut row = 0u8;

    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() || is_band_separator(line) {
            continue;
        }
        if row == 9 {
            return Err(BlockParseError::TooManyRows);
        }

        let mut col = 0u8;
        for ch in line.chars().filter(|&ch| ch != '|' && ch != ' ') {
            if col == 9 {
                return Err(BlockParseError::InvalidLineLength(row));
            }
            let cell = row * 9 + col;
            match ch {
                '1'..='9' => grid[cell as usize] = ch.to_digit(10).unwrap() as u8,
                '.' | '_' | '0' => {}
                _ => return Err(BlockParseError::InvalidEntry(InvalidEntry { cell, ch })),
            }
            col += 1;
        }
        if col != 9 {
            return Err(BlockParseError::InvalidLineLength(row));
        }
        row += 1;
    }

    if row < 9 {
        return Err(BlockParseError::NotEnoughRows(row));
    }
    Ok(Sudoku(grid))
}

fn is_band_separator(line: &str) -> bool {
    line.chars().any(|ch| ch == '-')
        && line.chars().all(|ch| matches!(ch, '-' | '+' | '|' | ' '))
}

/// Parses the line format: 81 cells in row major order, a digit or one of
/// `.`, `_`, `0` per cell. Anything after the 81st cell is a comment and
/// must be separated by a space or tab.
pub(crate) fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
    let mut grid = [0; N_CELLS];
    let mut cell = 0usize;

    for ch in s.chars() {
        if cell == N_CELLS {
            return match ch {
                ' ' | '\t' | '\r' | '\n' => Ok(Sudoku(grid)),
                '1'..='9' | '.' | '_' | '0' => Err(LineParseError::TooManyCells),
                _ => Err(LineParseError::MissingCommentDelimiter),
            };
        }
        match ch {
            '1'..='9' => {
                grid[cell] = ch.to_digit(10).unwrap() as u8;
                cell += 1;
            }
            '.' | '_' | '0' => cell += 1,
            _ => {
                return Err(LineParseError::InvalidEntry(InvalidEntry {
                    cell: cell as u8,
                    ch,
                }))
            }
        }
    }

    if cell < N_CELLS {
        return Err(LineParseError::NotEnoughCells(cell as u8));
    }
    Ok(Sudoku(grid))
}
