use std::fmt;

use crate::board::positions::{block_corner, col, row};
use crate::brute_force;
use crate::consts::{N_CELLS, N_COLS, N_ROWS};
use crate::errors::{FromBytesError, FromBytesSliceError};
use crate::parse;
use crate::parse_errors::{BlockParseError, LineParseError};

/// The main structure exposing all the functionality of the library
///
/// A sudoku is stored as 81 cells in row major order, `0` marking an
/// empty cell and `1..=9` a placed digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0, clues by 1..=9.
    /// Returns an error if any entry is above 9.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a byte slice. Empty cells are denoted by 0, clues by 1..=9.
    /// Returns an error if the slice is not 81 long or any entry is above 9.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Sudoku, FromBytesSliceError> {
        if bytes.len() != N_CELLS {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut sudoku = [0; N_CELLS];
        sudoku.copy_from_slice(bytes);
        Ok(Sudoku::from_bytes(sudoku)?)
    }

    /// Creates a new sudoku from the block format. See the crate documentation
    /// for an example of the expected layout.
    pub fn from_str_block(s: &str) -> Result<Sudoku, BlockParseError> {
        parse::from_str_block(s)
    }

    /// Creates a new sudoku from the line format: 81 digits in row major
    /// order with `.`, `_` or `0` for empty cells.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        parse::from_str_line(s)
    }

    /// Returns the cells of the sudoku as an array of bytes, empty cells as 0.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Try to find a solution to the sudoku and fill it in. Return true if a solution was found.
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find a solution to the sudoku. If multiple solutions exist, it will
    /// stop at the first one it encounters in search order, which is fixed.
    /// Return `None` if no solution exists.
    pub fn solve_one(self) -> Option<Sudoku> {
        // a contradiction amongst the clues themselves is not reachable
        // by the cell-by-cell search below, rule it out up front
        if !self.is_valid() {
            return None;
        }
        let mut sudoku = self;
        match brute_force::solve(&mut sudoku) {
            true => Some(sudoku),
            false => None,
        }
    }

    /// Check whether the sudoku is fully solved: no empty cell remains and
    /// every row, column and block is free of duplicates.
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&num| num != 0) && self.is_valid()
    }

    /// Check that no digit occurs twice in any row, column or block.
    /// Empty cells are ignored, so a partially filled grid can be valid.
    pub fn is_valid(&self) -> bool {
        (0..N_ROWS).all(|r| no_duplicates(&self.row_values(r)))
            && (0..N_COLS).all(|c| no_duplicates(&self.col_values(c)))
            && (0..3).all(|band| {
                (0..3).all(|stack| no_duplicates(&self.block_values(band * 3, stack * 3)))
            })
    }

    /// Number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Returns an iterator over the cells of the sudoku, going from left
    /// to right, top to bottom. Empty cells are `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.0.iter().map(|&num| match num {
            0 => None,
            num => Some(num),
        })
    }

    /// The 9 values of grid row `r`, left to right.
    pub fn row_values(&self, r: u8) -> [u8; 9] {
        let mut values = [0; 9];
        for (k, value) in values.iter_mut().enumerate() {
            *value = self.0[r as usize * 9 + k];
        }
        values
    }

    /// The 9 values of grid column `c`, top to bottom.
    pub fn col_values(&self, c: u8) -> [u8; 9] {
        let mut values = [0; 9];
        for (j, value) in values.iter_mut().enumerate() {
            *value = self.0[j * 9 + c as usize];
        }
        values
    }

    /// The 9 values of the 3x3 block containing cell `(r, c)`, in block-local
    /// row major order.
    pub fn block_values(&self, r: u8, c: u8) -> [u8; 9] {
        let corner = block_corner(r * 9 + c) as usize;
        let mut values = [0; 9];
        for j in 0..3 {
            for k in 0..3 {
                values[j * 3 + k] = self.0[corner + j * 9 + k];
            }
        }
        values
    }
}

/// Returns true iff `digit` appears in `values`.
///
/// `digit` must be in `1..=9`. Querying for 0 is a bug: 0 marks an empty
/// cell and takes no part in the sudoku constraint.
pub fn contains(values: &[u8; 9], digit: u8) -> bool {
    debug_assert!(digit >= 1 && digit <= 9);
    values.iter().any(|&value| value == digit)
}

fn no_duplicates(values: &[u8; 9]) -> bool {
    let mut seen = [false; 10];
    for &value in values {
        if value != 0 {
            if seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
        }
    }
    true
}

// Block format with '.' for empty cells, '|' between stacks and a
// ---+---+--- rule between bands. Reparseable by `from_str_block`.
impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell, &num) in self.0.iter().enumerate() {
            let cell = cell as u8;
            match (row(cell), col(cell)) {
                (0, 0) => {}
                (3, 0) | (6, 0) => write!(f, "\n---+---+---\n")?,
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, "|")?,
                _ => {}
            }
            match num {
                0 => write!(f, ".")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &num in self.0.iter() {
            match num {
                0 => write!(f, ".")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_LINE: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn neighborhood_accessors() {
        let sudoku = Sudoku::from_str_line(SOLVED_LINE).unwrap();
        assert_eq!(sudoku.row_values(0), [5, 3, 4, 6, 7, 8, 9, 1, 2]);
        assert_eq!(sudoku.col_values(0), [5, 6, 1, 8, 4, 7, 9, 2, 3]);
        assert_eq!(sudoku.block_values(0, 0), [5, 3, 4, 6, 7, 2, 1, 9, 8]);
        assert_eq!(sudoku.block_values(8, 8), [2, 8, 4, 6, 3, 5, 1, 7, 9]);
        // any cell of a block addresses the same block
        assert_eq!(sudoku.block_values(4, 4), sudoku.block_values(3, 5));
    }

    #[test]
    fn contains_digit() {
        let values = [5, 3, 0, 0, 7, 0, 0, 0, 0];
        assert!(contains(&values, 5));
        assert!(contains(&values, 7));
        assert!(!contains(&values, 1));
        assert!(!contains(&values, 9));
    }

    #[test]
    fn validity() {
        let solved = Sudoku::from_str_line(SOLVED_LINE).unwrap();
        assert!(solved.is_valid());
        assert!(solved.is_solved());

        let empty = Sudoku::from_bytes([0; 81]).unwrap();
        assert!(empty.is_valid());
        assert!(!empty.is_solved());

        // duplicated 5 in the first row
        let mut bytes = solved.to_bytes();
        bytes[1] = 5;
        let broken = Sudoku::from_bytes(bytes).unwrap();
        assert!(!broken.is_valid());
        assert!(!broken.is_solved());
    }

    #[test]
    fn byte_conversions() {
        assert!(Sudoku::from_bytes([10; 81]).is_err());
        assert!(matches!(
            Sudoku::from_bytes_slice(&[0; 80]),
            Err(FromBytesSliceError::WrongLength(80))
        ));
        let sudoku = Sudoku::from_str_line(SOLVED_LINE).unwrap();
        assert_eq!(
            Sudoku::from_bytes_slice(&sudoku.to_bytes()).unwrap(),
            sudoku
        );
    }

    #[test]
    fn clue_count() {
        assert_eq!(Sudoku::from_bytes([0; 81]).unwrap().n_clues(), 0);
        assert_eq!(Sudoku::from_str_line(SOLVED_LINE).unwrap().n_clues(), 81);
    }
}
