//! Exhaustive backtracking search.
//!
//! The search visits empty cells in row major order and tries the digits
//! 1..=9 in ascending order, so it is fully deterministic: a puzzle with
//! more than one solution always yields the same one. There is no
//! propagation or pruning beyond the direct row/column/block check, which
//! makes the worst case exponential in the number of empty cells. That is
//! fine for human-designed puzzles and keeps the solution choice stable;
//! smarter candidate elimination would pick a different first solution.

use crate::board::{contains, Sudoku};
use crate::board::positions::{col, row};

/// Fills in the first solution reachable from `sudoku` and returns true,
/// or returns false and leaves `sudoku` as it was if no completion exists.
/// Clue cells are never touched.
pub(crate) fn solve(sudoku: &mut Sudoku) -> bool {
    let cell = match first_empty_cell(sudoku) {
        Some(cell) => cell,
        // no empty cell left, the grid is complete
        None => return true,
    };

    let row_values = sudoku.row_values(row(cell));
    let col_values = sudoku.col_values(col(cell));
    let block_values = sudoku.block_values(row(cell), col(cell));

    for digit in 1..=9 {
        if contains(&row_values, digit)
            || contains(&col_values, digit)
            || contains(&block_values, digit)
        {
            continue;
        }
        sudoku.0[cell as usize] = digit;
        if solve(sudoku) {
            return true;
        }
    }

    // every candidate failed, undo before backtracking
    sudoku.0[cell as usize] = 0;
    false
}

fn first_empty_cell(sudoku: &Sudoku) -> Option<u8> {
    sudoku.0.iter().position(|&num| num == 0).map(|cell| cell as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_restored_after_failure() {
        // row 0 holds 1..=8 and the column of its last cell holds a 9,
        // so cell (0, 8) has no candidate at all
        let mut bytes = [0; 81];
        bytes[..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        bytes[17] = 9;
        let mut sudoku = Sudoku::from_bytes(bytes).unwrap();
        let before = sudoku;
        assert!(!solve(&mut sudoku));
        assert_eq!(sudoku, before);
    }

    #[test]
    fn first_empty_cell_scan_order() {
        let mut bytes = [0; 81];
        assert_eq!(first_empty_cell(&Sudoku::from_bytes(bytes).unwrap()), Some(0));
        bytes[0] = 1;
        bytes[1] = 2;
        assert_eq!(first_empty_cell(&Sudoku::from_bytes(bytes).unwrap()), Some(2));
        let full = [1; 81];
        assert_eq!(first_empty_cell(&Sudoku::from_bytes(full).unwrap()), None);
    }
}
