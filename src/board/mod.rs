//! Types for cells and digits on a sudoku board
pub(crate) mod positions;
mod sudoku;

pub use self::sudoku::{contains, Sudoku};
