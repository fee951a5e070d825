#![warn(missing_docs)]
//! The sudoku-solver library
//!
//! ## Overview
//!
//! A small library for reading 9x9 sudokus from text and solving them by
//! exhaustive backtracking. The search is deterministic: cells are visited
//! in row major order and digits tried in ascending order, so a puzzle
//! with several solutions always yields the same one.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Sudoku;
//!
//! let sudoku_block = "\
//! 53.|.7.|...
//! 6..|195|...
//! .98|...|.6.
//! ---+---+---
//! 8..|.6.|..3
//! 4..|8.3|..1
//! 7..|.2.|..6
//! ---+---+---
//! .6.|...|28.
//! ...|419|..5
//! ...|.8.|.79";
//!
//! let sudoku_line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! // Sudokus can be created from &str's in both block or line formats or directly from bytes.
//! let sudoku = Sudoku::from_str_block(sudoku_block).unwrap();
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//! // Sudoku::from_bytes(some_byte_array);
//! // Sudoku::from_bytes_slice(some_slice);
//!
//! // Solve and print the sudoku
//! if let Some(solution) = sudoku.solve_one() {
//!     println!("{}", solution);
//!
//!     let cell_contents: [u8; 81] = solution.to_bytes();
//! }
//! ```

mod board;
mod brute_force;
mod consts;
mod errors;
mod parse;
pub mod parse_errors;

pub use crate::board::{contains, Sudoku};
pub use crate::errors::{FromBytesError, FromBytesSliceError};
