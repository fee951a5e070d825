use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;
use sudoku_solver::Sudoku;

/// Solve a 9x9 sudoku puzzle read from a file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Puzzle file in block format: nine rows of nine cells, '.' for
    /// empty cells, with optional '|' and '---+---+---' delimiters
    puzzle: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle_str = match fs::read_to_string(&args.puzzle) {
        Ok(puzzle_str) => puzzle_str,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", args.puzzle.display(), err);
            return ExitCode::from(1);
        }
    };

    let sudoku = match Sudoku::from_str_block(&puzzle_str) {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("error: cannot parse {}: {}", args.puzzle.display(), err);
            return ExitCode::from(1);
        }
    };
    info!("parsed puzzle with {} clues", sudoku.n_clues());
    println!("{}", sudoku);

    let start = Instant::now();
    match sudoku.solve_one() {
        Some(solution) => {
            info!("solving completed in {:.3?}", start.elapsed());
            println!();
            println!("{}", solution);
            ExitCode::SUCCESS
        }
        None => {
            info!("search exhausted in {:.3?}", start.elapsed());
            eprintln!("error: puzzle has no solution");
            ExitCode::from(2)
        }
    }
}
