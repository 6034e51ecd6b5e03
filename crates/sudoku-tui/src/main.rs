mod app;
mod render;

use app::App;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use sudoku_core::Grid;

/// Interactive 9x9 Sudoku solver.
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// 81-character puzzle string: digits 1-9, `0` or `.` for empty cells.
    /// Defaults to a built-in sample puzzle.
    puzzle: Option<String>,

    /// Solve immediately and exit instead of entering the interactive menu.
    #[arg(long)]
    batch: bool,
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    let grid = match &args.puzzle {
        Some(text) => match Grid::from_string(text) {
            Some(grid) => grid,
            None => {
                eprintln!("Invalid puzzle string: expected 81 cells of 1-9, 0 or '.'");
                return Ok(ExitCode::from(2));
            }
        },
        None => App::sample_puzzle(),
    };

    let mut app = App::new(grid);
    if args.batch {
        let solved = app.solve_and_report()?;
        Ok(if solved {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    } else {
        app.run()?;
        Ok(ExitCode::SUCCESS)
    }
}
