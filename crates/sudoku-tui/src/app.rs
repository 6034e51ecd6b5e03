use crate::render;
use crossterm::style::Color;
use std::io::{self, Write};
use sudoku_core::{Grid, Position, Solver};

/// Result of handling a menu choice
enum AppAction {
    Continue,
    Quit,
}

/// The interactive application: one puzzle grid plus the solver.
pub struct App {
    grid: Grid,
    solver: Solver,
}

impl App {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            solver: Solver::new(),
        }
    }

    /// The classic sample puzzle shown when no puzzle argument is given.
    pub fn sample_puzzle() -> Grid {
        Grid::from_rows([
            [5, 3, 0, 0, 7, 0, 0, 0, 0],
            [6, 0, 0, 1, 9, 5, 0, 0, 0],
            [0, 9, 8, 0, 0, 0, 0, 6, 0],
            [8, 0, 0, 0, 6, 0, 0, 0, 3],
            [4, 0, 0, 8, 0, 3, 0, 0, 1],
            [7, 0, 0, 0, 2, 0, 0, 0, 6],
            [0, 6, 0, 0, 0, 0, 2, 8, 0],
            [0, 0, 0, 4, 1, 9, 0, 0, 5],
            [0, 0, 0, 0, 8, 0, 0, 7, 9],
        ])
    }

    /// Menu loop: edit cells until the user solves or exits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        render::banner(&mut stdout)?;
        render::message(&mut stdout, Color::Reset, "\nInitial Puzzle:")?;
        render::grid(&mut stdout, &self.grid)?;

        loop {
            match self.handle_choice(&mut stdout)? {
                AppAction::Continue => {}
                AppAction::Quit => break,
            }
        }
        Ok(())
    }

    fn handle_choice(&mut self, stdout: &mut io::Stdout) -> io::Result<AppAction> {
        render::message(
            stdout,
            Color::Reset,
            "\nOptions:\n1. Fill/modify a cell\n2. Solve automatically\n3. Exit",
        )?;
        let choice = prompt(stdout, "Choose an option (1-3): ")?;

        match choice.trim() {
            "1" => {
                self.edit_cell(stdout)?;
                Ok(AppAction::Continue)
            }
            "2" => {
                self.solve_and_report()?;
                Ok(AppAction::Quit)
            }
            "3" => {
                render::message(stdout, Color::Reset, "Thanks for playing!")?;
                Ok(AppAction::Quit)
            }
            _ => {
                render::message(
                    stdout,
                    Color::Red,
                    "Invalid choice! Please select 1, 2, or 3.",
                )?;
                Ok(AppAction::Continue)
            }
        }
    }

    /// Prompt for a (row, col, value) triple and apply it. Rows and columns
    /// are entered 1-9 as displayed; value 0 clears the cell. Bad input is
    /// rejected with a message and never touches the grid.
    fn edit_cell(&mut self, stdout: &mut io::Stdout) -> io::Result<()> {
        let row = prompt(stdout, "Enter row (1-9): ")?;
        let col = prompt(stdout, "Enter column (1-9): ")?;
        let value = prompt(stdout, "Enter number (0-9, 0 for empty): ")?;

        match parse_cell_edit(&row, &col, &value) {
            Some((pos, value)) => {
                self.grid.set(pos, value);
                render::message(stdout, Color::Reset, "\nUpdated Grid:")?;
                render::grid(stdout, &self.grid)?;
            }
            None => {
                render::message(
                    stdout,
                    Color::Red,
                    "Invalid input! Use values 1-9 for position and 0-9 for number.",
                )?;
            }
        }
        Ok(())
    }

    /// Run the solver on the current grid and print the outcome. Returns
    /// whether a solution was found.
    pub fn solve_and_report(&mut self) -> io::Result<bool> {
        let mut stdout = io::stdout();

        let validation = self.grid.validate();
        if !validation.is_valid() {
            let cells: Vec<String> = validation.conflicts.iter().map(|p| p.to_string()).collect();
            render::message(
                &mut stdout,
                Color::Red,
                &format!("✗ Conflicting givens at {}.", cells.join(", ")),
            )?;
            return Ok(false);
        }

        render::message(
            &mut stdout,
            Color::Reset,
            "\nSolving using backtracking with MRV...\n",
        )?;
        let unique = self.solver.has_unique_solution(&self.grid);

        if self.solver.solve(&mut self.grid) {
            let note = if unique {
                "✓ Solved! The solution is unique."
            } else {
                "✓ Solved! (One of several possible solutions.)"
            };
            render::message(&mut stdout, Color::Green, note)?;
            render::grid(&mut stdout, &self.grid)?;
            Ok(true)
        } else {
            render::message(
                &mut stdout,
                Color::Red,
                "✗ No solution exists for this puzzle.",
            )?;
            Ok(false)
        }
    }
}

/// Print `msg` and read one line from stdin.
fn prompt(stdout: &mut io::Stdout, msg: &str) -> io::Result<String> {
    write!(stdout, "{msg}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Parse a displayed (row, col, value) entry: row/col 1-9, value 0-9
/// (0 clears). Returns the 0-based position and the new cell value.
fn parse_cell_edit(row: &str, col: &str, value: &str) -> Option<(Position, Option<u8>)> {
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    let value = match value.trim().parse::<u8>() {
        Ok(0) => None,
        Ok(v @ 1..=9) => Some(v),
        _ => return None,
    };
    Some((Position::new(row, col), value))
}

/// Parse a 1-based index entry into `0..9`.
fn parse_index(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}
