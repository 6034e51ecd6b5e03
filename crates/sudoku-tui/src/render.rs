//! Colored grid and message rendering.

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io;
use sudoku_core::{Grid, Position, BOX_SIZE, SIZE};

const BORDER: Color = Color::DarkCyan;
const DIGIT: Color = Color::White;
const EMPTY: Color = Color::DarkGrey;

pub fn banner(stdout: &mut io::Stdout) -> io::Result<()> {
    let rule = "=".repeat(25);
    execute!(
        stdout,
        SetForegroundColor(BORDER),
        Print(format!("{rule}\n")),
        Print("  SUDOKU SOLVER (CSP)\n"),
        Print(format!("{rule}\n")),
        ResetColor
    )
}

/// Print a one-line message in the given color. `Color::Reset` keeps the
/// terminal default.
pub fn message(stdout: &mut io::Stdout, color: Color, text: &str) -> io::Result<()> {
    execute!(
        stdout,
        SetForegroundColor(color),
        Print(format!("{text}\n")),
        ResetColor
    )
}

/// Boxed 9x9 grid, `.` for empty cells. Same layout as `Grid`'s `Display`,
/// with borders and empties dimmed.
pub fn grid(stdout: &mut io::Stdout, grid: &Grid) -> io::Result<()> {
    let rule = "─".repeat(25);
    execute!(stdout, SetForegroundColor(BORDER), Print(format!("{rule}\n")))?;

    for row in 0..SIZE {
        if row % BOX_SIZE == 0 && row != 0 {
            execute!(stdout, Print("├───────┼───────┼───────┤\n"))?;
        }
        execute!(stdout, SetForegroundColor(BORDER), Print("│ "))?;
        for col in 0..SIZE {
            if col % BOX_SIZE == 0 && col != 0 {
                execute!(stdout, SetForegroundColor(BORDER), Print("│ "))?;
            }
            match grid.get(Position::new(row, col)) {
                Some(value) => {
                    execute!(stdout, SetForegroundColor(DIGIT), Print(format!("{value} ")))?
                }
                None => execute!(stdout, SetForegroundColor(EMPTY), Print(". "))?,
            }
        }
        execute!(stdout, SetForegroundColor(BORDER), Print("│\n"))?;
    }

    execute!(
        stdout,
        SetForegroundColor(BORDER),
        Print(format!("{rule}\n")),
        ResetColor
    )
}
