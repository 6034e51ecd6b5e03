//! Core Sudoku engine.
//!
//! A 9x9 grid of digits (`0` = empty) plus a constraint-based backtracking
//! solver with MRV cell selection. The grid is plain data owned by the
//! caller; [`Solver`] borrows it for the duration of a solve.

mod solver;

pub use solver::Solver;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid.
pub const SIZE: usize = 9;
/// Side length of a box (3x3 subgrid).
pub const BOX_SIZE: usize = 3;

/// A cell coordinate: row and column, each in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Panics in debug builds if out of range.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position (0..9, row-major).
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based, matching what players see
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// A set of candidate digits 1-9, stored as a bitmask (bit `d` = digit `d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateSet(u16);

const ALL_DIGITS: u16 = 0b11_1111_1110;

impl CandidateSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// The full set 1-9.
    pub fn full() -> Self {
        Self(ALL_DIGITS)
    }

    pub fn contains(&self, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));
        self.0 & (1 << value) != 0
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 |= 1 << value;
    }

    pub fn remove(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 &= !(1 << value);
    }

    /// Number of candidates in the set.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The single remaining candidate, if there is exactly one.
    pub fn single_value(&self) -> Option<u8> {
        if self.count() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Union of two sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Candidates in `self` but not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate candidates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        let bits = self.0;
        (1..=9u8).filter(move |v| bits & (1 << v) != 0)
    }
}

/// Result of [`Grid::validate`]: positions holding duplicated digits.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    /// Cells whose digit is repeated in a row, column or box.
    pub conflicts: Vec<Position>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// A 9x9 Sudoku grid. Digits are `1..=9`; `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// An all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a grid from raw rows. Values must be in `0..=9`.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&v| v <= 9));
        Self { cells: rows }
    }

    /// Parse an 81-character puzzle string: `1`-`9` for digits, `0` or `.`
    /// for empty cells. Whitespace is ignored. Returns `None` on anything
    /// else.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut idx = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if idx >= SIZE * SIZE {
                return None;
            }
            let value = match ch {
                '0' | '.' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.cells[idx / SIZE][idx % SIZE] = value;
            idx += 1;
        }
        if idx == SIZE * SIZE {
            Some(grid)
        } else {
            None
        }
    }

    /// Value at `pos`, or `None` if the cell is empty.
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            v => Some(v),
        }
    }

    /// Set or clear the cell at `pos`.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value.unwrap_or(0);
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == 0
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == 0 {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Scan every row, column and box for duplicated digits.
    pub fn validate(&self) -> Validation {
        let mut conflicts = Vec::new();
        for unit in Self::units() {
            let mut seen: [Option<Position>; 10] = [None; 10];
            for pos in unit {
                let Some(value) = self.get(pos) else { continue };
                match seen[value as usize] {
                    Some(first) => {
                        conflicts.push(first);
                        conflicts.push(pos);
                    }
                    None => seen[value as usize] = Some(pos),
                }
            }
        }
        conflicts.sort_by_key(|p| (p.row, p.col));
        conflicts.dedup();
        Validation { conflicts }
    }

    /// Complete and conflict-free: every row, column and box is a
    /// permutation of 1-9.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.validate().is_valid()
    }

    /// 81-character string form, `0` for empty cells.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| (b'0' + v) as char)
            .collect()
    }

    /// The 27 units (9 rows, 9 columns, 9 boxes) as position arrays.
    fn units() -> impl Iterator<Item = [Position; SIZE]> {
        let rows =
            (0..SIZE).map(|r| -> [Position; SIZE] { std::array::from_fn(|c| Position::new(r, c)) });
        let cols =
            (0..SIZE).map(|c| -> [Position; SIZE] { std::array::from_fn(|r| Position::new(r, c)) });
        let boxes = (0..SIZE).map(|b| -> [Position; SIZE] {
            let base_row = (b / BOX_SIZE) * BOX_SIZE;
            let base_col = (b % BOX_SIZE) * BOX_SIZE;
            std::array::from_fn(|i| Position::new(base_row + i / BOX_SIZE, base_col + i % BOX_SIZE))
        });
        rows.chain(cols).chain(boxes)
    }
}

impl fmt::Display for Grid {
    /// Boxed text rendering, `.` for empty cells:
    ///
    /// ```text
    /// ─────────────────────────
    /// │ 5 3 . │ . 7 . │ . . . │
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "─".repeat(25))?;
        for (row, cells) in self.cells.iter().enumerate() {
            if row % BOX_SIZE == 0 && row != 0 {
                writeln!(f, "├───────┼───────┼───────┤")?;
            }
            write!(f, "│ ")?;
            for (col, &value) in cells.iter().enumerate() {
                if col % BOX_SIZE == 0 && col != 0 {
                    write!(f, "│ ")?;
                }
                match value {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{v} ")?,
                }
            }
            writeln!(f, "│")?;
        }
        write!(f, "{}", "─".repeat(25))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_from_string_roundtrip() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert_eq!(grid.to_string_compact(), CLASSIC);
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.empty_count(), 51);
    }

    #[test]
    fn test_from_string_accepts_dots_and_whitespace() {
        let dotted = CLASSIC.replace('0', ".");
        let spaced: String = dotted
            .as_bytes()
            .chunks(9)
            .map(|row| format!("{}\n", std::str::from_utf8(row).unwrap()))
            .collect();
        let grid = Grid::from_string(&spaced).unwrap();
        assert_eq!(grid.to_string_compact(), CLASSIC);
    }

    #[test]
    fn test_from_string_rejects_malformed() {
        assert!(Grid::from_string("12345").is_none());
        assert!(Grid::from_string(&CLASSIC[..80]).is_none());
        assert!(Grid::from_string(&format!("{CLASSIC}0")).is_none());
        assert!(Grid::from_string(&CLASSIC.replace('5', "x")).is_none());
    }

    #[test]
    fn test_validate_clean_grid() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        assert!(grid.validate().is_valid());
    }

    #[test]
    fn test_validate_reports_row_conflict() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        // Second 5 in row 0
        grid.set(Position::new(0, 8), Some(5));
        let validation = grid.validate();
        assert!(!validation.is_valid());
        assert!(validation.conflicts.contains(&Position::new(0, 0)));
        assert!(validation.conflicts.contains(&Position::new(0, 8)));
    }

    #[test]
    fn test_validate_reports_box_conflict() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), Some(7));
        grid.set(Position::new(2, 2), Some(7));
        assert!(!grid.validate().is_valid());
    }

    #[test]
    fn test_candidate_set_ops() {
        let mut set = CandidateSet::empty();
        assert!(set.is_empty());
        set.insert(3);
        set.insert(7);
        set.insert(3);
        assert_eq!(set.count(), 2);
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7]);
        set.remove(3);
        assert_eq!(set.single_value(), Some(7));
        assert_eq!(CandidateSet::full().count(), 9);
        assert_eq!(
            CandidateSet::full().difference(set).iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 8, 9]
        );
    }

    #[test]
    fn test_display_layout() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "│ 5 3 . │ . 7 . │ . . . │");
        assert_eq!(lines[4], "├───────┼───────┼───────┤");
    }

    #[test]
    fn test_grid_serde_roundtrip() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
