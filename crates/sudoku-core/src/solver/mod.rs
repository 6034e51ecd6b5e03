//! Backtracking Sudoku solver with MRV cell selection.
//!
//! The public operations compose in one direction: [`Solver::is_valid`] is
//! the sole legality check, [`Solver::candidates`] probes it per digit,
//! [`Solver::select_cell`] ranks empty cells by candidate count, and
//! [`Solver::solve`] branches on the selected cell and backtracks.

pub(crate) mod backtrack;

use crate::{CandidateSet, Grid, Position, BOX_SIZE, SIZE};

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Whether `value` can be placed at `pos` without duplicating a digit
    /// already in the same row, column or 3x3 box.
    pub fn is_valid(&self, grid: &Grid, pos: Position, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));
        for i in 0..SIZE {
            if grid.get(Position::new(pos.row, i)) == Some(value) {
                return false;
            }
            if grid.get(Position::new(i, pos.col)) == Some(value) {
                return false;
            }
        }
        let box_row = pos.row / BOX_SIZE * BOX_SIZE;
        let box_col = pos.col / BOX_SIZE * BOX_SIZE;
        for row in box_row..box_row + BOX_SIZE {
            for col in box_col..box_col + BOX_SIZE {
                if grid.get(Position::new(row, col)) == Some(value) {
                    return false;
                }
            }
        }
        true
    }

    /// Legal digits for the cell at `pos`. A filled cell yields the empty
    /// set, meaning "not applicable" rather than "no legal digit".
    pub fn candidates(&self, grid: &Grid, pos: Position) -> CandidateSet {
        let mut set = CandidateSet::empty();
        if !grid.is_empty(pos) {
            return set;
        }
        for value in 1..=9 {
            if self.is_valid(grid, pos, value) {
                set.insert(value);
            }
        }
        set
    }

    /// MRV heuristic: the empty cell with the fewest candidates, plus its
    /// candidate set. Cells are scanned row-major and ties keep the first
    /// cell seen (strict `<`), so selection is deterministic. `None` means
    /// the grid has no empty cell left.
    pub fn select_cell(&self, grid: &Grid) -> Option<(Position, CandidateSet)> {
        let mut best: Option<(Position, CandidateSet)> = None;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Position::new(row, col);
                if !grid.is_empty(pos) {
                    continue;
                }
                let domain = self.candidates(grid, pos);
                match best {
                    Some((_, held)) if domain.count() >= held.count() => {}
                    _ => best = Some((pos, domain)),
                }
            }
        }
        best
    }

    /// Solve the grid in place. On success the grid holds a complete valid
    /// solution; on failure it is left exactly as passed in.
    ///
    /// A grid whose givens already conflict (duplicate digit in a unit) is
    /// rejected upfront and reported as failure without being touched.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        if !grid.validate().is_valid() {
            return false;
        }
        backtrack::Search::new(grid).run()
    }

    /// Non-destructive [`solve`](Self::solve): returns a solved copy and
    /// leaves `grid` alone.
    pub fn solution(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count solutions up to `limit`. Conflicting givens count as zero.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        if !grid.validate().is_valid() {
            return 0;
        }
        let mut working = grid.clone();
        let mut found = 0;
        backtrack::Search::new(&mut working).count(&mut found, limit);
        found
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_classic() {
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        assert!(solver.solve(&mut grid));
        assert_eq!(grid.to_string_compact(), CLASSIC_SOLUTION);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_solve_empty_grid() {
        let mut grid = Grid::empty();
        let solver = Solver::new();
        assert!(solver.solve(&mut grid));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_solve_preserves_givens() {
        let original = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        let solution = solver.solution(&original).unwrap();
        for pos in (0..SIZE).flat_map(|r| (0..SIZE).map(move |c| Position::new(r, c))) {
            if let Some(given) = original.get(pos) {
                assert_eq!(solution.get(pos), Some(given));
            }
        }
    }

    #[test]
    fn test_solve_already_solved_is_noop() {
        let mut grid = Grid::from_string(CLASSIC_SOLUTION).unwrap();
        let solver = Solver::new();
        assert!(solver.solve(&mut grid));
        assert_eq!(grid.to_string_compact(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_unsolvable_leaves_grid_untouched() {
        // Conflict-free by construction, but (0,0) sees every digit:
        // 2-9 across row 0 and a 1 further down column 0.
        let mut grid = Grid::empty();
        for col in 1..SIZE {
            grid.set(Position::new(0, col), Some(col as u8 + 1));
        }
        grid.set(Position::new(5, 0), Some(1));
        assert!(grid.validate().is_valid());

        let before = grid.clone();
        let solver = Solver::new();
        assert!(!solver.solve(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_conflicting_givens_rejected() {
        // Two 5s in row 0: rejected upfront, grid untouched.
        let mut grid = Grid::from_string(CLASSIC).unwrap();
        grid.set(Position::new(0, 8), Some(5));
        let before = grid.clone();
        let solver = Solver::new();
        assert!(!solver.solve(&mut grid));
        assert_eq!(grid, before);
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_is_valid_rules() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        let corner = Position::new(0, 2);
        // Row 0 holds 5, 3 and 7; column 2 holds 8; box 0 holds 9.
        assert!(!solver.is_valid(&grid, corner, 5));
        assert!(!solver.is_valid(&grid, corner, 7));
        assert!(!solver.is_valid(&grid, corner, 8));
        assert!(!solver.is_valid(&grid, corner, 9));
        assert!(solver.is_valid(&grid, corner, 4));
        assert!(solver.is_valid(&grid, corner, 1));
    }

    #[test]
    fn test_candidates_filled_cell_is_empty_sentinel() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        assert!(solver.candidates(&grid, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_candidates_match_is_valid_ascending() {
        let grid = Grid::from_string(CLASSIC).unwrap();
        let solver = Solver::new();
        for pos in grid.empty_positions() {
            let listed: Vec<u8> = solver.candidates(&grid, pos).iter().collect();
            let probed: Vec<u8> = (1..=9).filter(|&v| solver.is_valid(&grid, pos, v)).collect();
            assert_eq!(listed, probed);
        }
    }

    #[test]
    fn test_select_cell_complete_grid() {
        let grid = Grid::from_string(CLASSIC_SOLUTION).unwrap();
        let solver = Solver::new();
        assert!(solver.select_cell(&grid).is_none());
    }

    #[test]
    fn test_select_cell_tie_break_row_major() {
        // Every empty cell of an empty grid has all nine candidates; the
        // strict `<` comparison keeps the first cell scanned.
        let solver = Solver::new();
        let (pos, domain) = solver.select_cell(&Grid::empty()).unwrap();
        assert_eq!(pos, Position::new(0, 0));
        assert_eq!(domain, CandidateSet::full());
    }

    #[test]
    fn test_select_cell_prefers_smaller_domain() {
        // Constrain (4, 4) down to a single candidate; everything else on
        // the empty grid keeps a wider domain.
        let mut grid = Grid::empty();
        for (col, value) in [(0, 1), (1, 2), (2, 3), (5, 4), (6, 5), (7, 6)] {
            grid.set(Position::new(4, col), Some(value));
        }
        for (row, value) in [(0, 7), (1, 8)] {
            grid.set(Position::new(row, 4), Some(value));
        }
        let solver = Solver::new();
        let target = Position::new(4, 4);
        assert_eq!(solver.candidates(&grid, target).single_value(), Some(9));
        let (pos, domain) = solver.select_cell(&grid).unwrap();
        assert_eq!(pos, target);
        assert_eq!(domain.single_value(), Some(9));
    }

    #[test]
    fn test_select_cell_reports_dead_end() {
        let mut grid = Grid::empty();
        for col in 1..SIZE {
            grid.set(Position::new(0, col), Some(col as u8 + 1));
        }
        grid.set(Position::new(5, 0), Some(1));
        let solver = Solver::new();
        let (pos, domain) = solver.select_cell(&grid).unwrap();
        assert_eq!(pos, Position::new(0, 0));
        assert!(domain.is_empty());
    }

    #[test]
    fn test_count_solutions() {
        let solver = Solver::new();
        let classic = Grid::from_string(CLASSIC).unwrap();
        assert_eq!(solver.count_solutions(&classic, 2), 1);
        assert!(solver.has_unique_solution(&classic));
        assert_eq!(solver.count_solutions(&Grid::empty(), 2), 2);
        assert!(!solver.has_unique_solution(&Grid::empty()));
    }
}
