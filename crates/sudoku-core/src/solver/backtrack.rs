//! Recursive backtracking search over a mutably borrowed grid.
//!
//! The search owns the grid exclusively for its duration. Each frame places
//! one digit and undoes it before returning on failure, so a failed solve
//! leaves the grid exactly as it was handed in. Used digits are tracked in
//! per-row/column/box bitmasks updated on place/undo, which makes candidate
//! lookup O(1) instead of a unit scan.

use crate::{CandidateSet, Grid, Position, SIZE};

pub(crate) struct Search<'a> {
    grid: &'a mut Grid,
    rows: [CandidateSet; SIZE],
    cols: [CandidateSet; SIZE],
    boxes: [CandidateSet; SIZE],
}

impl<'a> Search<'a> {
    /// Build the used-digit masks from the current grid contents.
    pub(crate) fn new(grid: &'a mut Grid) -> Self {
        let mut rows = [CandidateSet::empty(); SIZE];
        let mut cols = [CandidateSet::empty(); SIZE];
        let mut boxes = [CandidateSet::empty(); SIZE];
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Position::new(row, col);
                if let Some(value) = grid.get(pos) {
                    rows[row].insert(value);
                    cols[col].insert(value);
                    boxes[pos.box_index()].insert(value);
                }
            }
        }
        Self {
            grid,
            rows,
            cols,
            boxes,
        }
    }

    /// Legal digits for an empty cell: everything not used in its row,
    /// column or box. Equivalent to probing `Solver::is_valid` for 1-9.
    fn candidates(&self, pos: Position) -> CandidateSet {
        let used = self.rows[pos.row]
            .union(self.cols[pos.col])
            .union(self.boxes[pos.box_index()]);
        CandidateSet::full().difference(used)
    }

    /// MRV selection: the empty cell with the fewest candidates, scanning
    /// row-major and keeping the first cell seen on ties (strict `<`).
    fn select_cell(&self) -> Option<(Position, CandidateSet)> {
        let mut best: Option<(Position, CandidateSet)> = None;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Position::new(row, col);
                if !self.grid.is_empty(pos) {
                    continue;
                }
                let domain = self.candidates(pos);
                match best {
                    Some((_, held)) if domain.count() >= held.count() => {}
                    _ => best = Some((pos, domain)),
                }
            }
        }
        best
    }

    fn place(&mut self, pos: Position, value: u8) {
        self.grid.set(pos, Some(value));
        self.rows[pos.row].insert(value);
        self.cols[pos.col].insert(value);
        self.boxes[pos.box_index()].insert(value);
    }

    fn unplace(&mut self, pos: Position, value: u8) {
        self.grid.set(pos, None);
        self.rows[pos.row].remove(value);
        self.cols[pos.col].remove(value);
        self.boxes[pos.box_index()].remove(value);
    }

    /// Depth-first search. Returns `true` with the grid fully placed, or
    /// `false` with the grid restored to its pre-call state.
    pub(crate) fn run(&mut self) -> bool {
        let (pos, domain) = match self.select_cell() {
            None => return true, // no empty cell left: solved
            Some(selection) => selection,
        };
        if domain.is_empty() {
            return false; // dead end, backtrack
        }
        for value in domain.iter() {
            self.place(pos, value);
            if self.run() {
                return true;
            }
            self.unplace(pos, value);
        }
        false
    }

    /// Exhaustive variant of [`run`](Self::run) that keeps searching after a
    /// solution, bumping `found` until it reaches `limit`.
    pub(crate) fn count(&mut self, found: &mut usize, limit: usize) {
        if *found >= limit {
            return;
        }
        let (pos, domain) = match self.select_cell() {
            None => {
                *found += 1;
                return;
            }
            Some(selection) => selection,
        };
        for value in domain.iter() {
            self.place(pos, value);
            self.count(found, limit);
            self.unplace(pos, value);
            if *found >= limit {
                return;
            }
        }
    }
}
