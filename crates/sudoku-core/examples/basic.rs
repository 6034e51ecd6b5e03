//! Basic example of using the Sudoku engine

use sudoku_core::{Grid, Solver};

fn main() {
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let Some(mut puzzle) = Grid::from_string(puzzle_string) else {
        eprintln!("Bad puzzle string");
        return;
    };

    println!("Puzzle:");
    println!("{}", puzzle);
    println!("Empty cells: {}", puzzle.empty_count());

    let solver = Solver::new();

    // Which cell would the solver branch on first?
    if let Some((pos, domain)) = solver.select_cell(&puzzle) {
        let digits: Vec<u8> = domain.iter().collect();
        println!("Most constrained cell: {} with candidates {:?}", pos, digits);
    }

    // Check uniqueness before solving
    let solutions = solver.count_solutions(&puzzle, 2);
    println!("Number of solutions (up to 2): {}", solutions);

    // Solve in place
    println!("\nSolving...\n");
    if solver.solve(&mut puzzle) {
        println!("Solution:");
        println!("{}", puzzle);
    } else {
        println!("No solution exists for this puzzle.");
    }
}
