use colored::Colorize;
use std::env;
use std::time::Instant;
use sudoku_engine::{load_grid, PropagatingSolver, Solver};

fn main() {
    env_logger::init();
    let path = env::args().nth(1).expect("No puzzle file given.");
    match load_grid(&path) {
        Ok(mut grid) => {
            println!("Unsolved:\n{grid}");
            let solver = PropagatingSolver::new();
            let start = Instant::now();
            let solved = solver.solve(&mut grid);
            let elapsed = start.elapsed();
            if solved {
                println!("Solved:\n{grid}");
                println!("Moves: {}", grid.moves());
                println!("Backtracks: {}", grid.undos());
                println!("Execution: {elapsed:?}");
            } else {
                println!(
                    "{}",
                    format!("No solution exists for {path} ({} moves tried)", grid.moves()).red()
                );
            }
        }
        Err(err) => {
            println!("{}", format!("{err}").red());
        }
    }
}
