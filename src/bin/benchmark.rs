use std::time::Instant;

use sudoku_engine::{BasicSolver, Grid, ParallelSolver, PropagatingSolver, Solver};

const PUZZLES: &[(&str, &str)] = &[
    ("puzzles/hard.txt", include_str!("../../puzzles/hard.txt")),
    ("puzzles/harder.txt", include_str!("../../puzzles/harder.txt")),
    ("puzzles/hardest.txt", include_str!("../../puzzles/hardest.txt")),
    (
        "puzzles/evenharder.txt",
        include_str!("../../puzzles/evenharder.txt"),
    ),
];

fn main() {
    env_logger::init();

    let solvers: Vec<(&str, Box<dyn Solver>)> = vec![
        ("Basic Recursive", Box::new(BasicSolver::new())),
        ("Optimised Recursive", Box::new(PropagatingSolver::new())),
        ("Parallel", Box::new(ParallelSolver::new())),
    ];

    let mut output = String::from("# Benchmarks for solvers\n\n| |");
    let mut separator = String::from("\n|---|");
    for (title, _) in &solvers {
        output.push_str(title);
        output.push('|');
        separator.push_str("---|");
    }
    output.push_str(&separator);

    for (name, text) in PUZZLES {
        output.push_str(&format!("\n|{name}|"));
        for (_, solver) in &solvers {
            let mut grid = Grid::from_text(text).expect("bundled puzzle should parse");
            let start = Instant::now();
            let cell = if solver.solve(&mut grid) {
                format!("{:.6}", start.elapsed().as_secs_f64())
            } else {
                "FAIL".to_string()
            };
            output.push_str(&cell);
            output.push('|');
        }
    }

    println!("{output}");
}
