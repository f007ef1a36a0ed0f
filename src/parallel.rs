use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam::channel::unbounded;
use log::debug;

use crate::checker::CellChecker;
use crate::grid::Grid;
use crate::solver::{PropagatingSolver, Solver};

/// Fans the top-level branch out across worker threads.
///
/// The most constrained empty cell is picked once, and each of its
/// candidate values becomes a job. Every worker solves its own private
/// copy of the grid with a [`PropagatingSolver`]; the first solved copy
/// wins and is written back, and the remaining workers are told to give
/// up via a cooperative stop flag. The grid itself is never shared
/// mutably between threads.
///
/// On puzzles with several solutions the winning worker, and therefore
/// the reported solution, depends on thread timing. The sequential
/// solvers are the deterministic ones.
#[derive(Debug, Clone, Default)]
pub struct ParallelSolver {
    checker: CellChecker,
}

impl ParallelSolver {
    pub fn new() -> Self {
        Self {
            checker: CellChecker::new(),
        }
    }

    pub fn with_checker(checker: CellChecker) -> Self {
        Self { checker }
    }
}

impl Solver for ParallelSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        if !grid.is_valid() {
            return false;
        }

        let mut best: Option<(usize, usize, Vec<u8>)> = None;
        for (x, y) in grid.empty_cells() {
            let candidates = self.checker.candidates(grid, x, y);
            if candidates.is_empty() {
                return false;
            }
            if best
                .as_ref()
                .map_or(true, |(_, _, fewest)| candidates.len() < fewest.len())
            {
                best = Some((x, y, candidates));
            }
        }
        let Some((x, y, candidates)) = best else {
            return true;
        };

        let workers = num_cpus::get().min(candidates.len());
        let (job_tx, job_rx) = unbounded();
        let (result_tx, result_rx) = unbounded::<Grid>();
        for value in candidates {
            job_tx.send(value).unwrap();
        }
        drop(job_tx);

        let stop = AtomicBool::new(false);
        let snapshot: &Grid = grid;
        thread::scope(|scope| {
            for id in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let stop = &stop;
                let checker = &self.checker;
                scope.spawn(move || {
                    let solver = PropagatingSolver::with_checker(checker.clone());
                    while let Ok(value) = job_rx.recv() {
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                        debug!("[worker {id}] trying {value} at ({x}, {y})");
                        let mut attempt = snapshot.clone();
                        attempt.place(x, y, value);
                        if solver.solve_cancellable(&mut attempt, stop) {
                            debug!("[worker {id}] solved with {value} at ({x}, {y})");
                            stop.store(true, Ordering::Relaxed);
                            result_tx.send(attempt).unwrap();
                            break;
                        }
                        debug!("[worker {id}] branch {value} at ({x}, {y}) failed");
                    }
                });
            }
        });
        drop(result_tx);

        match result_rx.try_recv() {
            Ok(solved) => {
                *grid = solved;
                true
            }
            Err(_) => false,
        }
    }
}
