use std::sync::atomic::{AtomicBool, Ordering};

use crate::checker::CellChecker;
use crate::grid::Grid;

/// Something that can attempt to solve a grid in place.
///
/// `solve` returns `true` and leaves the grid fully assigned on success.
/// On failure it returns `false` with every cell exactly as it was before
/// the call; an unsolvable puzzle is an expected outcome, not an error.
/// Only the move/undo counters may differ after a failed attempt.
pub trait Solver {
    fn solve(&self, grid: &mut Grid) -> bool;
}

/// Plain depth-first backtracking: take the first empty cell, try each
/// digit in ascending order, recurse, undo on failure. Complete but slow;
/// kept as the baseline the optimised solver is benchmarked against.
#[derive(Debug, Clone, Default)]
pub struct BasicSolver {
    checker: CellChecker,
}

impl BasicSolver {
    pub fn new() -> Self {
        Self {
            checker: CellChecker::new(),
        }
    }

    pub fn with_checker(checker: CellChecker) -> Self {
        Self { checker }
    }

    fn solve_from(&self, grid: &mut Grid) -> bool {
        let Some((x, y)) = first_empty(grid) else {
            return true;
        };
        for value in 1..=9 {
            if !self.checker.is_valid_move(grid, x, y, value) {
                continue;
            }
            grid.place(x, y, value);
            if self.solve_from(grid) {
                return true;
            }
            grid.unplace(x, y);
        }
        false
    }
}

impl Solver for BasicSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        grid.is_valid() && self.solve_from(grid)
    }
}

fn first_empty(grid: &Grid) -> Option<(usize, usize)> {
    for x in 0..crate::grid::SIZE {
        for y in 0..crate::grid::SIZE {
            if grid.is_empty(x, y) {
                return Some((x, y));
            }
        }
    }
    None
}

/// The optimised solver: naked-single propagation plus backtracking over
/// the most constrained cell.
///
/// Each recursion level first fills every cell that has exactly one
/// candidate, as a transactional batch. Only when no forced move exists
/// does it branch, picking the empty cell with the fewest candidates
/// (ties broken by scan order) and trying its candidates in ascending
/// order. Propagation is purely a speed-up; the branching phase alone
/// reaches the same verdict.
#[derive(Debug, Clone, Default)]
pub struct PropagatingSolver {
    checker: CellChecker,
}

impl PropagatingSolver {
    pub fn new() -> Self {
        Self {
            checker: CellChecker::new(),
        }
    }

    pub fn with_checker(checker: CellChecker) -> Self {
        Self { checker }
    }

    /// Entry point for the parallel wrapper: identical to `solve`, except
    /// the search gives up (returning `false` after unwinding) once `stop`
    /// is set by another thread.
    pub(crate) fn solve_cancellable(&self, grid: &mut Grid, stop: &AtomicBool) -> bool {
        grid.is_valid() && self.solve_from(grid, None, Some(stop))
    }

    /// Collects all naked singles, or `None` when some empty cell has no
    /// candidate at all (a contradiction, so the current branch is dead).
    ///
    /// When a last move is given its peers are scanned first; that is
    /// where new singles appear. The full scan only runs when the peer
    /// scan comes up empty, and skips cells the peer scan already covered.
    fn forced_moves(
        &self,
        grid: &Grid,
        last: Option<(usize, usize)>,
    ) -> Option<Vec<(usize, usize, u8)>> {
        let mut forced = Vec::new();
        let near: &[(usize, usize)] = match last {
            Some((lx, ly)) => self.checker.peer_map().peers(lx, ly),
            None => &[],
        };

        for &(x, y) in near {
            if !grid.is_empty(x, y) {
                continue;
            }
            let candidates = self.checker.candidates(grid, x, y);
            match candidates.len() {
                0 => return None,
                1 => forced.push((x, y, candidates[0])),
                _ => {}
            }
        }
        if !forced.is_empty() {
            return Some(forced);
        }

        for (x, y) in grid.empty_cells() {
            if near.contains(&(x, y)) {
                continue;
            }
            let candidates = self.checker.candidates(grid, x, y);
            match candidates.len() {
                0 => return None,
                1 => forced.push((x, y, candidates[0])),
                _ => {}
            }
        }
        Some(forced)
    }

    fn solve_from(
        &self,
        grid: &mut Grid,
        last: Option<(usize, usize)>,
        stop: Option<&AtomicBool>,
    ) -> bool {
        // Propagation phase.
        let Some(forced) = self.forced_moves(grid, last) else {
            return false;
        };
        if !forced.is_empty() {
            let mut applied = Vec::with_capacity(forced.len());
            for &(x, y, value) in &forced {
                // An earlier move in this batch can invalidate a later
                // one, so re-check right before placing. The batch is
                // all-or-nothing.
                if !self.checker.is_valid_move(grid, x, y, value) {
                    undo_all(grid, &applied);
                    return false;
                }
                grid.place(x, y, value);
                applied.push((x, y));
            }
            if self.solve_from(grid, None, stop) {
                return true;
            }
            undo_all(grid, &applied);
            return false;
        }

        // Branching phase.
        if let Some(flag) = stop {
            if flag.load(Ordering::Relaxed) {
                return false;
            }
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
            // No empty cells left.
            return true;
        };
        for value in candidates {
            grid.place(x, y, value);
            if self.solve_from(grid, Some((x, y)), stop) {
                return true;
            }
            grid.unplace(x, y);
        }
        false
    }
}

impl Solver for PropagatingSolver {
    fn solve(&self, grid: &mut Grid) -> bool {
        grid.is_valid() && self.solve_from(grid, None, None)
    }
}

fn undo_all(grid: &mut Grid, applied: &[(usize, usize)]) {
    for &(x, y) in applied.iter().rev() {
        grid.unplace(x, y);
    }
}
