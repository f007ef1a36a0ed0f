mod checker;
mod errors;
mod grid;
mod loader;
mod parallel;
mod peers;
mod solver;

pub use checker::CellChecker;
pub use errors::{GridError, LoadError, ParseError};
pub use grid::{Grid, SIZE};
pub use loader::load_grid;
pub use parallel::ParallelSolver;
pub use peers::PeerMap;
pub use solver::{BasicSolver, PropagatingSolver, Solver};
