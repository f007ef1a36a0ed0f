use std::fs;
use std::path::Path;

use crate::errors::LoadError;
use crate::grid::Grid;

/// Reads a puzzle file and parses it into a [`Grid`].
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(Grid::from_text(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_bundled_puzzle() {
        let grid = load_grid("puzzles/hardest.txt").unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), Some(8));
        assert_eq!(grid.empty_cells().len(), 81 - 21);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_grid("puzzles/no-such-puzzle.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
