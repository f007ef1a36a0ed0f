use colored::Colorize;
use itertools::Itertools;

use crate::errors::{GridError, ParseError};

/// Side length of the grid.
pub const SIZE: usize = 9;

/// A 9x9 Sudoku grid, indexed by column `x` and row `y`.
///
/// Holds cell values only; rule knowledge lives in [`crate::CellChecker`].
/// The move/undo counters track solver activity for diagnostics.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[Option<u8>; SIZE]; SIZE],
    moves: u64,
    undos: u64,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            moves: 0,
            undos: 0,
        }
    }

    /// Parses a line-based puzzle: digits 1-9 are clues, while ' ', '.',
    /// '0' and '_' leave the cell empty. Short lines and missing trailing
    /// lines are treated as empty cells.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut grid = Self::new();
        for (y, line) in text.lines().enumerate() {
            if y >= SIZE {
                return Err(ParseError::TooManyLines);
            }
            for (x, c) in line.chars().enumerate() {
                if x >= SIZE {
                    return Err(ParseError::LineTooLong(y));
                }
                match c {
                    ' ' | '.' | '0' | '_' => {}
                    '1'..='9' => grid.cells[x][y] = Some(c as u8 - b'0'),
                    found => {
                        return Err(ParseError::InvalidChar {
                            line: y,
                            column: x,
                            found,
                        })
                    }
                }
            }
        }
        if grid.is_valid() {
            Ok(grid)
        } else {
            Err(ParseError::ConflictingClues)
        }
    }

    fn check_bounds(x: usize, y: usize) -> Result<(), GridError> {
        if x < SIZE && y < SIZE {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Option<u8>, GridError> {
        Self::check_bounds(x, y)?;
        Ok(self.cells[x][y])
    }

    /// Writes a value unconditionally; legality against other cells is the
    /// caller's business.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), GridError> {
        Self::check_bounds(x, y)?;
        if !(1..=9).contains(&value) {
            return Err(GridError::InvalidValue(value));
        }
        self.place(x, y, value);
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        Self::check_bounds(x, y)?;
        self.unplace(x, y);
        Ok(())
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_none()
    }

    /// All empty cells, column-outer scan order. The order is stable so
    /// solver traces are reproducible.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, col)| {
                col.iter()
                    .enumerate()
                    .filter(|(_, value)| value.is_none())
                    .map(move |(y, _)| (x, y))
            })
            .collect()
    }

    /// Count of values placed so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Count of values taken back so far.
    pub fn undos(&self) -> u64 {
        self.undos
    }

    /// True when no row, column or box holds the same digit twice. Empty
    /// cells are ignored, so a partially filled grid can be valid.
    pub fn is_valid(&self) -> bool {
        let rows = (0..SIZE).map(|y| self.row_values(y));
        let cols = (0..SIZE).map(|x| self.col_values(x));
        let boxes = (0..3)
            .cartesian_product(0..3)
            .map(|(bx, by)| self.box_values(bx * 3, by * 3));
        rows.chain(cols)
            .chain(boxes)
            .all(|group| group.into_iter().counts().into_values().all(|n| n <= 1))
    }

    // Unchecked accessors for the solver hot path; coordinates come from
    // grid scans and the peer map, which only produce in-range cells.
    pub(crate) fn value(&self, x: usize, y: usize) -> Option<u8> {
        self.cells[x][y]
    }

    pub(crate) fn place(&mut self, x: usize, y: usize, value: u8) {
        self.moves += 1;
        self.cells[x][y] = Some(value);
    }

    pub(crate) fn unplace(&mut self, x: usize, y: usize) {
        self.undos += 1;
        self.cells[x][y] = None;
    }

    fn row_values(&self, y: usize) -> Vec<u8> {
        (0..SIZE).filter_map(|x| self.cells[x][y]).collect()
    }

    fn col_values(&self, x: usize) -> Vec<u8> {
        self.cells[x].iter().flatten().copied().collect()
    }

    fn box_values(&self, x: usize, y: usize) -> Vec<u8> {
        let x0 = x - x % 3;
        let y0 = y - y % 3;
        (x0..x0 + 3)
            .cartesian_product(y0..y0 + 3)
            .filter_map(|(x, y)| self.cells[x][y])
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell-wise comparison; the diagnostics counters are deliberately ignored.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..SIZE {
            if y % 3 == 0 {
                writeln!(f)?;
            }
            for x in 0..SIZE {
                if x % 3 == 0 {
                    write!(f, "  ")?;
                }
                match self.cells[x][y] {
                    Some(value) => write!(f, "[{value}]")?,
                    None => write!(f, "[{}]", " ".on_blue())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_clear_works() {
        let mut grid = Grid::new();
        grid.set(0, 0, 9).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), Some(9));
        assert_eq!(grid.get(8, 8).unwrap(), None);
        grid.clear(0, 0).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_access_fails_and_leaves_grid_unchanged() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.get(9, 0).unwrap_err(),
            GridError::OutOfBounds { x: 9, y: 0 }
        );
        assert_eq!(
            grid.set(0, 9, 5).unwrap_err(),
            GridError::OutOfBounds { x: 0, y: 9 }
        );
        assert_eq!(
            grid.clear(42, 7).unwrap_err(),
            GridError::OutOfBounds { x: 42, y: 7 }
        );
        assert_eq!(grid, Grid::new());
        assert_eq!(grid.moves(), 0);
    }

    #[test]
    fn set_rejects_non_digits() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(0, 0, 0).unwrap_err(), GridError::InvalidValue(0));
        assert_eq!(grid.set(0, 0, 10).unwrap_err(), GridError::InvalidValue(10));
        assert!(grid.is_empty(0, 0));
    }

    #[test]
    fn counters_track_moves_and_undos() {
        let mut grid = Grid::new();
        grid.set(3, 4, 7).unwrap();
        grid.set(3, 4, 2).unwrap();
        grid.clear(3, 4).unwrap();
        assert_eq!(grid.moves(), 2);
        assert_eq!(grid.undos(), 1);
    }

    #[test]
    fn empty_cells_scans_in_stable_order() {
        let mut grid = Grid::new();
        assert_eq!(grid.empty_cells().len(), 81);
        assert_eq!(grid.empty_cells()[0], (0, 0));
        assert_eq!(grid.empty_cells()[1], (0, 1));
        grid.set(0, 0, 1).unwrap();
        let empty = grid.empty_cells();
        assert_eq!(empty.len(), 80);
        assert!(!empty.contains(&(0, 0)));
    }

    #[test]
    fn create_grid_from_text_works() {
        let text = " 1
69  2  57
    692
  9   4
47     2
581 9   3
  5  86
 4 2  8 1
   6   4";
        let grid = Grid::from_text(text).unwrap();
        println!("{grid}");
        assert_eq!(grid.get(1, 0).unwrap(), Some(1));
        assert_eq!(grid.get(0, 1).unwrap(), Some(6));
    }

    #[test]
    fn from_text_accepts_dots_and_zeros() {
        let grid = Grid::from_text("8........\n003600000\n.7..9.2..").unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), Some(8));
        assert_eq!(grid.get(2, 1).unwrap(), Some(3));
        assert_eq!(grid.get(1, 2).unwrap(), Some(7));
    }

    #[test]
    fn from_text_rejects_invalid_characters() {
        let err = Grid::from_text("12x").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidChar {
                line: 0,
                column: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn from_text_rejects_conflicting_clues() {
        let err = Grid::from_text("55").unwrap_err();
        assert_eq!(err, ParseError::ConflictingClues);
    }

    #[test]
    fn from_text_rejects_oversized_input() {
        let tall = "1\n\n\n\n\n\n\n\n\n\n";
        assert_eq!(Grid::from_text(tall).unwrap_err(), ParseError::TooManyLines);
        let wide = "1234567891";
        assert_eq!(Grid::from_text(wide).unwrap_err(), ParseError::LineTooLong(0));
    }

    #[test]
    fn is_valid_spots_duplicates() {
        let mut grid = Grid::new();
        assert!(grid.is_valid());
        grid.set(0, 0, 5).unwrap();
        grid.set(8, 0, 5).unwrap();
        assert!(!grid.is_valid());
        grid.clear(8, 0).unwrap();
        grid.set(1, 1, 5).unwrap();
        assert!(!grid.is_valid(), "duplicate in box");
    }

    #[test]
    fn group_values_collect_filled_cells() {
        let text = "926817345
851394726
473265891
685123479
734589162
219746538
568472 1
342951687
197638254";
        let grid = Grid::from_text(text).unwrap();
        assert_eq!(grid.row_values(0), vec![9, 2, 6, 8, 1, 7, 3, 4, 5]);
        assert_eq!(grid.col_values(0), vec![9, 8, 4, 6, 7, 2, 5, 3, 1]);
        assert_eq!(grid.box_values(1, 1), vec![9, 8, 4, 2, 5, 7, 6, 1, 3]);
        assert_eq!(grid.box_values(7, 7).len(), 7);
    }
}
