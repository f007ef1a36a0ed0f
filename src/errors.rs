use thiserror::Error;

/// Contract violations on [`crate::Grid`] accessors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the 9x9 grid")]
    OutOfBounds { x: usize, y: usize },
    #[error("value {0} is not a digit from 1 to 9")]
    InvalidValue(u8),
}

/// Errors from [`crate::Grid::from_text`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid character {found:?} at line {line}, column {column}")]
    InvalidChar {
        line: usize,
        column: usize,
        found: char,
    },
    #[error("puzzle has more than 9 lines")]
    TooManyLines,
    #[error("line {0} is longer than 9 cells")]
    LineTooLong(usize),
    #[error("puzzle clues conflict with each other")]
    ConflictingClues,
}

/// Errors from [`crate::load_grid`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
