use thiserror::Error;

/// Malformed board text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} rows but found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {found:?} in row {row}, column {col}")]
    InvalidChar { row: usize, col: usize, found: char },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed board: {0}")]
    Format(#[from] FormatError),
    #[error("the board shape is not symmetric under rotation and reflection")]
    Asymmetry,
    #[error("invalid direction of movement {0:?}")]
    InvalidDirection(String),
    #[error("initial state does not fit the problem: {0}")]
    InvalidProblemType(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
