use thiserror::Error;

/// Convenient result alias for the crucible library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a grid line contains a character that is not a decimal digit.
    #[error("invalid cost {found:?} at line {line}, column {column}; expected a digit 0-9")]
    Parse {
        line: usize,
        column: usize,
        found: char,
    },

    /// Raised when a grid row does not match the width of the first row.
    #[error("ragged grid: line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the grid has no rows or no columns.
    #[error("grid is empty")]
    EmptyGrid,

    /// Raised eagerly when run limits or endpoints are unusable.
    #[error("invalid search configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Raised when a cell outside the grid is read. This indicates a bug in
    /// the search engine rather than bad input.
    #[error("position ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Raised when no path satisfies the run-length constraints.
    #[error("no path reaches the goal under the given run limits")]
    NotFound,

    /// Raised when a search is stopped through its cancellation flag.
    #[error("search cancelled")]
    Cancelled,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Whether the error comes from malformed grid text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::RaggedRow { .. } | Error::EmptyGrid
        )
    }
}
