use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by matrix construction and element access.
///
/// Operand shape mismatches have no variant here: they are type errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row data passed to a factory has the wrong number of rows.
    #[error("expected {expected} rows, got {actual}")]
    RowCount {
        /// Row count of the declared dimension tag.
        expected: usize,
        /// Number of rows supplied.
        actual: usize,
    },

    /// A row passed to a factory has the wrong number of elements.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Column count of the declared dimension tag.
        expected: usize,
        /// Number of elements in the supplied row.
        actual: usize,
    },

    /// An element outside of the matrix was requested.
    #[error("index ({row}, {col}) can not be accessed in matrix of size ({rows}, {cols})")]
    Index {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        cols: usize,
    },
}

impl Error {
    pub(crate) fn row_count(expected: usize, actual: usize) -> Self {
        Self::RowCount { expected, actual }
    }

    pub(crate) fn row_length(row: usize, expected: usize, actual: usize) -> Self {
        Self::RowLength {
            row,
            expected,
            actual,
        }
    }

    pub(crate) fn index(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::Index {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Returns whether this error was raised while constructing a matrix from row data.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::RowCount { .. } | Self::RowLength { .. })
    }

    /// Returns whether this error was raised by an out-of-bounds element access.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }
}

/// Checks `(row, col)` against an `R`x`C` shape.
#[inline]
pub(crate) fn check_bounds<const R: usize, const C: usize>(row: usize, col: usize) -> Result<()> {
    if row < R && col < C {
        Ok(())
    } else {
        Err(Error::index(row, col, R, C))
    }
}
