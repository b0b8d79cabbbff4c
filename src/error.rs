use thiserror::Error;

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by the grid utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An array field does not have the column count its contract requires.
    #[error("{field} must have {expected} columns, found {found}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

impl GridError {
    pub fn shape_mismatch(field: &'static str, expected: usize, found: usize) -> Self {
        GridError::ShapeMismatch {
            field,
            expected,
            found,
        }
    }
}
