use thiserror::Error;

/// Errors raised by grid operations.
/// Both variants are caller mistakes; the failing operation leaves the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("wall probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

pub type Result<T> = std::result::Result<T, GridError>;
