//! Error types for perfilar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for perfilar operations.
///
/// Covers malformed input matrices, out-of-domain parameters, rows with no
/// valid measurements, and rendering failures.
///
/// # Examples
///
/// ```
/// use perfilar::error::PerfilarError;
///
/// let err = PerfilarError::InvalidParameter {
///     param: "th_max".to_string(),
///     value: "0.5".to_string(),
///     constraint: ">= 1.0".to_string(),
/// };
/// assert!(err.to_string().contains("th_max"));
/// ```
#[derive(Debug)]
pub enum PerfilarError {
    /// Input matrix has an unusable shape (zero rows or columns).
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// A numeric parameter is outside its domain.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A matrix entry is not a valid measurement (negative or non-finite,
    /// other than the NaN failure sentinel).
    InvalidMeasurement {
        /// Row (problem) index
        row: usize,
        /// Column (algorithm) index
        col: usize,
        /// Offending value
        value: f32,
    },

    /// A problem row contains no valid measurement, so its best value is
    /// undefined.
    EmptyRow {
        /// Row (problem) index
        row: usize,
    },

    /// Chart rendering failed.
    Render(String),

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),
}

impl fmt::Display for PerfilarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfilarError::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            PerfilarError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            PerfilarError::InvalidMeasurement { row, col, value } => {
                write!(
                    f,
                    "Invalid measurement at ({row}, {col}): {value} (must be a finite non-negative value, or NaN to mark failure)"
                )
            }
            PerfilarError::EmptyRow { row } => {
                write!(
                    f,
                    "Problem row {row} has no valid measurement; best value is undefined"
                )
            }
            PerfilarError::Render(msg) => write!(f, "Render error: {msg}"),
            PerfilarError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PerfilarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfilarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PerfilarError {
    fn from(err: std::io::Error) -> Self {
        PerfilarError::Io(err)
    }
}

/// Convenience result type for perfilar operations.
pub type Result<T> = std::result::Result<T, PerfilarError>;
