use thiserror::Error;

/// Errors produced by the validating and element-wise entry points.
///
/// The scalar formulas are total over finite inputs and never return this.
#[derive(Debug, Error, PartialEq)]
pub enum GeodesyError {
    #[error("argument '{argument}' has length {len}, expected 1 or {expected}")]
    ShapeMismatch {
        argument: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type GeodesyResult<T> = Result<T, GeodesyError>;
