//! Error types for fp8-golden

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported at the call boundary of codec and MAC operations.
///
/// All variants are detected synchronously before any output is produced;
/// the underlying computations are pure, so none of these are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bit-string input was not exactly 8 binary digits
    #[error("not an 8-bit binary literal: {literal:?}")]
    MalformedLiteral {
        /// The offending literal, as given
        literal: String,
    },

    /// Format selector was not one of the supported named formats
    #[error("unknown format {name:?}: expected \"E4M3\" or \"E5M2\"")]
    UnknownFormat {
        /// The selector, as given
        name: String,
    },

    /// Matrix multiply operand shapes are incompatible
    #[error("inner dims must match: lhs is {lhs_rows}x{lhs_cols}, rhs is {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Rows of the left operand
        lhs_rows: usize,
        /// Columns of the left operand (or the longest row, if ragged)
        lhs_cols: usize,
        /// Rows of the right operand
        rhs_rows: usize,
        /// Columns of the right operand
        rhs_cols: usize,
    },

    /// Vector operand does not have the lane count the operation requires
    #[error("expected a length-{expected} vector, got length {got}")]
    InputLengthMismatch {
        /// Required lane count
        expected: usize,
        /// Lane count actually supplied
        got: usize,
    },
}
