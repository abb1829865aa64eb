// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for linear code operations
//!
//! Every precondition violated during construction, encoding or decoding is
//! surfaced as one of these variants. Nothing is retried or corrected.

use thiserror::Error;

/// Main error type for linear code operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearCodeError {
    /// Length or dimension below 1, or length smaller than dimension
    #[error("Invalid dimensions: length ({length}) and dimension ({dimension}) must satisfy 1 ≤ dimension ≤ length")]
    InvalidDimension { length: usize, dimension: usize },

    /// Supplied matrix shape disagrees with the declared length/dimension
    #[error("Shape mismatch: expected {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Supplied matrix has an absent (empty) row
    #[error("Supplied matrix has a missing row at index {row}")]
    MissingRow { row: usize },

    /// Supplied matrix holds a value outside GF(2)
    #[error("Non-binary entry {value} at position ({row}, {col})")]
    NonBinaryEntry { row: usize, col: usize, value: u8 },

    /// Message or codeword holds a value outside GF(2)
    #[error("Non-binary bit {value} at index {index}")]
    NonBinaryBit { index: usize, value: u8 },

    /// Supplied matrix lacks a contiguous identity submatrix
    #[error("Supplied matrix does not contain a contiguous identity submatrix (not in standard form)")]
    NonStandardForm,

    /// Dimension exceeds the exhaustive enumeration ceiling
    #[error("Dimension {dimension} exceeds the enumeration limit of {max}")]
    DimensionTooLarge { dimension: usize, max: usize },

    /// Encode/decode input vector has the wrong length
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Decode input is not a codeword of this code
    #[error("Unknown codeword: {codeword}")]
    UnknownCodeword { codeword: String },

    /// Parity-check relation `G · Hᵀ = 0` does not hold
    #[error("Verification failed: {message}")]
    Verification { message: String },

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for linear code operations
pub type LinearCodeResult<T> = Result<T, LinearCodeError>;

impl From<figment::Error> for LinearCodeError {
    fn from(err: figment::Error) -> Self {
        LinearCodeError::Config {
            message: err.to_string(),
        }
    }
}

impl LinearCodeError {
    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        LinearCodeError::LengthMismatch {
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create a verification error with a message
    pub fn verification(message: impl Into<String>) -> Self {
        LinearCodeError::Verification {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message
    pub fn config(message: impl Into<String>) -> Self {
        LinearCodeError::Config {
            message: message.into(),
        }
    }
}
