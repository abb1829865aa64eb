// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Construction of `k × n` generator matrices.
//!
//! A matrix is either synthesized as `[I_k | R]` with a random `k × (n-k)`
//! block `R`, or taken from the caller after shape and standard-form checks.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::{self, Bit};
use crate::matrix_type::BinaryMatrix;
use crate::standard_form::find_identity_block;
use rand::Rng;
use tracing::debug;

/// Largest dimension for which the translation table is enumerated.
pub const MAX_DIMENSION: usize = 24;

/// Checks `1 ≤ dimension ≤ length` and the enumeration ceiling.
pub fn check_dimensions(length: usize, dimension: usize) -> LinearCodeResult<()> {
    if length < 1 || dimension < 1 || length < dimension {
        return Err(LinearCodeError::InvalidDimension { length, dimension });
    }

    if dimension > MAX_DIMENSION {
        return Err(LinearCodeError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }

    Ok(())
}

/// Generates a `rows × cols` matrix with independently drawn bits.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> BinaryMatrix {
    BinaryMatrix::from_fn(rows, cols, |_, _| rng.gen_range(0..=1))
}

/// Generates a standard-form generator matrix `[I_k | R]`.
///
/// A square request yields the identity matrix.
pub fn generate_matrix<R: Rng + ?Sized>(
    length: usize,
    dimension: usize,
    rng: &mut R,
) -> LinearCodeResult<BinaryMatrix> {
    check_dimensions(length, dimension)?;

    let identity = BinaryMatrix::identity(dimension);
    if length == dimension {
        return Ok(identity);
    }

    let random = random_matrix(dimension, length - dimension, rng);
    debug!(length, dimension, "generated random generator matrix");
    identity.hconcat(&random)
}

/// Validates a caller-supplied generator matrix.
///
/// Returns the matrix together with the first column of its identity block.
pub fn validate_supplied(
    length: usize,
    dimension: usize,
    rows: Vec<Vec<Bit>>,
) -> LinearCodeResult<(BinaryMatrix, usize)> {
    check_dimensions(length, dimension)?;

    let cols = rows.first().map_or(0, Vec::len);
    if rows.len() != dimension {
        return Err(LinearCodeError::ShapeMismatch {
            expected_rows: dimension,
            expected_cols: length,
            rows: rows.len(),
            cols,
        });
    }

    for (r, row) in rows.iter().enumerate() {
        if row.is_empty() {
            return Err(LinearCodeError::MissingRow { row: r });
        }
        if row.len() != length {
            return Err(LinearCodeError::ShapeMismatch {
                expected_rows: dimension,
                expected_cols: length,
                rows: rows.len(),
                cols: row.len(),
            });
        }
        field::ensure_binary_row(row, r)?;
    }

    let matrix = BinaryMatrix::new(rows)?;
    let offset = find_identity_block(&matrix).ok_or(LinearCodeError::NonStandardForm)?;
    debug!(length, dimension, offset, "accepted supplied generator matrix");

    Ok((matrix, offset))
}
