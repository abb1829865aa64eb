// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parity-check matrix derivation.
//!
//! For a generator matrix in standard form `G = [I_k | P]` the parity-check
//! matrix is `H = [Pᵀ | I_{n-k}]`, which satisfies `G · Hᵀ = 0` over GF(2).
//!
//! When the identity block of `G` starts at column `s` instead of column 0,
//! `P` is taken from the remaining columns in order and `Pᵀ` is placed at
//! columns `s..s+k` of `H`, with the columns of `I_{n-k}` filling the rest in
//! order. The relation `G · Hᵀ = 0` still holds.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::Bit;
use crate::matrix_type::{BinaryMatrix, MatrixLike};
use serde::{Deserialize, Serialize};

/// A finished `(n-k) × n` parity-check matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityCheckMatrix {
    matrix: BinaryMatrix,
}

impl ParityCheckMatrix {
    pub fn new(matrix: BinaryMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &BinaryMatrix {
        &self.matrix
    }

    pub fn into_inner(self) -> BinaryMatrix {
        self.matrix
    }
}

impl MatrixLike for ParityCheckMatrix {
    fn rows(&self) -> usize {
        self.matrix.rows()
    }

    fn cols(&self) -> usize {
        self.matrix.cols()
    }

    fn data(&self) -> &[Vec<Bit>] {
        self.matrix.data()
    }
}

/// Derives the parity-check matrix from a validated generator matrix whose
/// identity block starts at column `identity_offset`.
///
/// Square generators (including `1 × 1`) yield the `n × n` identity.
pub fn derive_parity_check(
    generator: &BinaryMatrix,
    identity_offset: usize,
) -> LinearCodeResult<ParityCheckMatrix> {
    let k = generator.rows();
    let n = generator.cols();

    if n == k {
        return Ok(ParityCheckMatrix::new(BinaryMatrix::identity(n)));
    }

    if identity_offset + k > n {
        return Err(LinearCodeError::NonStandardForm);
    }

    let other = separate_other(generator, identity_offset)?;
    let twisted = other.transpose();
    let identity = BinaryMatrix::identity(n - k);

    let combined = identity
        .columns(0..identity_offset)
        .hconcat(&twisted)?
        .hconcat(&identity.columns(identity_offset..n - k))?;

    Ok(ParityCheckMatrix::new(combined))
}

/// The `k × (n-k)` non-identity part of the generator.
fn separate_other(
    generator: &BinaryMatrix,
    identity_offset: usize,
) -> LinearCodeResult<BinaryMatrix> {
    let k = generator.rows();
    let n = generator.cols();

    generator
        .columns(0..identity_offset)
        .hconcat(&generator.columns(identity_offset + k..n))
}

/// Verify that G · Hᵀ = 0 over GF(2)
///
/// Square generators have no parity constraints; the identity returned for
/// them is not checked.
pub fn verify_parity_matrix(
    generator: &BinaryMatrix,
    parity: &ParityCheckMatrix,
) -> LinearCodeResult<bool> {
    if generator.rows() == generator.cols() {
        return Ok(true);
    }

    let product = generator.mul_transpose(parity.matrix())?;
    if product.is_zero() {
        return Ok(true);
    }

    for (i, row) in product.data().iter().enumerate() {
        if let Some(j) = row.iter().position(|&v| v != 0) {
            return Err(LinearCodeError::verification(format!(
                "G · Hᵀ ≠ 0: entry at position ({}, {}) is 1",
                i, j
            )));
        }
    }

    Err(LinearCodeError::verification("G · Hᵀ ≠ 0"))
}
