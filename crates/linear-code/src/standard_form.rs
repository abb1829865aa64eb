// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Detection of a contiguous identity block inside a generator matrix.
//!
//! A `k × n` matrix is in standard form when some run of `k` adjacent columns
//! equals the `k × k` identity. Only such matrices admit the parity-check
//! derivation in [`crate::parity`].

use crate::field::Bit;
use crate::matrix_type::BinaryMatrix;

/// True if `column` has exactly one set bit and it sits at `position`.
fn is_unit_column(column: &[Bit], position: usize) -> bool {
    column.iter().filter(|&&v| v == 1).count() == 1 && column[position] == 1
}

/// Scans columns left to right looking for the identity block and returns the
/// index of its first column.
///
/// The expected row advances on every unit column in sequence. A column that
/// breaks the sequence resets the expectation to row 0 and the scan resumes at
/// the following column.
pub fn find_identity_block(matrix: &BinaryMatrix) -> Option<usize> {
    let rows = matrix.rows();
    if rows == 0 {
        return None;
    }

    let mut position = 0;
    for c in 0..matrix.cols() {
        if is_unit_column(&matrix.column(c), position) {
            position += 1;
            if position == rows {
                return Some(c + 1 - rows);
            }
        } else {
            position = 0;
        }
    }

    None
}

/// Whether the matrix contains a contiguous `k × k` identity submatrix.
pub fn is_standard_form(matrix: &BinaryMatrix) -> bool {
    find_identity_block(matrix).is_some()
}
