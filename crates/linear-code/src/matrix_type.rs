// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Binary matrix type with dimension validation.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::{self, Bit};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A matrix over GF(2) with runtime-determined dimensions.
///
/// Dimensions are validated at construction; every entry is 0 or 1.
///
/// # Example
///
/// ```
/// use linear_code::BinaryMatrix;
///
/// let matrix = BinaryMatrix::new(vec![vec![1, 0, 1], vec![0, 1, 1]]).unwrap();
/// assert_eq!(matrix.rows(), 2);
/// assert_eq!(matrix.cols(), 3);
/// assert_eq!(matrix.column(2), vec![1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryMatrix {
    data: Vec<Vec<Bit>>,
    rows: usize,
    cols: usize,
}

impl BinaryMatrix {
    /// Creates a new binary matrix from data, validating dimensions and entries.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have inconsistent lengths or an entry is not 0/1.
    pub fn new(data: Vec<Vec<Bit>>) -> LinearCodeResult<Self> {
        if data.is_empty() {
            return Ok(Self {
                data,
                rows: 0,
                cols: 0,
            });
        }

        let rows = data.len();
        let cols = data[0].len();

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(LinearCodeError::ShapeMismatch {
                    expected_rows: rows,
                    expected_cols: cols,
                    rows,
                    cols: row.len(),
                });
            }
            field::ensure_binary_row(row, i)?;
        }

        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix whose entry at `(row, col)` is `f(row, col)` reduced mod 2.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Bit) -> Self {
        let data = (0..rows)
            .map(|r| (0..cols).map(|c| f(r, c) & 1).collect())
            .collect();
        Self { data, rows, cols }
    }

    /// Creates the `size × size` identity matrix.
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, size, |r, c| Bit::from(r == c))
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &[Vec<Bit>] {
        &self.data
    }

    /// Copies column `col` out as a vector of length `rows()`.
    pub fn column(&self, col: usize) -> Vec<Bit> {
        self.data.iter().map(|row| row[col]).collect()
    }

    /// Returns the submatrix made of the columns in `range`.
    pub fn columns(&self, range: Range<usize>) -> Self {
        let cols = range.len();
        Self {
            data: self.data.iter().map(|row| row[range.clone()].to_vec()).collect(),
            rows: self.rows,
            cols,
        }
    }

    /// Concatenates `other` to the right of `self`.
    pub fn hconcat(&self, other: &BinaryMatrix) -> LinearCodeResult<Self> {
        if self.rows != other.rows {
            return Err(LinearCodeError::ShapeMismatch {
                expected_rows: self.rows,
                expected_cols: other.cols,
                rows: other.rows,
                cols: other.cols,
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(left, right)| left.iter().chain(right).copied().collect())
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols + other.cols,
        })
    }

    /// Columns become rows and vice versa.
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols).map(|c| self.column(c)).collect();
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Computes `self · otherᵀ` over GF(2).
    pub fn mul_transpose(&self, other: &BinaryMatrix) -> LinearCodeResult<Self> {
        if self.cols != other.cols {
            return Err(LinearCodeError::length_mismatch(
                self.cols,
                other.cols,
                "matrix product columns",
            ));
        }

        let data = self
            .data
            .iter()
            .map(|a| {
                other
                    .data
                    .iter()
                    .map(|b| field::multiply(a, b))
                    .collect::<LinearCodeResult<Vec<Bit>>>()
            })
            .collect::<LinearCodeResult<Vec<_>>>()?;

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.rows,
        })
    }

    /// True when every entry is 0.
    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|&v| v == 0)
    }
}

/// Trait for matrices that can be printed or compared row by row.
pub trait MatrixLike {
    /// Returns the number of rows.
    fn rows(&self) -> usize;

    /// Returns the number of columns.
    fn cols(&self) -> usize;

    /// Returns a reference to the underlying data.
    fn data(&self) -> &[Vec<Bit>];
}

impl MatrixLike for BinaryMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn data(&self) -> &[Vec<Bit>] {
        &self.data
    }
}
