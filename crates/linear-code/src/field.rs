// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! GF(2) arithmetic: addition is XOR, multiplication is AND.

use crate::errors::{LinearCodeError, LinearCodeResult};

/// A single element of GF(2), always 0 or 1.
pub type Bit = u8;

/// Dot product of two binary vectors over GF(2).
pub fn multiply(a: &[Bit], b: &[Bit]) -> LinearCodeResult<Bit> {
    if a.len() != b.len() {
        return Err(LinearCodeError::length_mismatch(
            a.len(),
            b.len(),
            "GF(2) dot product",
        ));
    }

    Ok(a.iter().zip(b).fold(0, |acc, (x, y)| acc ^ (x & y)))
}

/// Elementwise sum (XOR) of two binary vectors.
pub fn add(a: &[Bit], b: &[Bit]) -> LinearCodeResult<Vec<Bit>> {
    if a.len() != b.len() {
        return Err(LinearCodeError::length_mismatch(
            a.len(),
            b.len(),
            "GF(2) vector addition",
        ));
    }

    Ok(a.iter().zip(b).map(|(x, y)| x ^ y).collect())
}

/// Rejects any bit of a message or codeword outside {0, 1}.
pub fn ensure_binary(vector: &[Bit]) -> LinearCodeResult<()> {
    match vector.iter().position(|&v| v > 1) {
        Some(index) => Err(LinearCodeError::NonBinaryBit {
            index,
            value: vector[index],
        }),
        None => Ok(()),
    }
}

/// Rejects any entry of matrix row `row` outside {0, 1}.
pub fn ensure_binary_row(values: &[Bit], row: usize) -> LinearCodeResult<()> {
    ensure_binary(values).map_err(|err| match err {
        LinearCodeError::NonBinaryBit { index, value } => LinearCodeError::NonBinaryEntry {
            row,
            col: index,
            value,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(&[1, 0, 1], &[1, 1, 1]).unwrap(), 0);
        assert_eq!(multiply(&[1, 0, 1], &[1, 1, 0]).unwrap(), 1);
        assert_eq!(multiply(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn test_multiply_length_mismatch() {
        assert!(matches!(
            multiply(&[1, 0], &[1]),
            Err(LinearCodeError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_add() {
        assert_eq!(add(&[1, 0, 1, 1], &[1, 1, 0, 1]).unwrap(), vec![0, 1, 1, 0]);
        assert!(add(&[1], &[1, 0]).is_err());
    }

    #[test]
    fn test_ensure_binary() {
        assert!(ensure_binary(&[0, 1, 1]).is_ok());
        assert_eq!(
            ensure_binary(&[0, 2, 1]),
            Err(LinearCodeError::NonBinaryBit { index: 1, value: 2 })
        );
    }

    #[test]
    fn test_ensure_binary_row() {
        assert!(ensure_binary_row(&[0, 1, 1], 3).is_ok());
        assert_eq!(
            ensure_binary_row(&[0, 2, 1], 4),
            Err(LinearCodeError::NonBinaryEntry {
                row: 4,
                col: 1,
                value: 2
            })
        );
    }
}
