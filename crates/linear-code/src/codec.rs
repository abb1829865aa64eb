// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Encoding by matrix multiplication and decoding by exhaustive lookup.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::{self, Bit};
use crate::generator::check_dimensions;
use crate::matrix_type::BinaryMatrix;
use std::collections::HashMap;

/// Encodes a `k`-bit message into an `n`-bit codeword: `c[j] = column_j(G) · m`.
pub fn encode(generator: &BinaryMatrix, message: &[Bit]) -> LinearCodeResult<Vec<Bit>> {
    if message.len() != generator.rows() {
        return Err(LinearCodeError::length_mismatch(
            generator.rows(),
            message.len(),
            "encode",
        ));
    }
    field::ensure_binary(message)?;

    (0..generator.cols())
        .map(|c| field::multiply(&generator.column(c), message))
        .collect()
}

/// Renders a bit vector as its canonical lookup key, e.g. `[1, 0, 1]` -> `"101"`.
pub fn codeword_key(bits: &[Bit]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// The `k`-bit big-endian representation of `value`.
fn message_bits(value: u64, dimension: usize) -> Vec<Bit> {
    (0..dimension)
        .rev()
        .map(|shift| ((value >> shift) & 1) as Bit)
        .collect()
}

/// Codeword-to-message lookup for every message of a code.
///
/// Built once from a generator matrix and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, Vec<Bit>>,
}

impl TranslationTable {
    /// Enumerates all `2^k` messages in increasing numeric order and records
    /// the codeword each one encodes to.
    ///
    /// Fails with `NonStandardForm` if two messages share a codeword, since
    /// such a generator cannot be decoded.
    pub fn build(generator: &BinaryMatrix) -> LinearCodeResult<Self> {
        let dimension = generator.rows();
        check_dimensions(generator.cols(), dimension)?;
        let count = 1u64 << dimension;
        let mut entries = HashMap::with_capacity(count as usize);

        for value in 0..count {
            let message = message_bits(value, dimension);
            let codeword = encode(generator, &message)?;
            if entries.insert(codeword_key(&codeword), message).is_some() {
                return Err(LinearCodeError::NonStandardForm);
            }
        }

        Ok(Self { entries })
    }

    /// Looks up the message for a codeword key.
    pub fn get(&self, key: &str) -> Option<&[Bit]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(codeword key, message)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Bit])> {
        self.entries
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_slice()))
    }
}
