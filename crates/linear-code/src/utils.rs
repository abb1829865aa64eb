// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::Bit;
use crate::matrix_type::MatrixLike;

pub fn print_matrix(name: &str, matrix: &dyn MatrixLike) {
    println!("{} ({}x{}):", name, matrix.rows(), matrix.cols());
    for row in matrix.data() {
        println!("  [{}]", format_row(row));
    }
    println!();
}

fn format_row(row: &[Bit]) -> String {
    row.iter()
        .map(Bit::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[1, 0, 1]` -> `"101"`
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(Bit::to_string).collect()
}

/// Parses `"101"` (commas and whitespace ignored) into `[1, 0, 1]`.
pub fn parse_bits(input: &str) -> LinearCodeResult<Vec<Bit>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .enumerate()
        .map(|(i, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(LinearCodeError::config(format!(
                "invalid bit '{}' at position {} in \"{}\"",
                other, i, input
            ))),
        })
        .collect()
}

/// Parses rows separated by `;` or `/`, e.g. `"101;011"`.
pub fn parse_matrix(input: &str) -> LinearCodeResult<Vec<Vec<Bit>>> {
    input.split([';', '/']).map(parse_bits).collect()
}
