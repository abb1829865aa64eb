// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Generator and parity-check matrices for binary linear block codes.
//!
//! A `[n, k]` binary linear code is described by a `k × n` generator matrix `G`
//! over GF(2). A message `m` of `k` bits is encoded as the codeword `m · G` of
//! `n` bits. This crate builds `G` (randomly, or from a caller-supplied matrix
//! in standard form), encodes and decodes through an exhaustive translation
//! table, and derives the `(n-k) × n` parity-check matrix `H`.
//!
//! ## Mathematical Background
//!
//! A generator matrix is in standard form when it contains the `k × k`
//! identity as a contiguous block of columns, e.g. `G = [I_k | P]`. Such a
//! matrix maps distinct messages to distinct codewords, and its parity-check
//! matrix is `H = [Pᵀ | I_{n-k}]`, satisfying `G · Hᵀ = 0 (mod 2)`.
//!
//! ## Constraint
//!
//! Decoding enumerates all `2^k` messages at construction, so the dimension is
//! capped at [`generator::MAX_DIMENSION`].

pub mod code;
pub mod codec;
pub mod config;
pub mod errors;
pub mod field;
pub mod generator;
pub mod matrix_type;
pub mod parity;
pub mod standard_form;
pub mod utils;

// Re-export commonly used types for convenience
pub use code::LinearCode;
pub use codec::TranslationTable;
pub use config::{load_config, CodeConfig};
pub use errors::{LinearCodeError, LinearCodeResult};
pub use field::Bit;
pub use matrix_type::{BinaryMatrix, MatrixLike};
pub use parity::{verify_parity_matrix, ParityCheckMatrix};
