// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The linear code engine: construction, encoding, decoding and parity checks.

use crate::codec::{self, codeword_key, TranslationTable};
use crate::config::CodeConfig;
use crate::errors::{LinearCodeError, LinearCodeResult};
use crate::field::{self, Bit};
use crate::generator::{check_dimensions, generate_matrix, validate_supplied};
use crate::matrix_type::BinaryMatrix;
use crate::parity::{derive_parity_check, ParityCheckMatrix};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// A binary linear block code defined by its generator matrix.
///
/// The generator matrix and the translation table are built once in the
/// constructor and never change, so a `LinearCode` can be shared between
/// threads for concurrent encoding and decoding.
///
/// # Example
///
/// ```
/// use linear_code::LinearCode;
///
/// let code = LinearCode::new(3, 2, Some(vec![vec![1, 0, 1], vec![0, 1, 1]])).unwrap();
/// assert_eq!(code.encode(&[1, 0]).unwrap(), vec![1, 0, 1]);
/// assert_eq!(code.decode(&[1, 0, 1]).unwrap(), vec![1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearCode {
    generator: BinaryMatrix,
    identity_offset: usize,
    translations: TranslationTable,
}

impl LinearCode {
    /// Builds a code of the given `length` (n) and `dimension` (k).
    ///
    /// Without a supplied matrix the non-identity block is drawn from an
    /// entropy-seeded generator.
    pub fn new(
        length: usize,
        dimension: usize,
        matrix: Option<Vec<Vec<Bit>>>,
    ) -> LinearCodeResult<Self> {
        Self::with_rng(length, dimension, matrix, &mut ChaCha8Rng::from_entropy())
    }

    /// Like [`LinearCode::new`], with a reproducible random block.
    pub fn with_seed(
        length: usize,
        dimension: usize,
        matrix: Option<Vec<Vec<Bit>>>,
        seed: u64,
    ) -> LinearCodeResult<Self> {
        Self::with_rng(length, dimension, matrix, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Builds a code drawing random bits from `rng`.
    ///
    /// Square codes are always the identity; a supplied square matrix is ignored.
    pub fn with_rng<R: Rng + ?Sized>(
        length: usize,
        dimension: usize,
        matrix: Option<Vec<Vec<Bit>>>,
        rng: &mut R,
    ) -> LinearCodeResult<Self> {
        check_dimensions(length, dimension)?;

        let (generator, identity_offset) = match matrix {
            Some(rows) if length == dimension => {
                let identity = BinaryMatrix::identity(length);
                if rows.as_slice() != identity.data() {
                    warn!(length, "ignoring supplied square matrix, using identity");
                }
                (identity, 0)
            }
            Some(rows) => validate_supplied(length, dimension, rows)?,
            None => (generate_matrix(length, dimension, rng)?, 0),
        };

        let translations = TranslationTable::build(&generator)?;
        debug!(
            length,
            dimension,
            identity_offset,
            entries = translations.len(),
            "built translation table"
        );

        Ok(Self {
            generator,
            identity_offset,
            translations,
        })
    }

    /// Builds a code from loaded configuration.
    pub fn from_config(config: &CodeConfig) -> LinearCodeResult<Self> {
        let matrix = config.matrix.clone();
        match config.seed {
            Some(seed) => Self::with_seed(config.length, config.dimension, matrix, seed),
            None => Self::new(config.length, config.dimension, matrix),
        }
    }

    /// Codeword length n.
    pub fn length(&self) -> usize {
        self.generator.cols()
    }

    /// Message dimension k.
    pub fn dimension(&self) -> usize {
        self.generator.rows()
    }

    pub fn generator_matrix(&self) -> &BinaryMatrix {
        &self.generator
    }

    /// First column of the identity block inside the generator matrix.
    pub fn identity_offset(&self) -> usize {
        self.identity_offset
    }

    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Encodes a `k`-bit message into an `n`-bit codeword.
    pub fn encode(&self, message: &[Bit]) -> LinearCodeResult<Vec<Bit>> {
        codec::encode(&self.generator, message)
    }

    /// Decodes an exact codeword back to its message. No error correction is
    /// attempted; any word outside the code fails with `UnknownCodeword`.
    pub fn decode(&self, codeword: &[Bit]) -> LinearCodeResult<Vec<Bit>> {
        if codeword.len() != self.length() {
            return Err(LinearCodeError::length_mismatch(
                self.length(),
                codeword.len(),
                "decode",
            ));
        }
        field::ensure_binary(codeword)?;

        let key = codeword_key(codeword);
        self.translations
            .get(&key)
            .map(<[Bit]>::to_vec)
            .ok_or(LinearCodeError::UnknownCodeword { codeword: key })
    }

    /// Derives the parity-check matrix. Recomputed on every call.
    pub fn parity_check_matrix(&self) -> LinearCodeResult<ParityCheckMatrix> {
        derive_parity_check(&self.generator, self.identity_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MAX_DIMENSION;
    use crate::parity::verify_parity_matrix;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn scenario_code() -> LinearCode {
        LinearCode::new(3, 2, Some(vec![vec![1, 0, 1], vec![0, 1, 1]])).unwrap()
    }

    fn all_messages(k: usize) -> Vec<Vec<Bit>> {
        (0..1u32 << k)
            .map(|v| (0..k).rev().map(|s| ((v >> s) & 1) as Bit).collect())
            .collect()
    }

    #[test]
    fn test_scenario() {
        let code = scenario_code();
        assert_eq!(code.encode(&[1, 0]).unwrap(), vec![1, 0, 1]);
        assert_eq!(code.decode(&[1, 0, 1]).unwrap(), vec![1, 0]);
        assert_eq!(
            code.parity_check_matrix().unwrap().matrix(),
            &BinaryMatrix::new(vec![vec![1, 1, 1]]).unwrap()
        );
    }

    #[test]
    fn test_degenerate_single_bit() {
        let code = LinearCode::new(1, 1, None).unwrap();
        assert_eq!(code.generator_matrix(), &BinaryMatrix::identity(1));
        assert_eq!(code.encode(&[1]).unwrap(), vec![1]);
        assert_eq!(code.decode(&[1]).unwrap(), vec![1]);
        assert_eq!(
            code.parity_check_matrix().unwrap().into_inner(),
            BinaryMatrix::identity(1)
        );
    }

    #[test]
    fn test_square_ignores_supplied_matrix() {
        let supplied = vec![vec![1, 1, 0], vec![0, 1, 1], vec![1, 1, 1]];
        let code = LinearCode::new(3, 3, Some(supplied)).unwrap();
        assert_eq!(code.generator_matrix(), &BinaryMatrix::identity(3));
        assert_eq!(
            code.parity_check_matrix().unwrap().matrix(),
            &BinaryMatrix::identity(3)
        );
        assert_eq!(code.encode(&[1, 0, 1]).unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn test_constructor_errors() {
        assert_eq!(
            LinearCode::new(0, 1, None).unwrap_err(),
            LinearCodeError::InvalidDimension {
                length: 0,
                dimension: 1
            }
        );
        assert!(matches!(
            LinearCode::new(2, 0, None),
            Err(LinearCodeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            LinearCode::new(2, 3, None),
            Err(LinearCodeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            LinearCode::new(MAX_DIMENSION + 2, MAX_DIMENSION + 1, None),
            Err(LinearCodeError::DimensionTooLarge { .. })
        ));
        assert_eq!(
            LinearCode::new(3, 2, Some(vec![vec![1, 1, 1], vec![1, 1, 1]])).unwrap_err(),
            LinearCodeError::NonStandardForm
        );
        assert_eq!(
            LinearCode::new(3, 2, Some(vec![vec![1, 0, 1], vec![]])).unwrap_err(),
            LinearCodeError::MissingRow { row: 1 }
        );
        assert!(matches!(
            LinearCode::new(4, 2, Some(vec![vec![1, 0, 1], vec![0, 1, 1]])),
            Err(LinearCodeError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_encode_decode_errors() {
        let code = scenario_code();
        assert!(matches!(
            code.encode(&[1]),
            Err(LinearCodeError::LengthMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        assert!(matches!(
            code.decode(&[1, 0]),
            Err(LinearCodeError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
        assert_eq!(
            code.decode(&[1, 1, 1]).unwrap_err(),
            LinearCodeError::UnknownCodeword {
                codeword: "111".to_string()
            }
        );
        assert_eq!(
            code.decode(&[2, 0, 1]).unwrap_err(),
            LinearCodeError::NonBinaryBit { index: 0, value: 2 }
        );
    }

    #[test]
    fn test_table_completeness() {
        let code = LinearCode::with_seed(9, 5, None, 11).unwrap();
        let table = code.translations();
        assert_eq!(table.len(), 32);

        let keys: HashSet<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys.len(), 32);
        for (key, message) in table.iter() {
            assert_eq!(key.len(), 9);
            assert_eq!(message.len(), 5);
        }
    }

    #[test]
    fn test_trailing_identity_code() {
        let code = LinearCode::new(4, 2, Some(vec![vec![1, 1, 1, 0], vec![0, 1, 0, 1]])).unwrap();
        assert_eq!(code.identity_offset(), 2);
        for message in all_messages(2) {
            let codeword = code.encode(&message).unwrap();
            assert_eq!(&codeword[2..], message.as_slice());
            assert_eq!(code.decode(&codeword).unwrap(), message);
        }
        let h = code.parity_check_matrix().unwrap();
        assert!(verify_parity_matrix(code.generator_matrix(), &h).unwrap());
    }

    #[test]
    fn test_seeded_codes_match() {
        let a = LinearCode::with_seed(10, 4, None, 77).unwrap();
        let b = LinearCode::with_seed(10, 4, None, 77).unwrap();
        assert_eq!(a.generator_matrix(), b.generator_matrix());
        assert_eq!(a.translations(), b.translations());
    }

    #[test]
    fn test_from_config() {
        let config = CodeConfig {
            length: 3,
            dimension: 2,
            seed: None,
            matrix: Some(vec![vec![1, 0, 1], vec![0, 1, 1]]),
        };
        let code = LinearCode::from_config(&config).unwrap();
        assert_eq!(code.generator_matrix(), scenario_code().generator_matrix());

        let config = CodeConfig {
            seed: Some(3),
            ..CodeConfig::default()
        };
        let a = LinearCode::from_config(&config).unwrap();
        let b = LinearCode::from_config(&config).unwrap();
        assert_eq!((a.length(), a.dimension()), (7, 4));
        assert_eq!(a.generator_matrix(), b.generator_matrix());
    }

    #[test]
    fn test_shared_across_threads() {
        let code = Arc::new(LinearCode::with_seed(8, 4, None, 5).unwrap());
        let handles: Vec<_> = all_messages(4)
            .into_iter()
            .map(|message| {
                let code = Arc::clone(&code);
                thread::spawn(move || {
                    let codeword = code.encode(&message).unwrap();
                    assert_eq!(code.decode(&codeword).unwrap(), message);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    fn code_and_messages() -> impl Strategy<Value = (u64, usize, usize, Vec<Bit>, Vec<Bit>)> {
        (any::<u64>(), 1usize..=10)
            .prop_flat_map(|(seed, n)| (Just(seed), Just(n), 1usize..=n))
            .prop_flat_map(|(seed, n, k)| {
                (
                    Just(seed),
                    Just(n),
                    Just(k),
                    prop::collection::vec(0u8..=1, k),
                    prop::collection::vec(0u8..=1, k),
                )
            })
    }

    proptest! {
        #[test]
        fn roundtrip((seed, n, k, m, _) in code_and_messages()) {
            let code = LinearCode::with_seed(n, k, None, seed).unwrap();
            let codeword = code.encode(&m).unwrap();
            prop_assert_eq!(codeword.len(), n);
            prop_assert_eq!(code.decode(&codeword).unwrap(), m);
        }

        #[test]
        fn linearity((seed, n, k, m1, m2) in code_and_messages()) {
            let code = LinearCode::with_seed(n, k, None, seed).unwrap();
            let sum = field::add(&m1, &m2).unwrap();
            let expected = field::add(&code.encode(&m1).unwrap(), &code.encode(&m2).unwrap()).unwrap();
            prop_assert_eq!(code.encode(&sum).unwrap(), expected);
        }

        #[test]
        fn parity_check_annihilates_codewords((seed, n, k, m, _) in code_and_messages()) {
            prop_assume!(n > k);
            let code = LinearCode::with_seed(n, k, None, seed).unwrap();
            let h = code.parity_check_matrix().unwrap();
            prop_assert_eq!((h.matrix().rows(), h.matrix().cols()), (n - k, n));
            let codeword = code.encode(&m).unwrap();
            for row in h.matrix().data() {
                prop_assert_eq!(field::multiply(row, &codeword).unwrap(), 0);
            }
        }
    }
}
