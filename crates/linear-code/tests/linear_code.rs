// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use linear_code::standard_form::is_standard_form;
use linear_code::{verify_parity_matrix, BinaryMatrix, Bit, LinearCode, LinearCodeError};

fn all_messages(k: usize) -> Vec<Vec<Bit>> {
    (0..1u32 << k)
        .map(|v| (0..k).rev().map(|s| ((v >> s) & 1) as Bit).collect())
        .collect()
}

fn hamming_7_4() -> Vec<Vec<Bit>> {
    vec![
        vec![1, 0, 0, 0, 1, 1, 0],
        vec![0, 1, 0, 0, 1, 0, 1],
        vec![0, 0, 1, 0, 0, 1, 1],
        vec![0, 0, 0, 1, 1, 1, 1],
    ]
}

#[test]
fn hamming_code_roundtrip_and_parity() {
    let code = LinearCode::new(7, 4, Some(hamming_7_4())).unwrap();
    assert_eq!(code.translations().len(), 16);

    for message in all_messages(4) {
        let codeword = code.encode(&message).unwrap();
        assert_eq!(&codeword[..4], message.as_slice());
        assert_eq!(code.decode(&codeword).unwrap(), message);
    }

    let h = code.parity_check_matrix().unwrap();
    assert_eq!((h.matrix().rows(), h.matrix().cols()), (3, 7));
    assert!(verify_parity_matrix(code.generator_matrix(), &h).unwrap());

    // parity-check matrix is recomputed identically on each call
    assert_eq!(code.parity_check_matrix().unwrap(), h);
}

#[test]
fn single_bit_error_is_not_corrected() {
    let code = LinearCode::new(7, 4, Some(hamming_7_4())).unwrap();
    let mut codeword = code.encode(&[1, 0, 1, 1]).unwrap();
    codeword[6] ^= 1;
    assert!(matches!(
        code.decode(&codeword),
        Err(LinearCodeError::UnknownCodeword { .. })
    ));
}

#[test]
fn generated_codes_are_in_standard_form() {
    for k in 1..=6 {
        for n in k..=k + 4 {
            let code = LinearCode::new(n, k, None).unwrap();
            assert!(is_standard_form(code.generator_matrix()));
            assert_eq!(code.identity_offset(), 0);
            assert_eq!(code.translations().len(), 1 << k);
            for message in all_messages(k) {
                let codeword = code.encode(&message).unwrap();
                assert_eq!(code.decode(&codeword).unwrap(), message);
            }
        }
    }
}

#[test]
fn square_codes_are_identity() {
    for n in 2..6 {
        let code = LinearCode::new(n, n, None).unwrap();
        assert_eq!(code.generator_matrix(), &BinaryMatrix::identity(n));
        assert_eq!(
            code.parity_check_matrix().unwrap().into_inner(),
            BinaryMatrix::identity(n)
        );
    }
}

#[test]
fn rejects_matrix_without_identity_block() {
    let result = LinearCode::new(4, 2, Some(vec![vec![0, 0, 1, 1], vec![0, 0, 1, 1]]));
    assert_eq!(result.unwrap_err(), LinearCodeError::NonStandardForm);
}
