//! MAC simulator tests: golden grids, rounding order, shape errors.

use super::*;
use crate::error::Error;
use crate::formats::Fp8Format;

// ========================================================================
// Outer product
// ========================================================================

#[test]
fn test_outer_zero_vectors_bias_grid() {
    let zeros = vec![0.0f64; OUTER_LANES];
    let result = outer_product(&zeros, &zeros, 1.5).unwrap();

    for row in &result.cells {
        for &cell in row {
            assert_eq!(cell, 1.5f32);
        }
    }
    for row in &result.cells_bits {
        for &bits in row {
            assert_eq!(bits, 0x3FC0_0000);
            assert_eq!(bits, 1_069_547_520);
        }
    }
}

#[test]
fn test_outer_exact_lattice_values_pass_through() {
    let a = vec![1.0f64; OUTER_LANES];
    let b = vec![2.0f64; OUTER_LANES];
    let result = outer_product(&a, &b, 0.5).unwrap();

    assert!(result.a_quant.iter().all(|&x| x == 1.0));
    assert!(result.b_quant.iter().all(|&x| x == 2.0));
    assert!(result.cells.iter().flatten().all(|&c| c == 2.5));
}

#[test]
fn test_outer_quantizes_off_lattice_inputs() {
    // 0.1 narrows to binary32, then rounds onto the E4M3 lattice
    let a = vec![0.1f64; OUTER_LANES];
    let b = vec![0.0f64; OUTER_LANES];
    let result = outer_product(&a, &b, 0.0).unwrap();

    assert!(result.a_codes.iter().all(|&c| c == 0x1D));
    assert!(result.a_quant.iter().all(|&x| x == 0.1015625));
}

#[test]
fn test_outer_code_views() {
    let mut a = vec![0.0f64; OUTER_LANES];
    a[0] = -1.0;
    let b = vec![0.0f64; OUTER_LANES];
    let result = outer_product(&a, &b, 0.0).unwrap();

    assert_eq!(result.a_codes[0], 0xB8);
    assert_eq!(result.a_codes_i8()[0], -72);
    assert_eq!(result.a_codes_binary()[0], "10111000");
    assert_eq!(result.b_codes_binary()[1], "00000000");
}

#[test]
fn test_outer_length_mismatch() {
    let short = vec![0.0f64; 15];
    let full = vec![0.0f64; OUTER_LANES];

    assert_eq!(
        outer_product(&short, &full, 1.5),
        Err(Error::InputLengthMismatch {
            expected: 16,
            got: 15
        })
    );
    assert_eq!(
        outer_product(&full, &[], 1.5),
        Err(Error::InputLengthMismatch {
            expected: 16,
            got: 0
        })
    );
}

// ========================================================================
// Matrix multiply
// ========================================================================

#[test]
fn test_matmul_identity_cell() {
    let a = vec![vec![1.0f64]];
    let b = vec![vec![1.0f64]];
    let result = matmul(&a, &b, 0.0).unwrap();

    assert_eq!(result.cells, vec![vec![1.0f32]]);
    assert_eq!(result.cells_bits, vec![vec![0x3F80_0000]]);
}

#[test]
fn test_matmul_small_known_grid() {
    // All operands on the lattice; K = 2 accumulation stays exact here
    let a = vec![vec![1.0f64, 2.0], vec![0.5, -1.0]];
    let b = vec![vec![3.0f64, 0.0], vec![1.0, 4.0]];
    let result = matmul(&a, &b, 1.5).unwrap();

    // row 0: [1*3 + 2*1, 1*0 + 2*4] + 1.5
    // row 1: [0.5*3 - 1*1, 0.5*0 - 1*4] + 1.5
    assert_eq!(result.cells, vec![vec![6.5f32, 9.5], vec![2.0, -2.5]]);
}

#[test]
fn test_matmul_rounds_after_every_term() {
    // acc goes 64.0, then twice +2^-18: each add lands exactly on the
    // round-to-even tie and stays 64.0. A fused or widened accumulation
    // would end at 64 + 2^-17.
    let tiny = f64::exp2(-9.0);
    let a = vec![vec![8.0f64, tiny, tiny]];
    let b = vec![vec![8.0f64], vec![tiny], vec![tiny]];
    let result = matmul(&a, &b, 0.0).unwrap();

    assert_eq!(result.cells[0][0], 64.0f32);
    assert_eq!(result.cells_bits[0][0], 64.0f32.to_bits() as i32);
}

#[test]
fn test_matmul_quantizes_operands() {
    // 0.3 is off-lattice; it lands on 0.3125 before any arithmetic
    let a = vec![vec![0.3f64]];
    let b = vec![vec![1.0f64]];
    let result = matmul(&a, &b, 0.0).unwrap();

    assert_eq!(result.a_codes, vec![vec![0x2A]]);
    assert_eq!(result.a_quant, vec![vec![0.3125f32]]);
    assert_eq!(result.cells, vec![vec![0.3125f32]]);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = vec![vec![1.0f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]]; // 2x3
    let b = vec![vec![1.0f64, 2.0], vec![3.0, 4.0]]; // 2x2

    assert_eq!(
        matmul(&a, &b, 0.0),
        Err(Error::DimensionMismatch {
            lhs_rows: 2,
            lhs_cols: 3,
            rhs_rows: 2,
            rhs_cols: 2
        })
    );
}

#[test]
fn test_matmul_rejects_ragged_rows() {
    let a = vec![vec![1.0f64, 2.0], vec![3.0]];
    let b = vec![vec![1.0f64], vec![2.0]];

    assert!(matches!(
        matmul(&a, &b, 0.0),
        Err(Error::DimensionMismatch { .. })
    ));
}

// ========================================================================
// Lane products → BF16
// ========================================================================

#[test]
fn test_lanes_e4m3_golden() {
    let a = vec![0.0f64, 1.0, -1.0, 0.5, -0.5, 1.5, -2.0, 3.0];
    let b = vec![0.0f64, 0.5, -0.5, 2.0, 3.0, -1.5, 1.25, -4.0];
    let result = mul_lanes_bf16(Fp8Format::E4M3, &a, &b).unwrap();

    assert_eq!(
        result.a_codes,
        vec![0x00, 0x38, 0xB8, 0x30, 0xB0, 0x3C, 0xC0, 0x44]
    );
    assert_eq!(
        result.b_codes,
        vec![0x00, 0x30, 0xB0, 0x40, 0x44, 0xBC, 0x3A, 0xC8]
    );
    assert_eq!(
        result.products,
        vec![0.0f32, 0.5, 0.5, 1.0, -1.5, -2.25, -2.5, -12.0]
    );
    assert_eq!(
        result.bf16_codes,
        vec![0x0000, 0x3F00, 0x3F00, 0x3F80, 0xBFC0, 0xC010, 0xC020, 0xC140]
    );
}

#[test]
fn test_lanes_e5m2_uses_its_own_lattice() {
    let a = vec![0.0f64, 1.0, -1.0, 0.5, -0.5, 1.5, -2.0, 3.0];
    let b = vec![0.0f64, 0.5, -0.5, 2.0, 3.0, -1.5, 1.25, -4.0];
    let result = mul_lanes_bf16(Fp8Format::E5M2, &a, &b).unwrap();

    assert_eq!(
        result.a_codes,
        vec![0x00, 0x3C, 0xBC, 0x38, 0xB8, 0x3E, 0xC0, 0x42]
    );
    assert_eq!(
        result.b_codes,
        vec![0x00, 0x38, 0xB8, 0x40, 0x42, 0xBE, 0x3D, 0xC4]
    );
    // 1.25 quantizes exactly in E5M2 too; products match the E4M3 run
    assert_eq!(result.products[6], -2.5f32);
}

#[test]
fn test_lanes_length_mismatch() {
    let seven = vec![0.0f64; 7];
    let eight = vec![0.0f64; 8];

    assert_eq!(
        mul_lanes_bf16(Fp8Format::E4M3, &seven, &eight),
        Err(Error::InputLengthMismatch {
            expected: 8,
            got: 7
        })
    );
}
