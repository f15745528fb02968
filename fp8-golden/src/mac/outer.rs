//! 16-lane outer product with bias, on the exact-E4M3 lattice.

use crate::codecs::{decode_exact_e4m3, encode_exact_e4m3};
use crate::error::{Error, Result};

use super::{codes_as_binary, codes_as_i8, f32_bits_i32};

/// Lane count both outer-product operands must have
pub const OUTER_LANES: usize = 16;

/// Result of [`outer_product`]: quantized operands plus the full grid in
/// both binary32 and raw bit-pattern form.
#[derive(Debug, Clone, PartialEq)]
pub struct OuterProduct {
    /// E4M3 codes for `a`, in input order
    pub a_codes: Vec<u8>,
    /// E4M3 codes for `b`, in input order
    pub b_codes: Vec<u8>,
    /// Decoded lattice values of `a` actually used in the arithmetic
    pub a_quant: Vec<f32>,
    /// Decoded lattice values of `b`
    pub b_quant: Vec<f32>,
    /// 16x16 grid; row i, column j holds `f32(f32(a_i * b_j) + bias)`
    pub cells: Vec<Vec<f32>>,
    /// The same grid as raw two's-complement i32 bit patterns
    pub cells_bits: Vec<Vec<i32>>,
}

impl OuterProduct {
    /// Codes of `a` as signed bytes, the form harness arrays carry
    pub fn a_codes_i8(&self) -> Vec<i8> {
        codes_as_i8(&self.a_codes)
    }

    /// Codes of `b` as signed bytes
    pub fn b_codes_i8(&self) -> Vec<i8> {
        codes_as_i8(&self.b_codes)
    }

    /// Codes of `a` as 8-character binary strings
    pub fn a_codes_binary(&self) -> Vec<String> {
        codes_as_binary(&self.a_codes)
    }

    /// Codes of `b` as 8-character binary strings
    pub fn b_codes_binary(&self) -> Vec<String> {
        codes_as_binary(&self.b_codes)
    }
}

/// Compute `a ⊗ b + bias` on the exact-E4M3 lattice.
///
/// Both vectors must have exactly [`OUTER_LANES`] elements. Inputs are
/// narrowed to binary32, quantized through the exact E4M3 codec, decoded
/// back, and every product and bias add is rounded to binary32.
pub fn outer_product(a: &[f64], b: &[f64], bias: f64) -> Result<OuterProduct> {
    check_lanes(a.len())?;
    check_lanes(b.len())?;

    let bias32 = bias as f32;
    let a_codes: Vec<u8> = a.iter().map(|&x| encode_exact_e4m3(x as f32)).collect();
    let b_codes: Vec<u8> = b.iter().map(|&x| encode_exact_e4m3(x as f32)).collect();
    let a_quant: Vec<f32> = a_codes.iter().map(|&c| decode_exact_e4m3(c)).collect();
    let b_quant: Vec<f32> = b_codes.iter().map(|&c| decode_exact_e4m3(c)).collect();

    let mut cells = Vec::with_capacity(OUTER_LANES);
    let mut cells_bits = Vec::with_capacity(OUTER_LANES);
    for &ai in &a_quant {
        let mut row = Vec::with_capacity(OUTER_LANES);
        let mut row_bits = Vec::with_capacity(OUTER_LANES);
        for &bj in &b_quant {
            let prod = ai * bj;
            let out = prod + bias32;
            row.push(out);
            row_bits.push(f32_bits_i32(out));
        }
        cells.push(row);
        cells_bits.push(row_bits);
    }

    Ok(OuterProduct {
        a_codes,
        b_codes,
        a_quant,
        b_quant,
        cells,
        cells_bits,
    })
}

fn check_lanes(len: usize) -> Result<()> {
    if len != OUTER_LANES {
        return Err(Error::InputLengthMismatch {
            expected: OUTER_LANES,
            got: len,
        });
    }
    Ok(())
}
