//! Matrix multiply with bias on the exact-E4M3 lattice.

use crate::codecs::{decode_exact_e4m3, encode_exact_e4m3};
use crate::error::{Error, Result};

use super::f32_bits_i32;

/// Result of [`matmul`]: element-wise quantized operands and the output
/// grid in both binary32 and raw bit-pattern form.
#[derive(Debug, Clone, PartialEq)]
pub struct MatMul {
    /// E4M3 codes of `a`, row-major
    pub a_codes: Vec<Vec<u8>>,
    /// E4M3 codes of `b`, row-major
    pub b_codes: Vec<Vec<u8>>,
    /// Decoded lattice values of `a`
    pub a_quant: Vec<Vec<f32>>,
    /// Decoded lattice values of `b`
    pub b_quant: Vec<Vec<f32>>,
    /// MxN output; each cell is the sequentially rounded dot product
    /// plus one rounded bias add
    pub cells: Vec<Vec<f32>>,
    /// The same grid as raw two's-complement i32 bit patterns
    pub cells_bits: Vec<Vec<i32>>,
}

impl MatMul {
    /// Codes of `a` as signed-byte rows
    pub fn a_codes_i8(&self) -> Vec<Vec<i8>> {
        self.a_codes.iter().map(|r| super::codes_as_i8(r)).collect()
    }

    /// Codes of `b` as signed-byte rows
    pub fn b_codes_i8(&self) -> Vec<Vec<i8>> {
        self.b_codes.iter().map(|r| super::codes_as_i8(r)).collect()
    }

    /// Codes of `a` as binary-string rows
    pub fn a_codes_binary(&self) -> Vec<Vec<String>> {
        self.a_codes.iter().map(|r| super::codes_as_binary(r)).collect()
    }

    /// Codes of `b` as binary-string rows
    pub fn b_codes_binary(&self) -> Vec<Vec<String>> {
        self.b_codes.iter().map(|r| super::codes_as_binary(r)).collect()
    }
}

/// Compute `A · B + bias`, A being MxK and B KxN.
///
/// Each output cell accumulates its K-term dot product sequentially with
/// a binary32 round after every term, then one more rounded add for the
/// bias. Ragged rows and mismatched inner dimensions are rejected; there
/// is no broadcasting.
pub fn matmul(a: &[Vec<f64>], b: &[Vec<f64>], bias: f64) -> Result<MatMul> {
    let m = a.len();
    let k = a.first().map_or(0, Vec::len);
    let k2 = b.len();
    let n = b.first().map_or(0, Vec::len);

    let ragged =
        a.iter().any(|row| row.len() != k) || b.iter().any(|row| row.len() != n);
    if ragged || k2 != k {
        return Err(Error::DimensionMismatch {
            lhs_rows: m,
            lhs_cols: a.iter().map(Vec::len).max().unwrap_or(0),
            rhs_rows: k2,
            rhs_cols: b.iter().map(Vec::len).max().unwrap_or(0),
        });
    }

    let bias32 = bias as f32;
    let (a_codes, a_quant) = quantize_matrix(a);
    let (b_codes, b_quant) = quantize_matrix(b);

    let mut cells = vec![vec![0.0f32; n]; m];
    let mut cells_bits = vec![vec![0i32; n]; m];
    for i in 0..m {
        for j in 0..n {
            let mut acc = 0.0f32;
            for t in 0..k {
                let prod = a_quant[i][t] * b_quant[t][j];
                acc += prod; // one rounding per term, never fused
            }
            let out = acc + bias32;
            cells[i][j] = out;
            cells_bits[i][j] = f32_bits_i32(out);
        }
    }

    Ok(MatMul {
        a_codes,
        b_codes,
        a_quant,
        b_quant,
        cells,
        cells_bits,
    })
}

fn quantize_matrix(m: &[Vec<f64>]) -> (Vec<Vec<u8>>, Vec<Vec<f32>>) {
    let codes: Vec<Vec<u8>> = m
        .iter()
        .map(|row| row.iter().map(|&x| encode_exact_e4m3(x as f32)).collect())
        .collect();
    let quant = codes
        .iter()
        .map(|row| row.iter().map(|&c| decode_exact_e4m3(c)).collect())
        .collect();
    (codes, quant)
}
