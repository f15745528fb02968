//! 8-lane FP8 widening multiply to BF16 goldens.
//!
//! Uses the saturating codec (Policy A) for either named format, the
//! policy the widening-multiply hardware path models.

use crate::codecs::{decode_saturating, encode_bf16, encode_saturating};
use crate::error::{Error, Result};
use crate::formats::Fp8Format;

use super::{codes_as_binary, codes_as_i8};

/// Lane count both operand vectors must have
pub const MUL_LANES: usize = 8;

/// Result of [`mul_lanes_bf16`]: per-lane quantized operands, binary32
/// products, and their BF16 codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneProducts {
    /// Format both operands were quantized under
    pub format: Fp8Format,
    /// FP8 codes for `a`
    pub a_codes: Vec<u8>,
    /// FP8 codes for `b`
    pub b_codes: Vec<u8>,
    /// Decoded lattice values of `a`
    pub a_quant: Vec<f32>,
    /// Decoded lattice values of `b`
    pub b_quant: Vec<f32>,
    /// Lane-wise binary32 products
    pub products: Vec<f32>,
    /// BF16 codes of the products
    pub bf16_codes: Vec<u16>,
}

impl LaneProducts {
    /// Codes of `a` as signed bytes
    pub fn a_codes_i8(&self) -> Vec<i8> {
        codes_as_i8(&self.a_codes)
    }

    /// Codes of `b` as signed bytes
    pub fn b_codes_i8(&self) -> Vec<i8> {
        codes_as_i8(&self.b_codes)
    }

    /// Codes of `a` as binary strings
    pub fn a_codes_binary(&self) -> Vec<String> {
        codes_as_binary(&self.a_codes)
    }

    /// Codes of `b` as binary strings
    pub fn b_codes_binary(&self) -> Vec<String> {
        codes_as_binary(&self.b_codes)
    }
}

/// Quantize two 8-lane vectors under `format`, multiply lane-wise in
/// binary32, and encode each product to BF16.
pub fn mul_lanes_bf16(format: Fp8Format, a: &[f64], b: &[f64]) -> Result<LaneProducts> {
    check_lanes(a.len())?;
    check_lanes(b.len())?;

    let spec = format.spec();
    let a_codes: Vec<u8> = a.iter().map(|&x| encode_saturating(x as f32, spec)).collect();
    let b_codes: Vec<u8> = b.iter().map(|&x| encode_saturating(x as f32, spec)).collect();
    let a_quant: Vec<f32> = a_codes.iter().map(|&c| decode_saturating(c, spec)).collect();
    let b_quant: Vec<f32> = b_codes.iter().map(|&c| decode_saturating(c, spec)).collect();

    let products: Vec<f32> = a_quant
        .iter()
        .zip(&b_quant)
        .map(|(&x, &y)| x * y)
        .collect();
    let bf16_codes = products.iter().map(|&p| encode_bf16(p)).collect();

    Ok(LaneProducts {
        format,
        a_codes,
        b_codes,
        a_quant,
        b_quant,
        products,
        bf16_codes,
    })
}

fn check_lanes(len: usize) -> Result<()> {
    if len != MUL_LANES {
        return Err(Error::InputLengthMismatch {
            expected: MUL_LANES,
            got: len,
        });
    }
    Ok(())
}
