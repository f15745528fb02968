//! Reference MAC simulator over quantized operands.
//!
//! Every multiply and every add is an independent binary32 rounding step
//! (non-fused), reproducing the literal per-operation rounding of the
//! hardware under test. The accumulation order is part of the golden
//! contract: do not reassociate, fuse, or widen it.

mod lanes;
mod matmul;
mod outer;

pub use lanes::{mul_lanes_bf16, LaneProducts, MUL_LANES};
pub use matmul::{matmul, MatMul};
pub use outer::{outer_product, OuterProduct, OUTER_LANES};

#[cfg(test)]
mod tests;

/// Reinterpret FP8 codes as the signed bytes a test harness array holds.
pub fn codes_as_i8(codes: &[u8]) -> Vec<i8> {
    codes.iter().map(|&c| c as i8).collect()
}

/// Render FP8 codes as 8-character binary strings.
pub fn codes_as_binary(codes: &[u8]) -> Vec<String> {
    codes.iter().map(|&c| format!("{:08b}", c)).collect()
}

/// Reinterpret a binary32 value as its raw two's-complement bit pattern.
#[inline]
pub(crate) fn f32_bits_i32(value: f32) -> i32 {
    value.to_bits() as i32
}
