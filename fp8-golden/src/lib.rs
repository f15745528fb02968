//! fp8-golden - Bit-exact FP8/BF16 codecs and reference MAC simulation.
//!
//! Produces deterministic golden vectors for validating hardware
//! low-precision multiply-accumulate paths. Two 8-bit formats (E4M3,
//! E5M2) layered under binary32 arithmetic, a binary32 → BF16 encoder,
//! and outer-product / matmul reference computations performed entirely
//! on quantized values with per-operation binary32 rounding.
//!
//! # Codec policies
//! Two conversion policies coexist on purpose:
//! - *Saturating* (no subnormals, ties away from zero) models the
//!   simplified hardware conversion path.
//! - *Exact E4M3* (subnormals, round-half-to-even) is the faithful
//!   numeric model the MAC references quantize through.
//!
//! # Usage
//! ```
//! use fp8_golden::{outer_product, Fp8Format, decode_from_bits, Category};
//!
//! let a = vec![0.0; 16];
//! let b = vec![0.0; 16];
//! let golden = outer_product(&a, &b, 1.5).unwrap();
//! assert_eq!(golden.cells_bits[0][0], 0x3FC0_0000);
//!
//! let (category, value) = decode_from_bits("01111000", Fp8Format::E4M3).unwrap();
//! assert_eq!((category, value), (Category::Normal, 256.0));
//! ```

pub mod codecs;
pub mod error;
pub mod formats;
pub mod mac;

// Re-exports
pub use codecs::{
    decode_exact_e4m3, decode_from_bits, decode_saturating, encode_bf16, encode_exact_e4m3,
    encode_saturating, parse_bit_literal, E4M3_QNAN,
};
pub use error::{Error, Result};
pub use formats::{Category, FormatSpec, Fp8Format};
pub use mac::{
    matmul, mul_lanes_bf16, outer_product, LaneProducts, MatMul, OuterProduct, MUL_LANES,
    OUTER_LANES,
};
