//! FP8 and BF16 conversion between binary32 and packed codes.
//!
//! Two FP8 policies coexist and deliberately stay separate:
//! - [`encode_saturating`]/[`decode_saturating`] (Policy A): the
//!   simplified hardware path. No subnormals, overflow saturates, ties
//!   round away from zero. Generic over both 8-bit layouts.
//! - [`encode_exact_e4m3`]/[`decode_exact_e4m3`] (Policy B): the faithful
//!   E4M3 model with subnormals and round-half-to-even.
//!
//! Merging them would silently change small-magnitude results; callers
//! pick one by name.

mod bf16;
mod bits;
mod exact;
mod saturating;

pub use bf16::encode_bf16;
pub use bits::{decode_from_bits, parse_bit_literal};
pub use exact::{decode_exact_e4m3, encode_exact_e4m3, E4M3_QNAN};
pub use saturating::{decode_saturating, encode_saturating};
