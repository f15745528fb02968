//! Saturating FP8 codec (Policy A).
//!
//! Models the simplified hardware conversion path: overflow saturates to
//! the Inf-coded value, underflow flushes to signed zero, and subnormals
//! are never produced. Generic over any 8-bit [`FormatSpec`].
//!
//! Ties round away from zero (add-half-then-truncate), unlike the exact
//! E4M3 codec's round-half-to-even; the two policies intentionally
//! disagree on small-magnitude and halfway inputs and must stay separate.

use crate::formats::FormatSpec;

/// Encode a binary32 value into an 8-bit code, saturating.
///
/// Binary32 NaN payloads collapse to a single nonzero mantissa marker.
pub fn encode_saturating(value: f32, spec: FormatSpec) -> u8 {
    let bits = value.to_bits();
    let sign = ((bits >> 31) & 1) as u8;
    let exp = ((bits >> 23) & 0xFF) as i32;
    let mant = bits & 0x7F_FFFF;

    let exp_all_ones = spec.exp_all_ones() as i32;
    let new_exp;
    let mut new_mant: u32 = 0;

    if exp == 0xFF {
        // binary32 Inf/NaN: all-ones exponent, one-bit NaN marker
        new_exp = exp_all_ones;
        new_mant = u32::from(mant != 0);
    } else {
        let mut e = exp - 127 + spec.bias;
        if e >= exp_all_ones {
            // overflow: saturate to the Inf-coded value
            e = exp_all_ones;
        } else if e <= 0 {
            // underflow: signed zero, subnormals dropped
            e = 0;
        } else {
            let shift = 23 - spec.mant_bits;
            let rounded = mant + (1 << (shift - 1));
            new_mant = rounded >> shift;
            if new_mant == 1 << spec.mant_bits {
                // mantissa carry from rounding
                new_mant = 0;
                e += 1;
            }
            if e >= exp_all_ones {
                // carry pushed us out of range
                e = exp_all_ones;
                new_mant = 0;
            }
        }
        new_exp = e;
    }

    (sign << (spec.exp_bits + spec.mant_bits))
        | ((new_exp as u8) << spec.mant_bits)
        | new_mant as u8
}

/// Decode an 8-bit code back to binary32, mirroring [`encode_saturating`].
///
/// Exponent 0 is signed zero regardless of mantissa; normals are rebuilt
/// by widening the fields directly into binary32 bits.
pub fn decode_saturating(code: u8, spec: FormatSpec) -> f32 {
    let (sign, exp, mant) = spec.fields(code);

    if exp == 0 {
        return if sign == 1 { -0.0 } else { 0.0 };
    }
    if exp == spec.exp_all_ones() {
        if mant != 0 {
            return f32::NAN;
        }
        return if sign == 1 {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };
    }

    let e32 = (exp as i32 - spec.bias + 127) as u32;
    let m32 = mant << (23 - spec.mant_bits);
    f32::from_bits(((sign as u32) << 31) | (e32 << 23) | m32)
}
