//! Named 8-bit floating formats and their bit-field layout.
//!
//! # Formats
//! - `E4M3`: 1 sign, 4 exponent, 3 mantissa bits, bias 7. No infinity;
//!   the all-ones exponent carries normals, except mantissa `0b111`
//!   which is the single NaN encoding.
//! - `E5M2`: 1 sign, 5 exponent, 2 mantissa bits, bias 15. IEEE-like
//!   specials: all-ones exponent is Inf (mantissa 0) or NaN.

use std::fmt;

use crate::error::{Error, Result};

/// Bit-field layout of an 8-bit floating format.
///
/// Invariant: `1 + exp_bits + mant_bits == 8` and
/// `bias == 2^(exp_bits-1) - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    /// Exponent field width in bits
    pub exp_bits: u32,
    /// Mantissa field width in bits
    pub mant_bits: u32,
    /// Exponent bias
    pub bias: i32,
}

impl FormatSpec {
    /// All-ones exponent field value (Inf/NaN range for IEEE-like formats)
    #[inline]
    pub const fn exp_all_ones(self) -> u32 {
        (1 << self.exp_bits) - 1
    }

    /// Extract (sign, exponent, mantissa) fields, most-significant-first.
    #[inline]
    pub fn fields(self, code: u8) -> (u8, u32, u32) {
        let sign = (code >> (self.exp_bits + self.mant_bits)) & 1;
        let exp = (code as u32 >> self.mant_bits) & self.exp_all_ones();
        let mant = code as u32 & ((1 << self.mant_bits) - 1);
        (sign, exp, mant)
    }

    /// Classify a code under the generic IEEE-like rule: the all-ones
    /// exponent is uniformly Inf/NaN. Named formats layer their own
    /// policy on top (E4M3 deviates); this is the view the saturating
    /// codec encodes against.
    pub fn classify(self, code: u8) -> Category {
        let (_, exp, mant) = self.fields(code);
        if exp == 0 {
            if mant == 0 {
                Category::Zero
            } else {
                Category::Subnormal
            }
        } else if exp == self.exp_all_ones() {
            if mant == 0 {
                Category::Inf
            } else {
                Category::Nan
            }
        } else {
            Category::Normal
        }
    }
}

/// The two supported named FP8 formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fp8Format {
    /// 4 exponent bits, 3 mantissa bits, bias 7
    E4M3,
    /// 5 exponent bits, 2 mantissa bits, bias 15
    E5M2,
}

impl Fp8Format {
    /// Look up a format by name. Case-insensitive, surrounding
    /// whitespace ignored.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "E4M3" => Ok(Self::E4M3),
            "E5M2" => Ok(Self::E5M2),
            _ => Err(Error::UnknownFormat {
                name: name.to_string(),
            }),
        }
    }

    /// Bit-field layout for this format
    #[inline]
    pub const fn spec(self) -> FormatSpec {
        match self {
            Self::E4M3 => FormatSpec {
                exp_bits: 4,
                mant_bits: 3,
                bias: 7,
            },
            Self::E5M2 => FormatSpec {
                exp_bits: 5,
                mant_bits: 2,
                bias: 15,
            },
        }
    }

    /// Classify a code under this format's own special-value policy.
    ///
    /// E4M3 has no infinity: the all-ones exponent is Normal except for
    /// the reserved NaN mantissa `0b111`. E5M2 follows the generic rule.
    pub fn classify(self, code: u8) -> Category {
        let spec = self.spec();
        let (_, exp, mant) = spec.fields(code);
        if exp == spec.exp_all_ones() {
            return match self {
                Self::E4M3 => {
                    if mant == 0b111 {
                        Category::Nan
                    } else {
                        Category::Normal
                    }
                }
                Self::E5M2 => {
                    if mant == 0 {
                        Category::Inf
                    } else {
                        Category::Nan
                    }
                }
            };
        }
        spec.classify(code)
    }

    /// Decode a code to its category and value under this format's
    /// policy. E4M3 codes with the all-ones exponent and a non-NaN
    /// mantissa decode as normals with unbiased exponent 8, so
    /// `0b0_1111_000` is 256.0, not infinity.
    pub fn decode(self, code: u8) -> (Category, f64) {
        let spec = self.spec();
        let (sign, exp, mant) = spec.fields(code);
        let sgn = if sign == 1 { -1.0f64 } else { 1.0 };
        let frac_den = (1u32 << spec.mant_bits) as f64;

        let category = self.classify(code);
        let value = match category {
            Category::Zero => sgn * 0.0,
            Category::Subnormal => {
                sgn * f64::exp2((1 - spec.bias) as f64) * (mant as f64 / frac_den)
            }
            Category::Normal => {
                sgn * f64::exp2((exp as i32 - spec.bias) as f64) * (1.0 + mant as f64 / frac_den)
            }
            Category::Inf => sgn * f64::INFINITY,
            Category::Nan => f64::NAN,
        };
        (category, value)
    }
}

impl fmt::Display for Fp8Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::E4M3 => write!(f, "E4M3"),
            Self::E5M2 => write!(f, "E5M2"),
        }
    }
}

/// Classification of an 8-bit code under a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Zero of either sign
    Zero,
    /// Non-zero value with exponent field 0
    Subnormal,
    /// Ordinary finite value
    Normal,
    /// Signed infinity (never produced for E4M3)
    Inf,
    /// Not a number
    Nan,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Inf => "inf",
            Self::Nan => "nan",
        };
        write!(f, "{}", name)
    }
}
